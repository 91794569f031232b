use crate::config::DisplayConfig;
use crate::core::advice::reference_guide;
use crate::core::report::{self, ADVICE_PLACEHOLDER, BMI_PLACEHOLDER, Level, Notice};
use crate::core::{self, BmiResult, ComputeError};
use anyhow::{Result, bail};
use std::io::{self, BufRead, IsTerminal, Write};

const TITLE: &str = "BMI 健康计算器";
const HELP: &str = "输入身高和体重后回车计算；命令: d 详细信息, g 健康建议, c 清空, q 退出";

/// What the status area shows. Replaced wholesale after each computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub bmi_line: String,
    pub advice_line: String,
    pub result: Option<BmiResult>,
}

impl ViewModel {
    pub fn initial() -> Self {
        Self {
            bmi_line: BMI_PLACEHOLDER.to_string(),
            advice_line: ADVICE_PLACEHOLDER.to_string(),
            result: None,
        }
    }

    pub fn from_result(result: BmiResult) -> Self {
        Self {
            bmi_line: report::bmi_line(&result),
            advice_line: report::advice_line(&result),
            result: Some(result),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Clear,
    Guide,
    Details,
    Help,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(Command::Quit),
        "c" | "clear" => Some(Command::Clear),
        "g" | "guide" => Some(Command::Guide),
        "d" | "details" => Some(Command::Details),
        "h" | "help" | "?" => Some(Command::Help),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    pub color: bool,
    pub details: bool,
}

impl From<&DisplayConfig> for ShellOptions {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            color: display.color,
            details: display.details,
        }
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    options: ShellOptions,
    view: ViewModel,
    height_draft: String,
    weight_draft: String,
}

/// Runs the shell on the process terminal. Fails up front when stdin is not
/// interactive so the caller can drop to the plain fallback.
pub fn launch(display: &DisplayConfig) -> Result<()> {
    let stdin = io::stdin();
    require_terminal(stdin.is_terminal())?;

    let mut shell = Shell::new(stdin.lock(), io::stdout().lock(), ShellOptions::from(display));
    shell.run()
}

fn require_terminal(is_terminal: bool) -> Result<()> {
    if !is_terminal {
        bail!("标准输入不是终端");
    }
    Ok(())
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, options: ShellOptions) -> Self {
        Self {
            input,
            output,
            options,
            view: ViewModel::initial(),
            height_draft: String::new(),
            weight_draft: String::new(),
        }
    }

    #[cfg(test)]
    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{TITLE}")?;
        writeln!(self.output, "{HELP}")?;

        loop {
            self.render_status()?;

            let Some(height) = self.prompt("身高 (cm)", Field::Height)? else {
                break;
            };
            if let Some(command) = parse_command(&height) {
                if command == Command::Quit {
                    break;
                }
                self.apply(command)?;
                continue;
            }

            let Some(weight) = self.prompt("体重 (kg)", Field::Weight)? else {
                break;
            };
            // a command here drops the half-typed entry
            if let Some(command) = parse_command(&weight) {
                if command == Command::Quit {
                    break;
                }
                self.apply(command)?;
                continue;
            }

            if let Err(err) = self.submit(&height, &weight) {
                tracing::warn!("computation failed: {err:#}");
                let notice = Notice::unexpected(format!("{err:#}"));
                writeln!(self.output, "{}", notice.render(self.options.color))?;
            }
        }

        tracing::debug!("shell closed");
        Ok(())
    }

    /// Validates and computes from the raw fields. The typed text is kept
    /// either way so the next prompt can offer it back for correction.
    pub fn submit(&mut self, height: &str, weight: &str) -> Result<()> {
        self.height_draft = height.trim().to_string();
        self.weight_draft = weight.trim().to_string();

        let result = match core::compute_from_input(height, weight) {
            Ok(result) => result,
            Err(ComputeError::Invalid(err)) => {
                tracing::debug!(height, weight, "rejected input: {err}");
                let notice = Notice::input_error(err);
                writeln!(self.output, "{}", notice.render(self.options.color))?;
                return Ok(());
            }
            Err(failure) => return Err(failure.into()),
        };
        tracing::debug!(category = %result.category, bmi = result.bmi, "computed");

        for notice in report::notices_for(&result) {
            writeln!(self.output, "{}", notice.render(self.options.color))?;
        }

        let next = ViewModel::from_result(result);
        if self.options.details {
            self.render_details(&next)?;
        }
        self.view = next;
        Ok(())
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Quit => {}
            Command::Clear => {
                self.view = ViewModel::initial();
                self.height_draft.clear();
                self.weight_draft.clear();
            }
            Command::Guide => {
                writeln!(self.output)?;
                writeln!(self.output, "{}", reference_guide())?;
            }
            Command::Details => {
                if self.view.result.is_some() {
                    let view = self.view.clone();
                    self.render_details(&view)?;
                } else {
                    let notice = Notice::new(Level::Info, "提示", "请先输入身高和体重");
                    writeln!(self.output, "{}", notice.render(self.options.color))?;
                }
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
        }
        Ok(())
    }

    fn render_status(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.view.bmi_line)?;
        writeln!(self.output, "{}", self.view.advice_line)?;
        Ok(())
    }

    fn render_details(&mut self, view: &ViewModel) -> Result<()> {
        if let Some(result) = &view.result {
            writeln!(self.output)?;
            writeln!(self.output, "{}", report::detailed_view(result))?;
        }
        Ok(())
    }

    /// Returns `None` at end of input. A blank answer reuses the draft.
    fn prompt(&mut self, label: &str, field: Field) -> Result<Option<String>> {
        let draft = match field {
            Field::Height => self.height_draft.clone(),
            Field::Weight => self.weight_draft.clone(),
        };

        if draft.is_empty() {
            write!(self.output, "{label}: ")?;
        } else {
            write!(self.output, "{label} [{draft}]: ")?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(Some(draft))
        } else {
            Ok(Some(answer.to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Height,
    Weight,
}
