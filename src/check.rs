use crate::cli::CheckArgs;
use crate::config::Config;
use crate::core::report::{self, JsonReport, Notice};
use crate::core::{self, ComputeError};
use anyhow::Result;
use std::io::Write;

/// One-shot computation. Returns the exit code for input problems; anything
/// the user cannot fix by retyping comes back as an error.
pub fn run<W: Write, E: Write>(
    args: &CheckArgs,
    config: &Config,
    out: &mut W,
    err: &mut E,
) -> Result<i32> {
    let color = config.display.color;
    let result = match core::compute_from_input(&args.height, &args.weight) {
        Ok(result) => result,
        Err(ComputeError::Invalid(invalid)) => {
            writeln!(err, "{}", Notice::input_error(invalid).render(color))?;
            return Ok(1);
        }
        Err(failure) => return Err(failure.into()),
    };
    tracing::debug!(category = %result.category, bmi = result.bmi, "computed");

    if args.json || config.display.json {
        let json_report = JsonReport::from(&result);
        writeln!(out, "{}", serde_json::to_string_pretty(&json_report)?)?;
        return Ok(0);
    }

    for notice in report::notices_for(&result) {
        writeln!(err, "{}", notice.render(color))?;
    }
    writeln!(out, "{}", report::bmi_line(&result))?;
    writeln!(out, "{}", report::advice_line(&result))?;
    if config.display.details {
        writeln!(out)?;
        writeln!(out, "{}", report::detailed_view(&result))?;
    }

    Ok(0)
}
