use crate::core::{self, BmiResult};
use anyhow::{Result, bail};
use std::io::{BufRead, Write};

/// Plain prompt mode used when the interactive shell cannot start.
/// Returns the process exit code; only output failures are errors.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i32> {
    match attempt(input, output) {
        Ok(result) => {
            writeln!(output, "您的BMI指数为: {:.2}", result.bmi)?;
            writeln!(output, "{}", result.category.advice().status)?;
            Ok(0)
        }
        Err(err) => {
            tracing::debug!("fallback failed: {err:#}");
            writeln!(output)?;
            writeln!(output, "命令行版本也失败了: {err}")?;
            Ok(1)
        }
    }
}

fn attempt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<BmiResult> {
    let height = read_answer(input, output, "请输入您的身高(cm): ")?;
    let weight = read_answer(input, output, "请输入您的体重(kg): ")?;
    Ok(core::compute_from_input(&height, &weight)?)
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("未读取到输入");
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (i32, String) {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        let code = run(&mut input, &mut output).expect("writes succeed");
        (code, String::from_utf8(output).expect("utf8 output"))
    }

    #[test]
    fn prints_value_and_status_once() {
        let (code, output) = run_script("170\n65\n");
        assert_eq!(code, 0);
        assert!(output.starts_with("请输入您的身高(cm): 请输入您的体重(kg): "));
        assert_eq!(output.matches("您的BMI指数为: 22.49").count(), 1);
        assert!(output.trim_end().ends_with("您体质正常"));
    }

    #[test]
    fn each_band_prints_its_status() {
        for (script, status) in [
            ("160\n45\n", "您体质过轻"),
            ("180\n90\n", "您体质过重"),
            ("165\n80\n", "您体质肥胖"),
            ("170\n100\n", "您严重肥胖"),
        ] {
            let (code, output) = run_script(script);
            assert_eq!(code, 0);
            assert!(output.trim_end().ends_with(status), "{output}");
        }
    }

    #[test]
    fn bad_number_reports_failure() {
        let (code, output) = run_script("abc\n65\n");
        assert_eq!(code, 1);
        assert!(output.contains("命令行版本也失败了: 请输入有效的数字"));
        assert!(!output.contains("您的BMI指数为"));
    }

    #[test]
    fn zero_height_reports_failure() {
        let (code, output) = run_script("0\n65\n");
        assert_eq!(code, 1);
        assert!(output.contains("命令行版本也失败了: 身高和体重必须大于0"));
    }

    #[test]
    fn overflowing_bmi_reports_failure() {
        let (code, output) = run_script("1e-170\n70\n");
        assert_eq!(code, 1);
        assert!(output.contains("命令行版本也失败了: BMI结果超出可计算范围"));
    }

    #[test]
    fn missing_input_reports_failure() {
        let (code, output) = run_script("170\n");
        assert_eq!(code, 1);
        assert!(output.contains("命令行版本也失败了: 未读取到输入"));
    }
}
