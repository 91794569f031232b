use crate::core::{BmiResult, Category, ValidationError};
use colored::Colorize;
use serde::Serialize;
use std::fmt;

pub const BMI_PLACEHOLDER: &str = "BMI指数: --";
pub const ADVICE_PLACEHOLDER: &str = "健康建议: 请先输入身高和体重";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warning,
    Info,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }

    fn colored(self) -> String {
        match self {
            Self::Error => self.as_str().red().bold().to_string(),
            Self::Warning => self.as_str().yellow().bold().to_string(),
            Self::Info => self.as_str().blue().bold().to_string(),
        }
    }
}

/// A message box in terminal form: a titled line the user has to see.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: Level, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn input_error(err: ValidationError) -> Self {
        Self::new(Level::Error, "输入错误", err.to_string())
    }

    pub fn tall_advisory() -> Self {
        Self::new(Level::Warning, "输入提示", "身高是否超过300厘米？请检查输入")
    }

    pub fn unexpected(err: impl fmt::Display) -> Self {
        Self::new(Level::Error, "计算错误", format!("发生未知错误: {err}"))
    }

    pub fn render(&self, color: bool) -> String {
        let level = if color {
            self.level.colored()
        } else {
            self.level.as_str().to_string()
        };
        format!("[{}] {}: {}", level, self.title, self.message)
    }
}

pub fn notices_for(result: &BmiResult) -> Vec<Notice> {
    if result.unusually_tall {
        vec![Notice::tall_advisory()]
    } else {
        Vec::new()
    }
}

pub fn bmi_line(result: &BmiResult) -> String {
    format!("BMI指数: {:.2}", result.bmi)
}

pub fn advice_line(result: &BmiResult) -> String {
    format!("健康建议: {}", result.short_advice)
}

pub fn detailed_view(result: &BmiResult) -> String {
    format!(
        "BMI指数: {:.2}\n\n身高: {:.0} cm\n体重: {:.1} kg\n\n健康状态: {}\n\n详细建议:\n{}",
        result.bmi, result.height_cm, result.weight_kg, result.short_advice, result.detailed_advice
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub bmi_display: String,
    pub category: Category,
    pub short_advice: &'static str,
    pub detailed_advice: &'static str,
    pub unusually_tall: bool,
    pub notices: Vec<Notice>,
}

impl From<&BmiResult> for JsonReport {
    fn from(result: &BmiResult) -> Self {
        Self {
            height_cm: result.height_cm,
            weight_kg: result.weight_kg,
            bmi: result.bmi,
            bmi_display: format!("{:.2}", result.bmi),
            category: result.category,
            short_advice: result.short_advice,
            detailed_advice: result.detailed_advice,
            unusually_tall: result.unusually_tall,
            notices: notices_for(result),
        }
    }
}
