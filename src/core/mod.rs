pub mod advice;
pub mod report;

use crate::core::advice::Advice;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Heights above this many centimeters are accepted but flagged.
pub const TALL_HEIGHT_CM: f64 = 300.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
    SeverelyObese,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
        Self::SeverelyObese,
    ];

    /// Half-open bands, checked in ascending order.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 28.0 {
            Self::Overweight
        } else if bmi < 32.0 {
            Self::Obese
        } else {
            Self::SeverelyObese
        }
    }

    pub fn advice(self) -> &'static Advice {
        advice::advice_for(self)
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Underweight => "体质过轻",
            Self::Normal => "体质正常",
            Self::Overweight => "体质过重",
            Self::Obese => "肥胖",
            Self::SeverelyObese => "严重肥胖",
        }
    }

    pub fn range_label(self) -> &'static str {
        match self {
            Self::Underweight => "BMI < 18.5",
            Self::Normal => "18.5 ≤ BMI < 25",
            Self::Overweight => "25 ≤ BMI < 28",
            Self::Obese => "28 ≤ BMI < 32",
            Self::SeverelyObese => "BMI ≥ 32",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underweight => write!(f, "Underweight"),
            Self::Normal => write!(f, "Normal"),
            Self::Overweight => write!(f, "Overweight"),
            Self::Obese => write!(f, "Obese"),
            Self::SeverelyObese => write!(f, "SeverelyObese"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("请输入有效的数字")]
    InvalidNumber,
    #[error("身高和体重必须大于0")]
    NonPositiveValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComputeError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// Inputs were valid but the quotient overflowed.
    #[error("BMI结果超出可计算范围")]
    NonFiniteBmi,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub category: Category,
    pub short_advice: &'static str,
    pub detailed_advice: &'static str,
    pub unusually_tall: bool,
}

pub fn compute(height_cm: f64, weight_kg: f64) -> Result<BmiResult, ComputeError> {
    if !height_cm.is_finite() || !weight_kg.is_finite() {
        return Err(ValidationError::InvalidNumber.into());
    }
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return Err(ValidationError::NonPositiveValue.into());
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    if !bmi.is_finite() {
        return Err(ComputeError::NonFiniteBmi);
    }
    let category = Category::from_bmi(bmi);
    let advice = category.advice();

    Ok(BmiResult {
        height_cm,
        weight_kg,
        bmi,
        category,
        short_advice: advice.short,
        detailed_advice: advice.detailed,
        unusually_tall: height_cm > TALL_HEIGHT_CM,
    })
}

/// Parses the two raw fields, height first, then runs [`compute`].
pub fn compute_from_input(height: &str, weight: &str) -> Result<BmiResult, ComputeError> {
    let height_cm = parse_number(height)?;
    let weight_kg = parse_number(weight)?;
    compute(height_cm, weight_kg)
}

fn parse_number(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidNumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bmi_of(height_cm: f64, weight_kg: f64) -> BmiResult {
        compute(height_cm, weight_kg).expect("valid inputs")
    }

    #[test]
    fn matches_closed_form() {
        for (height, weight) in [(170.0, 65.0), (152.4, 48.2), (199.9, 120.5), (0.5, 0.1)] {
            let result = bmi_of(height, weight);
            let expected = weight / ((height / 100.0) * (height / 100.0));
            assert!((result.bmi - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn known_scenarios() {
        let cases = [
            (170.0, 65.0, "22.49", Category::Normal),
            (160.0, 45.0, "17.58", Category::Underweight),
            (180.0, 90.0, "27.78", Category::Overweight),
            (165.0, 80.0, "29.38", Category::Obese),
            (170.0, 100.0, "34.60", Category::SeverelyObese),
        ];

        for (height, weight, shown, category) in cases {
            let result = bmi_of(height, weight);
            assert_eq!(format!("{:.2}", result.bmi), shown);
            assert_eq!(result.category, category);
            assert_eq!(result.short_advice, category.advice().short);
            assert_eq!(result.detailed_advice, category.advice().detailed);
            assert!(!result.unusually_tall);
        }
    }

    #[test]
    fn boundaries_belong_to_upper_band() {
        assert_eq!(Category::from_bmi(18.499_999), Category::Underweight);
        assert_eq!(Category::from_bmi(18.5), Category::Normal);
        assert_eq!(Category::from_bmi(25.0), Category::Overweight);
        assert_eq!(Category::from_bmi(28.0), Category::Obese);
        assert_eq!(Category::from_bmi(32.0), Category::SeverelyObese);
        assert_eq!(Category::from_bmi(f64::NEG_INFINITY), Category::Underweight);

        // 100cm makes bmi equal the weight exactly.
        assert_eq!(bmi_of(100.0, 18.5).category, Category::Normal);
        assert_eq!(bmi_of(100.0, 25.0).category, Category::Overweight);
        assert_eq!(bmi_of(100.0, 28.0).category, Category::Obese);
        assert_eq!(bmi_of(100.0, 32.0).category, Category::SeverelyObese);
    }

    #[test]
    fn same_inputs_same_result() {
        assert_eq!(bmi_of(172.5, 68.3), bmi_of(172.5, 68.3));
    }

    #[test]
    fn rejects_non_positive_values() {
        for (height, weight) in [(0.0, 60.0), (-170.0, 60.0), (170.0, 0.0), (170.0, -1.0), (0.0, 0.0)] {
            assert_eq!(compute(height, weight), Err(ValidationError::NonPositiveValue.into()));
        }
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(compute(f64::NAN, 60.0), Err(ValidationError::InvalidNumber.into()));
        assert_eq!(compute(170.0, f64::INFINITY), Err(ValidationError::InvalidNumber.into()));
    }

    #[test]
    fn overflowing_bmi_is_an_error_not_a_band() {
        assert_eq!(compute_from_input("1e-170", "70"), Err(ComputeError::NonFiniteBmi));
        assert_eq!(compute(1e-5, 1e300), Err(ComputeError::NonFiniteBmi));
        assert!(compute(1e-5, 1e-300).is_ok_and(|result| result.bmi.is_finite()));
    }

    #[test]
    fn tall_heights_are_flagged_not_rejected() {
        let result = bmi_of(310.0, 70.0);
        assert!(result.unusually_tall);
        assert_eq!(result.category, Category::Underweight);
        assert!(!bmi_of(300.0, 70.0).unusually_tall);
    }

    #[test]
    fn parses_raw_fields() {
        let result = compute_from_input(" 170 ", "65\n").expect("valid inputs");
        assert_eq!(result.category, Category::Normal);

        assert_eq!(compute_from_input("abc", "65"), Err(ValidationError::InvalidNumber.into()));
        assert_eq!(compute_from_input("170", ""), Err(ValidationError::InvalidNumber.into()));
        assert_eq!(compute_from_input("inf", "65"), Err(ValidationError::InvalidNumber.into()));
        assert_eq!(compute_from_input("NaN", "65"), Err(ValidationError::InvalidNumber.into()));
        assert_eq!(compute_from_input("0", "65"), Err(ValidationError::NonPositiveValue.into()));
        // a bad number wins over a non-positive one
        assert_eq!(compute_from_input("-5", "x"), Err(ValidationError::InvalidNumber.into()));
    }
}
