use thiserror::Error;

use crate::flash::{Notice, Tone};

/// How long the "fill in" prompt stays visible.
pub const PROMPT_CLEAR_MS: u32 = 3_000;
/// How long a computed result stays visible.
pub const RESULT_CLEAR_MS: u32 = 4_000;

#[derive(Debug, Error, PartialEq)]
pub enum BmiError {
    #[error("Fill in the Height and Weight 👨‍💻")]
    MissingInput,
    #[error("Height and weight must be numbers 🔢")]
    NotANumber,
    #[error("Height and weight must be greater than zero 📏")]
    NotPositive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiBand {
    Skinny,
    Healthy,
    Overweight,
}

impl BmiBand {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiBand::Skinny
        } else if bmi < 25.0 {
            BmiBand::Healthy
        } else {
            BmiBand::Overweight
        }
    }

    fn verdict(&self) -> &'static str {
        match self {
            BmiBand::Skinny => "skinny 😔",
            BmiBand::Healthy => "healthy 🥳",
            BmiBand::Overweight => "overweight 😔",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BmiReport {
    pub bmi: f64,
    pub band: BmiBand,
}

impl BmiReport {
    pub fn message(&self) -> String {
        format!("Your BMI is {} and you are {}", self.bmi, self.band.verdict())
    }
}

/// Computes the rounded BMI from raw form values.
///
/// Empty fields are reported before anything is parsed, so a blank height
/// next to a garbage weight still yields the "fill in" prompt.
pub fn evaluate(height_cm: &str, weight_kg: &str) -> Result<BmiReport, BmiError> {
    let height_cm = height_cm.trim();
    let weight_kg = weight_kg.trim();
    if height_cm.is_empty() || weight_kg.is_empty() {
        return Err(BmiError::MissingInput);
    }

    let height: f64 = height_cm.parse().map_err(|_| BmiError::NotANumber)?;
    let weight: f64 = weight_kg.parse().map_err(|_| BmiError::NotANumber)?;
    if !height.is_finite() || !weight.is_finite() {
        return Err(BmiError::NotANumber);
    }
    if height <= 0.0 || weight <= 0.0 {
        return Err(BmiError::NotPositive);
    }

    let meters = height / 100.0;
    let bmi = (weight / (meters * meters)).round();
    if !bmi.is_finite() {
        return Err(BmiError::NotANumber);
    }
    Ok(BmiReport {
        bmi,
        band: BmiBand::classify(bmi),
    })
}

/// What the calculator shows for an evaluation and for how long.
pub fn notice(result: &Result<BmiReport, BmiError>) -> Notice {
    match result {
        Ok(report) => Notice::new(report.message(), Tone::Success, Some(RESULT_CLEAR_MS)),
        Err(err) => Notice::new(err.to_string(), Tone::Error, Some(PROMPT_CLEAR_MS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_prompt_fill_in() {
        assert_eq!(evaluate("", "70"), Err(BmiError::MissingInput));
        assert_eq!(evaluate("180", "  "), Err(BmiError::MissingInput));
        assert_eq!(
            BmiError::MissingInput.to_string(),
            "Fill in the Height and Weight 👨‍💻"
        );
    }

    #[test]
    fn test_healthy_result_is_rounded() {
        // 70 / 1.8^2 = 21.6
        let report = evaluate("180", "70").unwrap();
        assert_eq!(report.bmi, 22.0);
        assert_eq!(report.band, BmiBand::Healthy);
        assert_eq!(report.message(), "Your BMI is 22 and you are healthy 🥳");
    }

    #[test]
    fn test_bands_follow_rounded_value() {
        // 56 / 1.75^2 = 18.29 -> 18
        assert_eq!(evaluate("175", "56").unwrap().band, BmiBand::Skinny);
        // 57.5 / 1.75^2 = 18.78 -> 19
        assert_eq!(evaluate("175", "57.5").unwrap().band, BmiBand::Healthy);
        // 76 / 1.75^2 = 24.82 -> 25
        let heavy = evaluate("175", "76").unwrap();
        assert_eq!(heavy.bmi, 25.0);
        assert_eq!(heavy.band, BmiBand::Overweight);
        assert_eq!(heavy.message(), "Your BMI is 25 and you are overweight 😔");
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(BmiBand::classify(18.4), BmiBand::Skinny);
        assert_eq!(BmiBand::classify(18.5), BmiBand::Healthy);
        assert_eq!(BmiBand::classify(24.9), BmiBand::Healthy);
        assert_eq!(BmiBand::classify(25.0), BmiBand::Overweight);
    }

    #[test]
    fn test_non_numeric_and_non_positive_are_rejected() {
        assert_eq!(evaluate("tall", "70"), Err(BmiError::NotANumber));
        assert_eq!(evaluate("180", "NaN"), Err(BmiError::NotANumber));
        assert_eq!(evaluate("0", "70"), Err(BmiError::NotPositive));
        assert_eq!(evaluate("180", "-3"), Err(BmiError::NotPositive));
    }

    #[test]
    fn test_overflowing_result_is_rejected() {
        assert_eq!(evaluate("1e-200", "70"), Err(BmiError::NotANumber));
    }

    #[test]
    fn test_notice_durations() {
        let prompt = notice(&evaluate("", ""));
        assert_eq!(prompt.tone, Tone::Error);
        assert_eq!(prompt.clear_after, Some(3_000));
        assert_eq!(prompt.text, "Fill in the Height and Weight 👨‍💻");

        let result = notice(&evaluate("180", "70"));
        assert_eq!(result.tone, Tone::Success);
        assert_eq!(result.clear_after, Some(4_000));
        assert_eq!(result.text, "Your BMI is 22 and you are healthy 🥳");
    }
}
