use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::flash::{Notice, Tone};

pub const SUCCESS_CLEAR_MS: u32 = 5_000;
pub const ERROR_CLEAR_MS: u32 = 3_000;

pub const SENDING_MESSAGE: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "You registered successfully 💪";
pub const WELCOME_TEXT: &str = "Thank you for registering!";

#[derive(Debug, Error, PartialEq)]
pub enum EmailError {
    #[error("You must enter your email 👆")]
    Empty,
    #[error("Please enter a valid email address ✋")]
    Malformed,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

/// Trims the raw input and checks it looks like `local@domain.tld`.
pub fn validate(raw: &str) -> Result<String, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if !email_pattern().is_match(email) {
        return Err(EmailError::Malformed);
    }
    Ok(email.to_string())
}

/// Template parameters handed to the mail delivery service.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegistrationParams {
    pub user_email: String,
    pub to_email: String,
    pub message: String,
}

impl RegistrationParams {
    pub fn welcome(email: &str) -> Self {
        Self {
            user_email: email.to_string(),
            to_email: email.to_string(),
            message: WELCOME_TEXT.to_string(),
        }
    }
}

pub fn failure_message(diagnostic: Option<&str>) -> String {
    let detail = diagnostic
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or("unknown error");
    format!("OOPS! something has failed ({})", detail)
}

pub fn rejected_notice(err: &EmailError) -> Notice {
    Notice::new(err.to_string(), Tone::Error, Some(ERROR_CLEAR_MS))
}

/// Stays up until the delivery outcome replaces it.
pub fn sending_notice() -> Notice {
    Notice::new(SENDING_MESSAGE, Tone::Neutral, None)
}

pub fn sent_notice() -> Notice {
    Notice::new(SUCCESS_MESSAGE, Tone::Success, Some(SUCCESS_CLEAR_MS))
}

pub fn failed_notice(diagnostic: Option<&str>) -> Notice {
    Notice::new(failure_message(diagnostic), Tone::Error, Some(ERROR_CLEAR_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_and_accepts() {
        assert_eq!(validate("  user@example.com \n").unwrap(), "user@example.com");
    }

    #[test]
    fn test_validate_rejects_empty_and_malformed() {
        assert_eq!(validate("   "), Err(EmailError::Empty));
        assert_eq!(validate("not-an-email"), Err(EmailError::Malformed));
        assert_eq!(validate("user@example"), Err(EmailError::Malformed));
        assert_eq!(validate("us er@example.com"), Err(EmailError::Malformed));
        assert_eq!(validate("a@@b.com"), Err(EmailError::Malformed));
    }

    #[test]
    fn test_welcome_params_shape() {
        let params = RegistrationParams::welcome("user@example.com");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user_email": "user@example.com",
                "to_email": "user@example.com",
                "message": "Thank you for registering!"
            })
        );
    }

    #[test]
    fn test_failure_message_falls_back() {
        assert_eq!(
            failure_message(Some("Bad template")),
            "OOPS! something has failed (Bad template)"
        );
        assert_eq!(failure_message(Some("  ")), "OOPS! something has failed (unknown error)");
        assert_eq!(failure_message(None), "OOPS! something has failed (unknown error)");
    }

    #[test]
    fn test_notice_durations() {
        let rejected = rejected_notice(&EmailError::Malformed);
        assert_eq!((rejected.tone, rejected.clear_after), (Tone::Error, Some(3_000)));

        let sending = sending_notice();
        assert_eq!(sending.text, "Sending...");
        assert_eq!((sending.tone, sending.clear_after), (Tone::Neutral, None));

        let sent = sent_notice();
        assert_eq!((sent.tone, sent.clear_after), (Tone::Success, Some(5_000)));

        let failed = failed_notice(Some("Bad template"));
        assert_eq!(failed.text, "OOPS! something has failed (Bad template)");
        assert_eq!((failed.tone, failed.clear_after), (Tone::Error, Some(3_000)));
    }
}
