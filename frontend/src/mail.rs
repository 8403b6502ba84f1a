use gloo_console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Serialize)]
struct SendRequest<'a, P: Serialize> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a P,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MailResponse {
    pub status: u16,
    pub text: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum MailError {
    #[error("mail request failed: {0}")]
    Network(String),
    #[error("mail rejected with status {status}")]
    Rejected { status: u16, text: Option<String> },
}

impl MailError {
    /// Diagnostic text worth showing to the user, if the service sent any.
    pub fn text(&self) -> Option<&str> {
        match self {
            MailError::Network(text) => Some(text.as_str()),
            MailError::Rejected { text, .. } => text.as_deref(),
        }
    }
}

/// Sends a templated email through the delivery service.
pub async fn send<P: Serialize>(
    service_id: &str,
    template_id: &str,
    params: &P,
) -> Result<MailResponse, MailError> {
    let body = SendRequest {
        service_id,
        template_id,
        user_id: config::MAIL_PUBLIC_KEY,
        template_params: params,
    };

    let response = Request::post(config::get_mail_api_url())
        .json(&body)
        .map_err(|e| MailError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| MailError::Network(e.to_string()))?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if response.ok() {
        log!("Mail sent, status:", status);
        Ok(MailResponse { status, text })
    } else {
        log!("Mail rejected, status:", status);
        Err(MailError::Rejected {
            status,
            text: Some(text).filter(|t| !t.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::email::RegistrationParams;

    #[test]
    fn test_request_body_shape() {
        let params = RegistrationParams::welcome("user@example.com");
        let body = SendRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "key",
            template_params: &params,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["template_id"], "tpl");
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["to_email"], "user@example.com");
    }

    #[test]
    fn test_error_text() {
        let rejected = MailError::Rejected {
            status: 400,
            text: Some("The template ID is invalid".to_string()),
        };
        assert_eq!(rejected.text(), Some("The template ID is invalid"));
        let silent = MailError::Rejected { status: 500, text: None };
        assert_eq!(silent.text(), None);
    }
}
