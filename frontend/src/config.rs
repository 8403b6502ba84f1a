use log::{info, warn};
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use wasm_bindgen::JsValue;

pub const DEFAULT_LOGIN_URL: &str = "/accounts/login/";

/// Globals the hosting template sets before loading the bundle.
const INJECTED_GLOBALS: [&str; 4] = ["isUserAuthenticated", "purchaseUrl", "csrfToken", "loginUrl"];
const CONFIG_SCRIPT_ID: &str = "page-config";

pub const MAIL_SERVICE_ID: &str = "service_gymsite";
pub const MAIL_TEMPLATE_ID: &str = "template_welcome";
pub const MAIL_PUBLIC_KEY: &str = "gymsite_public_key";

#[cfg(debug_assertions)]
pub fn get_mail_api_url() -> &'static str {
    "http://localhost:3001/api/v1.0/email/send" // local mail stub
}

#[cfg(not(debug_assertions))]
pub fn get_mail_api_url() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("page config field `{0}` is missing")]
    Missing(&'static str),
    #[error("page config could not be read: {0}")]
    Invalid(String),
}

/// Values the server renders into the page: who is logged in and where
/// purchases and logins go.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default, deserialize_with = "bool_like")]
    pub is_user_authenticated: bool,
    #[serde(default)]
    pub purchase_url: Option<String>,
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default = "default_login_url")]
    pub login_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            is_user_authenticated: false,
            purchase_url: None,
            csrf_token: None,
            login_url: default_login_url(),
        }
    }
}

fn default_login_url() -> String {
    DEFAULT_LOGIN_URL.to_string()
}

// Templates render booleans as either `true` or `"True"`.
fn bool_like<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolLike {
        Bool(bool),
        Text(String),
    }

    Ok(match BoolLike::deserialize(deserializer)? {
        BoolLike::Bool(value) => value,
        BoolLike::Text(text) => matches!(text.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
    })
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Reads the injected globals, falling back to a JSON config script tag
    /// when none of them are present.
    pub fn from_window() -> Result<Self, ConfigError> {
        let window = web_sys::window().ok_or_else(|| ConfigError::Invalid("no window".to_string()))?;
        let globals = js_sys::Object::new();
        let mut found = 0;
        for key in INJECTED_GLOBALS {
            let value = js_sys::Reflect::get(&window, &JsValue::from_str(key))
                .map_err(|e| ConfigError::Invalid(format!("{:?}", e)))?;
            if value.is_undefined() || value.is_null() {
                continue;
            }
            js_sys::Reflect::set(&globals, &JsValue::from_str(key), &value)
                .map_err(|e| ConfigError::Invalid(format!("{:?}", e)))?;
            found += 1;
        }

        if found == 0 {
            if let Some(script) = window
                .document()
                .and_then(|document| document.get_element_by_id(CONFIG_SCRIPT_ID))
            {
                info!("Reading page config from #{}", CONFIG_SCRIPT_ID);
                return Self::from_json(&script.text_content().unwrap_or_default());
            }
            warn!("No page config injected, purchases will require login");
        }

        serde_wasm_bindgen::from_value(globals.into()).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Purchase endpoint and CSRF token, both needed to post a purchase.
    pub fn purchase_target(&self) -> Result<(&str, &str), ConfigError> {
        let url = self
            .purchase_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("purchaseUrl"))?;
        let token = self
            .csrf_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::Missing("csrfToken"))?;
        Ok((url, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parses() {
        let config = PageConfig::from_json(
            r#"{
                "isUserAuthenticated": true,
                "purchaseUrl": "/accounts/purchase/",
                "csrfToken": "abc123",
                "loginUrl": "/accounts/login/?next=/"
            }"#,
        )
        .unwrap();
        assert!(config.is_user_authenticated);
        assert_eq!(config.purchase_target().unwrap(), ("/accounts/purchase/", "abc123"));
        assert_eq!(config.login_url, "/accounts/login/?next=/");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.login_url, DEFAULT_LOGIN_URL);
        assert_eq!(config.purchase_target(), Err(ConfigError::Missing("purchaseUrl")));
    }

    #[test]
    fn test_template_style_booleans() {
        let config = PageConfig::from_json(r#"{"isUserAuthenticated": "True"}"#).unwrap();
        assert!(config.is_user_authenticated);
        let config = PageConfig::from_json(r#"{"isUserAuthenticated": "False"}"#).unwrap();
        assert!(!config.is_user_authenticated);
    }

    #[test]
    fn test_empty_token_is_missing() {
        let config = PageConfig::from_json(r#"{"purchaseUrl": "/buy/", "csrfToken": ""}"#).unwrap();
        assert_eq!(config.purchase_target(), Err(ConfigError::Missing("csrfToken")));
    }

    #[test]
    fn test_malformed_json_is_invalid() {
        assert!(matches!(PageConfig::from_json("{not json"), Err(ConfigError::Invalid(_))));
    }
}
