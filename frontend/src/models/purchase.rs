use crate::config::{ConfigError, PageConfig};

pub const LOGIN_PROMPT: &str = "You need to log in to purchase a package. Go to the login page now?";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Package {
    pub name: &'static str,
    pub price: u32,
    pub features: &'static [&'static str],
}

pub const PACKAGES: &[Package] = &[
    Package {
        name: "Basic",
        price: 19,
        features: &["Gym access", "Progress tracking", "Workout videos"],
    },
    Package {
        name: "Premium",
        price: 29,
        features: &["Everything in Basic", "Meal plans", "Trainer support", "Live sessions"],
    },
    Package {
        name: "Diamond",
        price: 49,
        features: &[
            "Everything in Premium",
            "Personal sessions",
            "Nutrition guidance",
            "Premium content",
        ],
    },
];

/// What a purchase click turns into once the user confirms.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchasePlan {
    SubmitForm {
        prompt: String,
        action: String,
        fields: Vec<(&'static str, String)>,
    },
    RedirectToLogin {
        prompt: &'static str,
        url: String,
    },
}

impl PurchasePlan {
    pub fn prompt(&self) -> &str {
        match self {
            PurchasePlan::SubmitForm { prompt, .. } => prompt,
            PurchasePlan::RedirectToLogin { prompt, .. } => prompt,
        }
    }
}

pub fn plan(config: &PageConfig, package_name: &str, price: &str) -> Result<PurchasePlan, ConfigError> {
    if !config.is_user_authenticated {
        return Ok(PurchasePlan::RedirectToLogin {
            prompt: LOGIN_PROMPT,
            url: config.login_url.clone(),
        });
    }

    let (action, token) = config.purchase_target()?;
    Ok(PurchasePlan::SubmitForm {
        prompt: format!(
            "Are you sure you want to purchase the {} package for ${}?",
            package_name, price
        ),
        action: action.to_string(),
        fields: vec![
            ("csrfmiddlewaretoken", token.to_string()),
            ("package_name", package_name.to_string()),
            ("package_price", price.to_string()),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> PageConfig {
        PageConfig {
            is_user_authenticated: true,
            purchase_url: Some("/accounts/purchase/".to_string()),
            csrf_token: Some("tok".to_string()),
            login_url: "/accounts/login/".to_string(),
        }
    }

    #[test]
    fn test_anonymous_user_is_sent_to_login() {
        let config = PageConfig {
            login_url: "/login/?next=/pricing".to_string(),
            ..PageConfig::default()
        };
        let plan = plan(&config, "Premium", "29").unwrap();
        assert_eq!(
            plan,
            PurchasePlan::RedirectToLogin {
                prompt: LOGIN_PROMPT,
                url: "/login/?next=/pricing".to_string(),
            }
        );
    }

    #[test]
    fn test_authenticated_user_posts_form() {
        let plan = plan(&logged_in(), "Diamond", "49").unwrap();
        assert_eq!(plan.prompt(), "Are you sure you want to purchase the Diamond package for $49?");
        match plan {
            PurchasePlan::SubmitForm { action, fields, .. } => {
                assert_eq!(action, "/accounts/purchase/");
                assert_eq!(
                    fields,
                    vec![
                        ("csrfmiddlewaretoken", "tok".to_string()),
                        ("package_name", "Diamond".to_string()),
                        ("package_price", "49".to_string()),
                    ]
                );
            }
            other => panic!("unexpected plan {:?}", other),
        }
    }

    #[test]
    fn test_authenticated_without_endpoint_is_an_error() {
        let config = PageConfig {
            purchase_url: None,
            ..logged_in()
        };
        assert_eq!(plan(&config, "Basic", "19"), Err(ConfigError::Missing("purchaseUrl")));
    }
}
