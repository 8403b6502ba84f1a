use log::info;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlFormElement, HtmlInputElement};

use crate::config::{ConfigError, PageConfig};
use crate::models::purchase::{self, PurchasePlan};

#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not build purchase form: {0}")]
    Dom(String),
}

impl From<JsValue> for PurchaseError {
    fn from(value: JsValue) -> Self {
        PurchaseError::Dom(format!("{:?}", value))
    }
}

/// Asks the user to confirm, then either posts the purchase form or sends
/// them to the login page. Declining does nothing.
pub fn start(config: &PageConfig, package_name: &str, price: &str) -> Result<(), PurchaseError> {
    let plan = purchase::plan(config, package_name, price)?;
    let window = window().ok_or_else(|| PurchaseError::Dom("no window".to_string()))?;

    if !window.confirm_with_message(plan.prompt())? {
        info!("Purchase of {} declined", package_name);
        return Ok(());
    }

    match plan {
        PurchasePlan::RedirectToLogin { url, .. } => {
            info!("Redirecting to login before purchase");
            window.location().set_href(&url)?;
        }
        PurchasePlan::SubmitForm { action, fields, .. } => {
            info!("Submitting purchase of {} for {}", package_name, price);
            submit_hidden_form(&window, &action, &fields)?;
        }
    }
    Ok(())
}

fn submit_hidden_form(
    window: &web_sys::Window,
    action: &str,
    fields: &[(&'static str, String)],
) -> Result<(), PurchaseError> {
    let document = window
        .document()
        .ok_or_else(|| PurchaseError::Dom("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| PurchaseError::Dom("no body".to_string()))?;

    let form: HtmlFormElement = document
        .create_element("form")?
        .dyn_into()
        .map_err(|_| PurchaseError::Dom("form element".to_string()))?;
    form.set_method("POST");
    form.set_action(action);
    form.set_hidden(true);

    for (name, value) in fields {
        let input: HtmlInputElement = document
            .create_element("input")?
            .dyn_into()
            .map_err(|_| PurchaseError::Dom("input element".to_string()))?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        form.append_child(&input)?;
    }

    body.append_child(&form)?;
    form.submit()?;
    Ok(())
}
