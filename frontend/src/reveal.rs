use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    type ScrollReveal;

    #[wasm_bindgen(catch, js_name = ScrollReveal)]
    fn scroll_reveal(defaults: &JsValue) -> Result<ScrollReveal, JsValue>;

    #[wasm_bindgen(method)]
    fn reveal(this: &ScrollReveal, selector: &str, options: &JsValue);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RevealOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
}

pub fn defaults() -> RevealOptions {
    RevealOptions {
        origin: Some("top"),
        distance: Some("60px"),
        duration: Some(2500),
        delay: Some(400),
        interval: None,
    }
}

pub fn registrations() -> Vec<(&'static str, RevealOptions)> {
    vec![
        (".home__data, .footer__container, .footer__group", RevealOptions::default()),
        (
            ".home__img",
            RevealOptions {
                delay: Some(700),
                origin: Some("bottom"),
                ..Default::default()
            },
        ),
        (
            ".logos__img, .program__card, .pricing__card",
            RevealOptions {
                interval: Some(100),
                ..Default::default()
            },
        ),
        (
            ".choose__img, .calculate__content",
            RevealOptions {
                origin: Some("left"),
                ..Default::default()
            },
        ),
        (
            ".choose__content, .calculate__img",
            RevealOptions {
                origin: Some("right"),
                ..Default::default()
            },
        ),
    ]
}

/// Registers the entry animations. Must run after the sections are in the DOM.
pub fn register_all() {
    let has_library = web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("ScrollReveal")).ok())
        .map_or(false, |value| value.is_function());
    if !has_library {
        warn!("ScrollReveal is not loaded, skipping reveal animations");
        return;
    }

    let defaults = match serde_wasm_bindgen::to_value(&defaults()) {
        Ok(value) => value,
        Err(e) => {
            warn!("Could not encode reveal defaults: {}", e);
            return;
        }
    };
    let sr = match scroll_reveal(&defaults) {
        Ok(sr) => sr,
        Err(e) => {
            warn!("ScrollReveal failed to start: {:?}", e);
            return;
        }
    };

    for (selector, options) in registrations() {
        match serde_wasm_bindgen::to_value(&options) {
            Ok(options) => sr.reveal(selector, &options),
            Err(e) => warn!("Skipping reveal for {}: {}", selector, e),
        }
    }
    info!("Registered reveal animations");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_serialize_without_interval() {
        let json = serde_json::to_value(defaults()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"origin": "top", "distance": "60px", "duration": 2500, "delay": 400})
        );
    }

    #[test]
    fn test_overrides_only_carry_set_fields() {
        let registrations = registrations();
        let (selector, options) = &registrations[1];
        assert_eq!(*selector, ".home__img");
        assert_eq!(
            serde_json::to_value(options).unwrap(),
            serde_json::json!({"origin": "bottom", "delay": 700})
        );
        assert_eq!(serde_json::to_value(&registrations[0].1).unwrap(), serde_json::json!({}));
    }
}
