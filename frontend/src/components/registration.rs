use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::flash::use_flash;
use crate::mail;
use crate::models::email::{self, RegistrationParams};

#[function_component(RegistrationForm)]
pub fn registration_form() -> Html {
    let address = use_state(String::new);
    let message = use_flash();

    let onsubmit = {
        let address = address.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = match email::validate(&address) {
                Ok(email) => email,
                Err(err) => {
                    message.show(email::rejected_notice(&err));
                    return;
                }
            };

            message.show(email::sending_notice());

            let address = address.clone();
            let message = message.clone();
            spawn_local(async move {
                let params = RegistrationParams::welcome(&email);
                match mail::send(config::MAIL_SERVICE_ID, config::MAIL_TEMPLATE_ID, &params).await {
                    Ok(response) => {
                        info!("Registration mail accepted: {} {}", response.status, response.text);
                        message.show(email::sent_notice());
                        address.set(String::new());
                    }
                    Err(err) => {
                        error!("Registration mail failed: {}", err);
                        message.show(email::failed_notice(err.text()));
                    }
                }
            });
        })
    };

    html! {
        <form action="" class="footer__form" id="contact-form" novalidate={true} {onsubmit}>
            <input
                type="email"
                placeholder="Your email"
                class="footer__input"
                id="contact-user"
                value={(*address).clone()}
                oninput={let address = address.clone(); move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    address.set(input.value());
                }}
            />
            <button type="submit" class="button footer__button">{"Subscribe"}</button>
            <p class={classes!("footer__message", message.classes())} id="contact-message">
                {message.text()}
            </p>
        </form>
    }
}
