use log::{info, warn};
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::models::auth::AuthModal;

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub state: AuthModal,
    pub on_change: Callback<AuthModal>,
}

fn text_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

#[function_component(AuthModalView)]
pub fn auth_modal_view(props: &AuthModalProps) -> Html {
    let state = props.state;
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let dob = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let on_change = props.on_change.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // no backend behind the modal; credentials are only read
            info!("Auth form submitted in {:?} mode", state.mode);
            let outcome = state.submit();
            if let Some(window) = window() {
                if let Err(e) = window.alert_with_message(outcome.alert) {
                    warn!("Could not show auth alert: {:?}", e);
                }
            }
            password.set(String::new());
            on_change.emit(outcome.next);
        })
    };

    let close = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(state.close()))
    };

    let (link_label, link_target) = state.footer_link();
    let switch_mode = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_change.emit(state.toggle(link_target));
        })
    };

    let signup_only = if state.shows_signup_fields() { "display: block;" } else { "display: none;" };

    html! {
        <div
            class={classes!("modal", state.visible.then(|| "show-modal"))}
            id="authModal"
            style={if state.visible { "display: flex;" } else { "display: none;" }}
        >
            <div class="modal__content">
                <span class="modal__close" onclick={close}>{"×"}</span>
                <h2 id="formTitle">{state.title()}</h2>

                <form id="authForm" class="modal__form" {onsubmit}>
                    <input type="text" id="name" placeholder="Full name" style={signup_only}
                        value={(*name).clone()} oninput={text_input(&name)} />
                    <input type="tel" id="phone" placeholder="Phone" style={signup_only}
                        value={(*phone).clone()} oninput={text_input(&phone)} />
                    <input type="date" id="dob" placeholder="Date of birth" style={signup_only}
                        value={(*dob).clone()} oninput={text_input(&dob)} />
                    <input type="email" id="email" placeholder="Email"
                        value={(*email).clone()} oninput={text_input(&email)} />
                    <input type="password" id="password" placeholder="Password"
                        value={(*password).clone()} oninput={text_input(&password)} />
                    <button type="submit" class="button modal__button">{state.submit_label()}</button>
                </form>

                <p class="modal__switch">
                    {state.footer_prompt()}{" "}
                    <a href="#" onclick={switch_mode}>{link_label}</a>
                </p>
            </div>
        </div>
    }
}
