use log::{error, info, Level};
use web_sys::window;
use yew::prelude::*;

mod config;
mod flash;
mod mail;
mod purchase;
mod reveal;
mod models {
    pub mod auth;
    pub mod bmi;
    pub mod email;
    pub mod programs;
    pub mod purchase;
    pub mod sections;
}
mod components {
    pub mod auth_modal;
    pub mod bmi_calculator;
    pub mod nav;
    pub mod pricing;
    pub mod program_modal;
    pub mod programs;
    pub mod registration;
    pub mod scroll_up;
}
mod pages {
    pub mod landing;
}

use components::{auth_modal::AuthModalView, nav::Nav, scroll_up::ScrollUp};
use config::PageConfig;
use models::auth::AuthModal;
use pages::landing::Landing;

const MOUNT_ID: &str = "app";

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: PageConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let auth = use_state(AuthModal::default);

    // sections are rendered by now
    use_effect_with_deps(
        |_| {
            reveal::register_all();
            || ()
        },
        (),
    );

    let open_signup = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            info!("Opening auth modal");
            auth.set(auth.open());
        })
    };

    let update_auth = {
        let auth = auth.clone();
        Callback::from(move |next: AuthModal| auth.set(next))
    };

    html! {
        <>
            <Nav on_signup={open_signup.clone()} />
            <Landing config={props.config.clone()} on_signup={open_signup} />
            <AuthModalView state={*auth} on_change={update_auth} />
            <ScrollUp />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    let config = PageConfig::from_window().unwrap_or_else(|e| {
        error!("Falling back to default page config: {}", e);
        PageConfig::default()
    });
    info!(
        "Starting application (authenticated: {})",
        config.is_user_authenticated
    );

    let props = AppProps { config };
    match window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
    {
        Some(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        None => yew::Renderer::<App>::with_props(props).render(),
    };
}
