use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::models::sections::{self, SectionBounds};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("program", "Program"),
    ("choose", "Choose Us"),
    ("calculate", "BMI"),
    ("pricing", "Pricing"),
];

/// Layout of every `section[id]` currently in the document.
fn read_section_bounds() -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_signup: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let active = use_state_eq(Vec::<String>::new);
    let (_, scroll_y) = use_window_scroll();

    {
        let active = active.clone();
        use_effect_with_deps(
            move |scroll_y| {
                let current = sections::active_sections(*scroll_y, &read_section_bounds());
                debug!("Active sections at {}: {:?}", scroll_y, current);
                active.set(current);
                || ()
            },
            scroll_y,
        );
    }

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(true);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let open_signup = {
        let on_signup = props.on_signup.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_signup.emit(());
        })
    };

    html! {
        <header class={classes!("header", sections::header_scrolled(scroll_y).then(|| "bg-header"))} id="header">
            <nav class="nav container">
                <a href="#home" class="nav__logo">{"Pulse Gym"}</a>

                <div class={classes!("nav__menu", (*menu_open).then(|| "show-menu"))} id="nav-menu">
                    <ul class="nav__list">
                        {
                            NAV_LINKS.iter().map(|(id, label)| {
                                let is_active = active.iter().any(|section| section == id);
                                html! {
                                    <li class="nav__item">
                                        <a
                                            href={format!("#{}", id)}
                                            class={classes!("nav__link", is_active.then(|| "active-link"))}
                                            onclick={close_menu.clone()}
                                        >
                                            {*label}
                                        </a>
                                    </li>
                                }
                            }).collect::<Html>()
                        }
                        <li class="nav__item">
                            <a href="#" class="nav__button button" onclick={open_signup}>{"Sign Up"}</a>
                        </li>
                    </ul>

                    <div class="nav__close" id="nav-close" onclick={close_menu.clone()}>
                        <i class="ri-close-line"></i>
                    </div>
                </div>

                <div class="nav__toggle" id="nav-toggle" onclick={open_menu}>
                    <i class="ri-menu-line"></i>
                </div>
            </nav>
        </header>
    }
}
