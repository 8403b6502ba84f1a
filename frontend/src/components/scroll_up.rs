use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::models::sections;

#[function_component(ScrollUp)]
pub fn scroll_up() -> Html {
    let (_, scroll_y) = use_window_scroll();

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <a
            href="#"
            class={classes!("scrollup", sections::show_scroll_up(scroll_y).then(|| "show-scroll"))}
            id="scroll-up"
            {onclick}
        >
            <i class="ri-arrow-up-line scrollup__icon"></i>
        </a>
    }
}
