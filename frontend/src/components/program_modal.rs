use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::models::programs::ProgramDetail;

const MODAL_ID: &str = "programModal";

#[derive(Properties, PartialEq)]
pub struct ProgramModalProps {
    pub detail: Option<ProgramDetail>,
    pub on_close: Callback<()>,
}

#[function_component(ProgramModal)]
pub fn program_modal(props: &ProgramModalProps) -> Html {
    // Clicks on the backdrop itself dismiss; clicks inside the content don't.
    {
        let on_close = props.on_close.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let on_backdrop = e
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map_or(false, |element| element.id() == MODAL_ID);
            if on_backdrop {
                on_close.emit(());
            }
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let (title, body) = props
        .detail
        .as_ref()
        .map(|detail| (detail.title.clone(), detail.body.clone()))
        .unwrap_or_default();
    let visible = props.detail.is_some();

    html! {
        <div
            class={classes!("modal", visible.then(|| "show-modal"))}
            id={MODAL_ID}
            style={if visible { "display: flex;" } else { "display: none;" }}
        >
            <div class="modal__content">
                <span class="modal__close" onclick={close}>{"×"}</span>
                <h2 id="programModalTitle">{title}</h2>
                <p id="programModalContent">{body}</p>
            </div>
        </div>
    }
}
