use log::error;
use web_sys::window;
use yew::prelude::*;

use crate::config::PageConfig;
use crate::models::purchase::{Package, PACKAGES};
use crate::purchase;

const UNAVAILABLE: &str = "Purchases are unavailable right now, please try again later.";

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub config: PageConfig,
}

#[derive(Properties, PartialEq)]
struct PricingCardProps {
    package: Package,
    config: PageConfig,
}

#[function_component(PricingCard)]
fn pricing_card(props: &PricingCardProps) -> Html {
    let package = props.package;

    let onclick = {
        let config = props.config.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let price = package.price.to_string();
            if let Err(e) = purchase::start(&config, package.name, &price) {
                error!("Purchase of {} failed: {}", package.name, e);
                if let Some(window) = window() {
                    if let Err(e) = window.alert_with_message(UNAVAILABLE) {
                        error!("Could not show purchase alert: {:?}", e);
                    }
                }
            }
        })
    };

    html! {
        <article class="pricing__card">
            <h3 class="pricing__title">{package.name}</h3>
            <h1 class="pricing__number">{format!("${}", package.price)}</h1>
            <ul class="pricing__list">
                {
                    package.features.iter().map(|feature| html! {
                        <li class="pricing__item">
                            <i class="ri-checkbox-fill"></i>
                            <span>{*feature}</span>
                        </li>
                    }).collect::<Html>()
                }
            </ul>
            <button class="button pricing__button" {onclick}>{"Purchase Now"}</button>
        </article>
    }
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    html! {
        <section class="pricing section" id="pricing">
            <div class="section__data">
                <h2 class="section__subtitle">{"Pricing"}</h2>
                <div class="section__titles">
                    <h1 class="section__title-border">{"OUR"}</h1>
                    <h1 class="section__title">{"SPECIAL PLAN"}</h1>
                </div>
            </div>

            <div class="pricing__container container grid">
                {
                    PACKAGES.iter().map(|package| html! {
                        <PricingCard package={*package} config={props.config.clone()} />
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
