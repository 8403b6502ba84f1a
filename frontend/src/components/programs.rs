use yew::prelude::*;

use crate::models::programs::PROGRAMS;

#[derive(Properties, PartialEq)]
pub struct ProgramsProps {
    pub on_details: Callback<String>,
}

#[function_component(Programs)]
pub fn programs(props: &ProgramsProps) -> Html {
    html! {
        <section class="program section" id="program">
            <div class="section__data">
                <h2 class="section__subtitle">{"Our Program"}</h2>
                <div class="section__titles">
                    <h1 class="section__title-border">{"BUILD YOUR"}</h1>
                    <h1 class="section__title">{"BEST BODY"}</h1>
                </div>
            </div>

            <div class="program__container container grid">
                {
                    PROGRAMS.iter().map(|(name, _)| {
                        let onclick = {
                            let on_details = props.on_details.clone();
                            let name = name.to_string();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_details.emit(name.clone());
                            })
                        };
                        html! {
                            <article class="program__card">
                                <h3 class="program__title">{*name}</h3>
                                <a href="#" class="program__button" {onclick}>
                                    <i class="ri-arrow-right-line"></i>
                                </a>
                            </article>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
