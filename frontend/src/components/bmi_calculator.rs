use log::{info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::flash::use_flash;
use crate::models::bmi::{self, BmiError};

#[function_component(BmiCalculator)]
pub fn bmi_calculator() -> Html {
    let height = use_state(String::new);
    let weight = use_state(String::new);
    let message = use_flash();

    let onsubmit = {
        let height = height.clone();
        let weight = weight.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = bmi::evaluate(&height, &weight);
            match &result {
                Ok(report) => {
                    info!("BMI calculated: {}", report.bmi);
                    height.set(String::new());
                    weight.set(String::new());
                }
                Err(BmiError::MissingInput) => {}
                Err(err) => warn!("Rejected BMI input {:?} / {:?}: {:?}", *height, *weight, err),
            }
            message.show(bmi::notice(&result));
        })
    };

    html! {
        <section class="calculate section" id="calculate">
            <div class="calculate__container container grid">
                <div class="calculate__content">
                    <div class="section__titles">
                        <h1 class="section__title-border">{"CALCULATE"}</h1>
                        <h1 class="section__title">{"YOUR BMI"}</h1>
                    </div>
                    <p class="calculate__description">
                        {"The body mass index (BMI) calculator calculates body mass index from your weight and height."}
                    </p>

                    <form action="" class="calculate__form" id="calculate-form" {onsubmit}>
                        <div class="calculate__box">
                            <input
                                type="number"
                                placeholder="Height"
                                class="calculate__input"
                                id="calculate-cm"
                                value={(*height).clone()}
                                oninput={let height = height.clone(); move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    height.set(input.value());
                                }}
                            />
                            <label class="calculate__label">{"cm"}</label>
                        </div>
                        <div class="calculate__box">
                            <input
                                type="number"
                                placeholder="Weight"
                                class="calculate__input"
                                id="calculate-kg"
                                value={(*weight).clone()}
                                oninput={let weight = weight.clone(); move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    weight.set(input.value());
                                }}
                            />
                            <label class="calculate__label">{"kg"}</label>
                        </div>
                        <button type="submit" class="button calculate__button">{"Calculate Now"}</button>
                    </form>

                    <p class={classes!("calculate__message", message.classes())} id="calculate-message">
                        {message.text()}
                    </p>
                </div>

                <img src="/static/img/calculate-img.png" alt="" class="calculate__img" />
            </div>
        </section>
    }
}
