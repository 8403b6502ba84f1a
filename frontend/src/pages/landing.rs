use chrono::Datelike;
use log::{info, warn};
use yew::prelude::*;

use crate::components::{
    bmi_calculator::BmiCalculator,
    pricing::Pricing,
    program_modal::ProgramModal,
    programs::Programs,
    registration::RegistrationForm,
};
use crate::config::PageConfig;
use crate::models::programs::ProgramDetail;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: PageConfig,
    pub on_signup: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let program = use_state(|| None::<ProgramDetail>);

    let show_program_detail = {
        let program = program.clone();
        Callback::from(move |name: String| {
            let detail = ProgramDetail::lookup(&name);
            if detail.known {
                info!("Showing program details for {}", name);
            } else {
                warn!("No description registered for program {}", name);
            }
            program.set(Some(detail));
        })
    };

    let close_program = {
        let program = program.clone();
        Callback::from(move |_: ()| program.set(None))
    };

    let join = {
        let on_signup = props.on_signup.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_signup.emit(());
        })
    };

    let year = chrono::Local::now().year();

    html! {
        <>
            <main class="main">
                <section class="home section" id="home">
                    <div class="home__container container grid">
                        <div class="home__data">
                            <h2 class="home__subtitle">{"MAKE YOUR"}</h2>
                            <h1 class="home__title">{"BODY SHAPE"}</h1>
                            <p class="home__description">
                                {"In here we will help you to shape and build your ideal body and live your life to the fullest."}
                            </p>
                            <a href="#" class="button" onclick={join}>{"Get Started"}</a>
                        </div>
                        <div class="home__images">
                            <img src="/static/img/home-img.png" alt="" class="home__img" />
                        </div>
                    </div>
                </section>

                <Programs on_details={show_program_detail} />

                <section class="choose section" id="choose">
                    <div class="choose__overflow">
                        <div class="choose__container container grid">
                            <div class="choose__img-bg">
                                <img src="/static/img/choose-img.png" alt="" class="choose__img" />
                            </div>
                            <div class="choose__content">
                                <div class="section__data">
                                    <h2 class="section__subtitle">{"Best Reason"}</h2>
                                    <div class="section__titles">
                                        <h1 class="section__title-border">{"WHY"}</h1>
                                        <h1 class="section__title">{"CHOOSE US?"}</h1>
                                    </div>
                                </div>
                                <p class="choose__description">
                                    {"Choose your favorite class and start now. Remember the only bad workout is the one you didn't do."}
                                </p>
                            </div>
                        </div>
                    </div>
                </section>

                <BmiCalculator />

                <Pricing config={props.config.clone()} />
            </main>

            <footer class="footer section" id="footer">
                <div class="footer__container container grid">
                    <div class="footer__group">
                        <h3 class="footer__title">{"Subscribe for news"}</h3>
                        <RegistrationForm />
                    </div>
                </div>
                <span class="footer__copy">{format!("© {} Pulse Gym. All rights reserved.", year)}</span>
            </footer>

            <ProgramModal detail={(*program).clone()} on_close={close_program} />
        </>
    }
}
