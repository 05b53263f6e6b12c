use chrono::Datelike;
use gloo_timers::callback::Timeout;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::assessment::Assessment;
use crate::components::career_paths::CareerPaths;
use crate::components::carousel::StoriesCarousel;
use crate::components::pricing::Pricing;
use crate::components::stats::HeroStats;
use crate::config;
use crate::effects::{self, ParallaxFrame};
use crate::motion::{self, Target, Tween};
use crate::Route;

const FEATURES: &[(&str, &str, &str)] = &[
    ("fa-compass", "Personalised matches", "Careers ranked against how you actually like to work."),
    ("fa-chart-line", "Skill gap analysis", "See what you already have and what is worth learning next."),
    ("fa-route", "Step-by-step plans", "Concrete milestones from where you are to where you want to be."),
    ("fa-user-friends", "Real stories", "Hear from people who made the same switch."),
];

const ORBS: &[&str] = &["Design", "Data", "Health", "Finance", "Code", "Media"];

fn viewport() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}

#[function_component(Home)]
pub fn home() -> Html {
    let loading = use_state(|| true);
    let compass = use_node_ref();
    let loader = use_node_ref();

    {
        let loading = loading.clone();
        let loader = loader.clone();
        use_effect_with_deps(
            move |_| {
                info!("home page mounted");
                effects::loading_intro();
                let timeout = Timeout::new(config::LOADING_SCREEN_MS, move || {
                    motion::to_then(
                        Target::Node(&loader),
                        &Tween::new(0.5).opacity(0.0).ease("power2.inOut"),
                        move || {
                            loading.set(false);
                            effects::hero_entrance();
                            effects::ambient_loops();
                            effects::reveal_on_scroll();
                        },
                    );
                });
                move || drop(timeout)
            },
            (),
        );
    }

    use_event_with_window("mousemove", move |e: MouseEvent| {
        let (width, height) = viewport();
        effects::apply_parallax(&ParallaxFrame::from_pointer(
            e.client_x() as f64,
            e.client_y() as f64,
            width,
            height,
        ));
    });

    let on_compass_move = {
        let compass = compass.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = compass.cast::<web_sys::Element>() {
                let rect = element.get_bounding_client_rect();
                let (rx, ry) = effects::compass_tilt(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                );
                effects::tilt_compass(rx, ry);
            }
        })
    };

    let ripple = Callback::from(|e: MouseEvent| effects::ripple(&e));
    let year = chrono::Local::now().year();

    html! {
        <>
            if *loading {
                <div class="loading-screen" ref={loader}>
                    <div class="compass-loader"><i class="fas fa-compass"></i></div>
                    <p class="loading-text">{"Finding your direction..."}</p>
                </div>
            }
            <header class="hero" id="home">
                <div class="hero-content">
                    <h1>{"Find the career that fits "}<span class="highlight">{"you"}</span></h1>
                    <p>{"A ten-minute assessment that maps your strengths, interests and working style to real career paths."}</p>
                    <div class="hero-cta-buttons">
                        <Link<Route> to={Route::Assessment} classes="btn btn-primary">
                            {"Start the assessment"}
                        </Link<Route>>
                        <a href="#careers" class="btn btn-outline" onclick={ripple.clone()}>{"Browse careers"}</a>
                    </div>
                    <HeroStats />
                </div>
                <div class="hero-image">
                    <div class="career-compass-container"
                        onmousemove={on_compass_move}
                        onmouseleave={Callback::from(|_: MouseEvent| effects::reset_compass())}>
                        <div class="career-compass" ref={compass}>
                            <div class="compass-outer-ring"></div>
                            <div class="compass-inner-ring"></div>
                            <div class="compass-arrow"></div>
                            <div class="compass-center"></div>
                            <div class="career-orbs">
                                { for ORBS.iter().enumerate().map(|(i, orb)| html! {
                                    <span class={classes!("career-orb", format!("orb-{}", i + 1))}>{ *orb }</span>
                                }) }
                            </div>
                        </div>
                    </div>
                    <div class="floating-elements">
                        <div class="floating-element fe-1"><i class="fas fa-briefcase"></i></div>
                        <div class="floating-element fe-2"><i class="fas fa-graduation-cap"></i></div>
                        <div class="floating-element fe-3"><i class="fas fa-lightbulb"></i></div>
                    </div>
                </div>
            </header>

            <section class="features-section" id="features">
                <div class="section-header">
                    <h2 class="section-title">{"Why CareerCompass"}</h2>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(icon, title, body)| html! {
                        <div class="feature-card"
                            onmousemove={Callback::from(|e: MouseEvent| effects::on_card_pointer(&e, true))}
                            onmouseleave={Callback::from(|e: MouseEvent| effects::on_card_leave(&e))}>
                            <i class={classes!("fas", *icon)}></i>
                            <h3>{ *title }</h3>
                            <p>{ *body }</p>
                        </div>
                    }) }
                </div>
            </section>

            <CareerPaths />

            <section class="assessment-section" id="assessment">
                <div class="section-header">
                    <h2 class="section-title">{"Take the assessment"}</h2>
                </div>
                <Assessment />
            </section>

            <section class="stories-section" id="stories">
                <div class="section-header">
                    <h2 class="section-title">{"Success stories"}</h2>
                </div>
                <StoriesCarousel />
            </section>

            <Pricing />

            <section class="cta-section">
                <h2>{"Ready to find your direction?"}</h2>
                <button class="btn-primary" onclick={ripple}>{"Get started free"}</button>
            </section>

            <footer class="footer">
                <p>{ format!("© {} CareerCompass. All rights reserved.", year) }</p>
            </footer>
        </>
    }
}
