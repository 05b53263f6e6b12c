use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod motion;
mod effects;
mod state {
    pub mod sink;
    pub mod sequence;
    pub mod selection;
    pub mod autoplay;
    pub mod wizard;
    pub mod carousel;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod assessment;
    pub mod career_paths;
    pub mod carousel;
    pub mod cursor;
    pub mod nav;
    pub mod pricing;
    pub mod slider;
    pub mod stats;
}
mod pages {
    pub mod home;
}

use components::{assessment::AssessmentPage, cursor::Cursor, nav::Nav};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/assessment")]
    Assessment,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Assessment => {
            info!("Rendering Assessment page");
            html! { <AssessmentPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="not-found">
                    <h1>{"Lost your bearings?"}</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"Back to the start"}
                    </Link<Route>>
                </section>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Cursor />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::warn!(format!("logger unavailable: {}", err));
    }

    motion::init();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
