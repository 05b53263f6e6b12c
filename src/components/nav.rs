use std::rc::Rc;

use log::debug;
use stylist::yew::styled_component;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::motion::{self, Target, Tween};
use crate::Route;

pub const SECTIONS: &[(&str, &str)] = &[
    ("features", "Features"),
    ("careers", "Careers"),
    ("assessment", "Assessment"),
    ("stories", "Stories"),
    ("pricing", "Pricing"),
];

pub const RESOURCES: &[(&str, &str, &str)] = &[
    ("blog", "fa-rss", "Blog"),
    ("guides", "fa-book", "Career Guides"),
    ("stories", "fa-user-friends", "Success Stories"),
    ("faq", "fa-question-circle", "FAQ"),
];

/// Everything the navbar remembers between events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub drawer_open: bool,
    pub dropdown_open: bool,
    pub active: Option<&'static str>,
}

impl NavState {
    pub fn scrolled_to(&mut self, offset: f64) {
        self.scrolled = offset > config::NAV_SCROLL_THRESHOLD;
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Returns true when the resize closed an open drawer.
    pub fn resized_to(&mut self, width: f64) -> bool {
        let closing = self.drawer_open && !config::is_mobile_width(width);
        if closing {
            self.drawer_open = false;
        }
        closing
    }

    pub fn follow_link(&mut self, id: &'static str, width: f64) {
        self.active = Some(id);
        if config::is_mobile_width(width) {
            self.drawer_open = false;
        }
    }

    pub fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.dropdown_open;
        self.dropdown_open
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        debug!("could not change body overflow: {:?}", err);
    }
}

fn lift(e: &MouseEvent, y: i32) {
    if let Some(link) = e.target_dyn_into::<web_sys::Element>() {
        motion::to(Target::Element(&link), &Tween::new(0.3).y(y).ease("power2.out"));
    }
}

pub enum NavAction {
    Scrolled(f64),
    OpenDrawer,
    CloseDrawer,
    Resized(f64),
    FollowLink(&'static str, f64),
    ToggleDropdown,
    CloseDropdown,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::Scrolled(offset) => next.scrolled_to(offset),
            NavAction::OpenDrawer => next.open_drawer(),
            NavAction::CloseDrawer => next.close_drawer(),
            NavAction::Resized(width) => {
                next.resized_to(width);
            }
            NavAction::FollowLink(id, width) => next.follow_link(id, width),
            NavAction::ToggleDropdown => {
                next.toggle_dropdown();
            }
            NavAction::CloseDropdown => next.close_dropdown(),
        }
        next.into()
    }
}

fn window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::MAX)
}

#[styled_component(Nav)]
pub fn nav() -> Html {
    let state = use_reducer_eq(NavState::default);
    let (_, scroll_y) = use_window_scroll();
    let (width, _) = use_window_size();
    let dropdown = use_node_ref();
    let logo = use_node_ref();
    let close_button = use_node_ref();

    {
        let state = state.clone();
        use_effect_with_deps(
            move |offset: &f64| {
                state.dispatch(NavAction::Scrolled(*offset));
                || ()
            },
            scroll_y,
        );
    }

    {
        let logo = logo.clone();
        use_effect_with_deps(
            move |scrolled: &bool| {
                let scale = if *scrolled { 0.9 } else { 1.0 };
                motion::to(Target::Node(&logo), &Tween::new(0.4).scale(scale).ease("power2.out"));
                || ()
            },
            state.scrolled,
        );
    }

    {
        let state = state.clone();
        use_effect_with_deps(
            move |width: &f64| {
                if !config::is_mobile_width(*width) {
                    state.dispatch(NavAction::Resized(*width));
                    motion::set(Target::Selector(".nav-links a"), &Tween::props().with("clearProps", "all"));
                }
                || ()
            },
            width,
        );
    }

    {
        let close_button = close_button.clone();
        use_effect_with_deps(
            move |open: &bool| {
                lock_body_scroll(*open);
                if *open {
                    motion::from_to(
                        Target::Selector(".nav-links a"),
                        &Tween::props().opacity(0.0).x(20),
                        &Tween::new(0.5).opacity(1.0).x(0).stagger(0.1).delay(0.2).ease("power3.out"),
                    );
                    motion::from_to(
                        Target::Node(&close_button),
                        &Tween::props().opacity(0.0).with("rotate", -90),
                        &Tween::new(0.5).opacity(1.0).with("rotate", 0).delay(0.1).ease("back.out(1.7)"),
                    );
                }
                || ()
            },
            state.drawer_open,
        );
    }

    use_effect_with_deps(
        move |open: &bool| {
            if *open {
                motion::from_to(
                    Target::Selector(".nav-dropdown-item"),
                    &Tween::props().opacity(0.0).y(10),
                    &Tween::new(0.3).opacity(1.0).y(0).stagger(0.05).ease("power2.out"),
                );
            }
            || ()
        },
        state.dropdown_open,
    );

    {
        let state = state.clone();
        use_click_away(dropdown.clone(), move |_: Event| {
            state.dispatch(NavAction::CloseDropdown);
        });
    }

    let open_drawer = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::OpenDrawer))
    };

    // Links and the close button fade out while the drawer slides away.
    let close_drawer = {
        let state = state.clone();
        let close_button = close_button.clone();
        Callback::from(move |_: MouseEvent| {
            motion::to(Target::Selector(".nav-links a"), &Tween::new(0.3).opacity(0.0).x(20).stagger(0.05));
            motion::to(Target::Node(&close_button), &Tween::new(0.3).opacity(0.0).with("rotate", -90));
            state.dispatch(NavAction::CloseDrawer);
        })
    };

    let toggle_dropdown = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::ToggleDropdown))
    };

    let drawer = css!(
        r#"
        @media (max-width: 768px) {
            position: fixed;
            top: 0;
            right: -300px;
            width: 300px;
            height: 100vh;
            background-color: var(--white-color);
            flex-direction: column;
            padding: 80px 20px 30px;
            transition: right 0.3s ease;
            z-index: 999;

            &.open {
                right: 0;
                box-shadow: -5px 0 30px rgba(0, 0, 0, 0.2);
            }
        }
    "#
    );
    let backdrop = css!(
        r#"
        position: fixed;
        inset: 0;
        background-color: rgba(0, 0, 0, 0.5);
        z-index: 998;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease;

        &.open {
            opacity: 1;
            pointer-events: auto;
        }
    "#
    );

    let open = state.drawer_open.then(|| "open");
    html! {
        <nav class={classes!("navbar", state.scrolled.then(|| "scrolled"))}>
            <Link<Route> to={Route::Home} classes="logo">
                <span class="logo-text" ref={logo}>{"CareerCompass"}</span>
            </Link<Route>>
            <button class="mobile-menu-btn" aria-label="Open menu" onclick={open_drawer}>
                <i class="fas fa-bars"></i>
            </button>
            <div class={classes!("nav-links", drawer, open)}>
                { for SECTIONS.iter().map(|(id, label)| {
                    let id: &'static str = id;
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |_: MouseEvent| {
                            state.dispatch(NavAction::FollowLink(id, window_width()));
                        })
                    };
                    html! {
                        <a href={format!("#{}", id)}
                            class={classes!((state.active == Some(id)).then(|| "active"))}
                            onmouseenter={Callback::from(|e: MouseEvent| lift(&e, -3))}
                            onmouseleave={Callback::from(|e: MouseEvent| lift(&e, 0))}
                            {onclick}>
                            { *label }
                        </a>
                    }
                }) }
                <div class={classes!("nav-dropdown", state.dropdown_open.then(|| "open"))} ref={dropdown}>
                    <div class="nav-dropdown-toggle" onclick={toggle_dropdown}>
                        {"Resources "}<i class="fas fa-chevron-down"></i>
                    </div>
                    <div class="nav-dropdown-menu">
                        { for RESOURCES.iter().map(|(id, icon, label)| html! {
                            <a href={format!("#{}", id)} class="nav-dropdown-item">
                                <i class={classes!("fas", *icon)}></i>
                                <span>{ *label }</span>
                            </a>
                        }) }
                    </div>
                </div>
                <Link<Route> to={Route::Assessment} classes="btn-primary nav-cta">
                    {"Take the assessment"}
                </Link<Route>>
                <button class="mobile-menu-close" aria-label="Close menu" ref={close_button}
                    onclick={close_drawer.clone()}>
                    <i class="fas fa-times"></i>
                </button>
            </div>
            <div class={classes!("nav-backdrop", backdrop, open)} onclick={close_drawer}></div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_the_threshold() {
        let mut nav = NavState::default();
        nav.scrolled_to(50.0);
        assert!(!nav.scrolled);
        nav.scrolled_to(51.0);
        assert!(nav.scrolled);
        nav.scrolled_to(0.0);
        assert!(!nav.scrolled);
    }

    #[test]
    fn widening_past_the_breakpoint_closes_the_drawer() {
        let mut nav = NavState::default();
        nav.open_drawer();
        assert!(!nav.resized_to(768.0));
        assert!(nav.drawer_open);
        assert!(nav.resized_to(1024.0));
        assert!(!nav.drawer_open);
        assert!(!nav.resized_to(1024.0));
    }

    #[test]
    fn link_click_marks_active_and_closes_only_on_mobile() {
        let mut nav = NavState::default();
        nav.open_drawer();
        nav.follow_link("pricing", 1280.0);
        assert_eq!(nav.active, Some("pricing"));
        assert!(nav.drawer_open);

        nav.follow_link("stories", 375.0);
        assert_eq!(nav.active, Some("stories"));
        assert!(!nav.drawer_open);
    }

    #[test]
    fn reducer_applies_actions_in_order() {
        let state = Rc::new(NavState::default())
            .reduce(NavAction::OpenDrawer)
            .reduce(NavAction::Scrolled(120.0))
            .reduce(NavAction::Resized(1440.0));
        assert!(state.scrolled);
        assert!(!state.drawer_open);
    }

    #[test]
    fn close_action_shuts_the_drawer_immediately() {
        let state = Rc::new(NavState::default())
            .reduce(NavAction::OpenDrawer)
            .reduce(NavAction::CloseDrawer);
        assert!(!state.drawer_open);
    }

    #[test]
    fn dropdown_toggles_and_closes() {
        let mut nav = NavState::default();
        assert!(nav.toggle_dropdown());
        assert!(!nav.toggle_dropdown());
        nav.toggle_dropdown();
        nav.close_dropdown();
        assert!(!nav.dropdown_open);
    }
}
