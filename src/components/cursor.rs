use stylist::yew::styled_component;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::motion::{self, Target, Tween};

/// What the pointer is over, which decides how large the outer ring grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    Default,
    LinkHover,
    ButtonHover,
}

impl CursorMode {
    /// `tag` is the tag name of the nearest enclosing `a` or `button`, if any.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if tag.eq_ignore_ascii_case("button") => CursorMode::ButtonHover,
            Some(_) => CursorMode::LinkHover,
            None => CursorMode::Default,
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            CursorMode::Default => None,
            CursorMode::LinkHover => Some("link-hover"),
            CursorMode::ButtonHover => Some("button-hover"),
        }
    }
}

fn hovered_tag(e: &MouseEvent) -> Option<String> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    target.closest("a, button").ok().flatten().map(|el| el.tag_name())
}

#[styled_component(Cursor)]
pub fn cursor() -> Html {
    let outer = use_node_ref();
    let inner = use_node_ref();
    let mode = use_state_eq(|| CursorMode::Default);
    let visible = use_state_eq(|| true);

    {
        let (outer, inner) = (outer.clone(), inner.clone());
        use_effect_with_deps(
            move |_| {
                let centered = Tween::props().with("xPercent", -50).with("yPercent", -50);
                motion::set(Target::Node(&outer), &centered);
                motion::set(Target::Node(&inner), &centered);
                || ()
            },
            (),
        );
    }

    {
        let (outer, inner) = (outer.clone(), inner.clone());
        let (mode, visible) = (mode.clone(), visible.clone());
        use_event_with_window("mousemove", move |e: MouseEvent| {
            let (x, y) = (e.client_x(), e.client_y());
            motion::to(Target::Node(&outer), &Tween::new(0.4).x(x).y(y).ease("expo.out"));
            motion::to(Target::Node(&inner), &Tween::new(0.1).x(x).y(y).ease("power1.out"));
            mode.set(CursorMode::from_tag(hovered_tag(&e).as_deref()));
            visible.set(true);
        });
    }

    {
        let visible = visible.clone();
        use_event_with_window("mouseout", move |e: MouseEvent| {
            // No related target means the pointer left the document.
            if e.related_target().is_none() {
                visible.set(false);
            }
        });
    }

    {
        let (outer, inner) = (outer.clone(), inner.clone());
        use_event_with_window("mousedown", move |_: MouseEvent| {
            motion::to(Target::Node(&outer), &Tween::new(0.2).scale(0.8).ease("power2.out"));
            motion::to(Target::Node(&inner), &Tween::new(0.2).scale(0.6).ease("power2.out"));
        });
    }

    {
        let (outer, inner) = (outer.clone(), inner.clone());
        use_event_with_window("mouseup", move |_: MouseEvent| {
            let spring = Tween::new(0.3).scale(1.0).ease("elastic.out(1, 0.3)");
            motion::to(Target::Node(&outer), &spring);
            motion::to(Target::Node(&inner), &spring);
        });
    }

    let base = css!(
        r#"
        pointer-events: none;
        position: fixed;
        top: 0;
        left: 0;
        border-radius: 50%;
        z-index: 9999;
        mix-blend-mode: difference;
        transition: width 0.2s, height 0.2s, opacity 0.2s;

        &.cursor-hidden {
            opacity: 0;
        }

        @media (max-width: 768px) {
            display: none;
        }
    "#
    );
    let ring = css!(
        r#"
        width: 40px;
        height: 40px;
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid rgba(255, 255, 255, 0.3);

        &.link-hover {
            width: 60px;
            height: 60px;
            background: rgba(67, 97, 238, 0.1);
            border-color: var(--primary-color);
        }

        &.button-hover {
            width: 70px;
            height: 70px;
            border: none;
        }
    "#
    );
    let dot = css!(
        r#"
        width: 8px;
        height: 8px;
        background: rgba(255, 255, 255, 0.8);
    "#
    );

    let hidden = (!*visible).then(|| "cursor-hidden");
    html! {
        <>
            <div ref={outer} class={classes!("cursor-outer", base.clone(), ring, mode.class(), hidden)}></div>
            <div ref={inner} class={classes!("cursor-inner", base, dot, hidden)}></div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_and_links_get_their_own_mode() {
        assert_eq!(CursorMode::from_tag(Some("BUTTON")), CursorMode::ButtonHover);
        assert_eq!(CursorMode::from_tag(Some("A")), CursorMode::LinkHover);
        assert_eq!(CursorMode::from_tag(None), CursorMode::Default);
    }

    #[test]
    fn default_mode_adds_no_class() {
        assert_eq!(CursorMode::Default.class(), None);
        assert_eq!(CursorMode::ButtonHover.class(), Some("button-hover"));
    }
}
