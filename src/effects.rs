use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::motion::{self, ScrollTrigger, Target, Timeline, Tween};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    pub front: (f64, f64),
    pub back: (f64, f64),
    pub middle: (f64, f64),
    pub arrow_rotation: f64,
}

impl ParallaxFrame {
    /// Offsets for the floating hero elements given the pointer position.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        let dx = x - width / 2.0;
        let dy = y - height / 2.0;
        Self {
            front: (dx * 0.02, dy * 0.02),
            back: (-dx * 0.01, -dy * 0.01),
            middle: (dx * 0.015, dy * 0.015),
            arrow_rotation: dx * 0.01,
        }
    }
}

/// Subtle tilt for pricing and career cards, from the pointer offset inside the card.
pub fn card_tilt(offset_x: f64, offset_y: f64, width: f64, height: f64) -> (f64, f64) {
    let (cx, cy) = (width / 2.0, height / 2.0);
    ((cy - offset_y) * 0.01, (offset_x - cx) * 0.01)
}

/// Stronger tilt used on the feature cards.
pub fn feature_tilt(offset_x: f64, offset_y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        20.0 * ((offset_y - height / 2.0) / height),
        -20.0 * ((offset_x - width / 2.0) / width),
    )
}

pub const COMPASS_MAX_TILT: f64 = 15.0;

/// Compass rotation from the pointer position relative to its centre, clamped.
pub fn compass_tilt(x: f64, y: f64, left: f64, top: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let px = (x - (left + width / 2.0)) / (width / 2.0);
    let py = (y - (top + height / 2.0)) / (height / 2.0);
    (
        (py * COMPASS_MAX_TILT).clamp(-COMPASS_MAX_TILT, COMPASS_MAX_TILT),
        (-px * COMPASS_MAX_TILT).clamp(-COMPASS_MAX_TILT, COMPASS_MAX_TILT),
    )
}

/// Count-up value at `elapsed` ms with a power2.out curve, rounded up.
pub fn eased_count(target: u32, elapsed: f64, duration: f64) -> u32 {
    if duration <= 0.0 || elapsed >= duration {
        return target;
    }
    let t = (elapsed / duration).max(0.0);
    let eased = 1.0 - (1.0 - t).powi(2);
    (target as f64 * eased).ceil() as u32
}

pub fn apply_parallax(frame: &ParallaxFrame) {
    let drift = |selector: &str, (x, y): (f64, f64)| {
        motion::to(
            Target::Selector(selector),
            &Tween::new(1.0).x(x).y(y).ease("power1.out"),
        );
    };
    drift(".floating-element.fe-1", frame.front);
    drift(".floating-element.fe-2", frame.back);
    drift(".floating-element.fe-3", frame.middle);
    motion::to(
        Target::Selector(".compass-arrow"),
        &Tween::new(1.0).with("rotation", frame.arrow_rotation).ease("power1.out"),
    );
}

fn pointer_offset(element: &Element, e: &MouseEvent) -> (f64, f64, f64, f64) {
    let rect = element.get_bounding_client_rect();
    (
        e.client_x() as f64 - rect.left(),
        e.client_y() as f64 - rect.top(),
        rect.width(),
        rect.height(),
    )
}

pub fn tilt_card(element: &Element, e: &MouseEvent) {
    let (x, y, w, h) = pointer_offset(element, e);
    let (rx, ry) = card_tilt(x, y, w, h);
    motion::to(
        Target::Element(element),
        &Tween::new(0.3)
            .with("rotationX", rx)
            .with("rotationY", ry)
            .with("transformPerspective", 1000)
            .ease("power1.out"),
    );
}

pub fn tilt_feature(element: &Element, e: &MouseEvent) {
    let (x, y, w, h) = pointer_offset(element, e);
    let (rx, ry) = feature_tilt(x, y, w, h);
    motion::to(
        Target::Element(element),
        &Tween::new(0.5)
            .with("rotationX", rx)
            .with("rotationY", ry)
            .scale(1.05)
            .with("boxShadow", "0 20px 40px rgba(0, 0, 0, 0.1)")
            .with("transformPerspective", 1000)
            .ease("power1.out"),
    );
}

pub fn reset_tilt(element: &Element) {
    motion::to(
        Target::Element(element),
        &Tween::new(0.5)
            .with("rotationX", 0)
            .with("rotationY", 0)
            .scale(1.0)
            .ease("power3.out"),
    );
}

/// Handler body shared by every card with a hover tilt.
pub fn on_card_pointer(e: &MouseEvent, feature: bool) {
    if let Some(card) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
        if feature {
            tilt_feature(&card, e);
        } else {
            tilt_card(&card, e);
        }
    }
}

pub fn on_card_leave(e: &MouseEvent) {
    if let Some(card) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
        reset_tilt(&card);
    }
}

/// Click feedback for the primary buttons: a ripple from the click point and a
/// small press-and-spring.
pub fn ripple(e: &MouseEvent) {
    let Some(button) = e.current_target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (x, y, _, _) = pointer_offset(&button, e);

    if let Ok(span) = document.create_element("span") {
        let _ = span.class_list().add_1("ripple-effect");
        let _ = span.set_attribute(
            "style",
            &format!(
                "position: absolute; background: rgba(255, 255, 255, 0.7); border-radius: 50%; \
                 pointer-events: none; width: 10px; height: 10px; left: {}px; top: {}px; \
                 transform-origin: center;",
                x, y
            ),
        );
        if button.append_child(&span).is_ok() {
            let finished = span.clone();
            motion::to_then(
                Target::Element(&span),
                &Tween::new(0.6).scale(10.0).opacity(0.0).ease("power1.out"),
                move || finished.remove(),
            );
        }
    }

    let springback = button.clone();
    motion::to_then(
        Target::Element(&button),
        &Tween::new(0.1).scale(0.95).ease("power1.out"),
        move || {
            motion::to(
                Target::Element(&springback),
                &Tween::new(0.3).scale(1.0).ease("elastic.out(1, 0.3)"),
            );
        },
    );
}

pub fn loading_intro() {
    Timeline::new(&Tween::props())
        .from(
            Target::Selector(".compass-loader"),
            &Tween::new(0.8).scale(0.0).opacity(0.0).ease("back.out(1.7)"),
            None,
        )
        .from(
            Target::Selector(".loading-text"),
            &Tween::new(0.5).y(20).opacity(0.0).ease("power3.out"),
            Some("-=0.3"),
        );
}

pub fn hero_entrance() {
    let pop = |duration: f64, ease: &'static str| Tween::new(duration).scale(0.0).opacity(0.0).ease(ease);
    Timeline::new(&Tween::props())
        .to(
            Target::Selector(".hero-content"),
            &Tween::new(1.2).opacity(1.0).y(0).ease("power3.out"),
            None,
        )
        .to(
            Target::Selector(".hero-image"),
            &Tween::new(1.0).opacity(1.0).ease("power3.out"),
            Some("-=0.7"),
        )
        .from(Target::Selector(".compass-outer-ring"), &pop(1.2, "elastic.out(1, 0.5)"), Some("-=0.5"))
        .from(Target::Selector(".compass-inner-ring"), &pop(1.2, "elastic.out(1, 0.5)"), Some("-=1"))
        .from(Target::Selector(".compass-center"), &pop(1.0, "power3.out"), Some("-=0.8"))
        .from(
            Target::Selector(".compass-arrow"),
            &pop(1.0, "power3.out").with("transformOrigin", "bottom"),
            Some("-=0.8"),
        )
        .from(
            Target::Selector(".career-orb"),
            &pop(0.8, "back.out(1.7)").stagger(0.1),
            Some("-=0.5"),
        )
        .to(
            Target::Selector(".floating-element"),
            &Tween::new(0.8).opacity(1.0).y(0).stagger(0.15).ease("power3.out"),
            Some("-=0.5"),
        )
        .from(
            Target::Selector(".hero-cta-buttons .btn"),
            &pop(0.8, "back.out(1.7)").stagger(0.15),
            Some("-=0.5"),
        )
        .from(
            Target::Selector(".hero-stats"),
            &Tween::new(0.8).opacity(0.0).y(30).ease("power3.out"),
            Some("-=0.3"),
        );

    motion::to(
        Target::Selector(".compass-arrow"),
        &Tween::new(3.0)
            .with("rotation", 360)
            .with("transformOrigin", "bottom")
            .ease("power1.inOut")
            .delay(2.0)
            .repeat(1)
            .yoyo(),
    );
}

/// Tweens that loop for the lifetime of the page.
pub fn ambient_loops() {
    motion::to(
        Target::Selector(".career-orbs"),
        &Tween::new(80.0)
            .with("rotation", 360)
            .with("transformOrigin", "center center")
            .repeat(-1)
            .ease("none"),
    );
    motion::to(
        Target::Selector(".compass-center"),
        &Tween::new(2.0).scale(1.1).opacity(0.8).repeat(-1).yoyo().ease("sine.inOut"),
    );
    Timeline::new(&Tween::props().repeat(-1).with("repeatDelay", 3))
        .to(
            Target::Selector(".career-compass"),
            &Tween::new(2.0)
                .with("boxShadow", "0 0 25px rgba(74, 222, 222, 0.6), 0 0 50px rgba(74, 222, 222, 0.3)")
                .ease("sine.inOut"),
            None,
        )
        .to(
            Target::Selector(".career-compass"),
            &Tween::new(2.0)
                .with("boxShadow", "0 0 15px rgba(74, 222, 222, 0.4), 0 0 30px rgba(74, 222, 222, 0.2)")
                .ease("sine.inOut"),
            None,
        );
}

pub fn tilt_compass(rotation_x: f64, rotation_y: f64) {
    let layer = |selector: &str, factor: f64, duration: f64| {
        motion::to(
            Target::Selector(selector),
            &Tween::new(duration)
                .with("rotationX", rotation_x * factor)
                .with("rotationY", rotation_y * factor)
                .with("transformOrigin", "center center")
                .ease("power2.out"),
        );
    };
    motion::to(
        Target::Selector(".career-compass"),
        &Tween::new(0.5)
            .with("rotationX", rotation_x)
            .with("rotationY", rotation_y)
            .with("transformPerspective", 1000)
            .with("transformOrigin", "center center")
            .ease("power2.out"),
    );
    layer(".compass-outer-ring", 0.5, 0.8);
    layer(".compass-inner-ring", 0.7, 0.5);
    layer(".career-orbs", 0.3, 0.7);
}

pub fn reset_compass() {
    for selector in [".career-compass", ".compass-outer-ring", ".compass-inner-ring", ".career-orbs"] {
        motion::to(
            Target::Selector(selector),
            &Tween::new(1.2).with("rotationX", 0).with("rotationY", 0).ease("power3.out"),
        );
    }
}

/// Scroll-driven reveals for the static sections of the home page.
pub fn reveal_on_scroll() {
    motion::to(
        Target::Selector(".section-header"),
        &Tween::new(0.8)
            .opacity(1.0)
            .scroll(ScrollTrigger::new(".section-header", "top 80%")),
    );
    motion::to(
        Target::Selector(".section-title"),
        &Tween::new(0.8)
            .opacity(1.0)
            .y(0)
            .delay(0.4)
            .scroll(ScrollTrigger::new(".section-header", "top 80%")),
    );
    motion::to(
        Target::Selector(".assessment-card"),
        &Tween::new(1.2)
            .opacity(1.0)
            .y(0)
            .ease("power3.out")
            .scroll(ScrollTrigger::new(".assessment-section", "top 70%")),
    );
    motion::from(
        Target::Selector(".feature-card"),
        &Tween::new(0.8)
            .y(50)
            .opacity(0.0)
            .stagger(0.15)
            .ease("power3.out")
            .scroll(ScrollTrigger::new(".features-grid", "top 70%")),
    );
    let mut scrubbed = ScrollTrigger::new("section", "top 80%");
    scrubbed.end = Some("top 20%");
    scrubbed.scrub = Some(1.0);
    scrubbed.toggle_actions = "play none none reverse";
    motion::to(Target::Selector("section"), &Tween::props().opacity(1.0).y(0).scroll(scrubbed));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn parallax_is_centred_on_the_viewport() {
        let frame = ParallaxFrame::from_pointer(500.0, 400.0, 1000.0, 800.0);
        assert_eq!(frame.front, (0.0, 0.0));
        assert_eq!(frame.arrow_rotation, 0.0);

        let frame = ParallaxFrame::from_pointer(1000.0, 0.0, 1000.0, 800.0);
        assert!(close(frame.front, (10.0, -8.0)));
        assert!(close(frame.back, (-5.0, 4.0)));
        assert!((frame.arrow_rotation - 5.0).abs() < 1e-9);
    }

    #[test]
    fn card_tilt_leans_towards_the_pointer() {
        assert_eq!(card_tilt(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
        assert!(close(card_tilt(200.0, 0.0, 200.0, 100.0), (0.5, 1.0)));
    }

    #[test]
    fn feature_tilt_handles_zero_sized_cards() {
        assert_eq!(feature_tilt(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
        assert_eq!(feature_tilt(0.0, 100.0, 100.0, 100.0), (10.0, 10.0));
    }

    #[test]
    fn compass_tilt_is_clamped() {
        let (rx, ry) = compass_tilt(1000.0, -1000.0, 0.0, 0.0, 100.0, 100.0);
        assert_eq!(rx, -COMPASS_MAX_TILT);
        assert_eq!(ry, -COMPASS_MAX_TILT);
        assert_eq!(compass_tilt(50.0, 50.0, 0.0, 0.0, 100.0, 100.0), (0.0, -0.0));
    }

    #[test]
    fn count_up_finishes_on_target() {
        assert_eq!(eased_count(120, 0.0, 3_000.0), 0);
        assert_eq!(eased_count(100, 1_500.0, 3_000.0), 75);
        assert_eq!(eased_count(120, 3_000.0, 3_000.0), 120);
        assert_eq!(eased_count(120, 9_000.0, 3_000.0), 120);
    }
}
