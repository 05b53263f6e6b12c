//! Thin binding to the page's GSAP global.
//!
//! Every call goes through a `catch` import so a page without the engine (or a
//! tween on an element that is not mounted yet) skips the animation. Completion
//! callbacks still run, so follow-up state changes never depend on the engine.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;
use web_sys::Element;
use yew::NodeRef;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = from)]
    fn gsap_from(targets: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = fromTo)]
    fn gsap_from_to(targets: &JsValue, from: &JsValue, to: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = timeline)]
    fn gsap_timeline(vars: &JsValue) -> Result<GsapTimeline, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = registerPlugin)]
    fn gsap_register_plugin(plugin: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = config)]
    fn gsap_config(vars: &JsValue) -> Result<JsValue, JsValue>;

    type GsapTimeline;

    #[wasm_bindgen(method, catch, js_name = to)]
    fn tl_to(
        this: &GsapTimeline,
        targets: &JsValue,
        vars: &JsValue,
        position: &JsValue,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = from)]
    fn tl_from(
        this: &GsapTimeline,
        targets: &JsValue,
        vars: &JsValue,
        position: &JsValue,
    ) -> Result<JsValue, JsValue>;
}

static ENGINE_WARNED: AtomicBool = AtomicBool::new(false);

fn report(result: Result<JsValue, JsValue>, what: &str) {
    if let Err(err) = result {
        if !ENGINE_WARNED.swap(true, Ordering::Relaxed) {
            warn!("animation engine unavailable ({}): {:?}", what, err);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTrigger {
    pub trigger: String,
    pub start: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrub: Option<f64>,
    pub toggle_actions: &'static str,
}

impl ScrollTrigger {
    pub fn new(trigger: impl Into<String>, start: &'static str) -> Self {
        Self {
            trigger: trigger.into(),
            start,
            end: None,
            scrub: None,
            toggle_actions: "play none none none",
        }
    }
}

/// One set of tween vars: the animated properties plus timing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tween {
    #[serde(flatten)]
    props: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ease: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stagger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repeat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    yoyo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scroll_trigger: Option<ScrollTrigger>,
}

impl Tween {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }

    /// Vars with no timing of their own, e.g. the `from` half of a fromTo.
    pub fn props() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    pub fn opacity(self, value: f64) -> Self {
        self.with("opacity", value)
    }

    pub fn x(self, value: impl Into<Value>) -> Self {
        self.with("x", value)
    }

    pub fn y(self, value: impl Into<Value>) -> Self {
        self.with("y", value)
    }

    pub fn scale(self, value: f64) -> Self {
        self.with("scale", value)
    }

    pub fn ease(mut self, ease: &'static str) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = Some(stagger);
        self
    }

    pub fn repeat(mut self, repeat: i32) -> Self {
        self.repeat = Some(repeat);
        self
    }

    pub fn yoyo(mut self) -> Self {
        self.yoyo = Some(true);
        self
    }

    pub fn scroll(mut self, trigger: ScrollTrigger) -> Self {
        self.scroll_trigger = Some(trigger);
        self
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    fn to_js(&self) -> Option<JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        match self.serialize(&serializer) {
            Ok(vars) => Some(vars),
            Err(err) => {
                warn!("could not encode tween: {}", err);
                None
            }
        }
    }
}

type OnComplete = Box<dyn FnOnce()>;
type CompletionSlot = Rc<RefCell<Option<OnComplete>>>;

/// Hooks `on_complete` into the vars. The returned slot lets the caller run the
/// callback itself if the engine never takes the tween.
fn attach(vars: &JsValue, on_complete: OnComplete) -> CompletionSlot {
    let slot: CompletionSlot = Rc::new(RefCell::new(Some(on_complete)));
    let from_engine = slot.clone();
    let callback = Closure::once_into_js(move || finish(&from_engine));
    let _ = Reflect::set(vars, &JsValue::from_str("onComplete"), &callback);
    slot
}

fn finish(slot: &CompletionSlot) {
    let pending = slot.borrow_mut().take();
    if let Some(callback) = pending {
        callback();
    }
}

/// Runs one engine call. Completion callbacks fire exactly once either way.
fn run<F>(targets: Option<JsValue>, tween: &Tween, on_complete: Option<OnComplete>, what: &str, call: F)
where
    F: FnOnce(&JsValue, &JsValue) -> Result<JsValue, JsValue>,
{
    match (targets, tween.to_js()) {
        (Some(targets), Some(vars)) => {
            let slot = on_complete.map(|callback| attach(&vars, callback));
            if let Err(err) = call(&targets, &vars) {
                report(Err(err), what);
                if let Some(slot) = slot {
                    finish(&slot);
                }
            }
        }
        _ => {
            if let Some(callback) = on_complete {
                callback();
            }
        }
    }
}

#[derive(Clone, Copy)]
pub enum Target<'a> {
    Selector(&'a str),
    Element(&'a Element),
    Node(&'a NodeRef),
}

impl Target<'_> {
    fn resolve(&self) -> Option<JsValue> {
        match self {
            Target::Selector(selector) => Some(JsValue::from_str(selector)),
            Target::Element(element) => Some(JsValue::from((*element).clone())),
            Target::Node(node) => node.get().map(JsValue::from),
        }
    }
}

pub fn to(target: Target<'_>, tween: &Tween) {
    animate(target, tween, None);
}

pub fn to_then<F>(target: Target<'_>, tween: &Tween, on_complete: F)
where
    F: FnOnce() + 'static,
{
    animate(target, tween, Some(Box::new(on_complete)));
}

/// `animate(target, properties, duration, easing, callbacks)`.
pub fn animate(target: Target<'_>, tween: &Tween, on_complete: Option<OnComplete>) {
    run(target.resolve(), tween, on_complete, "to", |t, v| gsap_to(t, v));
}

pub fn from(target: Target<'_>, tween: &Tween) {
    run(target.resolve(), tween, None, "from", |t, v| gsap_from(t, v));
}

pub fn from_to(target: Target<'_>, from: &Tween, to: &Tween) {
    let Some(from) = from.to_js() else {
        return;
    };
    run(target.resolve(), to, None, "fromTo", |t, v| gsap_from_to(t, &from, v));
}

pub fn set(target: Target<'_>, tween: &Tween) {
    run(target.resolve(), tween, None, "set", |t, v| gsap_set(t, v));
}

/// A GSAP timeline. Missing engine means every step is skipped.
pub struct Timeline {
    inner: Option<GsapTimeline>,
}

impl Timeline {
    pub fn new(vars: &Tween) -> Self {
        let inner = vars.to_js().and_then(|vars| match gsap_timeline(&vars) {
            Ok(tl) => Some(tl),
            Err(err) => {
                report(Err(err), "timeline");
                None
            }
        });
        Self { inner }
    }

    pub fn to(self, target: Target<'_>, tween: &Tween, position: Option<&str>) -> Self {
        if let Some(tl) = &self.inner {
            let position = position_value(position);
            run(target.resolve(), tween, None, "timeline.to", |t, v| tl.tl_to(t, v, &position));
        }
        self
    }

    pub fn from(self, target: Target<'_>, tween: &Tween, position: Option<&str>) -> Self {
        if let Some(tl) = &self.inner {
            let position = position_value(position);
            run(target.resolve(), tween, None, "timeline.from", |t, v| tl.tl_from(t, v, &position));
        }
        self
    }
}

fn position_value(position: Option<&str>) -> JsValue {
    position.map_or(JsValue::UNDEFINED, JsValue::from_str)
}

/// Registers the scroll plugin and the global engine settings.
pub fn init() {
    if let Some(window) = web_sys::window() {
        match Reflect::get(&window, &JsValue::from_str("ScrollTrigger")) {
            Ok(plugin) if !plugin.is_undefined() => {
                report(gsap_register_plugin(&plugin), "registerPlugin");
            }
            _ => debug!("scroll plugin not loaded, scroll reveals will be skipped"),
        }
    }
    let settings = Tween::props()
        .with("autoSleep", 60)
        .with("force3D", true)
        .with("nullTargetWarn", false);
    if let Some(vars) = settings.to_js() {
        report(gsap_config(&vars), "config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tween_vars_are_flat_and_camel_cased() {
        let tween = Tween::new(0.8)
            .opacity(1.0)
            .y(0)
            .ease("power3.out")
            .scroll(ScrollTrigger::new(".assessment-section", "top 70%"));

        assert_eq!(
            serde_json::to_value(&tween).unwrap(),
            json!({
                "opacity": 1.0,
                "y": 0,
                "duration": 0.8,
                "ease": "power3.out",
                "scrollTrigger": {
                    "trigger": ".assessment-section",
                    "start": "top 70%",
                    "toggleActions": "play none none none"
                }
            })
        );
    }

    #[test]
    fn bare_props_carry_no_timing() {
        let from = Tween::props().opacity(0.0).x(30);
        assert_eq!(serde_json::to_value(&from).unwrap(), json!({"opacity": 0.0, "x": 30}));
        assert_eq!(from.get("x"), Some(&json!(30)));
    }
}
