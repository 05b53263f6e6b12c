use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::config;
use crate::effects::eased_count;

const FRAME_MS: u32 = 16;

pub const STATS: &[(u32, &str, &str)] = &[
    (250, "+", "Career paths mapped"),
    (50, "k+", "Assessments taken"),
    (94, "%", "Would recommend"),
];

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub suffix: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_state_eq(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |target: &u32| {
                let target = *target;
                let started = Date::now();
                let settle = value.clone();
                let ticker = Interval::new(FRAME_MS, move || {
                    value.set(eased_count(target, Date::now() - started, config::STAT_COUNT_MS));
                });
                let handle = Rc::new(RefCell::new(Some(ticker)));
                let finished = handle.clone();
                let stop = Timeout::new(config::STAT_COUNT_MS as u32 + FRAME_MS, move || {
                    finished.borrow_mut().take();
                    settle.set(target);
                });
                move || {
                    drop(stop);
                    handle.borrow_mut().take();
                }
            },
            props.target,
        );
    }

    html! {
        <div class="stat">
            <span class="stat-number" data-target={props.target.to_string()}>{ value.to_string() }</span>
            <span class="stat-suffix">{ props.suffix.clone() }</span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}

#[function_component(HeroStats)]
pub fn hero_stats() -> Html {
    html! {
        <div class="hero-stats">
            { for STATS.iter().map(|(target, suffix, label)| html! {
                <StatCounter target={*target} suffix={*suffix} label={*label} />
            }) }
        </div>
    }
}
