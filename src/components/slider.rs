use yew::prelude::*;

use crate::motion::{self, Target, Tween};

pub const SLIDER_MAX: u8 = 10;

pub fn fill_percent(value: u8) -> f64 {
    f64::from(value.min(SLIDER_MAX)) / f64::from(SLIDER_MAX) * 100.0
}

/// Green when the interest is high, drifting towards violet as it drops.
pub fn fill_color(value: u8) -> String {
    let hue = 120 + u32::from(SLIDER_MAX - value.min(SLIDER_MAX)) * 15;
    format!("hsl({}, 80%, 50%)", hue)
}

#[derive(Properties, PartialEq)]
pub struct InterestSliderProps {
    pub label: AttrValue,
    pub value: u8,
    pub on_change: Callback<InputEvent>,
}

#[function_component(InterestSlider)]
pub fn interest_slider(props: &InterestSliderProps) -> Html {
    let fill = use_node_ref();
    let display = use_node_ref();

    {
        let fill = fill.clone();
        let display = display.clone();
        use_effect_with_deps(
            move |value: &u8| {
                motion::to(
                    Target::Node(&fill),
                    &Tween::new(0.3)
                        .with("width", format!("{}%", fill_percent(*value)))
                        .with("backgroundColor", fill_color(*value))
                        .ease("power2.out"),
                );
                motion::from_to(
                    Target::Node(&display),
                    &Tween::props().scale(1.0),
                    &Tween::new(0.15).scale(1.2).repeat(1).yoyo(),
                );
                || ()
            },
            props.value,
        );
    }

    html! {
        <div class="interest-slider">
            <label>{ props.label.clone() }</label>
            <div class="slider-track">
                <div class="slider-fill" ref={fill}></div>
                <input type="range" class="slider" min="0" max={SLIDER_MAX.to_string()}
                    value={props.value.to_string()} oninput={props.on_change.clone()} />
            </div>
            <span class="slider-value" ref={display}>{ props.value.to_string() }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_tracks_the_value() {
        assert_eq!(fill_percent(0), 0.0);
        assert_eq!(fill_percent(5), 50.0);
        assert_eq!(fill_percent(10), 100.0);
        assert_eq!(fill_percent(42), 100.0);
    }

    #[test]
    fn colour_runs_from_violet_to_green() {
        assert_eq!(fill_color(10), "hsl(120, 80%, 50%)");
        assert_eq!(fill_color(0), "hsl(270, 80%, 50%)");
        assert_eq!(fill_color(6), "hsl(180, 80%, 50%)");
    }
}
