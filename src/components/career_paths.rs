use log::debug;
use yew::prelude::*;

use crate::effects;
use crate::motion::{self, Target, Tween};

pub const ALL: &str = "all";

pub const CATEGORIES: &[(&str, &str)] = &[
    (ALL, "All paths"),
    ("tech", "Technology"),
    ("creative", "Creative"),
    ("business", "Business"),
    ("health", "Healthcare"),
];

pub struct CareerPath {
    pub title: &'static str,
    pub categories: &'static str,
    pub salary: &'static str,
    pub blurb: &'static str,
}

pub const CAREER_PATHS: &[CareerPath] = &[
    CareerPath { title: "Software Engineer", categories: "tech", salary: "$95k - $160k", blurb: "Design and build the systems everyone else relies on." },
    CareerPath { title: "UX Designer", categories: "tech creative", salary: "$75k - $130k", blurb: "Shape how products feel from the first click." },
    CareerPath { title: "Content Strategist", categories: "creative business", salary: "$60k - $105k", blurb: "Decide what gets said, to whom, and why." },
    CareerPath { title: "Financial Analyst", categories: "business", salary: "$65k - $115k", blurb: "Turn spreadsheets into decisions." },
    CareerPath { title: "Health Informatics Specialist", categories: "health tech", salary: "$70k - $120k", blurb: "Keep clinical data accurate, safe and useful." },
    CareerPath { title: "Physical Therapist", categories: "health", salary: "$80k - $110k", blurb: "Get people moving again." },
];

/// Whether a card tagged with `categories` stays visible under `filter`.
/// Matches on substring, the same way the category attribute was always read.
pub fn matches_category(filter: &str, categories: &str) -> bool {
    filter == ALL || categories.contains(filter)
}

#[function_component(CareerPaths)]
pub fn career_paths() -> Html {
    let active = use_state(|| ALL);
    let cards: Vec<NodeRef> = use_memo(|_| CAREER_PATHS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ())
        .iter()
        .cloned()
        .collect();

    {
        let cards = cards.clone();
        use_effect_with_deps(
            move |filter: &&'static str| {
                debug!("career path filter: {}", filter);
                for (card, path) in cards.iter().zip(CAREER_PATHS) {
                    if matches_category(filter, path.categories) {
                        motion::to(
                            Target::Node(card),
                            &Tween::new(0.5).opacity(1.0).scale(1.0).y(0).with("display", "block").ease("power2.out"),
                        );
                    } else {
                        motion::to(
                            Target::Node(card),
                            &Tween::new(0.5).opacity(0.0).scale(0.8).y(20).with("display", "none").ease("power2.in"),
                        );
                    }
                }
                || ()
            },
            *active,
        );
    }

    html! {
        <section class="career-paths-section" id="careers">
            <div class="section-header">
                <h2 class="section-title">{"Explore Career Paths"}</h2>
                <p class="section-subtitle">{"Browse where people with your profile tend to thrive."}</p>
            </div>
            <div class="category-filters">
                { for CATEGORIES.iter().map(|(id, label)| {
                    let id: &'static str = id;
                    let onclick = {
                        let active = active.clone();
                        Callback::from(move |e: MouseEvent| {
                            effects::ripple(&e);
                            active.set(id);
                        })
                    };
                    html! {
                        <button class={classes!("category-btn", (*active == id).then(|| "active"))}
                            data-category={id} {onclick}>
                            { *label }
                        </button>
                    }
                }) }
            </div>
            <div class="career-paths-grid">
                { for CAREER_PATHS.iter().zip(cards.iter()).map(|(path, card)| html! {
                    <div class="career-path-card" data-category={path.categories} ref={card.clone()}
                        onmouseenter={Callback::from(|e: MouseEvent| effects::on_card_pointer(&e, false))}
                        onmousemove={Callback::from(|e: MouseEvent| effects::on_card_pointer(&e, false))}
                        onmouseleave={Callback::from(|e: MouseEvent| effects::on_card_leave(&e))}>
                        <h3>{ path.title }</h3>
                        <p>{ path.blurb }</p>
                        <span class="salary-range">{ path.salary }</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_everything() {
        assert!(CAREER_PATHS.iter().all(|p| matches_category(ALL, p.categories)));
    }

    #[test]
    fn filter_matches_any_listed_category() {
        assert!(matches_category("creative", "tech creative"));
        assert!(matches_category("tech", "health tech"));
        assert!(!matches_category("business", "tech creative"));
    }

    #[test]
    fn every_category_has_a_card() {
        for (id, _) in CATEGORIES {
            assert!(CAREER_PATHS.iter().any(|p| matches_category(id, p.categories)), "{}", id);
        }
    }
}
