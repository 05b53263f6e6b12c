use log::{error, info};
use yew::prelude::*;

use crate::config;
use crate::motion::{self, Target, Tween};
use crate::state::autoplay::{AutoAdvance, AutoAdvanceTimer};
use crate::state::carousel::Carousel;
use crate::state::sequence::{Direction, Sequence};
use crate::state::sink::PresentationSink;

pub struct Story {
    pub id: &'static str,
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const STORIES: &[Story] = &[
    Story {
        id: "maya",
        quote: "I was three years into accounting and miserable. The assessment pointed me at UX research and six months later I had my first offer.",
        name: "Maya R.",
        role: "UX Researcher",
    },
    Story {
        id: "daniel",
        quote: "The skills breakdown showed me I already had most of what a data role needed. I just had to stop underselling it.",
        name: "Daniel K.",
        role: "Data Analyst",
    },
    Story {
        id: "aisha",
        quote: "I had no idea healthcare admin was even a path. Now I run operations for a clinic of forty people.",
        name: "Aisha M.",
        role: "Clinic Operations Lead",
    },
    Story {
        id: "tom",
        quote: "Honest, quick and surprisingly specific. The career match list is still pinned above my desk.",
        name: "Tom B.",
        role: "Product Manager",
    },
];

/// Slides the story track so the active card is in view.
pub struct TrackStage {
    track: NodeRef,
}

/// Horizontal offset of the track, in percent, for a given slide.
pub fn track_offset(index: usize) -> String {
    format!("-{}%", index * 100)
}

impl PresentationSink for TrackStage {
    fn activate(&mut self, index: usize, _panel: &str, _direction: Direction) {
        motion::to(
            Target::Node(&self.track),
            &Tween::new(0.8).x(track_offset(index)).ease("power3.out"),
        );
    }

    fn deactivate(&mut self, _index: usize, _panel: &str, _direction: Direction) {}
}

pub enum CarouselMsg {
    Tick,
    Next,
    Prev,
    Dot(usize),
}

pub struct StoriesCarousel {
    carousel: Option<Carousel<TrackStage>>,
    timer: Option<AutoAdvanceTimer>,
    track: NodeRef,
}

impl Component for StoriesCarousel {
    type Message = CarouselMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let track = NodeRef::default();
        let policy = AutoAdvance::new(config::CAROUSEL_INTERVAL_MS);
        let carousel = match Sequence::new(STORIES.iter().map(|s| s.id)) {
            Ok(slides) => Some(Carousel::new(slides, policy, TrackStage { track: track.clone() })),
            Err(err) => {
                error!("stories carousel disabled: {}", err);
                None
            }
        };

        let timer = carousel.as_ref().map(|carousel| {
            let link = ctx.link().clone();
            AutoAdvanceTimer::start(carousel.autoplay(), move || link.send_message(CarouselMsg::Tick))
        });

        info!("stories carousel mounted with {} slides", STORIES.len());
        Self {
            carousel,
            timer,
            track,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(carousel) = self.carousel.as_mut() else {
            return false;
        };
        let before = carousel.current();
        match msg {
            CarouselMsg::Tick => {
                carousel.tick();
            }
            CarouselMsg::Next => {
                carousel.next();
            }
            CarouselMsg::Prev => {
                carousel.prev();
            }
            CarouselMsg::Dot(index) => {
                if let Err(err) = carousel.go_to(index) {
                    error!("ignoring dot click: {}", err);
                }
            }
        }
        // Any manual input stops the rotation for the rest of the visit.
        if !carousel.autoplay().is_running() {
            if let Some(timer) = self.timer.as_mut() {
                timer.stop();
            }
        }
        carousel.current() != before
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current = self.carousel.as_ref().map_or(0, Carousel::current);
        let link = ctx.link();

        html! {
            <div class="stories-wrapper">
                <div class="stories-viewport">
                    <div class="stories-carousel" ref={self.track.clone()}>
                        { for STORIES.iter().map(|story| html! {
                            <div class="story-card">
                                <p class="story-quote">{ story.quote }</p>
                                <div class="story-author">
                                    <strong>{ story.name }</strong>
                                    <span>{ story.role }</span>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="carousel-controls">
                    <button class="prev-story" aria-label="Previous story"
                        onclick={link.callback(|_| CarouselMsg::Prev)}>
                        <i class="fas fa-chevron-left"></i>
                    </button>
                    <div class="carousel-dots">
                        { for (0..STORIES.len()).map(|i| html! {
                            <span class={classes!("dot", (i == current).then(|| "active"))}
                                onclick={link.callback(move |_| CarouselMsg::Dot(i))}></span>
                        }) }
                    </div>
                    <button class="next-story" aria-label="Next story"
                        onclick={link.callback(|_| CarouselMsg::Next)}>
                        <i class="fas fa-chevron-right"></i>
                    </button>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_moves_a_full_card_per_slide() {
        assert_eq!(track_offset(0), "-0%");
        assert_eq!(track_offset(3), "-300%");
    }

    #[test]
    fn every_story_has_a_unique_id() {
        let slides = Sequence::new(STORIES.iter().map(|s| s.id)).unwrap();
        for (i, story) in STORIES.iter().enumerate() {
            assert_eq!(slides.position(story.id), Some(i));
        }
    }
}
