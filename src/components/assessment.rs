use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::slider::InterestSlider;
use crate::config;
use crate::motion::{self, Target, Tween};
use crate::state::selection::{GroupKind, SelectionTracker, SKILLS_GROUP};
use crate::state::sequence::{Direction, Sequence, Step, Transition};
use crate::state::sink::PresentationSink;
use crate::state::wizard::{StepState, Wizard};

pub struct OptionCard {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

pub enum PanelBody {
    Options(&'static [OptionCard]),
    Skills(&'static [&'static str]),
    Interests(&'static [(&'static str, &'static str)]),
}

pub struct QuestionPanel {
    pub id: &'static str,
    pub step: &'static str,
    pub title: &'static str,
    pub body: PanelBody,
}

pub const QUESTIONS: &[QuestionPanel] = &[
    QuestionPanel {
        id: "environment",
        step: "Environment",
        title: "Where do you do your best work?",
        body: PanelBody::Options(&[
            OptionCard { id: "office", icon: "fas fa-building", label: "Office", detail: "Structured days, people around you" },
            OptionCard { id: "remote", icon: "fas fa-laptop-house", label: "Remote", detail: "Quiet focus on your own schedule" },
            OptionCard { id: "outdoors", icon: "fas fa-tree", label: "Outdoors", detail: "On the move, hands on" },
            OptionCard { id: "mixed", icon: "fas fa-random", label: "A bit of everything", detail: "Variety keeps you sharp" },
        ]),
    },
    QuestionPanel {
        id: "motivation",
        step: "Motivation",
        title: "What gets you out of bed?",
        body: PanelBody::Options(&[
            OptionCard { id: "impact", icon: "fas fa-hands-helping", label: "Helping people", detail: "Seeing the difference you make" },
            OptionCard { id: "mastery", icon: "fas fa-chess", label: "Mastery", detail: "Getting really good at hard things" },
            OptionCard { id: "creation", icon: "fas fa-palette", label: "Making things", detail: "Ideas turned into something real" },
            OptionCard { id: "growth", icon: "fas fa-chart-line", label: "Growth", detail: "Responsibility, pay and progression" },
        ]),
    },
    QuestionPanel {
        id: SKILLS_GROUP,
        step: "Skills",
        title: "Which skills would you like to use?",
        body: PanelBody::Skills(&[
            "Problem solving", "Writing", "Data analysis", "Design", "Leadership",
            "Programming", "Public speaking", "Research", "Negotiation", "Teaching",
        ]),
    },
    QuestionPanel {
        id: "interests",
        step: "Interests",
        title: "How interested are you in these areas?",
        body: PanelBody::Interests(&[
            ("technology", "Technology"),
            ("arts", "Arts & media"),
            ("business", "Business"),
            ("healthcare", "Healthcare"),
        ]),
    },
    QuestionPanel {
        id: "style",
        step: "Work style",
        title: "How do you like to work?",
        body: PanelBody::Options(&[
            OptionCard { id: "solo", icon: "fas fa-user", label: "Independently", detail: "Give me a problem and some space" },
            OptionCard { id: "team", icon: "fas fa-users", label: "In a team", detail: "Better ideas come from many heads" },
            OptionCard { id: "lead", icon: "fas fa-flag", label: "Leading", detail: "Setting direction for others" },
        ]),
    },
];

const CAREER_MATCHES: &[(&str, &str, u8)] = &[
    ("UX Designer", "Creative problem solving with a people focus", 94),
    ("Data Analyst", "Turning numbers into decisions", 89),
    ("Product Manager", "Leading teams from idea to launch", 85),
];

/// Renders wizard transitions onto the question panels.
pub struct PanelStage {
    panels: Vec<NodeRef>,
    progress: NodeRef,
    next_button: NodeRef,
    on_shown: Callback<usize>,
}

fn shift(direction: Direction) -> i32 {
    match direction {
        Direction::Forward => 30,
        Direction::Backward => -30,
    }
}

fn reveal(panel: &NodeRef, direction: Direction) {
    motion::from_to(
        Target::Node(panel),
        &Tween::props().opacity(0.0).x(shift(direction)),
        &Tween::new(0.4).opacity(1.0).x(0).ease("power2.out"),
    );
}

impl PresentationSink for PanelStage {
    // Hide the old panel first; the new one is only shown once that finishes.
    fn transition(&mut self, transition: &Transition) {
        let Some(outgoing) = self.panels.get(transition.from) else {
            self.activate(transition.to, &transition.to_panel, transition.direction);
            return;
        };
        let on_shown = self.on_shown.clone();
        let incoming = self.panels.get(transition.to).cloned();
        let (to, direction) = (transition.to, transition.direction);
        motion::to_then(
            Target::Node(outgoing),
            &Tween::new(0.3).opacity(0.0).x(-shift(direction)).ease("power2.in"),
            move || {
                on_shown.emit(to);
                if let Some(panel) = incoming {
                    reveal(&panel, direction);
                }
            },
        );
    }

    fn activate(&mut self, index: usize, _panel: &str, direction: Direction) {
        self.on_shown.emit(index);
        if let Some(panel) = self.panels.get(index) {
            reveal(panel, direction);
        }
    }

    fn deactivate(&mut self, index: usize, _panel: &str, direction: Direction) {
        if let Some(panel) = self.panels.get(index) {
            motion::to(
                Target::Node(panel),
                &Tween::new(0.3).opacity(0.0).x(-shift(direction)),
            );
        }
    }

    fn set_progress(&mut self, ratio: f64) {
        motion::to(
            Target::Node(&self.progress),
            &Tween::new(0.5)
                .with("width", format!("{}%", ratio * 100.0))
                .ease("power2.out"),
        );
    }

    fn render_selection_state(&mut self, panel: &str, selected: &[String]) {
        let scope = format!("[data-panel=\"{}\"]", panel);
        motion::to(
            Target::Selector(&format!("{} [data-option]", scope)),
            &Tween::new(0.3).scale(1.0).ease("power2.out"),
        );
        motion::to(
            Target::Selector(&format!("{} [data-option] .check-icon", scope)),
            &Tween::new(0.2).scale(0.0).opacity(0.0),
        );
        for option in selected {
            let card = format!("{} [data-option=\"{}\"]", scope, option);
            motion::to(
                Target::Selector(&card),
                &Tween::new(0.3).scale(1.03).ease("back.out(1.7)"),
            );
            motion::to(
                Target::Selector(&format!("{} .check-icon", card)),
                &Tween::new(0.3).scale(1.0).opacity(1.0).delay(0.1).ease("back.out(1.7)"),
            );
        }

        if panel == SKILLS_GROUP {
            motion::from_to(
                Target::Selector(".selected-skills-count"),
                &Tween::props().scale(1.0),
                &Tween::new(0.2).scale(1.3).repeat(1).yoyo().ease("power2.out"),
            );
        } else if !selected.is_empty() {
            // nudge towards the next step
            motion::from_to(
                Target::Node(&self.next_button),
                &Tween::props().scale(1.0),
                &Tween::new(0.3).scale(1.05).repeat(1).yoyo().ease("power2.inOut"),
            );
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Answering,
    Loading,
    Results,
}

pub enum AssessmentMsg {
    Next,
    Prev,
    GoTo(usize),
    Select(&'static str, &'static str),
    ToggleSkill(&'static str),
    SetInterest(&'static str, u8),
    PanelShown(usize),
    ShowResults,
}

pub struct Assessment {
    wizard: Option<Wizard<PanelStage>>,
    panels: Vec<NodeRef>,
    progress: NodeRef,
    next_button: NodeRef,
    visible: usize,
    interests: HashMap<&'static str, u8>,
    phase: Phase,
    results_timer: Option<Timeout>,
    results_animated: bool,
}

impl Component for Assessment {
    type Message = AssessmentMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let panels: Vec<NodeRef> = QUESTIONS.iter().map(|_| NodeRef::default()).collect();
        let progress = NodeRef::default();
        let next_button = NodeRef::default();

        let mut selections = SelectionTracker::new();
        for question in QUESTIONS {
            let kind = match question.body {
                PanelBody::Options(_) => GroupKind::Exclusive,
                PanelBody::Skills(_) | PanelBody::Interests(_) => GroupKind::Multi,
            };
            selections.register(question.id, kind);
        }

        let stage = PanelStage {
            panels: panels.clone(),
            progress: progress.clone(),
            next_button: next_button.clone(),
            on_shown: ctx.link().callback(AssessmentMsg::PanelShown),
        };
        let wizard = match Sequence::new(QUESTIONS.iter().map(|q| q.id)) {
            Ok(sequence) => Some(Wizard::new(sequence, selections, stage)),
            Err(err) => {
                error!("assessment disabled: {}", err);
                None
            }
        };

        let interests = QUESTIONS
            .iter()
            .filter_map(|q| match q.body {
                PanelBody::Interests(items) => Some(items),
                _ => None,
            })
            .flat_map(|items| items.iter().map(|(id, _)| (*id, 5u8)))
            .collect();

        info!("assessment mounted with {} steps", QUESTIONS.len());
        Self {
            wizard,
            panels,
            progress,
            next_button,
            visible: 0,
            interests,
            phase: Phase::Answering,
            results_timer: None,
            results_animated: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(wizard) = self.wizard.as_mut() else {
            return false;
        };
        match msg {
            AssessmentMsg::Next => {
                if wizard.next() == Step::Completed {
                    self.phase = Phase::Loading;
                    self.results_animated = false;
                    let link = ctx.link().clone();
                    self.results_timer = Some(Timeout::new(config::RESULTS_DELAY_MS, move || {
                        link.send_message(AssessmentMsg::ShowResults)
                    }));
                }
                true
            }
            AssessmentMsg::Prev => !matches!(wizard.prev(), Step::Unchanged),
            AssessmentMsg::GoTo(index) => match wizard.go_to(index) {
                Ok(moved) => moved.is_some(),
                Err(err) => {
                    error!("ignoring step jump: {}", err);
                    false
                }
            },
            AssessmentMsg::Select(panel, option) => {
                wizard.select(panel, option);
                true
            }
            AssessmentMsg::ToggleSkill(tag) => {
                wizard.toggle_skill(tag);
                true
            }
            AssessmentMsg::SetInterest(id, value) => {
                self.interests.insert(id, value.min(10));
                true
            }
            AssessmentMsg::PanelShown(index) => {
                let changed = self.visible != index;
                self.visible = index;
                changed
            }
            AssessmentMsg::ShowResults => {
                self.results_timer = None;
                self.phase = Phase::Results;
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.phase == Phase::Results && !self.results_animated {
            self.results_animated = true;
            motion::from(
                Target::Selector(".career-match"),
                &Tween::new(0.6).y(30).opacity(0.0).stagger(0.2).ease("power3.out"),
            );
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(wizard) = self.wizard.as_ref() else {
            return html! {};
        };
        let link = ctx.link();

        html! {
            <div class="assessment-card">
                <div class="assessment-steps">
                    { for QUESTIONS.iter().enumerate().map(|(i, q)| {
                        let state = match wizard.step_state(i) {
                            StepState::Completed => Some("completed-step"),
                            StepState::Active => Some("active-step"),
                            StepState::Pending => None,
                        };
                        html! {
                            <div class={classes!("step", state)} onclick={link.callback(move |_| AssessmentMsg::GoTo(i))}>
                                <span class="step-number">{ (i + 1).to_string() }</span>
                                <span class="step-label">{ q.step }</span>
                            </div>
                        }
                    }) }
                </div>
                <div class="progress-bar">
                    <div class="progress-bar-fill" ref={self.progress.clone()} style="width: 0%"></div>
                </div>
                <p class="progress-text">{ wizard.counter_label() }</p>

                { for QUESTIONS.iter().enumerate().map(|(i, q)| self.view_panel(ctx, i, q)) }

                <div class="assessment-nav">
                    <button class="btn-outline prev-btn" disabled={!wizard.can_go_back()}
                        onclick={link.callback(|_| AssessmentMsg::Prev)}>
                        {"Previous"}
                    </button>
                    <button class="btn-primary next-btn" ref={self.next_button.clone()}
                        onclick={link.callback(|_| AssessmentMsg::Next)}>
                        { wizard.next_label() }
                    </button>
                </div>

                { self.view_results() }
            </div>
        }
    }
}

impl Assessment {
    fn view_panel(&self, ctx: &Context<Self>, index: usize, question: &'static QuestionPanel) -> Html {
        let Some(wizard) = self.wizard.as_ref() else {
            return html! {};
        };
        let link = ctx.link();
        let active = (index == self.visible).then(|| "active-panel");
        let panel_id = question.id;

        let body = match question.body {
            PanelBody::Options(cards) => html! {
                <div class="options-grid">
                    { for cards.iter().map(|card| {
                        let selected = wizard.selections().is_selected(panel_id, card.id);
                        html! {
                            <div class={classes!("option-card", selected.then(|| "selected"))}
                                data-option={card.id}
                                onclick={link.callback(move |_| AssessmentMsg::Select(panel_id, card.id))}
                                onmouseenter={hover(selected, true)}
                                onmouseleave={hover(selected, false)}>
                                <i class={card.icon}></i>
                                <h4>{ card.label }</h4>
                                <p>{ card.detail }</p>
                                <span class="check-icon"><i class="fas fa-check"></i></span>
                            </div>
                        }
                    }) }
                </div>
            },
            PanelBody::Skills(tags) => html! {
                <>
                    <div class="skill-tags">
                        { for tags.iter().map(|tag| {
                            let tag: &'static str = *tag;
                            let selected = wizard.selections().is_selected(SKILLS_GROUP, tag);
                            html! {
                                <button class={classes!("skill-tag", selected.then(|| "selected"))}
                                    data-option={tag}
                                    onclick={link.callback(move |_| AssessmentMsg::ToggleSkill(tag))}>
                                    <span class="skill-check check-icon"><i class="fas fa-check"></i></span>
                                    { tag }
                                </button>
                            }
                        }) }
                    </div>
                    <p class="skills-counter">
                        {"Selected: "}<span class="selected-skills-count">{ wizard.skill_count().to_string() }</span>
                    </p>
                </>
            },
            PanelBody::Interests(items) => html! {
                <div class="interest-sliders">
                    { for items.iter().map(|(id, label)| {
                        let id: &'static str = *id;
                        let value = self.interests.get(id).copied().unwrap_or(5);
                        let on_change = link.callback(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            AssessmentMsg::SetInterest(id, input.value().parse().unwrap_or(5))
                        });
                        html! { <InterestSlider label={*label} {value} {on_change} /> }
                    }) }
                </div>
            },
        };

        html! {
            <div class={classes!("question-panel", active)} data-panel={panel_id} ref={self.panels[index].clone()}>
                <h3 class="question-title">{ question.title }</h3>
                { body }
            </div>
        }
    }

    fn view_results(&self) -> Html {
        match self.phase {
            Phase::Answering => html! {},
            Phase::Loading => html! {
                <div class="results-loading">
                    <div class="loading-spinner"></div>
                    <p>{"Finding careers that fit you..."}</p>
                </div>
            },
            Phase::Results => html! {
                <div class="results-display">
                    <h3>{"Your top matches"}</h3>
                    { for CAREER_MATCHES.iter().map(|(title, blurb, score)| html! {
                        <div class="career-match">
                            <div class="match-score">{ format!("{}%", score) }</div>
                            <div class="match-info">
                                <h4>{ *title }</h4>
                                <p>{ *blurb }</p>
                            </div>
                        </div>
                    }) }
                </div>
            },
        }
    }
}

fn hover(selected: bool, entering: bool) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if selected {
            return;
        }
        if let Some(card) = e.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let tween = if entering {
                Tween::new(0.3).y(-5).scale(1.02)
            } else {
                Tween::new(0.3).y(0).scale(1.0)
            };
            motion::to(Target::Element(&card), &tween.ease("power2.out"));
        }
    })
}

#[function_component(AssessmentPage)]
pub fn assessment_page() -> Html {
    html! {
        <section class="assessment-section standalone">
            <div class="section-header">
                <h2 class="section-title">{"Career Assessment"}</h2>
                <p class="section-subtitle">{"Five short steps. No account needed."}</p>
            </div>
            <Assessment />
        </section>
    }
}
