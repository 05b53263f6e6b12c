use log::info;

use crate::error::SiteError;
use super::selection::{SelectionChange, SelectionTracker, SKILLS_GROUP};
use super::sequence::{EndBehavior, Sequence, SequenceController, Step, Transition};
use super::sink::PresentationSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

/// The assessment form: a non-wrapping sequence of question panels plus the
/// answers picked so far.
pub struct Wizard<S> {
    steps: SequenceController<S>,
    selections: SelectionTracker,
}

impl<S: PresentationSink> Wizard<S> {
    pub fn new(panels: Sequence, selections: SelectionTracker, sink: S) -> Self {
        Self {
            steps: SequenceController::new(panels, EndBehavior::Complete, sink),
            selections,
        }
    }

    #[cfg(test)]
    pub fn steps(&self) -> &SequenceController<S> {
        &self.steps
    }

    pub fn selections(&self) -> &SelectionTracker {
        &self.selections
    }

    pub fn next(&mut self) -> Step {
        if !self.selections.validate_step(self.steps.current_panel()) {
            return Step::Unchanged;
        }
        let step = self.steps.advance();
        if step == Step::Completed {
            info!("assessment finished");
        }
        step
    }

    pub fn prev(&mut self) -> Step {
        self.steps.retreat()
    }

    pub fn go_to(&mut self, index: usize) -> Result<Option<Transition>, SiteError> {
        self.steps.jump_to(index)
    }

    pub fn select(&mut self, panel: &str, option: &str) -> SelectionChange {
        let change = self.selections.select(panel, option);
        let selected = self.selections.selected(panel);
        self.steps.sink_mut().render_selection_state(panel, &selected);
        change
    }

    pub fn toggle_skill(&mut self, tag: &str) -> SelectionChange {
        self.select(SKILLS_GROUP, tag)
    }

    pub fn skill_count(&self) -> usize {
        self.selections.count(SKILLS_GROUP)
    }

    pub fn step_state(&self, index: usize) -> StepState {
        let current = self.steps.current();
        if index < current {
            StepState::Completed
        } else if index == current {
            StepState::Active
        } else {
            StepState::Pending
        }
    }

    pub fn counter_label(&self) -> String {
        format!("Step {} of {}", self.steps.current() + 1, self.steps.len())
    }

    pub fn next_label(&self) -> &'static str {
        if self.steps.is_last() {
            "See Results"
        } else {
            "Next"
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.steps.is_first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::{RecordingSink, SinkCall};

    fn wizard() -> Wizard<RecordingSink> {
        let panels = Sequence::new(["interests", "work-style", "skills", "values"]).unwrap();
        Wizard::new(panels, SelectionTracker::new(), RecordingSink::default())
    }

    #[test]
    fn labels_follow_the_current_step() {
        let mut w = wizard();
        assert_eq!(w.counter_label(), "Step 1 of 4");
        assert_eq!(w.next_label(), "Next");
        assert!(!w.can_go_back());

        w.next();
        w.next();
        w.next();
        assert_eq!(w.counter_label(), "Step 4 of 4");
        assert_eq!(w.next_label(), "See Results");
        assert!(w.can_go_back());
    }

    #[test]
    fn step_indicators() {
        let mut w = wizard();
        w.next();
        w.next();
        assert_eq!(w.step_state(0), StepState::Completed);
        assert_eq!(w.step_state(1), StepState::Completed);
        assert_eq!(w.step_state(2), StepState::Active);
        assert_eq!(w.step_state(3), StepState::Pending);
    }

    #[test]
    fn next_on_last_step_finishes_without_moving() {
        let mut w = wizard();
        for _ in 0..3 {
            w.next();
        }
        assert_eq!(w.steps().sink().completions(), 0);
        assert_eq!(w.next(), Step::Completed);
        assert_eq!(w.steps().current(), 3);
        assert_eq!(w.steps().sink().completions(), 1);
    }

    #[test]
    fn advancing_needs_no_answers() {
        let mut w = wizard();
        assert!(matches!(w.next(), Step::Moved(_)));
        assert_eq!(w.selections().count("interests"), 0);
    }

    #[test]
    fn selections_are_rendered_through_the_sink() {
        let mut w = wizard();
        w.select("work-style", "team");
        w.select("work-style", "solo");
        w.toggle_skill("analysis");
        w.toggle_skill("writing");

        assert_eq!(w.skill_count(), 2);
        assert_eq!(
            w.steps().sink().calls,
            vec![
                SinkCall::Selection("work-style".into(), vec!["team".into()]),
                SinkCall::Selection("work-style".into(), vec!["solo".into()]),
                SinkCall::Selection("skills".into(), vec!["analysis".into()]),
                SinkCall::Selection(
                    "skills".into(),
                    vec!["analysis".into(), "writing".into()]
                ),
            ]
        );
    }

    #[test]
    fn go_to_rejects_unknown_steps() {
        let mut w = wizard();
        assert_eq!(
            w.go_to(9),
            Err(SiteError::OutOfRange { index: 9, len: 4 })
        );
        assert_eq!(w.steps().current(), 0);
    }
}
