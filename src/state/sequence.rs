use log::debug;

use crate::error::SiteError;
use super::sink::PresentationSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// What happens when the controller is pushed past either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndBehavior {
    /// Stop at the ends; advancing past the last panel signals completion.
    Complete,
    /// Wrap around modulo the sequence length.
    Wrap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub from_panel: String,
    pub to_panel: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Moved(Transition),
    Completed,
    Unchanged,
}

/// Ordered, non-empty list of panel ids. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    panels: Vec<String>,
}

impl Sequence {
    pub fn new<I, S>(panels: I) -> Result<Self, SiteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let panels: Vec<String> = panels.into_iter().map(Into::into).collect();
        if panels.is_empty() {
            return Err(SiteError::EmptySequence);
        }
        Ok(Self { panels })
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[cfg(test)]
    pub fn position(&self, panel: &str) -> Option<usize> {
        self.panels.iter().position(|p| p == panel)
    }
}

pub struct SequenceController<S> {
    sequence: Sequence,
    current: usize,
    end: EndBehavior,
    sink: S,
}

impl<S: PresentationSink> SequenceController<S> {
    pub fn new(sequence: Sequence, end: EndBehavior, sink: S) -> Self {
        Self {
            sequence,
            current: 0,
            end,
            sink,
        }
    }

    #[cfg(test)]
    pub fn starting_at(
        sequence: Sequence,
        end: EndBehavior,
        initial: usize,
        sink: S,
    ) -> Result<Self, SiteError> {
        if initial >= sequence.len() {
            return Err(SiteError::OutOfRange {
                index: initial,
                len: sequence.len(),
            });
        }
        Ok(Self {
            sequence,
            current: initial,
            end,
            sink,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_panel(&self) -> &str {
        // current is always a valid index
        &self.sequence.panels[self.current]
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.sequence.len()
    }

    /// `current / (N - 1)`, or 0 for a single panel.
    pub fn progress(&self) -> f64 {
        let last = self.sequence.len() - 1;
        if last == 0 {
            0.0
        } else {
            self.current as f64 / last as f64
        }
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn advance(&mut self) -> Step {
        let len = self.sequence.len();
        if self.current + 1 < len {
            return Step::Moved(self.move_to(self.current + 1, Direction::Forward));
        }
        match self.end {
            EndBehavior::Complete => {
                debug!("sequence completed at panel {}", self.current);
                self.sink.complete();
                Step::Completed
            }
            EndBehavior::Wrap => {
                if self.current == 0 {
                    // a single panel wraps onto itself
                    Step::Unchanged
                } else {
                    Step::Moved(self.move_to(0, Direction::Forward))
                }
            }
        }
    }

    pub fn retreat(&mut self) -> Step {
        if self.current > 0 {
            return Step::Moved(self.move_to(self.current - 1, Direction::Backward));
        }
        match self.end {
            EndBehavior::Complete => Step::Unchanged,
            EndBehavior::Wrap => {
                let last = self.sequence.len() - 1;
                if last == 0 {
                    Step::Unchanged
                } else {
                    Step::Moved(self.move_to(last, Direction::Backward))
                }
            }
        }
    }

    /// Jumping to the panel that is already active is accepted but emits nothing.
    pub fn jump_to(&mut self, index: usize) -> Result<Option<Transition>, SiteError> {
        let len = self.sequence.len();
        if index >= len {
            return Err(SiteError::OutOfRange { index, len });
        }
        if index == self.current {
            return Ok(None);
        }
        let direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Ok(Some(self.move_to(index, direction)))
    }

    fn move_to(&mut self, to: usize, direction: Direction) -> Transition {
        let transition = Transition {
            from: self.current,
            to,
            from_panel: self.sequence.panels[self.current].clone(),
            to_panel: self.sequence.panels[to].clone(),
            direction,
        };
        self.current = to;
        debug!(
            "sequence {} -> {} ({:?})",
            transition.from, transition.to, transition.direction
        );
        self.sink.transition(&transition);
        if self.end == EndBehavior::Complete {
            let ratio = self.progress();
            self.sink.set_progress(ratio);
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::{RecordingSink, SinkCall};

    fn panels(n: usize) -> Sequence {
        Sequence::new((0..n).map(|i| format!("panel-{}", i))).unwrap()
    }

    fn wizard(n: usize) -> SequenceController<RecordingSink> {
        SequenceController::new(panels(n), EndBehavior::Complete, RecordingSink::default())
    }

    fn carousel(n: usize) -> SequenceController<RecordingSink> {
        SequenceController::new(panels(n), EndBehavior::Wrap, RecordingSink::default())
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = Sequence::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, SiteError::EmptySequence);
    }

    #[test]
    fn three_advances_over_five_panels() {
        let mut c = wizard(5);
        for _ in 0..3 {
            assert!(matches!(c.advance(), Step::Moved(_)));
        }
        assert_eq!(c.current(), 3);
        assert_eq!(c.progress(), 0.75);
        assert_eq!(c.sink().progress(), vec![0.25, 0.5, 0.75]);
    }

    #[test]
    fn wizard_completes_instead_of_passing_the_end() {
        let mut c = wizard(3);
        c.advance();
        c.advance();
        let before = c.sink().calls.len();

        assert_eq!(c.advance(), Step::Completed);
        assert_eq!(c.current(), 2);
        assert_eq!(c.sink().completions(), 1);
        assert_eq!(c.sink().calls.len(), before + 1);
        assert_eq!(c.sink().calls.last(), Some(&SinkCall::Complete));
    }

    #[test]
    fn wizard_retreat_at_start_is_a_no_op() {
        let mut c = wizard(4);
        assert_eq!(c.retreat(), Step::Unchanged);
        assert_eq!(c.current(), 0);
        assert!(c.sink().calls.is_empty());
    }

    #[test]
    fn single_panel_wizard_has_zero_progress_and_completes() {
        let mut c = wizard(1);
        assert_eq!(c.progress(), 0.0);
        assert_eq!(c.advance(), Step::Completed);
        assert_eq!(c.retreat(), Step::Unchanged);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn carousel_wraps_forward_with_one_event() {
        let mut c = SequenceController::starting_at(
            panels(4),
            EndBehavior::Wrap,
            3,
            RecordingSink::default(),
        )
        .unwrap();

        let step = c.advance();
        assert_eq!(c.current(), 0);
        let transitions = c.sink().transitions();
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].from, 3);
        assert_eq!(transitions[0].to, 0);
        assert_eq!(transitions[0].direction, Direction::Forward);
        assert_eq!(step, Step::Moved(transitions[0].clone()));
    }

    #[test]
    fn carousel_wraps_backward_and_reports_no_progress() {
        let mut c = carousel(4);
        c.retreat();
        assert_eq!(c.current(), 3);
        assert_eq!(c.sink().transitions()[0].direction, Direction::Backward);
        assert!(c.sink().progress().is_empty());
    }

    #[test]
    fn single_panel_carousel_never_emits() {
        let mut c = carousel(1);
        assert_eq!(c.advance(), Step::Unchanged);
        assert_eq!(c.retreat(), Step::Unchanged);
        assert!(c.sink().calls.is_empty());
    }

    #[test]
    fn jump_out_of_range_leaves_state_alone() {
        let mut c = wizard(5);
        c.advance();
        let err = c.jump_to(5).unwrap_err();
        assert_eq!(err, SiteError::OutOfRange { index: 5, len: 5 });
        assert_eq!(c.current(), 1);
        assert_eq!(c.sink().transitions().len(), 1);
    }

    #[test]
    fn jump_infers_direction() {
        let mut c = carousel(5);
        let t = c.jump_to(3).unwrap().unwrap();
        assert_eq!(t.direction, Direction::Forward);
        assert_eq!(t.to_panel, "panel-3");
        let t = c.jump_to(1).unwrap().unwrap();
        assert_eq!(t.direction, Direction::Backward);
        assert_eq!(c.jump_to(1).unwrap(), None);
        assert_eq!(c.sink().transitions().len(), 2);
    }

    #[test]
    fn starting_index_is_validated() {
        let result =
            SequenceController::starting_at(panels(2), EndBehavior::Wrap, 2, RecordingSink::default());
        assert!(matches!(result, Err(SiteError::OutOfRange { index: 2, len: 2 })));
    }

    #[test]
    fn old_panel_is_hidden_before_the_new_one_shows() {
        let mut c = wizard(3);
        c.advance();
        assert_eq!(
            &c.sink().calls[1..3],
            &[
                SinkCall::Deactivate(0, "panel-0".into(), Direction::Forward),
                SinkCall::Activate(1, "panel-1".into(), Direction::Forward),
            ]
        );
    }

    #[test]
    fn index_stays_in_range_under_any_input() {
        for n in 1..7 {
            for end in [EndBehavior::Complete, EndBehavior::Wrap] {
                let mut c = SequenceController::new(panels(n), end, RecordingSink::default());
                // fixed pseudo-random walk, mixed with back-to-back bursts
                let mut seed = 7usize + n;
                for _ in 0..200 {
                    seed = seed.wrapping_mul(1103515245).wrapping_add(12345) % (1 << 31);
                    match seed % 3 {
                        0 => {
                            c.advance();
                        }
                        1 => {
                            c.retreat();
                        }
                        _ => {
                            let _ = c.jump_to(seed % (n + 2));
                        }
                    }
                    assert!(c.current() < n);
                }
            }
        }
    }
}
