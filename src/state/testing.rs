use super::sequence::{Direction, Transition};
use super::sink::PresentationSink;

#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Transition(Transition),
    Activate(usize, String, Direction),
    Deactivate(usize, String, Direction),
    Progress(f64),
    Selection(String, Vec<String>),
    Complete,
}

/// Records every call it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn transitions(&self) -> Vec<&Transition> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::Transition(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn progress(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SinkCall::Progress(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn completions(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, SinkCall::Complete)).count()
    }
}

impl PresentationSink for RecordingSink {
    fn transition(&mut self, transition: &Transition) {
        self.calls.push(SinkCall::Transition(transition.clone()));
        self.deactivate(transition.from, &transition.from_panel, transition.direction);
        self.activate(transition.to, &transition.to_panel, transition.direction);
    }

    fn activate(&mut self, index: usize, panel: &str, direction: Direction) {
        self.calls.push(SinkCall::Activate(index, panel.to_string(), direction));
    }

    fn deactivate(&mut self, index: usize, panel: &str, direction: Direction) {
        self.calls.push(SinkCall::Deactivate(index, panel.to_string(), direction));
    }

    fn set_progress(&mut self, ratio: f64) {
        self.calls.push(SinkCall::Progress(ratio));
    }

    fn render_selection_state(&mut self, panel: &str, selected: &[String]) {
        self.calls.push(SinkCall::Selection(panel.to_string(), selected.to_vec()));
    }

    fn complete(&mut self) {
        self.calls.push(SinkCall::Complete);
    }
}
