use super::sequence::{Direction, Transition};

/// Whatever renders a sequence. The controller only ever talks to this trait,
/// so it never needs to know about the DOM or the animation engine.
pub trait PresentationSink {
    /// Called exactly once per successful move. The default hides the old panel
    /// before showing the new one; sinks that need to chain the two animations
    /// override this instead.
    fn transition(&mut self, transition: &Transition) {
        self.deactivate(transition.from, &transition.from_panel, transition.direction);
        self.activate(transition.to, &transition.to_panel, transition.direction);
    }

    fn activate(&mut self, index: usize, panel: &str, direction: Direction);

    fn deactivate(&mut self, index: usize, panel: &str, direction: Direction);

    fn set_progress(&mut self, _ratio: f64) {}

    fn render_selection_state(&mut self, _panel: &str, _selected: &[String]) {}

    /// The wizard was asked to advance past its last panel.
    fn complete(&mut self) {}
}
