use crate::error::SiteError;
use super::autoplay::AutoAdvance;
use super::sequence::{EndBehavior, Sequence, SequenceController, Step, Transition};
use super::sink::PresentationSink;

/// A wrapping slide sequence that advances on its own until somebody touches it.
pub struct Carousel<S> {
    slides: SequenceController<S>,
    autoplay: AutoAdvance,
}

impl<S: PresentationSink> Carousel<S> {
    pub fn new(slides: Sequence, autoplay: AutoAdvance, sink: S) -> Self {
        Self {
            slides: SequenceController::new(slides, EndBehavior::Wrap, sink),
            autoplay,
        }
    }

    #[cfg(test)]
    pub fn slides(&self) -> &SequenceController<S> {
        &self.slides
    }

    pub fn autoplay(&self) -> &AutoAdvance {
        &self.autoplay
    }

    pub fn current(&self) -> usize {
        self.slides.current()
    }

    /// Timer tick. Does nothing once manual navigation has happened.
    pub fn tick(&mut self) -> Step {
        if self.autoplay.on_tick() {
            self.slides.advance()
        } else {
            Step::Unchanged
        }
    }

    pub fn next(&mut self) -> Step {
        self.autoplay.cancel();
        self.slides.advance()
    }

    pub fn prev(&mut self) -> Step {
        self.autoplay.cancel();
        self.slides.retreat()
    }

    pub fn go_to(&mut self, index: usize) -> Result<Option<Transition>, SiteError> {
        self.autoplay.cancel();
        self.slides.jump_to(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::sequence::Direction;
    use crate::state::testing::RecordingSink;

    fn carousel(n: usize) -> Carousel<RecordingSink> {
        let slides = Sequence::new((0..n).map(|i| format!("story-{}", i))).unwrap();
        Carousel::new(slides, AutoAdvance::new(6_000), RecordingSink::default())
    }

    #[test]
    fn ticks_advance_and_wrap() {
        let mut c = carousel(3);
        c.tick();
        c.tick();
        c.tick();
        assert_eq!(c.current(), 0);
        let last = c.slides().sink().transitions()[2].clone();
        assert_eq!((last.from, last.to, last.direction), (2, 0, Direction::Forward));
    }

    #[test]
    fn manual_input_stops_ticks_for_good() {
        let mut c = carousel(4);
        c.tick();
        c.next();
        assert_eq!(c.current(), 2);
        assert!(!c.autoplay().is_running());

        assert_eq!(c.tick(), Step::Unchanged);
        assert_eq!(c.tick(), Step::Unchanged);
        assert_eq!(c.current(), 2);
        assert_eq!(c.slides().sink().transitions().len(), 2);
    }

    #[test]
    fn dot_navigation_cancels_even_when_rejected() {
        let mut c = carousel(4);
        assert!(c.go_to(7).is_err());
        assert!(!c.autoplay().is_running());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn prev_from_first_slide_wraps_to_last() {
        let mut c = carousel(4);
        c.prev();
        assert_eq!(c.current(), 3);
    }
}
