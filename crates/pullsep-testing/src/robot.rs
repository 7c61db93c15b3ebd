//! Robot-style driver for gesture sequences.
//!
//! Wraps a controller over the fakes and feeds it pointer sequences the way
//! a platform event loop would, one sample at a time:
//!
//! ```
//! use pullsep_testing::{FakeListView, GestureRobot};
//!
//! let mut robot = GestureRobot::new(FakeListView::new(10, 100.0, 500.0));
//! robot.press_at(40.0, 150.0);
//! robot.drag_to(200.0);
//! robot.release();
//! ```

use pullsep_foundation::pointer::PointerEvent;
use pullsep_foundation::separation::SeparationController;
use pullsep_foundation::GesturePhase;

use crate::fake_list::FakeListView;
use crate::recording_animator::RecordingAnimator;

/// Outcome of one dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    /// Return value of the controller's entry point.
    pub handled: bool,
    /// Whether the event ended up marked consumed.
    pub consumed: bool,
}

/// Drives a [`SeparationController`] with synthetic pointer sequences.
pub struct GestureRobot {
    controller: SeparationController<FakeListView, RecordingAnimator>,
    x: f32,
    y: f32,
}

impl GestureRobot {
    pub fn new(list: FakeListView) -> Self {
        Self {
            controller: SeparationController::new(list, RecordingAnimator::new()),
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn with_separate_all(mut self, separate_all: bool) -> Self {
        self.controller.set_separate_all(separate_all);
        self
    }

    fn send(&mut self, event: PointerEvent) -> Dispatch {
        let handled = self.controller.dispatch(&event);
        Dispatch {
            handled,
            consumed: event.is_consumed(),
        }
    }

    pub fn press_at(&mut self, x: f32, y: f32) -> Dispatch {
        self.x = x;
        self.y = y;
        self.send(PointerEvent::down(x, y))
    }

    /// Move the pointer straight to `y` in a single sample.
    pub fn drag_to(&mut self, y: f32) -> Dispatch {
        self.y = y;
        self.send(PointerEvent::moved(self.x, y))
    }

    /// Move the pointer to `y` in evenly spaced samples, like a real drag.
    ///
    /// Delivers `steps + 1` move events: a leading sample at the current
    /// position (the arming move when the list already sits at a boundary,
    /// so the pull anchor freezes before any distance accumulates), then
    /// `steps` samples ending exactly at `y`.
    pub fn drag_to_in_steps(&mut self, y: f32, steps: usize) -> Dispatch {
        let start = self.y;
        let mut last = self.drag_to(start);
        for step in 1..=steps.max(1) {
            let fraction = step as f32 / steps.max(1) as f32;
            last = self.drag_to(start + (y - start) * fraction);
        }
        last
    }

    pub fn release(&mut self) -> Dispatch {
        let (x, y) = (self.x, self.y);
        self.send(PointerEvent::up(x, y))
    }

    pub fn cancel(&mut self) -> Dispatch {
        let (x, y) = (self.x, self.y);
        self.send(PointerEvent::cancel(x, y))
    }

    pub fn phase(&self) -> GesturePhase {
        self.controller.phase()
    }

    pub fn controller(&self) -> &SeparationController<FakeListView, RecordingAnimator> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SeparationController<FakeListView, RecordingAnimator> {
        &mut self.controller
    }

    pub fn list(&self) -> &FakeListView {
        self.controller.list()
    }

    pub fn list_mut(&mut self) -> &mut FakeListView {
        self.controller.list_mut()
    }

    pub fn animator(&self) -> &RecordingAnimator {
        self.controller.animator()
    }

    pub fn animator_mut(&mut self) -> &mut RecordingAnimator {
        self.controller.animator_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pullsep_foundation::pointer::PointerEventKind;

    #[test]
    fn drag_in_steps_delivers_leading_sample_plus_steps() {
        // Mid-list, so every move passes through and can be counted.
        let mut list = FakeListView::new(10, 100.0, 500.0);
        list.set_scroll_offset(250.0);
        let mut robot = GestureRobot::new(list);
        robot.press_at(40.0, 100.0);
        robot.drag_to_in_steps(200.0, 3);

        let moves = robot
            .list()
            .forwarded()
            .iter()
            .filter(|kind| **kind == PointerEventKind::Move)
            .count();
        assert_eq!(moves, 4);
    }
}
