//! Touch-sample history for the pull gesture.
//!
//! The tracker keeps the minimal position history needed to compute pull
//! distance and direction, independent of rendering. All state lives in an
//! explicit [`GestureSession`] value that is created at pointer-down and
//! handed back (then reset) at up/cancel, so nothing leaks across gestures.

use pullsep_animation::ViewId;

use crate::gesture_constants::MAX_PULL_DISTANCE;

/// Which boundary the current separation was entered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullDirection {
    Top,
    Bottom,
}

/// Observable gesture phase, derived from session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Pressing,
    SeparatingTop,
    SeparatingBottom,
}

/// Transient per-gesture state, one per down-to-up cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureSession {
    /// Position at which the current pull began. Re-anchored on every move
    /// until a boundary is reached, so drift before the boundary does not
    /// pre-load the delta.
    pub start_y: f32,
    /// Last raw sample seen by a non-boundary move; used only for the
    /// direction sign during reversal suppression. Deliberately not updated
    /// while separating and zeroed at release, matching the one-sample
    /// lookback the distribution logic is specified against.
    pub previous_y: f32,
    /// Signed distance from `start_y`, clamped to the max pull distance by
    /// the controller's boundary branches.
    pub delta_y: f32,
    /// Whether rows are currently pulled apart.
    pub separating: bool,
    /// Boundary the separation entered through, while separating.
    pub direction: Option<PullDirection>,
    /// Visible index of the row under the initial down, if it hit one.
    pub pressed_index: Option<usize>,
    /// Animator id of that row's view. Valid only between down and
    /// up/cancel; the list may recycle the view afterwards.
    pub pressed_row: Option<ViewId>,
    /// True between down and up/cancel.
    pub pressing: bool,
}

impl GestureSession {
    /// Enter separation through the given boundary.
    pub fn begin_separation(&mut self, direction: PullDirection) {
        self.separating = true;
        self.direction = Some(direction);
    }

    /// Cancel the pull: the user reversed past the anchor. Not merely
    /// paused — a later move must re-enter through a boundary predicate.
    pub fn cancel_pull(&mut self) {
        self.delta_y = 0.0;
        self.separating = false;
        self.direction = None;
    }

    /// Re-anchor `start_y` so `delta_y` equals the max pull distance
    /// exactly, keeping the pull continuous under the finger.
    pub fn re_anchor_at_max(&mut self, current_y: f32, direction: PullDirection) {
        match direction {
            PullDirection::Top => {
                self.start_y = current_y - MAX_PULL_DISTANCE;
                self.delta_y = MAX_PULL_DISTANCE;
            }
            PullDirection::Bottom => {
                self.start_y = current_y + MAX_PULL_DISTANCE;
                self.delta_y = -MAX_PULL_DISTANCE;
            }
        }
    }

    pub fn phase(&self) -> GesturePhase {
        match (self.separating, self.direction, self.pressing) {
            (true, Some(PullDirection::Top), _) => GesturePhase::SeparatingTop,
            (true, Some(PullDirection::Bottom), _) => GesturePhase::SeparatingBottom,
            (true, None, _) => GesturePhase::Pressing,
            (false, _, true) => GesturePhase::Pressing,
            (false, _, false) => GesturePhase::Idle,
        }
    }
}

/// Owns the session across the callbacks of one gesture.
#[derive(Debug, Default)]
pub struct GestureTracker {
    session: GestureSession,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session at pointer-down. `pressed` is the visible index and
    /// view id of the row under the touch, already resolved by the caller
    /// (the tracker stays independent of hit testing and rendering).
    pub fn on_down(&mut self, y: f32, pressed: Option<(usize, ViewId)>) {
        self.session = GestureSession {
            start_y: y,
            previous_y: y,
            pressing: true,
            pressed_index: pressed.map(|(index, _)| index),
            pressed_row: pressed.map(|(_, view)| view),
            ..GestureSession::default()
        };
    }

    /// Fold a move sample into the session and return the raw delta.
    ///
    /// Until a boundary is reached the anchor follows the finger, so the
    /// delta only starts accumulating once the controller marks the session
    /// as separating. Clamping is direction-specific and left to the
    /// controller's boundary branches.
    pub fn on_move(&mut self, y: f32) -> f32 {
        if !self.session.separating {
            self.session.start_y = y;
        }
        self.session.delta_y = y - self.session.start_y;
        self.session.delta_y
    }

    /// End the session at up/cancel. Returns the final session value for the
    /// controller's release logic and resets the stored session to neutral.
    pub fn on_up_or_cancel(&mut self) -> GestureSession {
        self.session.previous_y = 0.0;
        std::mem::take(&mut self.session)
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GestureSession {
        &mut self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_follows_finger_until_separating() {
        let mut tracker = GestureTracker::new();
        tracker.on_down(100.0, None);
        assert_eq!(tracker.on_move(130.0), 0.0);
        assert_eq!(tracker.on_move(150.0), 0.0);
        // Once separating, the anchor freezes and delta accumulates.
        tracker.session_mut().begin_separation(PullDirection::Top);
        assert_eq!(tracker.on_move(150.0), 0.0);
        assert_eq!(tracker.on_move(180.0), 30.0);
        assert_eq!(tracker.on_move(140.0), -10.0);
    }

    #[test]
    fn up_returns_final_session_and_resets() {
        let mut tracker = GestureTracker::new();
        tracker.on_down(10.0, Some((2, 42)));
        tracker.session_mut().begin_separation(PullDirection::Top);
        tracker.on_move(60.0);

        let ended = tracker.on_up_or_cancel();
        assert_eq!(ended.delta_y, 50.0);
        assert!(ended.separating);
        assert_eq!(ended.pressed_row, Some(42));
        assert_eq!(ended.previous_y, 0.0);
        assert_eq!(*tracker.session(), GestureSession::default());
        assert_eq!(tracker.session().phase(), GesturePhase::Idle);
    }

    #[test]
    fn re_anchor_pins_delta_to_max() {
        let mut session = GestureSession::default();
        session.begin_separation(PullDirection::Top);
        session.re_anchor_at_max(500.0, PullDirection::Top);
        assert_eq!(session.start_y, 300.0);
        assert_eq!(session.delta_y, MAX_PULL_DISTANCE);

        session.begin_separation(PullDirection::Bottom);
        session.re_anchor_at_max(100.0, PullDirection::Bottom);
        assert_eq!(session.start_y, 300.0);
        assert_eq!(session.delta_y, -MAX_PULL_DISTANCE);
    }

    #[test]
    fn phase_tracks_session_flags() {
        let mut session = GestureSession::default();
        assert_eq!(session.phase(), GesturePhase::Idle);
        session.pressing = true;
        assert_eq!(session.phase(), GesturePhase::Pressing);
        session.begin_separation(PullDirection::Bottom);
        assert_eq!(session.phase(), GesturePhase::SeparatingBottom);
        session.cancel_pull();
        assert_eq!(session.phase(), GesturePhase::Pressing);
    }
}
