//! Testing utilities for the pull-to-separate gesture core.
//!
//! Provides a geometry-backed fake list, an animator that records every
//! scheduled interpolation, and a robot-style driver for feeding
//! press/drag/release sequences through a controller.

pub mod fake_list;
pub mod recording_animator;
pub mod robot;

pub use fake_list::FakeListView;
pub use recording_animator::{AnimatorCommand, RecordingAnimator};
pub use robot::{Dispatch, GestureRobot};

pub mod prelude {
    pub use crate::fake_list::FakeListView;
    pub use crate::recording_animator::{AnimatorCommand, RecordingAnimator};
    pub use crate::robot::{Dispatch, GestureRobot};
}
