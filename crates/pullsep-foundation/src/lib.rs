//! Pull-to-separate gesture core.
//!
//! Augments a vertically scrolling list with a "pull to separate"
//! interaction: dragging past the list's top or bottom boundary translates
//! the visible rows apart with a friction-damped, distance-limited response,
//! then animates them back to rest on release.
//!
//! The crate is rendering-agnostic. The host supplies two capabilities:
//! a [`SeparableList`] (row snapshots, hit testing, default touch handling)
//! and a [`pullsep_animation::ViewAnimator`] (fire-and-forget property
//! interpolation). Everything else — boundary detection, drag-to-offset
//! mapping, per-row distribution, reversal handling — lives here.

pub mod distribution;
pub mod gesture_constants;
pub mod gesture_tracker;
pub mod list;
pub mod pointer;
pub mod separation;

pub use gesture_tracker::{GesturePhase, GestureSession, GestureTracker, PullDirection};
pub use list::{RowHandle, RowSnapshot, SeparableList};
pub use pointer::{PointerEvent, PointerEventKind};
pub use separation::{is_at_bottom_bound, is_at_top_bound, SeparationController};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::gesture_tracker::{GesturePhase, GestureSession, GestureTracker, PullDirection};
    pub use crate::list::{RowHandle, RowSnapshot, SeparableList};
    pub use crate::pointer::{PointerEvent, PointerEventKind};
    pub use crate::separation::SeparationController;
}
