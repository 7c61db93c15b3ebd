//! Animation contract for the pull-to-separate gesture controller.
//!
//! The gesture core never runs animations itself; it schedules property
//! interpolations on an external [`ViewAnimator`] and forgets about them.
//! This crate defines that contract: easing curves, tween specs, and the
//! animator trait.

mod animator;
mod spec;

pub use animator::{ViewAnimator, ViewId, ViewProperty};
pub use spec::{AnimationSpec, Easing, Lerp};
