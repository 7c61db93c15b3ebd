//! Fire-and-forget animator trait.

use crate::spec::AnimationSpec;

/// Opaque handle to a view the animator can address.
///
/// The gesture core never owns views; it refers to them by id and tolerates
/// ids that no longer resolve (the list may recycle rows between events).
pub type ViewId = u64;

/// The view properties the gesture controller touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewProperty {
    /// Vertical translation offset in logical pixels.
    TranslationY,
    ScaleX,
    ScaleY,
}

/// External animation capability.
///
/// `set` applies a value immediately (used every move while dragging);
/// `animate` schedules an eased interpolation toward a target and returns
/// without waiting — no completion notification is consumed by the gesture
/// core. Implementations must cancel any in-flight interpolation of the same
/// `(view, property)` pair when a new command arrives.
pub trait ViewAnimator {
    /// Set a property to a value immediately, cancelling any running
    /// interpolation of that property.
    fn set(&mut self, view: ViewId, property: ViewProperty, value: f32);

    /// Schedule an eased interpolation of a property toward `target`.
    fn animate(&mut self, view: ViewId, property: ViewProperty, target: f32, spec: AnimationSpec);
}
