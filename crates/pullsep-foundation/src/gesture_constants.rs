//! Shared gesture constants for the pull-to-separate interaction.
//!
//! These values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor; current values work well for
//! typical desktop/mobile displays.

/// Maximum pull distance in logical pixels.
///
/// A drag past a boundary is clamped so the effective pull never exceeds this
/// value; the clamp re-anchors the gesture origin rather than discarding the
/// excess, so the pull stays continuous under the finger.
pub const MAX_PULL_DISTANCE: f32 = 200.0;

/// Friction factor converting raw pull distance into per-row displacement.
///
/// Each row is displaced by `index * delta * PULL_FRICTION`, so rows farther
/// from the boundary open progressively larger gaps.
pub const PULL_FRICTION: f32 = 0.25;

/// Horizontal scale applied to the pressed row as press feedback.
pub const PRESS_SCALE_X: f32 = 0.98;

/// Vertical scale applied to the pressed row as press feedback.
pub const PRESS_SCALE_Y: f32 = 0.90;

/// Duration of the press feedback animation in milliseconds.
pub const PRESS_FEEDBACK_MILLIS: u64 = 100;

/// Duration of the settle-back animation after an active separation,
/// in milliseconds. Also used for the pressed row's scale restore when a
/// separation was active.
pub const SETTLE_MILLIS: u64 = 300;

/// Drag threshold in logical pixels.
///
/// If the pull distance at release exceeds this slop, the release event is
/// consumed instead of forwarded so the underlying list does not treat the
/// drag as a tap. 8.0 matches common platform conventions (Android uses ~8dp
/// for ViewConfiguration touch slop).
pub const DRAG_THRESHOLD: f32 = 8.0;
