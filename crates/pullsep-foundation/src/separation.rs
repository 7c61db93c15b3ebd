//! The separation state machine.
//!
//! [`SeparationController`] decorates an injected [`SeparableList`]: it owns
//! the same pointer-event entry point the list would expose, and either
//! consumes events (while rows are visibly pulled apart) or forwards them to
//! the list's default handling. Offsets are computed by the pure functions in
//! [`crate::distribution`] and applied through the external animator.

use pullsep_animation::{AnimationSpec, Easing, ViewAnimator, ViewProperty};

use crate::distribution::{bottom_pull_offsets, top_pull_offsets};
use crate::gesture_constants::{
    DRAG_THRESHOLD, MAX_PULL_DISTANCE, PRESS_FEEDBACK_MILLIS, PRESS_SCALE_X, PRESS_SCALE_Y,
    SETTLE_MILLIS,
};
use crate::gesture_tracker::{GesturePhase, GestureTracker, PullDirection};
use crate::list::{RowHandle, SeparableList};
use crate::pointer::{PointerEvent, PointerEventKind};

/// True iff the list is pulled flush against its top: the first visible row
/// is data row 0 and its top edge sits at or below the viewport top.
/// An empty or not-yet-rendered snapshot is never at a boundary.
pub fn is_at_top_bound(rows: &[RowHandle], viewport_top: f32) -> bool {
    rows.first()
        .map_or(false, |first| first.index == 0 && first.top >= viewport_top)
}

/// True iff the list is pulled flush against its bottom: the last visible row
/// is the last data row, its bottom edge sits at or above the viewport
/// bottom, and there are more data rows than fit on screen (a list shorter
/// than its viewport has no bottom boundary to pull past).
pub fn is_at_bottom_bound(rows: &[RowHandle], viewport_bottom: f32, row_count: usize) -> bool {
    rows.last().map_or(false, |last| {
        last.index + 1 == row_count && last.bottom <= viewport_bottom && row_count > rows.len()
    })
}

/// Gesture controller adding pull-to-separate to a scrollable list.
///
/// Feed every pointer event through [`SeparationController::dispatch`]
/// instead of the list's own entry point. Events that are not part of an
/// active separation pass through to the list untouched.
pub struct SeparationController<L: SeparableList, A: ViewAnimator> {
    list: L,
    animator: A,
    tracker: GestureTracker,
    separate_all: bool,
}

impl<L: SeparableList, A: ViewAnimator> SeparationController<L, A> {
    pub fn new(mut list: L, animator: A) -> Self {
        list.suppress_default_decorations();
        Self {
            list,
            animator,
            tracker: GestureTracker::new(),
            separate_all: false,
        }
    }

    /// Whether all visible rows separate, or only the span between the
    /// pressed row and the pulled edge. Defaults to `false`.
    pub fn with_separate_all(mut self, separate_all: bool) -> Self {
        self.separate_all = separate_all;
        self
    }

    pub fn set_separate_all(&mut self, separate_all: bool) {
        self.separate_all = separate_all;
    }

    pub fn is_separate_all(&self) -> bool {
        self.separate_all
    }

    pub fn phase(&self) -> GesturePhase {
        self.tracker.session().phase()
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Event entry point, replacing the list's own.
    ///
    /// Returns whether the event was handled: consumed by the separation
    /// logic, or accepted by the list's default dispatch on the pass-through
    /// path.
    pub fn dispatch(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.handle_down(event),
            PointerEventKind::Move => self.handle_move(event),
            PointerEventKind::Up | PointerEventKind::Cancel => self.handle_release(event),
        }
    }

    fn handle_down(&mut self, event: &PointerEvent) -> bool {
        let rows = self.list.visible_rows();
        let pressed = self
            .list
            .row_index_at(event.x, event.y)
            .and_then(|index| rows.get(index).map(|row| (index, row.view)));

        // Press feedback is purely cosmetic; a down that missed every row
        // simply skips it.
        if let Some((_, view)) = pressed {
            let spec = AnimationSpec::tween(PRESS_FEEDBACK_MILLIS, Easing::Accelerate);
            self.animator
                .animate(view, ViewProperty::ScaleX, PRESS_SCALE_X, spec);
            self.animator
                .animate(view, ViewProperty::ScaleY, PRESS_SCALE_Y, spec);
        }

        self.tracker.on_down(event.y, pressed);
        self.list.dispatch_default(event)
    }

    fn handle_move(&mut self, event: &PointerEvent) -> bool {
        self.tracker.on_move(event.y);

        // Fresh snapshot every event; the list may have recycled rows.
        let rows = self.list.visible_rows();
        if is_at_top_bound(&rows, self.list.viewport_top()) {
            return self.pull(event, &rows, PullDirection::Top);
        }
        if is_at_bottom_bound(&rows, self.list.viewport_bottom(), self.list.row_count()) {
            return self.pull(event, &rows, PullDirection::Bottom);
        }

        // Normal scroll territory. This is the only place the lookback
        // sample advances; it stays frozen while separating.
        self.tracker.session_mut().previous_y = event.y;
        self.list.dispatch_default(event)
    }

    fn pull(&mut self, event: &PointerEvent, rows: &[RowHandle], direction: PullDirection) -> bool {
        let current_y = event.y;
        let previous_y = self.tracker.session().previous_y;

        {
            let session = self.tracker.session_mut();
            let was_separating = session.separating;
            if !was_separating {
                log::trace!("separation enter: {direction:?}, anchor {:.1}", session.start_y);
            }
            session.begin_separation(direction);

            let overshoot = match direction {
                PullDirection::Top => session.delta_y > MAX_PULL_DISTANCE,
                PullDirection::Bottom => session.delta_y.abs() > MAX_PULL_DISTANCE,
            };
            // A pull that returns to the exact anchor is cancelled too, not
            // merely paused; only the arming move (which also sits at zero,
            // before any pull accumulated) stays separating.
            let returned_to_anchor = was_separating && session.delta_y == 0.0;
            let reversed_past_anchor = returned_to_anchor
                || match direction {
                    PullDirection::Top => session.delta_y < 0.0,
                    PullDirection::Bottom => session.delta_y > 0.0,
                };
            if overshoot {
                session.re_anchor_at_max(current_y, direction);
            } else if reversed_past_anchor {
                session.cancel_pull();
            }
        }
        let session = *self.tracker.session();

        let offsets = match direction {
            PullDirection::Top => top_pull_offsets(
                rows.len(),
                session.pressed_index,
                session.delta_y,
                self.separate_all,
            ),
            PullDirection::Bottom => bottom_pull_offsets(
                rows.len(),
                session.pressed_index,
                session.delta_y,
                self.separate_all,
            ),
        };
        for (row, offset) in rows.iter().zip(offsets) {
            self.animator.set(row.view, ViewProperty::TranslationY, offset);
        }

        // Dragging back toward the boundary while rows are still apart:
        // swallow the event so the list does not start scrolling underneath
        // the still-separated rows. The sign check uses the last raw sample
        // seen before separation began, not the accumulated delta.
        let reversing = match direction {
            PullDirection::Top => current_y - previous_y < 0.0,
            PullDirection::Bottom => current_y - previous_y > 0.0,
        };
        if session.delta_y != 0.0 && reversing {
            event.consume();
            return true;
        }

        // Fully reversed to the anchor: separation is over, normal scrolling
        // resumes with this very event.
        if session.delta_y == 0.0 {
            return self.list.dispatch_default(event);
        }

        event.consume();
        true
    }

    fn handle_release(&mut self, event: &PointerEvent) -> bool {
        let session = self.tracker.on_up_or_cancel();

        if let Some(view) = session.pressed_row {
            let duration = if session.separating {
                SETTLE_MILLIS
            } else {
                PRESS_FEEDBACK_MILLIS
            };
            let spec = AnimationSpec::tween(duration, Easing::Accelerate);
            self.animator.animate(view, ViewProperty::ScaleX, 1.0, spec);
            self.animator.animate(view, ViewProperty::ScaleY, 1.0, spec);
        }

        if session.separating {
            log::trace!("separation settle: delta {:.1}", session.delta_y);
            let spec = AnimationSpec::tween(SETTLE_MILLIS, Easing::Accelerate);
            for row in self.list.visible_rows() {
                self.animator
                    .animate(row.view, ViewProperty::TranslationY, 0.0, spec);
            }
            // A drag past the slop must not read as a tap on release.
            if session.delta_y.abs() > DRAG_THRESHOLD {
                event.consume();
                return true;
            }
        }

        self.list.dispatch_default(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, top: f32, bottom: f32) -> RowHandle {
        RowHandle {
            index,
            view: index as u64,
            top,
            bottom,
        }
    }

    #[test]
    fn top_bound_requires_first_data_row_flush() {
        let rows = [row(0, 0.0, 100.0), row(1, 100.0, 200.0)];
        assert!(is_at_top_bound(&rows, 0.0));
        // Scrolled down a little: row 0 clipped above the viewport.
        let rows = [row(0, -20.0, 80.0), row(1, 80.0, 180.0)];
        assert!(!is_at_top_bound(&rows, 0.0));
        // First visible row is not data row 0.
        let rows = [row(3, 0.0, 100.0)];
        assert!(!is_at_top_bound(&rows, 0.0));
    }

    #[test]
    fn bottom_bound_requires_scrollable_overflow() {
        let rows = [row(8, 300.0, 400.0), row(9, 400.0, 500.0)];
        assert!(is_at_bottom_bound(&rows, 500.0, 10));
        // Last row hangs past the viewport bottom.
        let rows = [row(8, 350.0, 450.0), row(9, 450.0, 550.0)];
        assert!(!is_at_bottom_bound(&rows, 500.0, 10));
        // Every row fits on screen: nothing to pull past.
        let rows = [row(0, 0.0, 100.0), row(1, 100.0, 200.0)];
        assert!(!is_at_bottom_bound(&rows, 500.0, 2));
    }

    #[test]
    fn empty_snapshot_is_never_at_a_boundary() {
        assert!(!is_at_top_bound(&[], 0.0));
        assert!(!is_at_bottom_bound(&[], 500.0, 10));
    }
}
