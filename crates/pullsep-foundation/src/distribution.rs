//! Per-row offset distribution.
//!
//! Pure functions mapping a clamped pull delta to one vertical offset per
//! visible row. Kept free of side effects so the math is testable without an
//! animation runtime; the controller applies the results through the
//! animator.

use smallvec::SmallVec;

use crate::gesture_constants::PULL_FRICTION;

/// Inline capacity matches the visible-row snapshot.
pub type OffsetVec = SmallVec<[f32; 8]>;

/// Offsets for a top pull, indexed by forward visible index (0 = first
/// visible row).
///
/// Each row moves by `index * delta * friction`, so the gap widens toward the
/// bottom of the viewport. With `separate_all` off, rows below the pressed
/// row move uniformly with it instead — content above the touch tears away
/// while content below stays anchored to the press point's motion. A down
/// that missed every row (`pressed_index == None`) distributes per-index.
pub fn top_pull_offsets(
    visible_count: usize,
    pressed_index: Option<usize>,
    delta_y: f32,
    separate_all: bool,
) -> OffsetVec {
    (0..visible_count)
        .map(|i| {
            let effective = match pressed_index {
                Some(pressed) if !separate_all && i > pressed => pressed,
                _ => i,
            };
            effective as f32 * delta_y * PULL_FRICTION
        })
        .collect()
}

/// Offsets for a bottom pull, indexed by forward visible index.
///
/// Mirror of [`top_pull_offsets`]: distances grow from the bottom of the
/// viewport upward (the last visible row has reverse index 0). With
/// `separate_all` off, rows above the pressed row move uniformly with it.
/// The snapshot may have shrunk since the press; a pressed index at or past
/// the snapshot pins to the last visible row.
pub fn bottom_pull_offsets(
    visible_count: usize,
    pressed_index: Option<usize>,
    delta_y: f32,
    separate_all: bool,
) -> OffsetVec {
    (0..visible_count)
        .map(|i| {
            let reverse = visible_count - 1 - i;
            let effective = match pressed_index {
                Some(pressed) if !separate_all && i < pressed => {
                    (visible_count - 1).saturating_sub(pressed)
                }
                _ => reverse,
            };
            effective as f32 * delta_y * PULL_FRICTION
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture_constants::MAX_PULL_DISTANCE;

    #[test]
    fn top_pull_separate_all_scales_with_index() {
        let offsets = top_pull_offsets(5, Some(1), 50.0, true);
        assert_eq!(offsets.as_slice(), &[0.0, 12.5, 25.0, 37.5, 50.0]);
    }

    #[test]
    fn top_pull_anchors_rows_below_press_point() {
        // 10 rows, 5 visible, pressed at visible index 1, dragged 50.
        let offsets = top_pull_offsets(5, Some(1), 50.0, false);
        assert_eq!(offsets.as_slice(), &[0.0, 12.5, 12.5, 12.5, 12.5]);
    }

    #[test]
    fn top_pull_pressed_first_row_moves_nothing_below() {
        let offsets = top_pull_offsets(5, Some(0), 80.0, false);
        assert_eq!(offsets.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn top_pull_pressed_last_row_is_fully_per_index() {
        let offsets = top_pull_offsets(5, Some(4), 80.0, false);
        assert_eq!(offsets.as_slice(), &[0.0, 20.0, 40.0, 60.0, 80.0]);
    }

    #[test]
    fn top_pull_without_pressed_row_falls_back_to_per_index() {
        assert_eq!(
            top_pull_offsets(3, None, 40.0, false).as_slice(),
            top_pull_offsets(3, None, 40.0, true).as_slice(),
        );
    }

    #[test]
    fn clamped_delta_bounds_deepest_row() {
        let offsets = top_pull_offsets(5, Some(1), MAX_PULL_DISTANCE, false);
        // Deepest row uses min(4, pressed) = 1: 1 * 200 * 0.25.
        assert_eq!(offsets[4], 50.0);
        let all = top_pull_offsets(5, Some(4), MAX_PULL_DISTANCE, true);
        assert_eq!(all[4], MAX_PULL_DISTANCE * 4.0 * PULL_FRICTION);
    }

    #[test]
    fn monotone_pull_gives_monotone_offsets() {
        let mut last = OffsetVec::from_slice(&[0.0; 5]);
        for delta in [10.0, 40.0, 90.0, 150.0, 200.0] {
            let offsets = top_pull_offsets(5, Some(3), delta, false);
            for (current, previous) in offsets.iter().zip(&last) {
                assert!(current >= previous);
                assert!(*current <= MAX_PULL_DISTANCE * 4.0 * PULL_FRICTION);
            }
            last = offsets;
        }
    }

    #[test]
    fn bottom_pull_mirrors_top() {
        // Upward drag: negative delta. Reverse index 0 is the last row.
        let offsets = bottom_pull_offsets(5, None, -50.0, true);
        assert_eq!(offsets.as_slice(), &[-50.0, -37.5, -25.0, -12.5, 0.0]);
    }

    #[test]
    fn bottom_pull_anchors_rows_above_press_point() {
        // Pressed at forward index 3 of 5: rows 0..3 move with the pressed
        // row's reverse-index distance, (5 - 3 - 1) = 1.
        let offsets = bottom_pull_offsets(5, Some(3), -40.0, false);
        assert_eq!(offsets.as_slice(), &[-10.0, -10.0, -10.0, -10.0, 0.0]);
    }

    #[test]
    fn bottom_pull_pressed_first_row_is_fully_per_reverse_index() {
        // Nothing sits above the press point: every row keeps its own
        // reverse-index distance.
        let offsets = bottom_pull_offsets(5, Some(0), -80.0, false);
        assert_eq!(offsets.as_slice(), &[-80.0, -60.0, -40.0, -20.0, 0.0]);
    }

    #[test]
    fn bottom_pull_pressed_last_row_moves_nothing_above() {
        let offsets = bottom_pull_offsets(5, Some(4), -80.0, false);
        assert_eq!(offsets.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn bottom_pull_tolerates_pressed_index_past_snapshot() {
        // The snapshot can shrink between events when the list recycles or
        // settles flush at the bottom; a stale pressed index pins to the
        // last row instead of wrapping.
        let offsets = bottom_pull_offsets(5, Some(5), -40.0, false);
        assert_eq!(offsets.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.0]);
        let offsets = bottom_pull_offsets(5, Some(7), -40.0, false);
        assert_eq!(offsets.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_snapshot_distributes_nothing() {
        assert!(top_pull_offsets(0, None, 100.0, false).is_empty());
        assert!(bottom_pull_offsets(0, None, -100.0, true).is_empty());
    }
}
