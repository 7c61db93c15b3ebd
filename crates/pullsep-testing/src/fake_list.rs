//! Geometry-backed fake list.

use pullsep_animation::ViewId;
use pullsep_foundation::list::{RowHandle, RowSnapshot, SeparableList};
use pullsep_foundation::pointer::{PointerEvent, PointerEventKind};

/// A [`SeparableList`] over uniform-height rows with a real scroll position.
///
/// Visible rows are computed from geometry on every query, like a real list
/// would after layout, so boundary predicates can be exercised at arbitrary
/// scroll offsets. Forwarded events are recorded for assertions.
#[derive(Debug)]
pub struct FakeListView {
    row_count: usize,
    row_height: f32,
    viewport_height: f32,
    scroll_offset: f32,
    /// Added to every row's view id; bump to simulate the list recycling its
    /// row views between events.
    id_generation: u64,
    forwarded: Vec<PointerEventKind>,
    decorations_suppressed: bool,
}

impl FakeListView {
    pub fn new(row_count: usize, row_height: f32, viewport_height: f32) -> Self {
        Self {
            row_count,
            row_height,
            viewport_height,
            scroll_offset: 0.0,
            id_generation: 0,
            forwarded: Vec::new(),
            decorations_suppressed: false,
        }
    }

    fn max_scroll(&self) -> f32 {
        (self.row_count as f32 * self.row_height - self.viewport_height).max(0.0)
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0.0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    /// Simulate the list recycling row views: every row gets a fresh id.
    pub fn recycle_rows(&mut self) {
        self.id_generation += 1_000;
    }

    /// View id for a data row under the current generation.
    pub fn view_id(&self, index: usize) -> ViewId {
        self.id_generation + index as u64
    }

    /// Kinds of events the default dispatch received, in order.
    pub fn forwarded(&self) -> &[PointerEventKind] {
        &self.forwarded
    }

    pub fn clear_forwarded(&mut self) {
        self.forwarded.clear();
    }

    pub fn decorations_suppressed(&self) -> bool {
        self.decorations_suppressed
    }
}

impl SeparableList for FakeListView {
    fn visible_rows(&self) -> RowSnapshot {
        let mut rows = RowSnapshot::new();
        if self.row_count == 0 || self.row_height <= 0.0 {
            return rows;
        }
        let first = (self.scroll_offset / self.row_height).floor() as usize;
        for index in first..self.row_count {
            let top = index as f32 * self.row_height - self.scroll_offset;
            if top >= self.viewport_height {
                break;
            }
            rows.push(RowHandle {
                index,
                view: self.view_id(index),
                top,
                bottom: top + self.row_height,
            });
        }
        rows
    }

    fn row_count(&self) -> usize {
        self.row_count
    }

    fn viewport_top(&self) -> f32 {
        0.0
    }

    fn viewport_bottom(&self) -> f32 {
        self.viewport_height
    }

    fn row_index_at(&self, _x: f32, y: f32) -> Option<usize> {
        self.visible_rows()
            .iter()
            .position(|row| row.top <= y && y < row.bottom)
    }

    fn dispatch_default(&mut self, event: &PointerEvent) -> bool {
        self.forwarded.push(event.kind);
        true
    }

    fn suppress_default_decorations(&mut self) {
        self.decorations_suppressed = true;
    }
}
