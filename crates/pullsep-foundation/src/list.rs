//! Capability trait for the scrollable list being decorated.
//!
//! The controller wraps an injected list rather than extending a concrete
//! widget, so any conforming list implementation can be decorated. Rows are
//! exposed as an ordered snapshot fetched once per event and never cached
//! across events: the underlying list owns its row views and may recycle them
//! between events, which the controller tolerates by re-resolving.

use pullsep_animation::ViewId;
use smallvec::SmallVec;

use crate::pointer::PointerEvent;

/// Inline capacity for the visible-row snapshot. Most viewports show fewer
/// than eight rows, so the common case avoids heap allocation.
pub type RowSnapshot = SmallVec<[RowHandle; 8]>;

/// One visible row at the moment of a single pointer event.
///
/// `top`/`bottom` are edges in the list's viewport coordinate space. The
/// handle is non-owning; it is only valid for the event it was fetched for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowHandle {
    /// Index in the data source.
    pub index: usize,
    /// Id the animator addresses this row's view by.
    pub view: ViewId,
    /// On-screen top edge.
    pub top: f32,
    /// On-screen bottom edge.
    pub bottom: f32,
}

/// Queries and commands the separation controller needs from the list.
pub trait SeparableList {
    /// Ordered snapshot of currently visible rows, top to bottom. May be
    /// empty before the first layout pass.
    fn visible_rows(&self) -> RowSnapshot;

    /// Total number of data rows.
    fn row_count(&self) -> usize;

    /// The list's own top edge in viewport coordinates.
    fn viewport_top(&self) -> f32;

    /// The list's own bottom edge in viewport coordinates.
    fn viewport_bottom(&self) -> f32;

    /// Visible-row index under a viewport point, if any.
    fn row_index_at(&self, x: f32, y: f32) -> Option<usize>;

    /// The list's normal touch handling (scrolling, clicks). Returns whether
    /// the list handled the event.
    fn dispatch_default(&mut self, event: &PointerEvent) -> bool;

    /// Clear the item divider and selection highlight. Cosmetic setup invoked
    /// once when the controller takes over the list; rows translate apart
    /// more cleanly without them.
    fn suppress_default_decorations(&mut self) {}
}
