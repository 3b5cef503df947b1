//! Group drag/move engine.
//!
//! Two drag modes exist:
//!
//! 1. **Handle mode**: one element is the physically dragged handle, its
//!    position driven directly by the underlying drag widget. Every other
//!    selected element receives a synthetic delta computed from the
//!    handle's movement, clamped per element against the page bounds
//!    before commit.
//! 2. **Selection-rectangle mode**: the whole bounding box is the handle.
//!    Every element receives the identical delta, previewed as a transform
//!    offset (no coordinate mutation) and committed to real coordinates
//!    only on drag stop.
//!
//! Intermediate commits pass `ongoing = true` so history coalesces the
//! gesture into one entry; the final mouse-up commits with
//! `ongoing = false` and re-captures each element's original position so
//! the next drag starts from correct deltas.

use pagemark_core::{clamp_position, DocumentView, ElementKind, PageMetrics, Point};

use crate::elements::{DeletionRectanglePatch, ImagePatch, ShapePatch, TextFieldPatch};
use crate::selection::{SelectedElement, SelectionController};
use crate::store::ElementStore;

/// Applies a uniform delta to every selected element.
///
/// Each new position is computed from the entry's captured
/// `original_position`, never from live state, so repeated intermediate
/// calls with growing deltas do not compound. No clamping is applied here;
/// boundary clamping is the responsibility of the drag-stop handlers.
/// Stale entries fall through to the store's silent no-op.
pub fn move_selected_elements(
    selected: &[SelectedElement],
    delta_x: f64,
    delta_y: f64,
    store: &mut ElementStore,
    view: DocumentView,
    ongoing: bool,
) {
    for entry in selected {
        let new_x = entry.original_position.x + delta_x;
        let new_y = entry.original_position.y + delta_y;
        commit_position(store, view, entry, new_x, new_y, ongoing);
    }
}

fn commit_position(
    store: &mut ElementStore,
    view: DocumentView,
    entry: &SelectedElement,
    x: f64,
    y: f64,
    ongoing: bool,
) {
    match entry.kind {
        ElementKind::TextField => {
            store.update_text_field(view, entry.id, &TextFieldPatch::position(x, y), ongoing);
        }
        ElementKind::Shape => {
            store.update_shape(view, entry.id, &ShapePatch::position(x, y), ongoing);
        }
        ElementKind::Image => {
            store.update_image(view, entry.id, &ImagePatch::position(x, y), ongoing);
        }
        ElementKind::DeletionRectangle => {
            let patch = DeletionRectanglePatch {
                x: Some(x),
                y: Some(y),
                ..Default::default()
            };
            store.update_deletion_rectangle(view, entry.id, &patch, ongoing);
        }
    }
}

fn clamped_target(
    store: &ElementStore,
    view: DocumentView,
    entry: &SelectedElement,
    delta_x: f64,
    delta_y: f64,
    page: &PageMetrics,
) -> Option<(f64, f64)> {
    let rect = store.rect_of(view, entry.id)?;
    let x = clamp_position(entry.original_position.x + delta_x, rect.width, page.width);
    let y = clamp_position(entry.original_position.y + delta_y, rect.height, page.height);
    Some((x, y))
}

/// Which element drives the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragMode {
    /// One element is the live drag handle; the rest follow.
    Handle { handle: pagemark_core::ElementId },
    /// The selection bounding box is the handle.
    SelectionRect,
}

/// An in-progress multi-element drag.
#[derive(Debug, Clone)]
pub struct DragSession {
    mode: DragMode,
    view: DocumentView,
    delta: (f64, f64),
}

impl DragSession {
    /// Starts a handle-mode drag.
    ///
    /// Callers must have captured selection positions (drag-start) before
    /// the first update.
    pub fn start_handle(handle: pagemark_core::ElementId, view: DocumentView) -> Self {
        Self {
            mode: DragMode::Handle { handle },
            view,
            delta: (0.0, 0.0),
        }
    }

    /// Starts a selection-rectangle drag.
    pub fn start_selection_rect(view: DocumentView) -> Self {
        Self {
            mode: DragMode::SelectionRect,
            view,
            delta: (0.0, 0.0),
        }
    }

    /// The drag mode.
    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// The bucket this drag mutates.
    pub fn view(&self) -> DocumentView {
        self.view
    }

    /// The accumulated delta since drag start.
    pub fn delta(&self) -> (f64, f64) {
        self.delta
    }

    /// The live preview transform offset for selection-rectangle mode.
    ///
    /// Rendering applies this as a visual transform; coordinates in the
    /// store are untouched until [`DragSession::finish`].
    pub fn preview_offset(&self) -> (f64, f64) {
        match self.mode {
            DragMode::SelectionRect => self.delta,
            DragMode::Handle { .. } => (0.0, 0.0),
        }
    }

    /// Handle-mode intermediate update: the handle has moved to
    /// `handle_position`; every other selected element receives the same
    /// delta, clamped per element, committed with `ongoing = true`.
    ///
    /// The handle itself is not written: its position is owned by the drag
    /// widget until drag stop.
    pub fn update_handle(
        &mut self,
        store: &mut ElementStore,
        selection: &SelectionController,
        handle_position: Point,
        page: &PageMetrics,
    ) {
        let DragMode::Handle { handle } = self.mode else {
            return;
        };
        let Some(origin) = selection
            .selected()
            .iter()
            .find(|e| e.id == handle)
            .map(|e| e.original_position)
        else {
            return;
        };
        let delta_x = handle_position.x - origin.x;
        let delta_y = handle_position.y - origin.y;
        self.delta = (delta_x, delta_y);

        for entry in selection.selected() {
            if entry.id == handle {
                continue;
            }
            if let Some((x, y)) = clamped_target(store, self.view, entry, delta_x, delta_y, page) {
                commit_position(store, self.view, entry, x, y, true);
            }
        }
    }

    /// Selection-rectangle intermediate update: accumulate the preview
    /// delta only. Callers throttle these to animation-frame granularity;
    /// dropped frames are harmless because only the final commit is
    /// authoritative.
    pub fn update_selection_rect(&mut self, delta_x: f64, delta_y: f64) {
        if self.mode == DragMode::SelectionRect {
            self.delta = (delta_x, delta_y);
        }
    }

    /// Commits the drag: every selected element moves by the final delta,
    /// clamped into the page, with `ongoing = false`. Selection positions
    /// are re-captured and the bounds recomputed.
    pub fn finish(
        self,
        store: &mut ElementStore,
        selection: &mut SelectionController,
        page: &PageMetrics,
    ) {
        let (delta_x, delta_y) = self.delta;
        for entry in selection.selected() {
            if let Some((x, y)) = clamped_target(store, self.view, entry, delta_x, delta_y, page) {
                commit_position(store, self.view, entry, x, y, false);
            }
        }
        selection.recapture_positions(store, self.view);
        selection.recompute_bounds(store, self.view);
    }
}
