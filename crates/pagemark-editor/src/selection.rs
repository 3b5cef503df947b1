//! Multi-element selection: rectangle intersection queries, the selection
//! set, and its bounding box.
//!
//! Selection state is ephemeral. It is rebuilt on every draw-selection
//! gesture and cleared on tool change, `Escape`, or click-outside. Each
//! selected element carries the position captured at selection time so drag
//! deltas never read mutable state mid-gesture.

use smallvec::SmallVec;

use pagemark_core::{
    DocumentView, ElementId, ElementKind, Point, Rect, SELECTION_MIN_SIZE,
};

use crate::elements::{ImageElement, ShapeElement, TextField};
use crate::store::ElementStore;

/// A lightweight reference to a selected element.
///
/// `original_position` is the element's position at selection (or
/// drag-start) time; group moves compute every new position from it plus a
/// delta, so intermediate updates cannot compound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedElement {
    pub id: ElementId,
    pub kind: ElementKind,
    pub original_position: Point,
}

/// Axis-aligned bounding box of all selected elements' live positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionBounds {
    /// The bounds as a [`Rect`].
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Inline capacity for gesture-sized selections; larger selections spill
/// to the heap.
pub type SelectionList = SmallVec<[SelectedElement; 8]>;

/// Finds every selectable element intersecting a selection rectangle.
///
/// Elements are tested in the fixed order text fields, shapes, images,
/// which fixes the order of the returned list (the selection is a set
/// semantically). Deletion rectangles are background decoration and are
/// never candidates. Intersection is strict: rectangles sharing only an
/// edge do not match.
pub fn find_elements_in_selection(
    selection_rect: &Rect,
    text_fields: &[&TextField],
    shapes: &[&ShapeElement],
    images: &[&ImageElement],
) -> SelectionList {
    let mut found = SelectionList::new();
    for field in text_fields {
        if selection_rect.intersects(&field.bounds()) {
            found.push(SelectedElement {
                id: field.id,
                kind: ElementKind::TextField,
                original_position: Point::new(field.x, field.y),
            });
        }
    }
    for shape in shapes {
        if selection_rect.intersects(&shape.bounds()) {
            found.push(SelectedElement {
                id: shape.id,
                kind: ElementKind::Shape,
                original_position: Point::new(shape.x, shape.y),
            });
        }
    }
    for image in images {
        if selection_rect.intersects(&image.bounds()) {
            found.push(SelectedElement {
                id: image.id,
                kind: ElementKind::Image,
                original_position: Point::new(image.x, image.y),
            });
        }
    }
    found
}

/// Recomputes the union bounding box of a selection from live element
/// state.
///
/// Each entry is resolved back to its live rectangle through `resolve`;
/// entries that no longer resolve (stale ids) are skipped. Returns `None`
/// when nothing resolves.
pub fn calculate_selection_bounds<F>(
    selected: &[SelectedElement],
    resolve: F,
) -> Option<SelectionBounds>
where
    F: Fn(ElementId, ElementKind) -> Option<Rect>,
{
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut resolved_any = false;

    for entry in selected {
        if let Some(rect) = resolve(entry.id, entry.kind) {
            min_x = min_x.min(rect.x);
            min_y = min_y.min(rect.y);
            max_x = max_x.max(rect.right());
            max_y = max_y.max(rect.bottom());
            resolved_any = true;
        }
    }

    if !resolved_any {
        return None;
    }
    Some(SelectionBounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    })
}

/// Phase of an in-progress selection-rectangle gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DrawPhase {
    Idle,
    Drawing { start: Point, current: Point },
}

/// Tracks the multi-element selection set and the draw-selection gesture.
#[derive(Debug, Clone)]
pub struct SelectionController {
    selected: Vec<SelectedElement>,
    bounds: Option<SelectionBounds>,
    phase: DrawPhase,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    /// Creates a controller with nothing selected.
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
            bounds: None,
            phase: DrawPhase::Idle,
        }
    }

    /// The current selection set.
    pub fn selected(&self) -> &[SelectedElement] {
        &self.selected
    }

    /// The selection's bounding box, if anything is selected.
    pub fn bounds(&self) -> Option<SelectionBounds> {
        self.bounds
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether the given element is selected.
    pub fn contains(&self, id: ElementId, kind: ElementKind) -> bool {
        self.selected.iter().any(|e| e.id == id && e.kind == kind)
    }

    /// Clears the selection and any in-progress gesture.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.bounds = None;
        self.phase = DrawPhase::Idle;
    }

    /// Starts a draw-selection gesture at a document-space point.
    pub fn begin_draw(&mut self, start: Point) {
        self.phase = DrawPhase::Drawing {
            start,
            current: start,
        };
    }

    /// Updates the gesture and returns the preview rectangle.
    pub fn update_draw(&mut self, current: Point) -> Option<Rect> {
        match self.phase {
            DrawPhase::Drawing { start, .. } => {
                self.phase = DrawPhase::Drawing { start, current };
                Some(Rect::from_corners(start, current))
            }
            DrawPhase::Idle => None,
        }
    }

    /// The preview rectangle of an in-progress gesture.
    pub fn draw_rect(&self) -> Option<Rect> {
        match self.phase {
            DrawPhase::Drawing { start, current } => Some(Rect::from_corners(start, current)),
            DrawPhase::Idle => None,
        }
    }

    /// Finishes the gesture against one page of one view bucket.
    ///
    /// Rectangles at or below the 5x5 document-space threshold are
    /// discarded: with `additive` false the existing selection is cleared
    /// (the gesture degrades to a click-outside), with `additive` true it
    /// is preserved untouched. Above the threshold, matches replace the
    /// selection, or union into it (deduplicated by id) when `additive`.
    ///
    /// Returns the number of currently selected elements.
    pub fn finish_draw(
        &mut self,
        store: &ElementStore,
        view: DocumentView,
        page: u32,
        additive: bool,
    ) -> usize {
        let rect = match self.phase {
            DrawPhase::Drawing { start, current } => Rect::from_corners(start, current),
            DrawPhase::Idle => return self.selected.len(),
        };
        self.phase = DrawPhase::Idle;

        if !rect.exceeds_min_size(SELECTION_MIN_SIZE) {
            if !additive {
                self.selected.clear();
                self.bounds = None;
            }
            return self.selected.len();
        }

        let text_fields: Vec<&TextField> = store
            .text_fields(view)
            .into_iter()
            .filter(|f| f.page == page)
            .collect();
        let shapes: Vec<&ShapeElement> = store
            .shapes(view)
            .into_iter()
            .filter(|s| s.page == page)
            .collect();
        let images: Vec<&ImageElement> = store
            .images(view)
            .into_iter()
            .filter(|i| i.page == page)
            .collect();

        let found = find_elements_in_selection(&rect, &text_fields, &shapes, &images);

        if additive {
            for entry in found {
                if !self.contains(entry.id, entry.kind) {
                    self.selected.push(entry);
                }
            }
        } else {
            self.selected = found.into_vec();
        }

        self.recompute_bounds(store, view);
        self.selected.len()
    }

    /// Replaces the selection with a single element.
    pub fn select_single(&mut self, store: &ElementStore, view: DocumentView, id: ElementId) {
        self.clear();
        if let (Some(kind), Some(position)) = (store.kind_of(view, id), store.position_of(view, id))
        {
            self.selected.push(SelectedElement {
                id,
                kind,
                original_position: position,
            });
            self.recompute_bounds(store, view);
        }
    }

    /// Drops selection entries whose elements no longer exist.
    pub fn prune_stale(&mut self, store: &ElementStore, view: DocumentView) {
        self.selected
            .retain(|e| store.kind_of(view, e.id) == Some(e.kind));
        self.recompute_bounds(store, view);
    }

    /// Re-captures every entry's `original_position` from live state.
    ///
    /// Called after a committed drag so the next gesture computes deltas
    /// from the new positions.
    pub fn recapture_positions(&mut self, store: &ElementStore, view: DocumentView) {
        for entry in &mut self.selected {
            if let Some(position) = store.position_of(view, entry.id) {
                entry.original_position = position;
            }
        }
    }

    /// Recomputes the selection bounds from live element state.
    pub fn recompute_bounds(&mut self, store: &ElementStore, view: DocumentView) {
        self.bounds =
            calculate_selection_bounds(&self.selected, |id, _kind| store.rect_of(view, id));
    }
}
