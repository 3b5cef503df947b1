//! Element kinds of the editing model.
//!
//! Four kinds of page-scoped visual elements exist: text fields, shapes,
//! images, and deletion rectangles. All positions and sizes are stored in
//! normalized document coordinates (zoom scale 1.0). Each element carries
//! the 1-based page number it belongs to and a z-index controlling paint
//! order within its view bucket.

use pagemark_core::{ElementId, ElementKind, Rect};

mod deletion_rectangle;
mod image;
mod shape;
mod text_field;

pub use deletion_rectangle::{DeletionRectangle, DeletionRectanglePatch};
pub use image::{ImageElement, ImagePatch};
pub use shape::{LineEndpoints, ShapeElement, ShapeKind, ShapePatch};
pub use text_field::{TextAlign, TextField, TextFieldPadding, TextFieldPatch};

/// A borrowed, kind-tagged view of any element.
///
/// This is the dispatch point for code that treats elements of different
/// kinds uniformly (composition, hit-testing, format snapshots). Matching
/// on it is exhaustive, so adding a kind surfaces every site that needs
/// updating.
#[derive(Debug, Clone, Copy)]
pub enum ElementRef<'a> {
    TextField(&'a TextField),
    Shape(&'a ShapeElement),
    Image(&'a ImageElement),
    DeletionRectangle(&'a DeletionRectangle),
}

impl<'a> ElementRef<'a> {
    /// The element's id.
    pub fn id(&self) -> ElementId {
        match self {
            ElementRef::TextField(e) => e.id,
            ElementRef::Shape(e) => e.id,
            ElementRef::Image(e) => e.id,
            ElementRef::DeletionRectangle(e) => e.id,
        }
    }

    /// The element's kind tag.
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementRef::TextField(_) => ElementKind::TextField,
            ElementRef::Shape(_) => ElementKind::Shape,
            ElementRef::Image(_) => ElementKind::Image,
            ElementRef::DeletionRectangle(_) => ElementKind::DeletionRectangle,
        }
    }

    /// The 1-based page the element belongs to.
    pub fn page(&self) -> u32 {
        match self {
            ElementRef::TextField(e) => e.page,
            ElementRef::Shape(e) => e.page,
            ElementRef::Image(e) => e.page,
            ElementRef::DeletionRectangle(e) => e.page,
        }
    }

    /// The element's bounding rectangle in normalized document coordinates.
    pub fn bounds(&self) -> Rect {
        match self {
            ElementRef::TextField(e) => e.bounds(),
            ElementRef::Shape(e) => e.bounds(),
            ElementRef::Image(e) => e.bounds(),
            ElementRef::DeletionRectangle(e) => e.bounds(),
        }
    }

    /// The element's z-index.
    pub fn z_index(&self) -> i32 {
        match self {
            ElementRef::TextField(e) => e.z_index,
            ElementRef::Shape(e) => e.z_index,
            ElementRef::Image(e) => e.z_index,
            ElementRef::DeletionRectangle(e) => e.z_index,
        }
    }

    /// Whether the element participates in rectangle selection.
    ///
    /// Deletion rectangles are background decoration and are never
    /// selectable.
    pub fn selectable(&self) -> bool {
        !matches!(self, ElementRef::DeletionRectangle(_))
    }
}

/// Default CSS text color.
pub(crate) fn default_text_color() -> String {
    "#000000".to_string()
}

/// Default transparent background sentinel.
pub(crate) fn default_transparent() -> String {
    "transparent".to_string()
}

/// Serde default: full opacity.
pub(crate) fn default_opacity() -> f64 {
    1.0
}

/// Serde default: no border.
pub(crate) fn default_border_color() -> String {
    "#000000".to_string()
}
