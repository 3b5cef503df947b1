//! Capture of rendered PDF text spans as editable elements.
//!
//! The rendering shell extracts spans from the PDF text layer and hands
//! them over with screen-space bounds plus computed style. Conversion into
//! normalized document coordinates goes through `coords`, so captured
//! elements land exactly under the rendered glyphs at any zoom level.

use pagemark_core::{DocumentView, ElementId, ElementKind, PaneSide, Rect, ViewMode};

use crate::coords::screen_to_document;
use crate::elements::{DeletionRectangle, TextField};
use crate::selection::SelectedElement;
use crate::store::ElementStore;

/// A text span lifted from the rendered PDF text layer.
///
/// Bounds are client-space pixels; style values are the computed style of
/// the span node (font size in screen pixels at the current scale).
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpanInfo {
    pub text: String,
    /// 1-based page number.
    pub page: u32,
    pub bounds: Rect,
    pub font_family: String,
    /// Screen-pixel font size at the capture scale.
    pub font_size: f64,
    pub font_weight: u16,
    pub color: String,
}

/// Builds an editable text field over a captured span.
///
/// The span's screen bounds convert to normalized document coordinates and
/// its font size divides by the scale, so the field renders at the span's
/// exact position and size.
pub fn text_field_from_span(
    span: &TextSpanInfo,
    container: &Rect,
    scale: f64,
    pane: PaneSide,
    view_mode: ViewMode,
    page_width: f64,
) -> TextField {
    let origin = screen_to_document(
        span.bounds.x,
        span.bounds.y,
        container,
        scale,
        pane,
        view_mode,
        page_width,
    );
    let mut field = TextField::new(
        0,
        origin.x,
        origin.y,
        span.bounds.width / scale,
        span.bounds.height / scale,
        span.page,
    );
    field.value = span.text.clone();
    field.font_family = span.font_family.clone();
    field.font_size = span.font_size / scale;
    field.font_weight = span.font_weight;
    field.color = span.color.clone();
    field
}

/// Builds a deletion rectangle that blanks out a captured span.
pub fn deletion_rectangle_from_span(
    span: &TextSpanInfo,
    container: &Rect,
    scale: f64,
    pane: PaneSide,
    view_mode: ViewMode,
    page_width: f64,
    background: &str,
    opacity: f64,
) -> DeletionRectangle {
    let origin = screen_to_document(
        span.bounds.x,
        span.bounds.y,
        container,
        scale,
        pane,
        view_mode,
        page_width,
    );
    DeletionRectangle::new(
        0,
        origin.x,
        origin.y,
        span.bounds.width / scale,
        span.bounds.height / scale,
        span.page,
        background,
        opacity,
    )
}

/// Creates one deletion rectangle under each selected text box.
///
/// Covers the original content beneath translated overlays in one action.
/// Non-text-field selection entries and stale ids are skipped. Returns the
/// ids of the created rectangles.
pub fn cover_text_fields(
    store: &mut ElementStore,
    view: DocumentView,
    selected: &[SelectedElement],
    background: &str,
    opacity: f64,
) -> Vec<ElementId> {
    let mut covers = Vec::new();
    for entry in selected {
        if entry.kind != ElementKind::TextField {
            continue;
        }
        let Some(field) = store.text_field(view, entry.id) else {
            continue;
        };
        covers.push(DeletionRectangle::new(
            0,
            field.x,
            field.y,
            field.width,
            field.height,
            field.page,
            background,
            opacity,
        ));
    }
    covers
        .into_iter()
        .map(|rect| store.add_deletion_rectangle(view, rect))
        .collect()
}
