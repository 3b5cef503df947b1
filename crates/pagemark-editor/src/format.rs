//! Format-panel state: field-wise style snapshots of a multi-selection.
//!
//! The panel shows one control per style field. When every selected
//! element agrees on a field the control shows that value; when they
//! disagree it shows an indeterminate state. Snapshots are synthesized
//! directly from live element state, so the panel never lags an edit.

use pagemark_core::{DocumentView, ElementId, ElementKind};

use crate::elements::{
    ShapeElement, ShapeKind, ShapePatch, TextAlign, TextField, TextFieldPatch,
};
use crate::selection::SelectedElement;
use crate::store::ElementStore;

/// One style field aggregated across a selection.
///
/// `value` holds the shared value when `consistent`, otherwise `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatField<T> {
    pub value: Option<T>,
    pub consistent: bool,
}

impl<T: PartialEq + Clone> FormatField<T> {
    fn aggregate<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return Self {
                value: None,
                consistent: false,
            };
        };
        for value in iter {
            if value != first {
                return Self {
                    value: None,
                    consistent: false,
                };
            }
        }
        Self {
            value: Some(first),
            consistent: true,
        }
    }
}

/// Aggregated typography and styling of the selected text fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFormatSnapshot {
    pub font_family: FormatField<String>,
    pub font_size: FormatField<f64>,
    pub font_weight: FormatField<u16>,
    pub italic: FormatField<bool>,
    pub underline: FormatField<bool>,
    pub strikethrough: FormatField<bool>,
    pub color: FormatField<String>,
    pub background_color: FormatField<String>,
    pub background_opacity: FormatField<f64>,
    pub border_color: FormatField<String>,
    pub border_width: FormatField<f64>,
    pub border_radius: FormatField<f64>,
    pub text_align: FormatField<TextAlign>,
    pub line_height: FormatField<f64>,
    pub letter_spacing: FormatField<f64>,
}

impl TextFormatSnapshot {
    /// Aggregates every style field across the given text fields.
    pub fn from_fields(fields: &[&TextField]) -> Self {
        Self {
            font_family: FormatField::aggregate(fields.iter().map(|f| f.font_family.clone())),
            font_size: FormatField::aggregate(fields.iter().map(|f| f.font_size)),
            font_weight: FormatField::aggregate(fields.iter().map(|f| f.font_weight)),
            italic: FormatField::aggregate(fields.iter().map(|f| f.italic)),
            underline: FormatField::aggregate(fields.iter().map(|f| f.underline)),
            strikethrough: FormatField::aggregate(fields.iter().map(|f| f.strikethrough)),
            color: FormatField::aggregate(fields.iter().map(|f| f.color.clone())),
            background_color: FormatField::aggregate(
                fields.iter().map(|f| f.background_color.clone()),
            ),
            background_opacity: FormatField::aggregate(
                fields.iter().map(|f| f.background_opacity),
            ),
            border_color: FormatField::aggregate(fields.iter().map(|f| f.border_color.clone())),
            border_width: FormatField::aggregate(fields.iter().map(|f| f.border_width)),
            border_radius: FormatField::aggregate(fields.iter().map(|f| f.border_radius)),
            text_align: FormatField::aggregate(fields.iter().map(|f| f.text_align)),
            line_height: FormatField::aggregate(fields.iter().map(|f| f.line_height)),
            letter_spacing: FormatField::aggregate(fields.iter().map(|f| f.letter_spacing)),
        }
    }

    /// Snapshot of the text fields inside a selection.
    pub fn from_selection(
        store: &ElementStore,
        view: DocumentView,
        selected: &[SelectedElement],
    ) -> Self {
        let fields: Vec<&TextField> = selected
            .iter()
            .filter(|e| e.kind == ElementKind::TextField)
            .filter_map(|e| store.text_field(view, e.id))
            .collect();
        Self::from_fields(&fields)
    }
}

/// Aggregated styling of the selected shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFormatSnapshot {
    pub kind: FormatField<ShapeKind>,
    pub fill_color: FormatField<String>,
    pub fill_opacity: FormatField<f64>,
    pub border_color: FormatField<String>,
    pub border_width: FormatField<f64>,
    pub border_radius: FormatField<f64>,
    pub rotation: FormatField<f64>,
}

impl ShapeFormatSnapshot {
    /// Aggregates every style field across the given shapes.
    pub fn from_shapes(shapes: &[&ShapeElement]) -> Self {
        Self {
            kind: FormatField::aggregate(shapes.iter().map(|s| s.kind)),
            fill_color: FormatField::aggregate(shapes.iter().map(|s| s.fill_color.clone())),
            fill_opacity: FormatField::aggregate(shapes.iter().map(|s| s.fill_opacity)),
            border_color: FormatField::aggregate(shapes.iter().map(|s| s.border_color.clone())),
            border_width: FormatField::aggregate(shapes.iter().map(|s| s.border_width)),
            border_radius: FormatField::aggregate(shapes.iter().map(|s| s.border_radius)),
            rotation: FormatField::aggregate(shapes.iter().map(|s| s.rotation)),
        }
    }

    /// Snapshot of the shapes inside a selection.
    pub fn from_selection(
        store: &ElementStore,
        view: DocumentView,
        selected: &[SelectedElement],
    ) -> Self {
        let shapes: Vec<&ShapeElement> = selected
            .iter()
            .filter(|e| e.kind == ElementKind::Shape)
            .filter_map(|e| store.shape(view, e.id))
            .collect();
        Self::from_shapes(&shapes)
    }
}

/// Applies a style patch to every selected text field, returning the ids
/// that were actually updated.
pub fn patch_selected_text_fields(
    store: &mut ElementStore,
    view: DocumentView,
    selected: &[SelectedElement],
    patch: &TextFieldPatch,
    ongoing: bool,
) -> Vec<ElementId> {
    selected
        .iter()
        .filter(|e| e.kind == ElementKind::TextField)
        .filter(|e| store.update_text_field(view, e.id, patch, ongoing).is_some())
        .map(|e| e.id)
        .collect()
}

/// Applies a style patch to every selected shape, returning the ids that
/// were actually updated.
pub fn patch_selected_shapes(
    store: &mut ElementStore,
    view: DocumentView,
    selected: &[SelectedElement],
    patch: &ShapePatch,
    ongoing: bool,
) -> Vec<ElementId> {
    selected
        .iter()
        .filter(|e| e.kind == ElementKind::Shape)
        .filter(|e| store.update_shape(view, e.id, patch, ongoing).is_some())
        .map(|e| e.id)
        .collect()
}
