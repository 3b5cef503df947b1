//! Text field elements: user-placed or span-derived overlay text boxes.

use serde::{Deserialize, Serialize};

use pagemark_core::{constants::TEXT_FIELD_Z, ElementId, Rect};

use super::{default_border_color, default_opacity, default_text_color};

/// Horizontal text alignment inside a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Per-side inner padding of a text field, in document units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextFieldPadding {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

impl TextFieldPadding {
    /// Uniform padding on all four sides.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// An overlay text box.
///
/// Every style property is optional-with-fallback in the persistence
/// payload: a payload missing a style field deserializes to the same
/// defaults a freshly placed text box gets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextField {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// 1-based page number.
    pub page: u32,
    #[serde(default)]
    pub value: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// CSS font weight (400 normal, 700 bold).
    #[serde(default = "default_font_weight")]
    pub font_weight: u16,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default = "default_text_color")]
    pub color: String,
    #[serde(default = "super::default_transparent")]
    pub background_color: String,
    #[serde(default = "default_opacity")]
    pub background_opacity: f64,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default)]
    pub border_width: f64,
    #[serde(default)]
    pub border_radius: f64,
    /// Per-corner radii override the uniform radius when non-zero.
    #[serde(default)]
    pub border_radius_top_left: f64,
    #[serde(default)]
    pub border_radius_top_right: f64,
    #[serde(default)]
    pub border_radius_bottom_left: f64,
    #[serde(default)]
    pub border_radius_bottom_right: f64,
    #[serde(default)]
    pub padding: TextFieldPadding,
    #[serde(default)]
    pub text_align: TextAlign,
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    #[serde(default)]
    pub letter_spacing: f64,
    /// Rotation in degrees around the box center.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_text_field_z")]
    pub z_index: i32,
    /// True while the field has an active inline edit session. Transient;
    /// persisted payloads always carry `false`.
    #[serde(default)]
    pub is_editing: bool,
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_font_size() -> f64 {
    12.0
}

fn default_font_weight() -> u16 {
    400
}

fn default_line_height() -> f64 {
    1.2
}

fn default_text_field_z() -> i32 {
    TEXT_FIELD_Z
}

impl TextField {
    /// Creates a text field with default styling at the given position.
    pub fn new(id: ElementId, x: f64, y: f64, width: f64, height: f64, page: u32) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            page,
            value: String::new(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_weight: default_font_weight(),
            italic: false,
            underline: false,
            strikethrough: false,
            color: default_text_color(),
            background_color: super::default_transparent(),
            background_opacity: 1.0,
            border_color: default_border_color(),
            border_width: 0.0,
            border_radius: 0.0,
            border_radius_top_left: 0.0,
            border_radius_top_right: 0.0,
            border_radius_bottom_left: 0.0,
            border_radius_bottom_right: 0.0,
            padding: TextFieldPadding::default(),
            text_align: TextAlign::Left,
            line_height: default_line_height(),
            letter_spacing: 0.0,
            rotation: 0.0,
            z_index: TEXT_FIELD_Z,
            is_editing: false,
        }
    }

    /// The field's bounding rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Partial update for a text field.
///
/// Only fields that are `Some` are applied. Format-panel edits and drag
/// commits both travel through this type so every mutation path hits the
/// same code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFieldPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub value: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<u16>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strikethrough: Option<bool>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub background_opacity: Option<f64>,
    pub border_color: Option<String>,
    pub border_width: Option<f64>,
    pub border_radius: Option<f64>,
    pub border_radius_top_left: Option<f64>,
    pub border_radius_top_right: Option<f64>,
    pub border_radius_bottom_left: Option<f64>,
    pub border_radius_bottom_right: Option<f64>,
    pub padding: Option<TextFieldPadding>,
    pub text_align: Option<TextAlign>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub rotation: Option<f64>,
    pub is_editing: Option<bool>,
}

impl TextFieldPatch {
    /// A patch that only moves the field.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    /// A patch that only resizes the field.
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    /// Applies every populated field to the target.
    ///
    /// Width and height are floored at zero; negative sizes never enter the
    /// store.
    pub fn apply(&self, target: &mut TextField) {
        if let Some(x) = self.x {
            target.x = x;
        }
        if let Some(y) = self.y {
            target.y = y;
        }
        if let Some(width) = self.width {
            target.width = width.max(0.0);
        }
        if let Some(height) = self.height {
            target.height = height.max(0.0);
        }
        if let Some(ref value) = self.value {
            target.value = value.clone();
        }
        if let Some(ref font_family) = self.font_family {
            target.font_family = font_family.clone();
        }
        if let Some(font_size) = self.font_size {
            target.font_size = font_size;
        }
        if let Some(font_weight) = self.font_weight {
            target.font_weight = font_weight;
        }
        if let Some(italic) = self.italic {
            target.italic = italic;
        }
        if let Some(underline) = self.underline {
            target.underline = underline;
        }
        if let Some(strikethrough) = self.strikethrough {
            target.strikethrough = strikethrough;
        }
        if let Some(ref color) = self.color {
            target.color = color.clone();
        }
        if let Some(ref background_color) = self.background_color {
            target.background_color = background_color.clone();
        }
        if let Some(background_opacity) = self.background_opacity {
            target.background_opacity = background_opacity;
        }
        if let Some(ref border_color) = self.border_color {
            target.border_color = border_color.clone();
        }
        if let Some(border_width) = self.border_width {
            target.border_width = border_width;
        }
        if let Some(border_radius) = self.border_radius {
            target.border_radius = border_radius;
        }
        if let Some(r) = self.border_radius_top_left {
            target.border_radius_top_left = r;
        }
        if let Some(r) = self.border_radius_top_right {
            target.border_radius_top_right = r;
        }
        if let Some(r) = self.border_radius_bottom_left {
            target.border_radius_bottom_left = r;
        }
        if let Some(r) = self.border_radius_bottom_right {
            target.border_radius_bottom_right = r;
        }
        if let Some(padding) = self.padding {
            target.padding = padding;
        }
        if let Some(text_align) = self.text_align {
            target.text_align = text_align;
        }
        if let Some(line_height) = self.line_height {
            target.line_height = line_height;
        }
        if let Some(letter_spacing) = self.letter_spacing {
            target.letter_spacing = letter_spacing;
        }
        if let Some(rotation) = self.rotation {
            target.rotation = rotation;
        }
        if let Some(is_editing) = self.is_editing {
            target.is_editing = is_editing;
        }
    }
}
