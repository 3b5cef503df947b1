//! Editor configuration.
//!
//! Styling defaults applied to freshly created elements. Gesture
//! thresholds and zoom limits are behavioral constants, not settings, and
//! live in `pagemark-core::constants`.

use serde::{Deserialize, Serialize};

/// User-configurable defaults for new elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorSettings {
    /// Font family for newly placed text boxes.
    pub default_font_family: String,
    /// Font size for newly placed text boxes.
    pub default_font_size: f64,
    /// Text color for newly placed text boxes.
    pub default_text_color: String,
    /// Size of a click-placed text box, in document units.
    pub new_text_box_width: f64,
    pub new_text_box_height: f64,
    /// Fill for newly drawn shapes.
    pub default_shape_fill: String,
    /// Border color for newly drawn shapes.
    pub default_shape_border: String,
    /// Border width for newly drawn shapes.
    pub default_shape_border_width: f64,
    /// Opacity of erasure-drawn deletion rectangles.
    pub deletion_rectangle_opacity: f64,
    /// Fallback page background when detection yields nothing.
    pub page_background_fallback: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_font_family: "Arial".to_string(),
            default_font_size: 12.0,
            default_text_color: "#000000".to_string(),
            new_text_box_width: 150.0,
            new_text_box_height: 40.0,
            default_shape_fill: "transparent".to_string(),
            default_shape_border: "#000000".to_string(),
            default_shape_border_width: 1.0,
            deletion_rectangle_opacity: 1.0,
            page_background_fallback: "#ffffff".to_string(),
        }
    }
}
