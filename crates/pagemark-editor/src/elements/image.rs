//! Image elements: user-uploaded pictures placed over the page.

use serde::{Deserialize, Serialize};

use pagemark_core::{constants::IMAGE_Z, ElementId, Rect};

use super::{default_border_color, default_opacity};

/// A placed image.
///
/// `src` is an opaque reference (object URL, data URI, or asset key)
/// resolved by the rendering shell; the core never loads image bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// 1-based page number.
    pub page: u32,
    pub src: String,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default)]
    pub border_width: f64,
    #[serde(default)]
    pub border_radius: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Rotation in degrees around the image center.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_image_z")]
    pub z_index: i32,
}

fn default_image_z() -> i32 {
    IMAGE_Z
}

impl ImageElement {
    /// Creates an image element with default styling.
    pub fn new(
        id: ElementId,
        src: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        page: u32,
    ) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            page,
            src: src.into(),
            border_color: default_border_color(),
            border_width: 0.0,
            border_radius: 0.0,
            opacity: 1.0,
            rotation: 0.0,
            z_index: IMAGE_Z,
        }
    }

    /// The image's bounding rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Partial update for an image element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub src: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<f64>,
    pub border_radius: Option<f64>,
    pub opacity: Option<f64>,
    pub rotation: Option<f64>,
}

impl ImagePatch {
    /// A patch that only moves the image.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    /// Applies every populated field to the target.
    pub fn apply(&self, target: &mut ImageElement) {
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
        if let Some(ref src) = self.src {
            target.src = src.clone();
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
        if let Some(opacity) = self.opacity {
            target.opacity = opacity;
        }
        if let Some(rotation) = self.rotation {
            target.rotation = rotation;
        }
    }
}
