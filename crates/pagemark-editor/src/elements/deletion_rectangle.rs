//! Deletion rectangles: opaque patches that blank out original content so a
//! translated overlay can sit on top.

use serde::{Deserialize, Serialize};

use pagemark_core::{constants::DELETION_RECTANGLE_Z, ElementId, Rect};

use super::default_opacity;

/// An occluding patch painted in the page background color.
///
/// Deletion rectangles are background decoration: they are excluded from
/// rectangle selection and sit in the lowest z band by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionRectangle {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// 1-based page number.
    pub page: u32,
    /// CSS color, normally the detected page background.
    #[serde(default = "default_deletion_background")]
    pub background: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_deletion_z")]
    pub z_index: i32,
}

fn default_deletion_background() -> String {
    "#ffffff".to_string()
}

fn default_deletion_z() -> i32 {
    DELETION_RECTANGLE_Z
}

impl DeletionRectangle {
    /// Creates a deletion rectangle in the given background color.
    pub fn new(
        id: ElementId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        page: u32,
        background: impl Into<String>,
        opacity: f64,
    ) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            page,
            background: background.into(),
            opacity,
            z_index: DELETION_RECTANGLE_Z,
        }
    }

    /// The rectangle's bounds.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Partial update for a deletion rectangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionRectanglePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub background: Option<String>,
    pub opacity: Option<f64>,
}

impl DeletionRectanglePatch {
    /// Applies every populated field to the target.
    pub fn apply(&self, target: &mut DeletionRectangle) {
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
        if let Some(ref background) = self.background {
            target.background = background.clone();
        }
        if let Some(opacity) = self.opacity {
            target.opacity = opacity;
        }
    }
}
