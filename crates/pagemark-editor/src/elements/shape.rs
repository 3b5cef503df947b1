//! Shape elements: rectangles, circles, and lines drawn over the page.

use serde::{Deserialize, Serialize};

use pagemark_core::{constants::SHAPE_Z, ElementId, Rect};

use super::{default_border_color, default_opacity, default_transparent};

/// The drawable shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
    Line,
}

/// Explicit endpoints of a line shape, in normalized document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineEndpoints {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A shape element.
///
/// For lines, `endpoints` starts out `None` and the endpoints are derived
/// from the bounding box. Once a line is edited via its anchors the
/// endpoints become authoritative and the bounding box is recomputed from
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeElement {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// 1-based page number.
    pub page: u32,
    #[serde(rename = "type", default)]
    pub kind: ShapeKind,
    #[serde(default = "default_transparent")]
    pub fill_color: String,
    #[serde(default = "default_opacity")]
    pub fill_opacity: f64,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default = "default_shape_border_width")]
    pub border_width: f64,
    #[serde(default)]
    pub border_radius: f64,
    /// Rotation in degrees around the shape center.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_shape_z")]
    pub z_index: i32,
    /// Explicit line endpoints; authoritative over the bounding box when
    /// present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<LineEndpoints>,
}

fn default_shape_border_width() -> f64 {
    1.0
}

fn default_shape_z() -> i32 {
    SHAPE_Z
}

impl ShapeElement {
    /// Creates a shape with default styling from a bounding box.
    pub fn new(
        id: ElementId,
        kind: ShapeKind,
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
            kind,
            fill_color: default_transparent(),
            fill_opacity: 1.0,
            border_color: default_border_color(),
            border_width: default_shape_border_width(),
            border_radius: 0.0,
            rotation: 0.0,
            z_index: SHAPE_Z,
            endpoints: None,
        }
    }

    /// The shape's bounding rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The endpoints of a line shape.
    ///
    /// Falls back to the bounding-box diagonal (`(x, y)` to
    /// `(x + width, y + height)`) when no explicit endpoints exist.
    pub fn effective_endpoints(&self) -> LineEndpoints {
        self.endpoints.unwrap_or(LineEndpoints {
            x1: self.x,
            y1: self.y,
            x2: self.x + self.width,
            y2: self.y + self.height,
        })
    }

    /// Sets explicit line endpoints and recomputes the bounding box from
    /// their min/max extents.
    pub fn set_endpoints(&mut self, endpoints: LineEndpoints) {
        self.x = endpoints.x1.min(endpoints.x2);
        self.y = endpoints.y1.min(endpoints.y2);
        self.width = (endpoints.x2 - endpoints.x1).abs();
        self.height = (endpoints.y2 - endpoints.y1).abs();
        self.endpoints = Some(endpoints);
    }

    /// Moves the shape, carrying explicit endpoints along.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
        if let Some(ref mut ep) = self.endpoints {
            ep.x1 += dx;
            ep.y1 += dy;
            ep.x2 += dx;
            ep.y2 += dy;
        }
    }
}

/// Partial update for a shape element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub fill_color: Option<String>,
    pub fill_opacity: Option<f64>,
    pub border_color: Option<String>,
    pub border_width: Option<f64>,
    pub border_radius: Option<f64>,
    pub rotation: Option<f64>,
    pub endpoints: Option<LineEndpoints>,
}

impl ShapePatch {
    /// A patch that only moves the shape.
    ///
    /// Position patches preserve explicit line endpoints by translating
    /// them with the bounding box; `apply` handles that.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    /// Applies every populated field to the target.
    pub fn apply(&self, target: &mut ShapeElement) {
        // Endpoint updates win over box updates: they rewrite the box.
        if let Some(endpoints) = self.endpoints {
            target.set_endpoints(endpoints);
        } else {
            let dx = self.x.map(|x| x - target.x).unwrap_or(0.0);
            let dy = self.y.map(|y| y - target.y).unwrap_or(0.0);
            if dx != 0.0 || dy != 0.0 {
                target.translate(dx, dy);
            }
            if let Some(width) = self.width {
                target.width = width.max(0.0);
                // A resized line loses stored endpoints; they re-derive
                // from the new box until the anchors are used again.
                target.endpoints = None;
            }
            if let Some(height) = self.height {
                target.height = height.max(0.0);
                target.endpoints = None;
            }
        }
        if let Some(ref fill_color) = self.fill_color {
            target.fill_color = fill_color.clone();
        }
        if let Some(fill_opacity) = self.fill_opacity {
            target.fill_opacity = fill_opacity;
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
        if let Some(rotation) = self.rotation {
            target.rotation = rotation;
        }
    }
}
