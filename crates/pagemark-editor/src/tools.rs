//! Editing tool modes and their draw-gesture sub-state machines.
//!
//! Tools are mutually exclusive: activating one resets every other tool
//! flag and all in-progress draw state before the new tool's flags are
//! set. Clicking an individual element forcibly exits the selection-style
//! modes.

use pagemark_core::{Point, Rect, ERASURE_COMMIT_MIN_SIZE, SHAPE_COMMIT_MIN_SIZE};

use crate::elements::ShapeKind;

/// The active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// No tool active; clicks select individual elements.
    #[default]
    None,
    /// Draw-rectangle multi-selection.
    Selection,
    /// Extraction of rendered PDF text spans.
    TextSelection,
    /// Click-to-place text boxes.
    AddTextBox,
    /// Drag-to-draw shapes of the given kind.
    ShapeDrawing(ShapeKind),
    /// Drag-to-draw deletion rectangles.
    Erasure,
}

/// Phase of a drag-to-draw gesture (shape drawing or erasure).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawGesture {
    #[default]
    Idle,
    Drawing {
        start: Point,
        current: Point,
    },
}

impl DrawGesture {
    /// The gesture's preview rectangle, if drawing.
    pub fn rect(&self) -> Option<Rect> {
        match self {
            DrawGesture::Drawing { start, current } => Some(Rect::from_corners(*start, *current)),
            DrawGesture::Idle => None,
        }
    }
}

/// Global keyboard shortcuts handled while the editor has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    ZoomIn,
    ZoomOut,
    ZoomReset,
    /// Clears the multi-selection.
    Escape,
    /// Creates deletion rectangles for all selected text boxes.
    CoverSelectedTextBoxes,
}

/// The tool-mode state machine.
#[derive(Debug, Clone, Default)]
pub struct ToolState {
    tool: Tool,
    shape_draw: DrawGesture,
    erasure_draw: DrawGesture,
}

impl ToolState {
    /// Creates the state machine with no tool active.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Activates a tool, resetting every other mode and all in-progress
    /// draw state first. Activating the already-active tool resets its
    /// draw state back to idle.
    pub fn activate(&mut self, tool: Tool) {
        self.shape_draw = DrawGesture::Idle;
        self.erasure_draw = DrawGesture::Idle;
        self.tool = tool;
    }

    /// Deactivates everything (back to `Tool::None`).
    pub fn reset(&mut self) {
        self.activate(Tool::None);
    }

    /// Reacts to an individual element being clicked.
    ///
    /// Selecting an element forcibly exits the selection, text-selection
    /// and add-text-box modes. Returns `true` when the caller must also
    /// clear any in-progress multi-selection.
    pub fn on_element_selected(&mut self) -> bool {
        match self.tool {
            Tool::Selection | Tool::TextSelection | Tool::AddTextBox => {
                self.activate(Tool::None);
                true
            }
            _ => false,
        }
    }

    // ---- shape drawing -----------------------------------------------

    /// Starts a shape-drawing gesture; no-op unless a shape tool is
    /// active.
    pub fn begin_shape(&mut self, start: Point) {
        if matches!(self.tool, Tool::ShapeDrawing(_)) {
            self.shape_draw = DrawGesture::Drawing {
                start,
                current: start,
            };
        }
    }

    /// Updates the gesture endpoint and returns the preview rectangle.
    pub fn update_shape(&mut self, current: Point) -> Option<Rect> {
        if let DrawGesture::Drawing { start, .. } = self.shape_draw {
            self.shape_draw = DrawGesture::Drawing { start, current };
            return self.shape_draw.rect();
        }
        None
    }

    /// The shape gesture's preview rectangle.
    pub fn shape_preview(&self) -> Option<Rect> {
        self.shape_draw.rect()
    }

    /// Finishes the gesture. Returns the shape kind and rectangle when the
    /// drawn rectangle exceeds the 10x10 commit threshold; below it the
    /// gesture is discarded and no element is created.
    pub fn finish_shape(&mut self) -> Option<(ShapeKind, Rect)> {
        let Tool::ShapeDrawing(kind) = self.tool else {
            self.shape_draw = DrawGesture::Idle;
            return None;
        };
        let rect = self.shape_draw.rect();
        self.shape_draw = DrawGesture::Idle;
        rect.filter(|r| r.exceeds_min_size(SHAPE_COMMIT_MIN_SIZE))
            .map(|r| (kind, r))
    }

    // ---- erasure ------------------------------------------------------

    /// Starts an erasure gesture; no-op unless the erasure tool is active.
    pub fn begin_erasure(&mut self, start: Point) {
        if self.tool == Tool::Erasure {
            self.erasure_draw = DrawGesture::Drawing {
                start,
                current: start,
            };
        }
    }

    /// Updates the gesture endpoint and returns the preview rectangle.
    pub fn update_erasure(&mut self, current: Point) -> Option<Rect> {
        if let DrawGesture::Drawing { start, .. } = self.erasure_draw {
            self.erasure_draw = DrawGesture::Drawing { start, current };
            return self.erasure_draw.rect();
        }
        None
    }

    /// The erasure gesture's preview rectangle.
    pub fn erasure_preview(&self) -> Option<Rect> {
        self.erasure_draw.rect()
    }

    /// Finishes the gesture. Returns the rectangle to blank out when it
    /// exceeds the 5x5 commit threshold.
    pub fn finish_erasure(&mut self) -> Option<Rect> {
        let rect = self.erasure_draw.rect();
        self.erasure_draw = DrawGesture::Idle;
        if self.tool != Tool::Erasure {
            return None;
        }
        rect.filter(|r| r.exceeds_min_size(ERASURE_COMMIT_MIN_SIZE))
    }
}
