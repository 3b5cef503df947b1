//! Workspace-wide constants for the editing model.

/// Width in screen pixels of the gap between the original and translated
/// panes in split view.
///
/// This is a raw pixel constant: it is *not* multiplied by the zoom scale
/// when correcting pointer offsets for the translated pane. Stored element
/// coordinates stay zoom independent because only the pane offset
/// (`page_width * scale + SPLIT_VIEW_GAP`) is subtracted before dividing
/// by the scale.
pub const SPLIT_VIEW_GAP: f64 = 20.0;

/// Minimum width and height (document units) a drawn rectangle must exceed
/// before it is treated as a selection gesture rather than a click.
pub const SELECTION_MIN_SIZE: f64 = 5.0;

/// Minimum width and height (document units) a shape-drawing gesture must
/// exceed before a shape element is created.
pub const SHAPE_COMMIT_MIN_SIZE: f64 = 10.0;

/// Minimum width and height (document units) an erasure gesture must exceed
/// before a deletion rectangle is created.
pub const ERASURE_COMMIT_MIN_SIZE: f64 = 5.0;

/// Default z-index band for deletion rectangles (painted first).
pub const DELETION_RECTANGLE_Z: i32 = 0;

/// Default z-index band for shapes.
pub const SHAPE_Z: i32 = 2;

/// Default z-index band for images.
pub const IMAGE_Z: i32 = 3;

/// Default z-index band for text fields (painted last).
pub const TEXT_FIELD_Z: i32 = 4;

/// Minimum zoom scale.
pub const MIN_SCALE: f64 = 0.1;

/// Maximum zoom scale.
pub const MAX_SCALE: f64 = 5.0;

/// Multiplicative step applied by zoom in/out.
pub const SCALE_STEP: f64 = 1.2;
