//! # Pagemark Core
//!
//! Shared foundation for the pagemark editing model:
//!
//! - **Geometry**: points, sizes, rectangles and the boundary-clamp policy
//!   used by every move/resize path
//! - **Types**: view buckets, view modes, split panes, page metrics, element
//!   ids and kinds
//! - **Constants**: the split-view gap, gesture thresholds, z-order bands,
//!   zoom limits
//! - **Errors**: typed errors for the persistence boundary
//!
//! All element coordinates across the workspace are *normalized document
//! coordinates*: positions and sizes as they would be at zoom scale 1.0,
//! independent of the on-screen zoom level.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod types;

pub use constants::{
    DELETION_RECTANGLE_Z, ERASURE_COMMIT_MIN_SIZE, IMAGE_Z, MAX_SCALE, MIN_SCALE, SCALE_STEP,
    SELECTION_MIN_SIZE, SHAPE_COMMIT_MIN_SIZE, SHAPE_Z, SPLIT_VIEW_GAP, TEXT_FIELD_Z,
};
pub use error::ProjectError;
pub use geometry::{clamp_position, Point, Rect, Size};
pub use types::{
    DocumentView, ElementId, ElementKind, PageMetrics, PaneSide, ViewMode, WorkflowStep,
};
