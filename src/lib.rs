//! # pagemark
//!
//! An editing core for a paginated PDF translation editor:
//! - Element model: text boxes, shapes, images, deletion rectangles
//! - Three independent view buckets (original, translated, final layout)
//! - Rectangle selection, group drag, tool modes, z-ordering
//! - Undo/redo with gesture coalescing
//! - JSON project persistence
//!
//! ## Architecture
//!
//! pagemark is organized as a workspace with two crates:
//!
//! 1. **pagemark-core** - Geometry, shared types, constants, errors
//! 2. **pagemark-editor** - The editing model and the `Editor` facade
//!
//! The core holds no rendering and no transport. A UI shell renders pages,
//! feeds pointer/keyboard events into [`Editor`], and paints overlays from
//! the composed state it reads back.

pub use pagemark_core::{
    clamp_position, constants, DocumentView, ElementId, ElementKind, PageMetrics, PaneSide, Point,
    ProjectError, Rect, Size, ViewMode, WorkflowStep,
};

pub use pagemark_editor::{
    compose_page, determine_clicked_view, document_to_screen, screen_to_document, DeletionRectangle,
    DeletionRectanglePatch, DragMode, DragSession, DrawGesture, Editor, EditorCommand, EditorKey,
    EditorSettings, ElementRef, ElementStore, FormatField, ImageElement, ImagePatch, LineEndpoints,
    ProjectMeta, ProjectState, SelectedElement, SelectionBounds, SelectionController,
    ShapeElement, ShapeFormatSnapshot, ShapeKind, ShapePatch, SplitLayout, TextAlign, TextField,
    TextFieldPadding, TextFieldPatch, TextFormatSnapshot, TextSpanInfo, Tool, ToolState,
    UndoRedoManager, PROJECT_FORMAT_VERSION,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
