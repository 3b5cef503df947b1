//! Editing model for a paginated document translation editor.
//!
//! This crate is the in-process core behind the editor UI: element
//! collections per view bucket, rectangle selection, group drag, tool
//! modes, z-ordering, undo/redo, and project persistence. It owns no
//! rendering and no transport; a UI shell feeds it pointer/keyboard events
//! and paints from its composed state.

pub mod compose;
pub mod coords;
pub mod drag;
pub mod editor;
pub mod elements;
pub mod format;
pub mod history;
pub mod project;
pub mod selection;
pub mod settings;
pub mod store;
pub mod text_capture;
pub mod tools;

pub use compose::{compose_page, SplitLayout};
pub use coords::{determine_clicked_view, document_to_screen, screen_to_document};
pub use drag::{move_selected_elements, DragMode, DragSession};
pub use editor::{Editor, ProjectMeta};
pub use elements::{
    DeletionRectangle, DeletionRectanglePatch, ElementRef, ImageElement, ImagePatch, LineEndpoints,
    ShapeElement, ShapeKind, ShapePatch, TextAlign, TextField, TextFieldPadding, TextFieldPatch,
};
pub use format::{FormatField, ShapeFormatSnapshot, TextFormatSnapshot};
pub use history::{EditorCommand, ElementMove, StoredElement, UndoRedoManager, ZOrderSnapshot};
pub use project::{ProjectState, PROJECT_FORMAT_VERSION};
pub use selection::{
    calculate_selection_bounds, find_elements_in_selection, SelectedElement, SelectionBounds,
    SelectionController,
};
pub use settings::EditorSettings;
pub use store::ElementStore;
pub use text_capture::{
    cover_text_fields, deletion_rectangle_from_span, text_field_from_span, TextSpanInfo,
};
pub use tools::{DrawGesture, EditorKey, Tool, ToolState};
