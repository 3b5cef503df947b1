//! Project persistence: the JSON payload and file I/O.
//!
//! The payload is a single flat object: every element collection of every
//! view bucket lives at the top level under a semantic camelCase key
//! (`originalTextBoxes`, `translatedShapes`,
//! `finalLayoutDeletionRectangles`, ...), alongside page metrics, workflow
//! position, and project metadata. Unknown fields are ignored on load and
//! every optional style field falls back to its default, so payloads
//! written by older builds keep loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use pagemark_core::{DocumentView, ElementId, PageMetrics, ProjectError, WorkflowStep};

use crate::editor::Editor;
use crate::elements::{DeletionRectangle, ImageElement, ShapeElement, TextField};
use crate::store::ElementStore;

/// Current payload format version.
pub const PROJECT_FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    PROJECT_FORMAT_VERSION
}

fn default_current_page() -> u32 {
    1
}

/// The on-disk project state.
///
/// The snake_case collection fields serialize to the flat semantic keys
/// via `rename_all`: `original_text_boxes` becomes `originalTextBoxes`,
/// `final_layout_layer_order` becomes `finalLayoutLayerOrder`, and so on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "Uuid::new_v4")]
    pub project_id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub modified_at: DateTime<Utc>,
    pub num_pages: u32,
    #[serde(default = "default_current_page")]
    pub current_page: u32,
    #[serde(default)]
    pub current_workflow_step: WorkflowStep,
    #[serde(default)]
    pub source_language: String,
    #[serde(default)]
    pub desired_language: String,
    /// Page number to rendered page dimensions and background.
    #[serde(default)]
    pub page_metrics: BTreeMap<u32, PageMetrics>,

    #[serde(default)]
    pub original_text_boxes: Vec<TextField>,
    #[serde(default)]
    pub original_shapes: Vec<ShapeElement>,
    #[serde(default)]
    pub original_images: Vec<ImageElement>,
    #[serde(default)]
    pub original_deletion_rectangles: Vec<DeletionRectangle>,
    #[serde(default)]
    pub original_layer_order: Vec<ElementId>,

    #[serde(default)]
    pub translated_text_boxes: Vec<TextField>,
    #[serde(default)]
    pub translated_shapes: Vec<ShapeElement>,
    #[serde(default)]
    pub translated_images: Vec<ImageElement>,
    #[serde(default)]
    pub translated_deletion_rectangles: Vec<DeletionRectangle>,
    #[serde(default)]
    pub translated_layer_order: Vec<ElementId>,

    #[serde(default)]
    pub final_layout_text_boxes: Vec<TextField>,
    #[serde(default)]
    pub final_layout_shapes: Vec<ShapeElement>,
    #[serde(default)]
    pub final_layout_images: Vec<ImageElement>,
    #[serde(default)]
    pub final_layout_deletion_rectangles: Vec<DeletionRectangle>,
    #[serde(default)]
    pub final_layout_layer_order: Vec<ElementId>,
}

/// Borrowed view over one bucket's collections inside the payload.
struct ViewCollections<'a> {
    text_boxes: &'a [TextField],
    shapes: &'a [ShapeElement],
    images: &'a [ImageElement],
    deletion_rectangles: &'a [DeletionRectangle],
    layer_order: &'a [ElementId],
}

fn cloned_text_fields(store: &ElementStore, view: DocumentView) -> Vec<TextField> {
    store.text_fields(view).into_iter().cloned().collect()
}

fn cloned_shapes(store: &ElementStore, view: DocumentView) -> Vec<ShapeElement> {
    store.shapes(view).into_iter().cloned().collect()
}

fn cloned_images(store: &ElementStore, view: DocumentView) -> Vec<ImageElement> {
    store.images(view).into_iter().cloned().collect()
}

fn cloned_deletion_rectangles(store: &ElementStore, view: DocumentView) -> Vec<DeletionRectangle> {
    store.deletion_rectangles(view).into_iter().cloned().collect()
}

fn restore_view(store: &mut ElementStore, view: DocumentView, collections: &ViewCollections<'_>) {
    for field in collections.text_boxes {
        let mut field = field.clone();
        // Edit sessions are transient and never survive a reload.
        field.is_editing = false;
        let index = store.len(view);
        store.restore_text_field(view, field, index);
    }
    for shape in collections.shapes {
        let index = store.len(view);
        store.restore_shape(view, shape.clone(), index);
    }
    for image in collections.images {
        let index = store.len(view);
        store.restore_image(view, image.clone(), index);
    }
    for rect in collections.deletion_rectangles {
        let index = store.len(view);
        store.restore_deletion_rectangle(view, rect.clone(), index);
    }
    store.set_layer_order(view, collections.layer_order);
}

impl ProjectState {
    /// Captures the editor's full document state into a payload.
    pub fn from_editor(editor: &Editor) -> Self {
        let meta = editor.meta();
        let store = editor.store();
        Self {
            version: PROJECT_FORMAT_VERSION,
            project_id: meta.project_id,
            name: meta.name.clone(),
            created_at: meta.created_at,
            modified_at: Utc::now(),
            num_pages: editor.num_pages(),
            current_page: editor.current_page(),
            current_workflow_step: editor.workflow_step(),
            source_language: meta.source_language.clone(),
            desired_language: meta.desired_language.clone(),
            page_metrics: editor.all_page_metrics().clone(),

            original_text_boxes: cloned_text_fields(store, DocumentView::Original),
            original_shapes: cloned_shapes(store, DocumentView::Original),
            original_images: cloned_images(store, DocumentView::Original),
            original_deletion_rectangles: cloned_deletion_rectangles(store, DocumentView::Original),
            original_layer_order: store.layer_order(DocumentView::Original).to_vec(),

            translated_text_boxes: cloned_text_fields(store, DocumentView::Translated),
            translated_shapes: cloned_shapes(store, DocumentView::Translated),
            translated_images: cloned_images(store, DocumentView::Translated),
            translated_deletion_rectangles: cloned_deletion_rectangles(
                store,
                DocumentView::Translated,
            ),
            translated_layer_order: store.layer_order(DocumentView::Translated).to_vec(),

            final_layout_text_boxes: cloned_text_fields(store, DocumentView::FinalLayout),
            final_layout_shapes: cloned_shapes(store, DocumentView::FinalLayout),
            final_layout_images: cloned_images(store, DocumentView::FinalLayout),
            final_layout_deletion_rectangles: cloned_deletion_rectangles(
                store,
                DocumentView::FinalLayout,
            ),
            final_layout_layer_order: store.layer_order(DocumentView::FinalLayout).to_vec(),
        }
    }

    fn view_collections(&self, view: DocumentView) -> ViewCollections<'_> {
        match view {
            DocumentView::Original => ViewCollections {
                text_boxes: &self.original_text_boxes,
                shapes: &self.original_shapes,
                images: &self.original_images,
                deletion_rectangles: &self.original_deletion_rectangles,
                layer_order: &self.original_layer_order,
            },
            DocumentView::Translated => ViewCollections {
                text_boxes: &self.translated_text_boxes,
                shapes: &self.translated_shapes,
                images: &self.translated_images,
                deletion_rectangles: &self.translated_deletion_rectangles,
                layer_order: &self.translated_layer_order,
            },
            DocumentView::FinalLayout => ViewCollections {
                text_boxes: &self.final_layout_text_boxes,
                shapes: &self.final_layout_shapes,
                images: &self.final_layout_images,
                deletion_rectangles: &self.final_layout_deletion_rectangles,
                layer_order: &self.final_layout_layer_order,
            },
        }
    }

    /// Validates the payload against the supported format.
    pub fn validate(&self) -> Result<(), ProjectError> {
        if self.version > PROJECT_FORMAT_VERSION {
            return Err(ProjectError::UnsupportedVersion {
                version: self.version,
                expected: PROJECT_FORMAT_VERSION,
            });
        }
        if self.num_pages == 0 {
            return Err(ProjectError::MissingPages);
        }
        for view in [
            DocumentView::Original,
            DocumentView::Translated,
            DocumentView::FinalLayout,
        ] {
            self.check_pages(&self.view_collections(view))?;
        }
        Ok(())
    }

    fn check_pages(&self, collections: &ViewCollections<'_>) -> Result<(), ProjectError> {
        let pages = collections
            .text_boxes
            .iter()
            .map(|e| (e.id, e.page))
            .chain(collections.shapes.iter().map(|e| (e.id, e.page)))
            .chain(collections.images.iter().map(|e| (e.id, e.page)))
            .chain(
                collections
                    .deletion_rectangles
                    .iter()
                    .map(|e| (e.id, e.page)),
            );
        for (id, page) in pages {
            if page == 0 || page > self.num_pages {
                return Err(ProjectError::PageOutOfRange {
                    id,
                    page,
                    num_pages: self.num_pages,
                });
            }
        }
        Ok(())
    }

    /// Loads the payload into an editor, replacing its document state.
    ///
    /// Element ids from the payload are kept; the store's id sequences
    /// resume above them.
    pub fn apply_to_editor(&self, editor: &mut Editor) -> Result<(), ProjectError> {
        self.validate()?;

        let mut store = ElementStore::new();
        for view in [
            DocumentView::Original,
            DocumentView::Translated,
            DocumentView::FinalLayout,
        ] {
            restore_view(&mut store, view, &self.view_collections(view));
        }
        *editor.store_mut() = store;

        editor.set_num_pages(self.num_pages);
        editor.set_current_page(self.current_page);
        editor.set_workflow_step(self.current_workflow_step);
        for (&page, metrics) in &self.page_metrics {
            editor.set_page_metrics(page, metrics.clone());
        }
        let meta = editor.meta_mut();
        meta.project_id = self.project_id;
        meta.name = self.name.clone();
        meta.source_language = self.source_language.clone();
        meta.desired_language = self.desired_language.clone();
        meta.created_at = self.created_at;

        editor.handle_key(crate::tools::EditorKey::Escape);
        debug!(
            project_id = %self.project_id,
            num_pages = self.num_pages,
            "project state applied"
        );
        Ok(())
    }

    /// Serializes the payload to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes and validates a payload.
    pub fn from_json(json: &str) -> Result<Self, ProjectError> {
        let state: ProjectState = serde_json::from_str(json)?;
        state.validate()?;
        Ok(state)
    }

    /// Writes the payload to a file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self
            .to_json()
            .with_context(|| format!("Failed to serialize project '{}'", self.name))?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write project file: {}", path.display()))?;
        info!(path = %path.display(), "project saved");
        Ok(())
    }

    /// Reads and validates a payload from a file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file: {}", path.display()))?;
        let state = Self::from_json(&json)
            .with_context(|| format!("Failed to parse project file: {}", path.display()))?;
        info!(path = %path.display(), name = %state.name, "project loaded");
        Ok(state)
    }
}
