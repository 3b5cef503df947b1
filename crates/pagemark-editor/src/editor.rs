//! The editor facade: one owning context for the whole editing model.
//!
//! Owns the element store, selection controller, drag session, tool state,
//! history, and view state, and routes pointer/keyboard input to them. All
//! cross-module effects (tool exits on element click, history recording,
//! selection pruning after undo) happen here so the inner modules stay
//! independent of each other.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use pagemark_core::{
    clamp_position, DocumentView, ElementId, ElementKind, PageMetrics, PaneSide, Point, Rect,
    ViewMode, WorkflowStep, MAX_SCALE, MIN_SCALE, SCALE_STEP,
};

use crate::compose::compose_page;
use crate::coords::{determine_clicked_view, screen_to_document};
use crate::drag::DragSession;
use crate::elements::{DeletionRectangle, ShapeElement, TextField};
use crate::history::{EditorCommand, ElementMove, StoredElement, UndoRedoManager};
use crate::selection::SelectionController;
use crate::settings::EditorSettings;
use crate::text_capture;
use crate::tools::{EditorKey, Tool, ToolState};

/// Project-level metadata carried alongside the element state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectMeta {
    pub project_id: Uuid,
    pub name: String,
    pub source_language: String,
    pub desired_language: String,
    pub created_at: DateTime<Utc>,
}

impl Default for ProjectMeta {
    fn default() -> Self {
        Self {
            project_id: Uuid::new_v4(),
            name: String::new(),
            source_language: String::new(),
            desired_language: String::new(),
            created_at: Utc::now(),
        }
    }
}

/// The complete editing context.
#[derive(Debug)]
pub struct Editor {
    store: crate::store::ElementStore,
    selection: SelectionController,
    drag: Option<DragSession>,
    tools: ToolState,
    history: UndoRedoManager,
    settings: EditorSettings,
    meta: ProjectMeta,
    scale: f64,
    view_mode: ViewMode,
    current_page: u32,
    num_pages: u32,
    workflow_step: WorkflowStep,
    pages: BTreeMap<u32, PageMetrics>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Creates an empty editor at scale 1.0 in translated view.
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    /// Creates an empty editor with explicit settings.
    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            store: crate::store::ElementStore::new(),
            selection: SelectionController::new(),
            drag: None,
            tools: ToolState::new(),
            history: UndoRedoManager::new(),
            settings,
            meta: ProjectMeta::default(),
            scale: 1.0,
            view_mode: ViewMode::Translated,
            current_page: 1,
            num_pages: 0,
            workflow_step: WorkflowStep::default(),
            pages: BTreeMap::new(),
        }
    }

    // ---- accessors ----------------------------------------------------

    pub fn store(&self) -> &crate::store::ElementStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut crate::store::ElementStore {
        &mut self.store
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn meta(&self) -> &ProjectMeta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut ProjectMeta {
        &mut self.meta
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switches the display mode, clearing the selection: the selection is
    /// scoped to one bucket and does not survive a bucket change.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode != self.view_mode {
            self.view_mode = mode;
            self.selection.clear();
            self.drag = None;
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Navigates to a page, clearing page-scoped selection state. Out of
    /// range pages are ignored.
    pub fn set_current_page(&mut self, page: u32) {
        if page == 0 || (self.num_pages > 0 && page > self.num_pages) {
            debug!(page, num_pages = self.num_pages, "page out of range ignored");
            return;
        }
        if page != self.current_page {
            self.current_page = page;
            self.selection.clear();
            self.drag = None;
        }
    }

    pub fn num_pages(&self) -> u32 {
        self.num_pages
    }

    pub fn set_num_pages(&mut self, num_pages: u32) {
        self.num_pages = num_pages;
        if self.current_page > num_pages && num_pages > 0 {
            self.current_page = num_pages;
        }
    }

    pub fn workflow_step(&self) -> WorkflowStep {
        self.workflow_step
    }

    pub fn set_workflow_step(&mut self, step: WorkflowStep) {
        self.workflow_step = step;
    }

    pub fn page_metrics(&self, page: u32) -> Option<&PageMetrics> {
        self.pages.get(&page)
    }

    pub fn all_page_metrics(&self) -> &BTreeMap<u32, PageMetrics> {
        &self.pages
    }

    /// Records the rendered dimensions and background of a page.
    pub fn set_page_metrics(&mut self, page: u32, metrics: PageMetrics) {
        self.pages.insert(page, metrics);
    }

    /// The bucket edits currently target.
    pub fn active_view(&self) -> DocumentView {
        self.view_mode.default_bucket()
    }

    /// Current page width in document units (0 when unknown, which keeps
    /// pane resolution in the original pane).
    fn page_width(&self) -> f64 {
        self.pages
            .get(&self.current_page)
            .map(|m| m.width)
            .unwrap_or(0.0)
    }

    fn clamp_page(&self) -> PageMetrics {
        self.pages
            .get(&self.current_page)
            .cloned()
            .unwrap_or_else(|| PageMetrics::new(f64::INFINITY, f64::INFINITY))
    }

    fn page_background(&self) -> String {
        self.pages
            .get(&self.current_page)
            .map(|m| m.background_color.clone())
            .unwrap_or_else(|| self.settings.page_background_fallback.clone())
    }

    // ---- zoom ---------------------------------------------------------

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale * SCALE_STEP).min(MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale / SCALE_STEP).max(MIN_SCALE);
    }

    pub fn zoom_reset(&mut self) {
        self.scale = 1.0;
    }

    // ---- tools --------------------------------------------------------

    /// Activates a tool; any other active tool and in-progress gesture is
    /// reset first.
    pub fn activate_tool(&mut self, tool: Tool) {
        self.tools.activate(tool);
        if !matches!(tool, Tool::None) {
            self.selection.clear();
        }
    }

    // ---- pointer routing ----------------------------------------------

    /// Resolves which bucket and document point a client-space pointer
    /// event maps to. Returns `None` for clicks in the split-view gap.
    pub fn resolve_pointer(&self, screen_x: f64, screen_y: f64, container: &Rect) -> Option<(DocumentView, Point)> {
        let pane = if self.view_mode == ViewMode::Split {
            determine_clicked_view(screen_x - container.x, self.page_width(), self.scale)?
        } else {
            PaneSide::Original
        };
        let point = screen_to_document(
            screen_x,
            screen_y,
            container,
            self.scale,
            pane,
            self.view_mode,
            self.page_width(),
        );
        let view = if self.view_mode == ViewMode::Split {
            pane.bucket()
        } else {
            self.active_view()
        };
        Some((view, point))
    }

    /// Pointer press. Routes per the active tool; gap clicks are ignored.
    pub fn pointer_down(&mut self, screen_x: f64, screen_y: f64, container: &Rect, additive: bool) {
        let Some((view, point)) = self.resolve_pointer(screen_x, screen_y, container) else {
            return;
        };
        match self.tools.tool() {
            Tool::Selection => self.selection.begin_draw(point),
            Tool::ShapeDrawing(_) => self.tools.begin_shape(point),
            Tool::Erasure => self.tools.begin_erasure(point),
            Tool::AddTextBox => {
                self.place_text_box(view, point);
            }
            Tool::None | Tool::TextSelection => {
                if let Some(id) = self.element_at(view, point) {
                    self.select_element(view, id);
                } else if !additive {
                    self.selection.clear();
                }
            }
        }
    }

    /// Pointer move while pressed: advances whichever gesture is live.
    pub fn pointer_move(&mut self, screen_x: f64, screen_y: f64, container: &Rect) {
        let Some((_, point)) = self.resolve_pointer(screen_x, screen_y, container) else {
            return;
        };
        match self.tools.tool() {
            Tool::Selection => {
                self.selection.update_draw(point);
            }
            Tool::ShapeDrawing(_) => {
                self.tools.update_shape(point);
            }
            Tool::Erasure => {
                self.tools.update_erasure(point);
            }
            _ => {}
        }
    }

    /// Pointer release: commits whichever gesture is live.
    pub fn pointer_up(&mut self, view: DocumentView, additive: bool) {
        match self.tools.tool() {
            Tool::Selection => {
                self.selection
                    .finish_draw(&self.store, view, self.current_page, additive);
            }
            Tool::ShapeDrawing(_) => {
                if let Some((kind, rect)) = self.tools.finish_shape() {
                    let mut shape = ShapeElement::new(
                        0,
                        kind,
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height,
                        self.current_page,
                    );
                    shape.fill_color = self.settings.default_shape_fill.clone();
                    shape.border_color = self.settings.default_shape_border.clone();
                    shape.border_width = self.settings.default_shape_border_width;
                    self.add_shape(view, shape);
                }
            }
            Tool::Erasure => {
                if let Some(rect) = self.tools.finish_erasure() {
                    let deletion = DeletionRectangle::new(
                        0,
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height,
                        self.current_page,
                        self.page_background(),
                        self.settings.deletion_rectangle_opacity,
                    );
                    self.add_deletion_rectangle(view, deletion);
                }
            }
            _ => {}
        }
    }

    /// Topmost selectable element of the current page under a point.
    ///
    /// Tested in reverse paint order so overlapping elements resolve to the
    /// one drawn on top. Deletion rectangles are not selectable.
    pub fn element_at(&self, view: DocumentView, point: Point) -> Option<ElementId> {
        compose_page(&self.store, view, self.current_page)
            .iter()
            .rev()
            .find(|e| e.selectable() && e.bounds().contains_point(&point))
            .map(|e| e.id())
    }

    /// Selects a single element by click, exiting selection-style tools.
    pub fn select_element(&mut self, view: DocumentView, id: ElementId) {
        if self.tools.on_element_selected() {
            self.selection.clear();
        }
        self.selection.select_single(&self.store, view, id);
    }

    // ---- element creation (history-recorded) --------------------------

    /// Places a default-sized text box at a click point, clamped into the
    /// page, and selects it.
    pub fn place_text_box(&mut self, view: DocumentView, point: Point) -> ElementId {
        let page = self.clamp_page();
        let width = self.settings.new_text_box_width;
        let height = self.settings.new_text_box_height;
        let x = clamp_position(point.x, width, page.width);
        let y = clamp_position(point.y, height, page.height);
        let mut field = TextField::new(0, x, y, width, height, self.current_page);
        field.font_family = self.settings.default_font_family.clone();
        field.font_size = self.settings.default_font_size;
        field.color = self.settings.default_text_color.clone();
        let id = self.add_text_field(view, field);
        self.selection.select_single(&self.store, view, id);
        id
    }

    /// Adds a text field and records it on the undo stack.
    pub fn add_text_field(&mut self, view: DocumentView, field: TextField) -> ElementId {
        let id = self.store.add_text_field(view, field);
        self.record_add(view, id);
        id
    }

    /// Adds a shape and records it on the undo stack.
    pub fn add_shape(&mut self, view: DocumentView, shape: ShapeElement) -> ElementId {
        let id = self.store.add_shape(view, shape);
        self.record_add(view, id);
        id
    }

    /// Adds an image and records it on the undo stack.
    pub fn add_image(&mut self, view: DocumentView, image: crate::elements::ImageElement) -> ElementId {
        let id = self.store.add_image(view, image);
        self.record_add(view, id);
        id
    }

    /// Adds a deletion rectangle and records it on the undo stack.
    pub fn add_deletion_rectangle(
        &mut self,
        view: DocumentView,
        rect: DeletionRectangle,
    ) -> ElementId {
        let id = self.store.add_deletion_rectangle(view, rect);
        self.record_add(view, id);
        id
    }

    fn record_add(&mut self, view: DocumentView, id: ElementId) {
        if let Some(element) = UndoRedoManager::snapshot(&self.store, view, id) {
            self.history.record(EditorCommand::AddElement { view, element });
        }
    }

    /// Deletes every selected element, recording each removal.
    pub fn delete_selected(&mut self, view: DocumentView) {
        let entries: Vec<_> = self.selection.selected().to_vec();
        for entry in entries {
            let removed = match entry.kind {
                ElementKind::TextField => self
                    .store
                    .delete_text_field(view, entry.id)
                    .map(|(e, i)| (StoredElement::TextField(e), i)),
                ElementKind::Shape => self
                    .store
                    .delete_shape(view, entry.id)
                    .map(|(e, i)| (StoredElement::Shape(e), i)),
                ElementKind::Image => self
                    .store
                    .delete_image(view, entry.id)
                    .map(|(e, i)| (StoredElement::Image(e), i)),
                ElementKind::DeletionRectangle => self
                    .store
                    .delete_deletion_rectangle(view, entry.id)
                    .map(|(e, i)| (StoredElement::DeletionRectangle(e), i)),
            };
            if let Some((element, index)) = removed {
                self.history.record(EditorCommand::RemoveElement {
                    view,
                    element,
                    index,
                });
            }
        }
        self.selection.clear();
    }

    // ---- drag ---------------------------------------------------------

    /// Starts a handle-mode drag on one selected element.
    pub fn start_handle_drag(&mut self, view: DocumentView, handle: ElementId) {
        self.selection.recapture_positions(&self.store, view);
        self.drag = Some(DragSession::start_handle(handle, view));
    }

    /// Starts a selection-rectangle drag.
    pub fn start_selection_drag(&mut self, view: DocumentView) {
        self.selection.recapture_positions(&self.store, view);
        self.drag = Some(DragSession::start_selection_rect(view));
    }

    /// Handle-mode intermediate update driven by the drag widget.
    pub fn update_handle_drag(&mut self, handle_position: Point) {
        let page = self.clamp_page();
        if let Some(drag) = self.drag.as_mut() {
            drag.update_handle(&mut self.store, &self.selection, handle_position, &page);
        }
    }

    /// Selection-rectangle intermediate update (preview delta only).
    pub fn update_selection_drag(&mut self, delta_x: f64, delta_y: f64) {
        if let Some(drag) = self.drag.as_mut() {
            drag.update_selection_rect(delta_x, delta_y);
        }
    }

    /// The live preview offset of a selection-rectangle drag.
    pub fn drag_preview_offset(&self) -> (f64, f64) {
        self.drag.as_ref().map(|d| d.preview_offset()).unwrap_or((0.0, 0.0))
    }

    /// Commits the active drag and records the whole gesture as one history
    /// entry.
    pub fn finish_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let view = drag.view();
        let froms: Vec<(ElementId, ElementKind, Point)> = self
            .selection
            .selected()
            .iter()
            .map(|e| (e.id, e.kind, e.original_position))
            .collect();

        let page = self.clamp_page();
        drag.finish(&mut self.store, &mut self.selection, &page);

        let moves: Vec<ElementMove> = froms
            .into_iter()
            .filter_map(|(id, kind, from)| {
                let to = self.store.position_of(view, id)?;
                if to == from {
                    return None;
                }
                Some(ElementMove { id, kind, from, to })
            })
            .collect();
        self.history.record_moves(view, moves, false);
    }

    // ---- keyboard -----------------------------------------------------

    /// Global keyboard entry point.
    pub fn handle_key(&mut self, key: EditorKey) {
        match key {
            EditorKey::ZoomIn => self.zoom_in(),
            EditorKey::ZoomOut => self.zoom_out(),
            EditorKey::ZoomReset => self.zoom_reset(),
            EditorKey::Escape => {
                self.selection.clear();
                self.tools.reset();
                self.drag = None;
            }
            EditorKey::CoverSelectedTextBoxes => {
                self.cover_selected_text_boxes();
            }
        }
    }

    /// Creates a deletion rectangle under each selected text box, in the
    /// page background color, recording each on the undo stack.
    pub fn cover_selected_text_boxes(&mut self) -> Vec<ElementId> {
        let view = self.active_view();
        let background = self.page_background();
        let selected: Vec<_> = self.selection.selected().to_vec();
        let ids = text_capture::cover_text_fields(
            &mut self.store,
            view,
            &selected,
            &background,
            self.settings.deletion_rectangle_opacity,
        );
        for &id in &ids {
            self.record_add(view, id);
        }
        ids
    }

    // ---- history ------------------------------------------------------

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_mut(&mut self) -> &mut UndoRedoManager {
        &mut self.history
    }

    /// Undoes the last edit and drops selection entries it invalidated.
    pub fn undo(&mut self) -> bool {
        let applied = self.history.undo(&mut self.store);
        if applied {
            let view = self.active_view();
            self.selection.prune_stale(&self.store, view);
            self.selection.recapture_positions(&self.store, view);
        }
        applied
    }

    /// Re-applies the last undone edit.
    pub fn redo(&mut self) -> bool {
        let applied = self.history.redo(&mut self.store);
        if applied {
            let view = self.active_view();
            self.selection.prune_stale(&self.store, view);
            self.selection.recapture_positions(&self.store, view);
        }
        applied
    }

    /// Removes every translated-bucket element ("clear translations").
    ///
    /// The history stacks are cleared too: entries referring to the removed
    /// elements must not resurrect them.
    pub fn clear_translations(&mut self) {
        self.store.clear_view(DocumentView::Translated);
        self.selection.clear();
        self.drag = None;
        self.history = UndoRedoManager::new();
    }
}
