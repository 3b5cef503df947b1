//! Undo/redo: reversible edit commands and the stacks that hold them.
//!
//! Every mutation the editor records is expressed as an [`EditorCommand`]
//! carrying enough state to apply and reverse itself against the store.
//! Live gestures (drags, slider scrubs) emit intermediate updates flagged
//! `ongoing`; the manager coalesces a whole gesture into one open entry
//! that lands on the undo stack only when the final commit closes it.

use pagemark_core::{DocumentView, ElementId, ElementKind, Point};

use crate::elements::{
    DeletionRectangle, DeletionRectanglePatch, ImageElement, ImagePatch, ShapeElement, ShapePatch,
    TextField, TextFieldPatch,
};
use crate::store::ElementStore;

/// Maximum number of entries kept on the undo stack.
pub const MAX_UNDO_ENTRIES: usize = 50;

/// A full element snapshot, kind-tagged.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredElement {
    TextField(TextField),
    Shape(ShapeElement),
    Image(ImageElement),
    DeletionRectangle(DeletionRectangle),
}

impl StoredElement {
    pub fn id(&self) -> ElementId {
        match self {
            StoredElement::TextField(e) => e.id,
            StoredElement::Shape(e) => e.id,
            StoredElement::Image(e) => e.id,
            StoredElement::DeletionRectangle(e) => e.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            StoredElement::TextField(_) => ElementKind::TextField,
            StoredElement::Shape(_) => ElementKind::Shape,
            StoredElement::Image(_) => ElementKind::Image,
            StoredElement::DeletionRectangle(_) => ElementKind::DeletionRectangle,
        }
    }
}

fn snapshot(store: &ElementStore, view: DocumentView, id: ElementId) -> Option<StoredElement> {
    match store.kind_of(view, id)? {
        ElementKind::TextField => store
            .text_field(view, id)
            .cloned()
            .map(StoredElement::TextField),
        ElementKind::Shape => store.shape(view, id).cloned().map(StoredElement::Shape),
        ElementKind::Image => store.image(view, id).cloned().map(StoredElement::Image),
        ElementKind::DeletionRectangle => store
            .deletion_rectangle(view, id)
            .cloned()
            .map(StoredElement::DeletionRectangle),
    }
}

fn delete(store: &mut ElementStore, view: DocumentView, element: &StoredElement) -> Option<usize> {
    match element {
        StoredElement::TextField(e) => store.delete_text_field(view, e.id).map(|(_, i)| i),
        StoredElement::Shape(e) => store.delete_shape(view, e.id).map(|(_, i)| i),
        StoredElement::Image(e) => store.delete_image(view, e.id).map(|(_, i)| i),
        StoredElement::DeletionRectangle(e) => {
            store.delete_deletion_rectangle(view, e.id).map(|(_, i)| i)
        }
    }
}

fn restore(store: &mut ElementStore, view: DocumentView, element: &StoredElement, index: usize) {
    match element {
        StoredElement::TextField(e) => store.restore_text_field(view, e.clone(), index),
        StoredElement::Shape(e) => store.restore_shape(view, e.clone(), index),
        StoredElement::Image(e) => store.restore_image(view, e.clone(), index),
        StoredElement::DeletionRectangle(e) => {
            store.restore_deletion_rectangle(view, e.clone(), index)
        }
    }
}

/// Overwrites an element in place with a snapshot, keeping its paint-order
/// position. Missing elements are restored at the end of the order.
fn write_back(store: &mut ElementStore, view: DocumentView, element: &StoredElement) {
    let index = delete(store, view, element).unwrap_or_else(|| store.len(view));
    restore(store, view, element, index);
}

/// One element's position change inside a group move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementMove {
    pub id: ElementId,
    pub kind: ElementKind,
    pub from: Point,
    pub to: Point,
}

fn commit_position(
    store: &mut ElementStore,
    view: DocumentView,
    id: ElementId,
    kind: ElementKind,
    position: Point,
) {
    match kind {
        ElementKind::TextField => {
            store.update_text_field(
                view,
                id,
                &TextFieldPatch::position(position.x, position.y),
                false,
            );
        }
        ElementKind::Shape => {
            store.update_shape(view, id, &ShapePatch::position(position.x, position.y), false);
        }
        ElementKind::Image => {
            store.update_image(view, id, &ImagePatch::position(position.x, position.y), false);
        }
        ElementKind::DeletionRectangle => {
            let patch = DeletionRectanglePatch {
                x: Some(position.x),
                y: Some(position.y),
                ..Default::default()
            };
            store.update_deletion_rectangle(view, id, &patch, false);
        }
    }
}

/// A reversible edit.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// An element was created.
    AddElement {
        view: DocumentView,
        element: StoredElement,
    },
    /// An element was deleted from the given paint-order position.
    RemoveElement {
        view: DocumentView,
        element: StoredElement,
        index: usize,
    },
    /// An element was patched; both full snapshots are kept.
    PatchElement {
        view: DocumentView,
        before: StoredElement,
        after: StoredElement,
    },
    /// A group of elements moved.
    MoveElements {
        view: DocumentView,
        moves: Vec<ElementMove>,
    },
    /// The bucket's paint order and z-indexes changed.
    Reorder {
        view: DocumentView,
        before: ZOrderSnapshot,
        after: ZOrderSnapshot,
    },
}

/// A bucket's layer order plus every element's z-index at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ZOrderSnapshot {
    pub order: Vec<ElementId>,
    pub z_indexes: Vec<(ElementId, i32)>,
}

impl ZOrderSnapshot {
    /// Captures a bucket's current z-order state.
    pub fn capture(store: &ElementStore, view: DocumentView) -> Self {
        let order = store.layer_order(view).to_vec();
        let z_indexes = order
            .iter()
            .filter_map(|&id| store.z_index_of(view, id).map(|z| (id, z)))
            .collect();
        Self { order, z_indexes }
    }

    fn apply(&self, store: &mut ElementStore, view: DocumentView) {
        store.set_layer_order(view, &self.order);
        for &(id, z) in &self.z_indexes {
            store.set_z_index(view, id, z);
        }
    }
}

impl EditorCommand {
    /// Re-applies the command (redo).
    pub fn apply(&self, store: &mut ElementStore) {
        match self {
            EditorCommand::AddElement { view, element } => {
                let end = store.len(*view);
                restore(store, *view, element, end);
            }
            EditorCommand::RemoveElement { view, element, .. } => {
                delete(store, *view, element);
            }
            EditorCommand::PatchElement { view, after, .. } => {
                write_back(store, *view, after);
            }
            EditorCommand::MoveElements { view, moves } => {
                for m in moves {
                    commit_position(store, *view, m.id, m.kind, m.to);
                }
            }
            EditorCommand::Reorder { view, after, .. } => {
                after.apply(store, *view);
            }
        }
    }

    /// Reverses the command (undo).
    pub fn undo(&self, store: &mut ElementStore) {
        match self {
            EditorCommand::AddElement { view, element } => {
                delete(store, *view, element);
            }
            EditorCommand::RemoveElement {
                view,
                element,
                index,
            } => {
                restore(store, *view, element, *index);
            }
            EditorCommand::PatchElement { view, before, .. } => {
                write_back(store, *view, before);
            }
            EditorCommand::MoveElements { view, moves } => {
                for m in moves {
                    commit_position(store, *view, m.id, m.kind, m.from);
                }
            }
            EditorCommand::Reorder { view, before, .. } => {
                before.apply(store, *view);
            }
        }
    }
}

/// The undo/redo stacks plus the open gesture transaction.
#[derive(Debug, Clone, Default)]
pub struct UndoRedoManager {
    undo_stack: Vec<EditorCommand>,
    redo_stack: Vec<EditorCommand>,
    open: Option<EditorCommand>,
}

impl UndoRedoManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of closed entries on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Records a closed command: pushes it, clears redo, caps the stack.
    /// Any open transaction is closed into the same entry first when it
    /// concerns the same elements, otherwise flushed separately.
    pub fn record(&mut self, command: EditorCommand) {
        self.flush_open();
        self.push(command);
    }

    /// Records an element patch.
    ///
    /// With `ongoing` true the patch merges into the open transaction
    /// (keeping the earliest `before` and the latest `after`); with
    /// `ongoing` false the transaction closes onto the undo stack.
    pub fn record_patch(
        &mut self,
        view: DocumentView,
        before: StoredElement,
        after: StoredElement,
        ongoing: bool,
    ) {
        let merged = match self.open.take() {
            Some(EditorCommand::PatchElement {
                view: open_view,
                before: open_before,
                ..
            }) if open_view == view && open_before.id() == before.id() => {
                EditorCommand::PatchElement {
                    view,
                    before: open_before,
                    after,
                }
            }
            Some(other) => {
                self.push(other);
                EditorCommand::PatchElement {
                    view,
                    before,
                    after,
                }
            }
            None => EditorCommand::PatchElement {
                view,
                before,
                after,
            },
        };
        if ongoing {
            self.open = Some(merged);
        } else {
            self.push(merged);
        }
    }

    /// Records a group move, coalescing ongoing updates per element id.
    pub fn record_moves(&mut self, view: DocumentView, moves: Vec<ElementMove>, ongoing: bool) {
        if moves.is_empty() {
            if !ongoing {
                self.flush_open();
            }
            return;
        }
        let merged = match self.open.take() {
            Some(EditorCommand::MoveElements {
                view: open_view,
                moves: mut open_moves,
            }) if open_view == view => {
                for incoming in moves {
                    match open_moves.iter_mut().find(|m| m.id == incoming.id) {
                        Some(existing) => existing.to = incoming.to,
                        None => open_moves.push(incoming),
                    }
                }
                EditorCommand::MoveElements {
                    view,
                    moves: open_moves,
                }
            }
            Some(other) => {
                self.push(other);
                EditorCommand::MoveElements { view, moves }
            }
            None => EditorCommand::MoveElements { view, moves },
        };
        if ongoing {
            self.open = Some(merged);
        } else {
            self.push(merged);
        }
    }

    /// Closes any open transaction onto the undo stack.
    pub fn flush_open(&mut self) {
        if let Some(open) = self.open.take() {
            self.push(open);
        }
    }

    /// Discards any open transaction without recording it.
    pub fn abandon_open(&mut self) {
        self.open = None;
    }

    fn push(&mut self, command: EditorCommand) {
        self.undo_stack.push(command);
        self.redo_stack.clear();
        if self.undo_stack.len() > MAX_UNDO_ENTRIES {
            self.undo_stack.remove(0);
        }
    }

    /// Undoes the most recent entry. Returns whether anything was undone.
    pub fn undo(&mut self, store: &mut ElementStore) -> bool {
        self.flush_open();
        match self.undo_stack.pop() {
            Some(command) => {
                command.undo(store);
                self.redo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Re-applies the most recently undone entry.
    pub fn redo(&mut self, store: &mut ElementStore) -> bool {
        match self.redo_stack.pop() {
            Some(command) => {
                command.apply(store);
                self.undo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Snapshot helper for building patch commands from store lookups.
    pub fn snapshot(
        store: &ElementStore,
        view: DocumentView,
        id: ElementId,
    ) -> Option<StoredElement> {
        snapshot(store, view, id)
    }
}
