use pagemark_core::{DocumentView, ElementKind, Point};
use pagemark_editor::elements::{ShapePatch, TextField, TextFieldPatch};
use pagemark_editor::elements::{ShapeElement, ShapeKind};
use pagemark_editor::history::{
    EditorCommand, ElementMove, StoredElement, UndoRedoManager, ZOrderSnapshot,
};
use pagemark_editor::store::ElementStore;

const VIEW: DocumentView = DocumentView::Translated;

#[test]
fn test_add_undo_removes_element() {
    let mut store = ElementStore::new();
    let mut history = UndoRedoManager::new();
    let id = store.add_text_field(VIEW, TextField::new(0, 10.0, 10.0, 50.0, 20.0, 1));
    let element = UndoRedoManager::snapshot(&store, VIEW, id).unwrap();
    history.record(EditorCommand::AddElement { view: VIEW, element });

    history.undo(&mut store);
    assert!(store.text_field(VIEW, id).is_none());
    history.redo(&mut store);
    assert!(store.text_field(VIEW, id).is_some());
}

#[test]
fn test_move_command_restores_every_member() {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, TextField::new(0, 10.0, 10.0, 50.0, 20.0, 1));
    let b = store.add_shape(
        VIEW,
        ShapeElement::new(0, ShapeKind::Rectangle, 40.0, 40.0, 20.0, 20.0, 1),
    );
    let mut history = UndoRedoManager::new();

    store.update_text_field(VIEW, a, &TextFieldPatch::position(60.0, 10.0), false);
    store.update_shape(VIEW, b, &ShapePatch::position(90.0, 40.0), false);
    history.record_moves(
        VIEW,
        vec![
            ElementMove {
                id: a,
                kind: ElementKind::TextField,
                from: Point::new(10.0, 10.0),
                to: Point::new(60.0, 10.0),
            },
            ElementMove {
                id: b,
                kind: ElementKind::Shape,
                from: Point::new(40.0, 40.0),
                to: Point::new(90.0, 40.0),
            },
        ],
        false,
    );

    history.undo(&mut store);
    assert_eq!(store.position_of(VIEW, a), Some(Point::new(10.0, 10.0)));
    assert_eq!(store.position_of(VIEW, b), Some(Point::new(40.0, 40.0)));
}

#[test]
fn test_ongoing_moves_coalesce_per_element() {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, TextField::new(0, 0.0, 0.0, 50.0, 20.0, 1));
    let mut history = UndoRedoManager::new();

    for step in 1..=4 {
        history.record_moves(
            VIEW,
            vec![ElementMove {
                id: a,
                kind: ElementKind::TextField,
                from: Point::new(0.0, 0.0),
                to: Point::new(step as f64 * 10.0, 0.0),
            }],
            true,
        );
    }
    history.record_moves(
        VIEW,
        vec![ElementMove {
            id: a,
            kind: ElementKind::TextField,
            from: Point::new(0.0, 0.0),
            to: Point::new(50.0, 0.0),
        }],
        false,
    );
    assert_eq!(history.undo_depth(), 1);

    store.update_text_field(VIEW, a, &TextFieldPatch::position(50.0, 0.0), false);
    history.undo(&mut store);
    assert_eq!(store.position_of(VIEW, a), Some(Point::new(0.0, 0.0)));
}

#[test]
fn test_undo_flushes_open_transaction() {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, TextField::new(0, 0.0, 0.0, 50.0, 20.0, 1));
    let mut history = UndoRedoManager::new();

    store.update_text_field(VIEW, a, &TextFieldPatch::position(30.0, 0.0), true);
    history.record_moves(
        VIEW,
        vec![ElementMove {
            id: a,
            kind: ElementKind::TextField,
            from: Point::new(0.0, 0.0),
            to: Point::new(30.0, 0.0),
        }],
        true,
    );

    // Undo mid-gesture still reverses the partial movement.
    assert!(history.undo(&mut store));
    assert_eq!(store.position_of(VIEW, a), Some(Point::new(0.0, 0.0)));
}

#[test]
fn test_patch_undo_restores_styling() {
    let mut store = ElementStore::new();
    let id = store.add_text_field(VIEW, TextField::new(0, 0.0, 0.0, 50.0, 20.0, 1));
    let mut history = UndoRedoManager::new();

    let before = UndoRedoManager::snapshot(&store, VIEW, id).unwrap();
    let patch = TextFieldPatch {
        font_size: Some(24.0),
        color: Some("#ff0000".to_string()),
        ..Default::default()
    };
    store.update_text_field(VIEW, id, &patch, false);
    let after = UndoRedoManager::snapshot(&store, VIEW, id).unwrap();
    history.record_patch(VIEW, before, after, false);

    history.undo(&mut store);
    let field = store.text_field(VIEW, id).unwrap();
    assert_eq!(field.font_size, 12.0);
    assert_eq!(field.color, "#000000");
}

#[test]
fn test_redo_cleared_by_new_edit() {
    let mut store = ElementStore::new();
    let id = store.add_text_field(VIEW, TextField::new(0, 0.0, 0.0, 50.0, 20.0, 1));
    let mut history = UndoRedoManager::new();

    for x in [10.0, 20.0] {
        let before = UndoRedoManager::snapshot(&store, VIEW, id).unwrap();
        store.update_text_field(VIEW, id, &TextFieldPatch::position(x, 0.0), false);
        let after = UndoRedoManager::snapshot(&store, VIEW, id).unwrap();
        history.record_patch(VIEW, before, after, false);
    }
    history.undo(&mut store);
    assert!(history.can_redo());

    let before = UndoRedoManager::snapshot(&store, VIEW, id).unwrap();
    store.update_text_field(VIEW, id, &TextFieldPatch::position(99.0, 0.0), false);
    let after = UndoRedoManager::snapshot(&store, VIEW, id).unwrap();
    history.record_patch(VIEW, before, after, false);
    assert!(!history.can_redo());
}

#[test]
fn test_reorder_snapshot_roundtrip_across_kinds() {
    let mut store = ElementStore::new();
    let text = store.add_text_field(VIEW, TextField::new(0, 0.0, 0.0, 10.0, 10.0, 1));
    let shape = store.add_shape(
        VIEW,
        ShapeElement::new(0, ShapeKind::Circle, 0.0, 0.0, 10.0, 10.0, 1),
    );
    let mut history = UndoRedoManager::new();

    let before = ZOrderSnapshot::capture(&store, VIEW);
    store.move_to_front(VIEW, shape);
    let z_after_reorder = store.z_index_of(VIEW, shape).unwrap();
    let after = ZOrderSnapshot::capture(&store, VIEW);
    history.record(EditorCommand::Reorder { view: VIEW, before, after });

    history.undo(&mut store);
    assert_eq!(store.layer_order(VIEW), &[text, shape]);
    assert_eq!(
        store.z_index_of(VIEW, shape),
        Some(pagemark_core::constants::SHAPE_Z)
    );

    history.redo(&mut store);
    assert_eq!(store.layer_order(VIEW), &[text, shape]);
    assert_eq!(store.z_index_of(VIEW, shape), Some(z_after_reorder));
}

#[test]
fn test_remove_snapshot_is_kind_tagged() {
    let mut store = ElementStore::new();
    let id = store.add_shape(
        VIEW,
        ShapeElement::new(0, ShapeKind::Line, 0.0, 0.0, 10.0, 10.0, 1),
    );
    let snapshot = UndoRedoManager::snapshot(&store, VIEW, id).unwrap();
    assert_eq!(snapshot.kind(), ElementKind::Shape);
    assert_eq!(snapshot.id(), id);
    assert!(matches!(snapshot, StoredElement::Shape(_)));
}
