use pagemark_core::{
    constants::{DELETION_RECTANGLE_Z, IMAGE_Z, SHAPE_Z, TEXT_FIELD_Z},
    DocumentView, Point, Rect,
};
use pagemark_editor::elements::{
    DeletionRectangle, ImageElement, ShapeElement, ShapeKind, TextField, TextFieldPatch,
};
use pagemark_editor::store::ElementStore;

const VIEW: DocumentView = DocumentView::Translated;

fn text_box(x: f64, y: f64) -> TextField {
    TextField::new(0, x, y, 100.0, 30.0, 1)
}

#[test]
fn test_ids_are_assigned_and_unique() {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, text_box(0.0, 0.0));
    let b = store.add_text_field(VIEW, text_box(10.0, 0.0));
    let c = store.add_shape(VIEW, ShapeElement::new(0, ShapeKind::Circle, 0.0, 0.0, 10.0, 10.0, 1));
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_eq!(store.len(VIEW), 3);
}

#[test]
fn test_buckets_are_independent() {
    let mut store = ElementStore::new();
    let id = store.add_text_field(DocumentView::Original, text_box(0.0, 0.0));
    assert!(store.text_field(DocumentView::Original, id).is_some());
    assert!(store.text_field(DocumentView::Translated, id).is_none());
    assert!(store.is_empty(DocumentView::FinalLayout));
}

#[test]
fn test_default_z_bands() {
    let mut store = ElementStore::new();
    let text = store.add_text_field(VIEW, text_box(0.0, 0.0));
    let shape = store.add_shape(VIEW, ShapeElement::new(0, ShapeKind::Line, 0.0, 0.0, 5.0, 5.0, 1));
    let image = store.add_image(VIEW, ImageElement::new(0, "blob:1", 0.0, 0.0, 5.0, 5.0, 1));
    let del = store.add_deletion_rectangle(
        VIEW,
        DeletionRectangle::new(0, 0.0, 0.0, 5.0, 5.0, 1, "#ffffff", 1.0),
    );
    assert_eq!(store.text_field(VIEW, text).unwrap().z_index, TEXT_FIELD_Z);
    assert_eq!(store.shape(VIEW, shape).unwrap().z_index, SHAPE_Z);
    assert_eq!(store.image(VIEW, image).unwrap().z_index, IMAGE_Z);
    assert_eq!(
        store.deletion_rectangle(VIEW, del).unwrap().z_index,
        DELETION_RECTANGLE_Z
    );
}

#[test]
fn test_update_unknown_id_is_silent_noop() {
    let mut store = ElementStore::new();
    let id = store.add_text_field(VIEW, text_box(10.0, 10.0));
    assert!(store
        .update_text_field(VIEW, id + 100, &TextFieldPatch::position(0.0, 0.0), false)
        .is_none());
    // The known element is untouched.
    assert_eq!(store.text_field(VIEW, id).unwrap().x, 10.0);
}

#[test]
fn test_delete_unknown_id_is_silent_noop() {
    let mut store = ElementStore::new();
    let id = store.add_text_field(VIEW, text_box(0.0, 0.0));
    assert!(store.delete_text_field(VIEW, id + 5).is_none());
    assert_eq!(store.len(VIEW), 1);
}

#[test]
fn test_update_returns_before_and_after() {
    let mut store = ElementStore::new();
    let id = store.add_text_field(VIEW, text_box(10.0, 20.0));
    let (before, after) = store
        .update_text_field(VIEW, id, &TextFieldPatch::position(50.0, 60.0), false)
        .unwrap();
    assert_eq!((before.x, before.y), (10.0, 20.0));
    assert_eq!((after.x, after.y), (50.0, 60.0));
}

#[test]
fn test_move_to_front_assigns_top_z() {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, text_box(0.0, 0.0));
    let b = store.add_text_field(VIEW, text_box(10.0, 0.0));
    assert!(store.is_at_front(VIEW, b));

    store.move_to_front(VIEW, a);
    assert!(store.is_at_front(VIEW, a));
    assert!(store.is_at_back(VIEW, b));
    assert!(store.z_index_of(VIEW, a).unwrap() > store.z_index_of(VIEW, b).unwrap());
}

#[test]
fn test_move_to_back_goes_below_deletion_band() {
    let mut store = ElementStore::new();
    let del = store.add_deletion_rectangle(
        VIEW,
        DeletionRectangle::new(0, 0.0, 0.0, 5.0, 5.0, 1, "#ffffff", 1.0),
    );
    let text = store.add_text_field(VIEW, text_box(0.0, 0.0));

    store.move_to_back(VIEW, text);
    assert!(store.is_at_back(VIEW, text));
    assert!(store.z_index_of(VIEW, text).unwrap() < store.z_index_of(VIEW, del).unwrap());
}

#[test]
fn test_forward_backward_swap_neighbors() {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, text_box(0.0, 0.0));
    let b = store.add_text_field(VIEW, text_box(10.0, 0.0));
    let c = store.add_text_field(VIEW, text_box(20.0, 0.0));

    store.move_forward(VIEW, a);
    assert_eq!(store.layer_order(VIEW), &[b, a, c]);
    store.move_backward(VIEW, c);
    assert_eq!(store.layer_order(VIEW), &[b, c, a]);

    // Already at the edges: no-ops.
    store.move_backward(VIEW, b);
    store.move_forward(VIEW, a);
    assert_eq!(store.layer_order(VIEW), &[b, c, a]);
}

#[test]
fn test_z_swap_keeps_order_and_z_consistent() {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, text_box(0.0, 0.0));
    let b = store.add_shape(VIEW, ShapeElement::new(0, ShapeKind::Rectangle, 0.0, 0.0, 5.0, 5.0, 1));

    // Shape starts below the text field in z but after it in insertion
    // order; pull it forward past the text field.
    store.move_to_front(VIEW, b);
    let order = store.layer_order(VIEW).to_vec();
    let zs: Vec<i32> = order
        .iter()
        .map(|&id| store.z_index_of(VIEW, id).unwrap())
        .collect();
    assert_eq!(order, vec![a, b]);
    assert!(zs[0] < zs[1]);
}

#[test]
fn test_restore_reinserts_at_paint_position() {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, text_box(0.0, 0.0));
    let b = store.add_text_field(VIEW, text_box(10.0, 0.0));
    let c = store.add_text_field(VIEW, text_box(20.0, 0.0));

    let (element, index) = store.delete_text_field(VIEW, b).unwrap();
    assert_eq!(index, 1);
    store.restore_text_field(VIEW, element, index);
    assert_eq!(store.layer_order(VIEW), &[a, b, c]);
    // Fresh ids keep advancing past the restored one.
    let d = store.add_text_field(VIEW, text_box(30.0, 0.0));
    assert!(d > c);
}

#[test]
fn test_set_layer_order_drops_unknown_and_appends_missing() {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, text_box(0.0, 0.0));
    let b = store.add_text_field(VIEW, text_box(10.0, 0.0));
    let c = store.add_text_field(VIEW, text_box(20.0, 0.0));

    store.set_layer_order(VIEW, &[c, 999, a]);
    assert_eq!(store.layer_order(VIEW), &[c, a, b]);
}

#[test]
fn test_rect_and_position_lookups() {
    let mut store = ElementStore::new();
    let id = store.add_text_field(VIEW, text_box(5.0, 6.0));
    assert_eq!(store.rect_of(VIEW, id), Some(Rect::new(5.0, 6.0, 100.0, 30.0)));
    assert_eq!(store.position_of(VIEW, id), Some(Point::new(5.0, 6.0)));
    assert_eq!(store.rect_of(VIEW, id + 1), None);
}

#[test]
fn test_clear_view_only_clears_that_bucket() {
    let mut store = ElementStore::new();
    store.add_text_field(DocumentView::Translated, text_box(0.0, 0.0));
    store.add_text_field(DocumentView::Original, text_box(0.0, 0.0));

    store.clear_view(DocumentView::Translated);
    assert!(store.is_empty(DocumentView::Translated));
    assert_eq!(store.len(DocumentView::Original), 1);
}
