use pagemark_core::{DocumentView, ElementKind, Point, Rect};
use pagemark_editor::elements::{DeletionRectangle, ShapeElement, ShapeKind, TextField};
use pagemark_editor::selection::{
    calculate_selection_bounds, find_elements_in_selection, SelectedElement, SelectionController,
};
use pagemark_editor::store::ElementStore;

const VIEW: DocumentView = DocumentView::Translated;

fn text_box(x: f64, y: f64, w: f64, h: f64) -> TextField {
    TextField::new(0, x, y, w, h, 1)
}

#[test]
fn test_edge_touching_is_not_intersection() {
    let field = text_box(100.0, 100.0, 50.0, 50.0);
    // Selection's right edge exactly at the field's left edge.
    let rect = Rect::new(50.0, 100.0, 50.0, 50.0);
    let found = find_elements_in_selection(&rect, &[&field], &[], &[]);
    assert!(found.is_empty());
}

#[test]
fn test_one_unit_overlap_selects() {
    let field = text_box(100.0, 100.0, 50.0, 50.0);
    let rect = Rect::new(50.0, 100.0, 51.0, 50.0);
    let found = find_elements_in_selection(&rect, &[&field], &[], &[]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ElementKind::TextField);
    assert_eq!(found[0].original_position, Point::new(100.0, 100.0));
}

#[test]
fn test_candidate_order_is_text_shapes_images() {
    let field = text_box(0.0, 0.0, 50.0, 50.0);
    let shape = ShapeElement::new(7, ShapeKind::Rectangle, 10.0, 10.0, 50.0, 50.0, 1);
    let image = pagemark_editor::elements::ImageElement::new(9, "blob:x", 20.0, 20.0, 50.0, 50.0, 1);
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let found = find_elements_in_selection(&rect, &[&field], &[&shape], &[&image]);
    let kinds: Vec<ElementKind> = found.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![ElementKind::TextField, ElementKind::Shape, ElementKind::Image]
    );
}

#[test]
fn test_bounds_skip_stale_entries() {
    let resolve = |id: u64, _| {
        if id == 1 {
            Some(Rect::new(10.0, 20.0, 30.0, 40.0))
        } else {
            None
        }
    };
    let selected = [
        SelectedElement {
            id: 1,
            kind: ElementKind::TextField,
            original_position: Point::new(10.0, 20.0),
        },
        SelectedElement {
            id: 2,
            kind: ElementKind::Shape,
            original_position: Point::new(0.0, 0.0),
        },
    ];
    let bounds = calculate_selection_bounds(&selected, resolve).unwrap();
    assert_eq!(bounds.rect(), Rect::new(10.0, 20.0, 30.0, 40.0));
}

#[test]
fn test_bounds_none_when_nothing_resolves() {
    let selected = [SelectedElement {
        id: 1,
        kind: ElementKind::TextField,
        original_position: Point::new(0.0, 0.0),
    }];
    assert!(calculate_selection_bounds(&selected, |_, _| None).is_none());
}

#[test]
fn test_bounds_union_of_multiple_elements() {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, text_box(10.0, 10.0, 20.0, 20.0));
    let b = store.add_text_field(VIEW, text_box(100.0, 50.0, 30.0, 10.0));
    let mut controller = SelectionController::new();
    controller.begin_draw(Point::new(0.0, 0.0));
    controller.update_draw(Point::new(200.0, 200.0));
    controller.finish_draw(&store, VIEW, 1, false);
    let _ = (a, b);

    let bounds = controller.bounds().unwrap();
    assert_eq!(bounds.rect(), Rect::new(10.0, 10.0, 120.0, 50.0));
}

#[test]
fn test_tiny_gesture_clears_selection() {
    let mut store = ElementStore::new();
    store.add_text_field(VIEW, text_box(10.0, 10.0, 20.0, 20.0));
    let mut controller = SelectionController::new();

    controller.begin_draw(Point::new(0.0, 0.0));
    controller.update_draw(Point::new(100.0, 100.0));
    assert_eq!(controller.finish_draw(&store, VIEW, 1, false), 1);

    // A 5x5 gesture is at the threshold, not above it: click-outside.
    controller.begin_draw(Point::new(200.0, 200.0));
    controller.update_draw(Point::new(205.0, 205.0));
    assert_eq!(controller.finish_draw(&store, VIEW, 1, false), 0);
    assert!(controller.is_empty());
}

#[test]
fn test_tiny_additive_gesture_preserves_selection() {
    let mut store = ElementStore::new();
    store.add_text_field(VIEW, text_box(10.0, 10.0, 20.0, 20.0));
    let mut controller = SelectionController::new();

    controller.begin_draw(Point::new(0.0, 0.0));
    controller.update_draw(Point::new(100.0, 100.0));
    controller.finish_draw(&store, VIEW, 1, false);

    controller.begin_draw(Point::new(200.0, 200.0));
    controller.update_draw(Point::new(203.0, 203.0));
    assert_eq!(controller.finish_draw(&store, VIEW, 1, true), 1);
}

#[test]
fn test_additive_union_deduplicates() {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, text_box(10.0, 10.0, 20.0, 20.0));
    let b = store.add_text_field(VIEW, text_box(200.0, 10.0, 20.0, 20.0));
    let mut controller = SelectionController::new();

    controller.begin_draw(Point::new(0.0, 0.0));
    controller.update_draw(Point::new(50.0, 50.0));
    controller.finish_draw(&store, VIEW, 1, false);
    assert_eq!(controller.selected().len(), 1);

    // Second gesture covers both elements; the first must not duplicate.
    controller.begin_draw(Point::new(0.0, 0.0));
    controller.update_draw(Point::new(300.0, 50.0));
    assert_eq!(controller.finish_draw(&store, VIEW, 1, true), 2);
    assert!(controller.contains(a, ElementKind::TextField));
    assert!(controller.contains(b, ElementKind::TextField));
}

#[test]
fn test_deletion_rectangles_are_never_selected() {
    let mut store = ElementStore::new();
    store.add_deletion_rectangle(
        VIEW,
        DeletionRectangle::new(0, 10.0, 10.0, 50.0, 50.0, 1, "#ffffff", 1.0),
    );
    let mut controller = SelectionController::new();
    controller.begin_draw(Point::new(0.0, 0.0));
    controller.update_draw(Point::new(100.0, 100.0));
    assert_eq!(controller.finish_draw(&store, VIEW, 1, false), 0);
}

#[test]
fn test_selection_is_page_scoped() {
    let mut store = ElementStore::new();
    store.add_text_field(VIEW, TextField::new(0, 10.0, 10.0, 20.0, 20.0, 2));
    let on_page = store.add_text_field(VIEW, TextField::new(0, 10.0, 40.0, 20.0, 20.0, 1));
    let mut controller = SelectionController::new();

    controller.begin_draw(Point::new(0.0, 0.0));
    controller.update_draw(Point::new(100.0, 100.0));
    assert_eq!(controller.finish_draw(&store, VIEW, 1, false), 1);
    assert_eq!(controller.selected()[0].id, on_page);
}

#[test]
fn test_prune_stale_drops_deleted_elements() {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, text_box(10.0, 10.0, 20.0, 20.0));
    let b = store.add_text_field(VIEW, text_box(50.0, 10.0, 20.0, 20.0));
    let mut controller = SelectionController::new();
    controller.begin_draw(Point::new(0.0, 0.0));
    controller.update_draw(Point::new(100.0, 100.0));
    controller.finish_draw(&store, VIEW, 1, false);

    store.delete_text_field(VIEW, a);
    controller.prune_stale(&store, VIEW);
    assert_eq!(controller.selected().len(), 1);
    assert_eq!(controller.selected()[0].id, b);
}
