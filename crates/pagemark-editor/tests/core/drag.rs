use pagemark_core::{DocumentView, PageMetrics, Point};
use pagemark_editor::drag::{move_selected_elements, DragSession};
use pagemark_editor::elements::{LineEndpoints, ShapeElement, ShapeKind, TextField};
use pagemark_editor::selection::SelectionController;
use pagemark_editor::store::ElementStore;

const VIEW: DocumentView = DocumentView::Translated;

fn page() -> PageMetrics {
    PageMetrics::new(800.0, 1000.0)
}

fn setup_two_selected() -> (ElementStore, SelectionController, u64, u64) {
    let mut store = ElementStore::new();
    let a = store.add_text_field(VIEW, TextField::new(0, 100.0, 100.0, 50.0, 30.0, 1));
    let b = store.add_shape(
        VIEW,
        ShapeElement::new(0, ShapeKind::Rectangle, 200.0, 150.0, 60.0, 40.0, 1),
    );
    let mut selection = SelectionController::new();
    selection.begin_draw(Point::new(90.0, 90.0));
    selection.update_draw(Point::new(300.0, 300.0));
    selection.finish_draw(&store, VIEW, 1, false);
    assert_eq!(selection.selected().len(), 2);
    (store, selection, a, b)
}

#[test]
fn test_uniform_delta_from_original_positions() {
    let (mut store, selection, a, b) = setup_two_selected();
    move_selected_elements(selection.selected(), 50.0, -20.0, &mut store, VIEW, true);
    assert_eq!(store.position_of(VIEW, a), Some(Point::new(150.0, 80.0)));
    assert_eq!(store.position_of(VIEW, b), Some(Point::new(250.0, 130.0)));
}

#[test]
fn test_intermediate_deltas_do_not_compound() {
    let (mut store, selection, a, _) = setup_two_selected();
    // Growing deltas of the same gesture, all from the captured origin.
    for step in 1..=10 {
        move_selected_elements(selection.selected(), step as f64 * 5.0, 0.0, &mut store, VIEW, true);
    }
    assert_eq!(store.position_of(VIEW, a), Some(Point::new(150.0, 100.0)));
}

#[test]
fn test_zero_delta_moves_nothing() {
    let mut store = ElementStore::new();
    let field = store.add_text_field(VIEW, TextField::new(0, 100.0, 100.0, 50.0, 30.0, 1));
    let mut line = ShapeElement::new(0, ShapeKind::Line, 0.0, 0.0, 10.0, 10.0, 1);
    line.set_endpoints(LineEndpoints {
        x1: 220.0,
        y1: 180.0,
        x2: 140.0,
        y2: 110.0,
    });
    let line = store.add_shape(VIEW, line);

    let mut selection = SelectionController::new();
    selection.begin_draw(Point::new(90.0, 90.0));
    selection.update_draw(Point::new(300.0, 300.0));
    selection.finish_draw(&store, VIEW, 1, false);
    assert_eq!(selection.selected().len(), 2);

    let before_field = store.text_field(VIEW, field).unwrap().clone();
    let before_line = store.shape(VIEW, line).unwrap().clone();

    move_selected_elements(selection.selected(), 0.0, 0.0, &mut store, VIEW, true);
    move_selected_elements(selection.selected(), 0.0, 0.0, &mut store, VIEW, false);

    assert_eq!(store.text_field(VIEW, field).unwrap(), &before_field);
    // Explicit line endpoints survive untouched, direction included.
    assert_eq!(store.shape(VIEW, line).unwrap(), &before_line);
    assert_eq!(
        store.shape(VIEW, line).unwrap().effective_endpoints(),
        before_line.effective_endpoints()
    );
}

#[test]
fn test_group_move_is_unclamped() {
    let (mut store, selection, a, _) = setup_two_selected();
    move_selected_elements(selection.selected(), -500.0, 0.0, &mut store, VIEW, true);
    assert_eq!(store.position_of(VIEW, a), Some(Point::new(-400.0, 100.0)));
}

#[test]
fn test_stale_selection_entry_is_skipped() {
    let (mut store, selection, a, b) = setup_two_selected();
    store.delete_text_field(VIEW, a);
    // Must not panic; the surviving element still moves.
    move_selected_elements(selection.selected(), 10.0, 10.0, &mut store, VIEW, false);
    assert_eq!(store.position_of(VIEW, b), Some(Point::new(210.0, 160.0)));
}

#[test]
fn test_handle_drag_moves_others_not_handle() {
    let (mut store, selection, a, b) = setup_two_selected();
    let mut session = DragSession::start_handle(a, VIEW);

    session.update_handle(&mut store, &selection, Point::new(130.0, 120.0), &page());
    // The handle's stored position is owned by the drag widget mid-gesture.
    assert_eq!(store.position_of(VIEW, a), Some(Point::new(100.0, 100.0)));
    assert_eq!(store.position_of(VIEW, b), Some(Point::new(230.0, 170.0)));
    assert_eq!(session.delta(), (30.0, 20.0));
}

#[test]
fn test_handle_drag_clamps_followers() {
    let (mut store, selection, a, b) = setup_two_selected();
    let mut session = DragSession::start_handle(a, VIEW);

    // Push far right: follower (60 wide on an 800 page) pins at x = 740.
    session.update_handle(&mut store, &selection, Point::new(700.0, 100.0), &page());
    assert_eq!(store.position_of(VIEW, b), Some(Point::new(740.0, 150.0)));
}

#[test]
fn test_selection_rect_drag_previews_without_mutating() {
    let (mut store, mut selection, a, b) = setup_two_selected();
    let mut session = DragSession::start_selection_rect(VIEW);

    session.update_selection_rect(40.0, 25.0);
    assert_eq!(session.preview_offset(), (40.0, 25.0));
    // No coordinate mutation until drag stop.
    assert_eq!(store.position_of(VIEW, a), Some(Point::new(100.0, 100.0)));

    session.finish(&mut store, &mut selection, &page());
    assert_eq!(store.position_of(VIEW, a), Some(Point::new(140.0, 125.0)));
    assert_eq!(store.position_of(VIEW, b), Some(Point::new(240.0, 175.0)));
}

#[test]
fn test_finish_recaptures_positions_for_next_gesture() {
    let (mut store, mut selection, a, _) = setup_two_selected();
    let mut session = DragSession::start_selection_rect(VIEW);
    session.update_selection_rect(50.0, 0.0);
    session.finish(&mut store, &mut selection, &page());

    // A second gesture's delta applies from the committed position.
    let mut second = DragSession::start_selection_rect(VIEW);
    second.update_selection_rect(10.0, 0.0);
    second.finish(&mut store, &mut selection, &page());
    assert_eq!(store.position_of(VIEW, a), Some(Point::new(160.0, 100.0)));
}

#[test]
fn test_finish_clamps_into_page() {
    let (mut store, mut selection, a, b) = setup_two_selected();
    let mut session = DragSession::start_selection_rect(VIEW);
    session.update_selection_rect(-1000.0, 2000.0);
    session.finish(&mut store, &mut selection, &page());

    // 30-tall text box on a 1000-tall page pins at y = 970; 40-tall shape
    // at y = 960. Both pin at x = 0.
    assert_eq!(store.position_of(VIEW, a), Some(Point::new(0.0, 970.0)));
    assert_eq!(store.position_of(VIEW, b), Some(Point::new(0.0, 960.0)));

    let bounds = selection.bounds().unwrap();
    assert_eq!(bounds.y, 960.0);
}
