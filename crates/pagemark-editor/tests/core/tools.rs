use pagemark_core::{Point, Rect};
use pagemark_editor::elements::ShapeKind;
use pagemark_editor::tools::{Tool, ToolState};

#[test]
fn test_default_is_no_tool() {
    let tools = ToolState::new();
    assert_eq!(tools.tool(), Tool::None);
    assert!(tools.shape_preview().is_none());
    assert!(tools.erasure_preview().is_none());
}

#[test]
fn test_switching_tools_resets_gestures() {
    let mut tools = ToolState::new();
    tools.activate(Tool::Erasure);
    tools.begin_erasure(Point::new(0.0, 0.0));
    tools.update_erasure(Point::new(50.0, 50.0));

    tools.activate(Tool::Selection);
    assert!(tools.erasure_preview().is_none());
    // The abandoned gesture must not commit later.
    tools.activate(Tool::Erasure);
    assert!(tools.finish_erasure().is_none());
}

#[test]
fn test_gesture_requires_matching_tool() {
    let mut tools = ToolState::new();
    tools.activate(Tool::Selection);
    tools.begin_shape(Point::new(0.0, 0.0));
    tools.begin_erasure(Point::new(0.0, 0.0));
    assert!(tools.shape_preview().is_none());
    assert!(tools.erasure_preview().is_none());
}

#[test]
fn test_shape_gesture_normalizes_negative_drag() {
    let mut tools = ToolState::new();
    tools.activate(Tool::ShapeDrawing(ShapeKind::Line));
    tools.begin_shape(Point::new(100.0, 80.0));
    tools.update_shape(Point::new(40.0, 20.0));
    let (kind, rect) = tools.finish_shape().unwrap();
    assert_eq!(kind, ShapeKind::Line);
    assert_eq!(rect, Rect::new(40.0, 20.0, 60.0, 60.0));
}

#[test]
fn test_threshold_is_strict_on_both_axes() {
    let mut tools = ToolState::new();
    tools.activate(Tool::ShapeDrawing(ShapeKind::Rectangle));
    // Wide but not tall enough.
    tools.begin_shape(Point::new(0.0, 0.0));
    tools.update_shape(Point::new(100.0, 10.0));
    assert!(tools.finish_shape().is_none());

    tools.begin_shape(Point::new(0.0, 0.0));
    tools.update_shape(Point::new(10.5, 10.5));
    assert!(tools.finish_shape().is_some());
}

#[test]
fn test_reactivating_shape_tool_with_other_kind() {
    let mut tools = ToolState::new();
    tools.activate(Tool::ShapeDrawing(ShapeKind::Rectangle));
    tools.activate(Tool::ShapeDrawing(ShapeKind::Circle));
    tools.begin_shape(Point::new(0.0, 0.0));
    tools.update_shape(Point::new(20.0, 20.0));
    let (kind, _) = tools.finish_shape().unwrap();
    assert_eq!(kind, ShapeKind::Circle);
}
