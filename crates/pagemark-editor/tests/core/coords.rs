use pagemark_core::{PaneSide, Point, Rect, ViewMode, SPLIT_VIEW_GAP};
use pagemark_editor::coords::{determine_clicked_view, document_to_screen, screen_to_document};

#[test]
fn test_original_pane_click() {
    assert_eq!(
        determine_clicked_view(0.0, 800.0, 1.0),
        Some(PaneSide::Original)
    );
    assert_eq!(
        determine_clicked_view(799.9, 800.0, 1.0),
        Some(PaneSide::Original)
    );
}

#[test]
fn test_gap_click_is_ignored() {
    // Gap spans [800, 820) at scale 1.0.
    assert_eq!(determine_clicked_view(800.0, 800.0, 1.0), None);
    assert_eq!(determine_clicked_view(819.9, 800.0, 1.0), None);
    assert_eq!(
        determine_clicked_view(820.0, 800.0, 1.0),
        Some(PaneSide::Translated)
    );
}

#[test]
fn test_gap_stays_fixed_across_zoom() {
    // The pane boundary scales, the gap width does not.
    for &scale in &[0.5, 1.0, 2.0, 3.5] {
        let boundary = 800.0 * scale;
        assert_eq!(determine_clicked_view(boundary - 0.1, 800.0, scale), Some(PaneSide::Original));
        assert_eq!(determine_clicked_view(boundary + SPLIT_VIEW_GAP / 2.0, 800.0, scale), None);
        assert_eq!(
            determine_clicked_view(boundary + SPLIT_VIEW_GAP, 800.0, scale),
            Some(PaneSide::Translated)
        );
    }
}

#[test]
fn test_translated_pane_subtracts_offset_before_scaling() {
    let container = Rect::new(0.0, 0.0, 3000.0, 2000.0);
    // At scale 2.0 the translated pane starts at 800 * 2 + 20 = 1620.
    let p = screen_to_document(
        1820.0,
        400.0,
        &container,
        2.0,
        PaneSide::Translated,
        ViewMode::Split,
        800.0,
    );
    assert!((p.x - 100.0).abs() < 1e-9);
    assert!((p.y - 200.0).abs() < 1e-9);
}

#[test]
fn test_container_offset_is_removed() {
    let container = Rect::new(250.0, 130.0, 900.0, 1100.0);
    let p = screen_to_document(
        450.0,
        330.0,
        &container,
        1.0,
        PaneSide::Original,
        ViewMode::Translated,
        800.0,
    );
    assert!((p.x - 200.0).abs() < 1e-9);
    assert!((p.y - 200.0).abs() < 1e-9);
}

#[test]
fn test_document_to_screen_is_exact_inverse() {
    let container = Rect::new(12.0, 34.0, 2000.0, 1500.0);
    let point = Point::new(321.5, 87.25);
    for &(pane, mode) in &[
        (PaneSide::Original, ViewMode::Split),
        (PaneSide::Translated, ViewMode::Split),
        (PaneSide::Original, ViewMode::Original),
        (PaneSide::Original, ViewMode::FinalLayout),
    ] {
        let (sx, sy) = document_to_screen(point, &container, 1.75, pane, mode, 800.0);
        let back = screen_to_document(sx, sy, &container, 1.75, pane, mode, 800.0);
        assert!((back.x - point.x).abs() < 1e-9);
        assert!((back.y - point.y).abs() < 1e-9);
    }
}

#[test]
fn test_same_screen_point_differs_per_pane() {
    // A point in the translated pane maps near the page origin; interpreted
    // as an original-pane point it would be far off the page.
    let container = Rect::new(0.0, 0.0, 2000.0, 1200.0);
    let in_translated = screen_to_document(
        830.0,
        10.0,
        &container,
        1.0,
        PaneSide::Translated,
        ViewMode::Split,
        800.0,
    );
    let in_original = screen_to_document(
        830.0,
        10.0,
        &container,
        1.0,
        PaneSide::Original,
        ViewMode::Split,
        800.0,
    );
    assert!((in_translated.x - 10.0).abs() < 1e-9);
    assert!((in_original.x - 830.0).abs() < 1e-9);
}
