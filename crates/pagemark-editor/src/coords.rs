//! Screen/document coordinate conversion.
//!
//! Handles conversion between screen pixels (pointer events), scaled
//! document pixels, and normalized document coordinates (scale 1.0).
//! In split view the original and translated panes sit side by side with a
//! fixed [`SPLIT_VIEW_GAP`] pixel gap, so translated-pane points need the
//! pane offset subtracted before dividing by the scale.
//!
//! Every pointer handler resolves the pane through
//! [`determine_clicked_view`]; the boundary math lives only here so the gap
//! edge behaves identically everywhere.

use pagemark_core::{PaneSide, Point, Rect, ViewMode, SPLIT_VIEW_GAP};

/// Resolves which split pane a pane-container-local x coordinate falls in.
///
/// Returns `None` when the point lies inside the inter-pane gap; such
/// clicks must be ignored by the caller.
///
/// With `page_width = 800` and `scale = 1.0`: x = 799 is the original pane,
/// x = 810 is the gap, x = 821 is the translated pane.
pub fn determine_clicked_view(click_x: f64, page_width: f64, scale: f64) -> Option<PaneSide> {
    let boundary = page_width * scale;
    if click_x < boundary {
        Some(PaneSide::Original)
    } else if click_x < boundary + SPLIT_VIEW_GAP {
        None
    } else {
        Some(PaneSide::Translated)
    }
}

/// Converts a pointer event's client coordinates into normalized document
/// coordinates.
///
/// `container` is the bounding rectangle of the page container in screen
/// space. `clicked_view` is the pane the point resolved to (via
/// [`determine_clicked_view`]); it only matters when `view_mode` is
/// [`ViewMode::Split`], where translated-pane points have
/// `page_width * scale + SPLIT_VIEW_GAP` subtracted before dividing by the
/// scale. The gap is a raw screen-pixel constant and is not itself scaled.
///
/// The output is always in scale-1.0 units so stored element coordinates
/// stay zoom independent.
pub fn screen_to_document(
    screen_x: f64,
    screen_y: f64,
    container: &Rect,
    scale: f64,
    clicked_view: PaneSide,
    view_mode: ViewMode,
    page_width: f64,
) -> Point {
    let local_x = screen_x - container.x;
    let local_y = screen_y - container.y;

    let x = if view_mode == ViewMode::Split && clicked_view == PaneSide::Translated {
        (local_x - (page_width * scale + SPLIT_VIEW_GAP)) / scale
    } else {
        local_x / scale
    };
    Point::new(x, local_y / scale)
}

/// Converts normalized document coordinates back to screen coordinates.
///
/// Exact inverse of [`screen_to_document`] for the same pane, view mode,
/// scale, and container.
pub fn document_to_screen(
    point: Point,
    container: &Rect,
    scale: f64,
    pane: PaneSide,
    view_mode: ViewMode,
    page_width: f64,
) -> (f64, f64) {
    let pane_offset = if view_mode == ViewMode::Split && pane == PaneSide::Translated {
        page_width * scale + SPLIT_VIEW_GAP
    } else {
        0.0
    };
    (
        point.x * scale + pane_offset + container.x,
        point.y * scale + container.y,
    )
}

/// Pixel offset of a pane's left edge inside the split-view container.
pub fn pane_offset(pane: PaneSide, page_width: f64, scale: f64) -> f64 {
    match pane {
        PaneSide::Original => 0.0,
        PaneSide::Translated => page_width * scale + SPLIT_VIEW_GAP,
    }
}
