//! View composition: flattening one bucket's elements into paint order and
//! laying out the split-view panes.

use pagemark_core::{DocumentView, PaneSide, Rect, SPLIT_VIEW_GAP};

use crate::elements::ElementRef;
use crate::store::ElementStore;

/// Flattens one page of one view bucket into a single paint-ordered list.
///
/// All four element kinds are included, sorted ascending by z-index. The
/// sort is stable over the bucket's layer-order list, so z ties keep their
/// relative layer positions and repeated composition of unchanged state
/// yields an identical sequence.
pub fn compose_page<'a>(
    store: &'a ElementStore,
    view: DocumentView,
    page: u32,
) -> Vec<ElementRef<'a>> {
    let mut items: Vec<ElementRef<'a>> = store
        .layer_order(view)
        .iter()
        .filter_map(|&id| store.element(view, id))
        .filter(|e| e.page() == page)
        .collect();
    items.sort_by_key(|e| e.z_index());
    items
}

/// Pixel geometry of the side-by-side split view.
///
/// Both panes render the same page width at the same scale with a fixed
/// [`SPLIT_VIEW_GAP`] raw-pixel gap between them. The gap itself is not
/// scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLayout {
    pub scale: f64,
    pub page_width: f64,
    pub page_height: f64,
}

impl SplitLayout {
    pub fn new(scale: f64, page_width: f64, page_height: f64) -> Self {
        Self {
            scale,
            page_width,
            page_height,
        }
    }

    /// Width of one rendered pane in pixels.
    pub fn pane_width(&self) -> f64 {
        self.page_width * self.scale
    }

    /// Height of one rendered pane in pixels.
    pub fn pane_height(&self) -> f64 {
        self.page_height * self.scale
    }

    /// Total container width: two panes plus the gap.
    pub fn total_width(&self) -> f64 {
        self.pane_width() * 2.0 + SPLIT_VIEW_GAP
    }

    /// Pixel offset of a pane's left edge inside the container.
    pub fn pane_x(&self, pane: PaneSide) -> f64 {
        match pane {
            PaneSide::Original => 0.0,
            PaneSide::Translated => self.pane_width() + SPLIT_VIEW_GAP,
        }
    }

    /// Positions a document-space overlay rectangle (selection preview,
    /// draw preview) in container pixels for the given pane.
    pub fn overlay_rect(&self, rect: &Rect, pane: PaneSide) -> Rect {
        Rect::new(
            rect.x * self.scale + self.pane_x(pane),
            rect.y * self.scale,
            rect.width * self.scale,
            rect.height * self.scale,
        )
    }
}
