//! Shared enums and identifiers used across the editing model.

use serde::{Deserialize, Serialize};

/// Identifier of an element within one view bucket.
///
/// Ids are assigned by the element store and are unique within their bucket,
/// not globally: the original and translated buckets each run their own
/// sequence.
pub type ElementId = u64;

/// The kind tag of an element, used for dispatch at the selection/drag
/// boundary where elements of different kinds travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    TextField,
    Shape,
    Image,
    DeletionRectangle,
}

/// One of the three independent element collections.
///
/// Each bucket holds a parallel rendering of the same paginated document.
/// An element belongs to exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentView {
    #[serde(rename = "original")]
    Original,
    #[serde(rename = "translated")]
    Translated,
    #[serde(rename = "final-layout")]
    FinalLayout,
}

impl DocumentView {
    /// All buckets, in persistence order.
    pub const ALL: [DocumentView; 3] = [
        DocumentView::Original,
        DocumentView::Translated,
        DocumentView::FinalLayout,
    ];
}

/// What the UI is currently displaying.
///
/// `Split` renders the original and translated buckets side by side with a
/// fixed pixel gap and is the only mode requiring pane-aware coordinate
/// correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    Original,
    Translated,
    Split,
    FinalLayout,
}

impl ViewMode {
    /// The bucket edited by default in this mode.
    ///
    /// Split view has no single answer; pointer handlers resolve the pane
    /// via `determine_clicked_view` instead. This returns the translated
    /// bucket as the split-view default because that is where new overlay
    /// content lands.
    pub fn default_bucket(&self) -> DocumentView {
        match self {
            ViewMode::Original => DocumentView::Original,
            ViewMode::Translated | ViewMode::Split => DocumentView::Translated,
            ViewMode::FinalLayout => DocumentView::FinalLayout,
        }
    }
}

/// Which split-view pane a pointer event landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaneSide {
    Original,
    Translated,
}

impl PaneSide {
    /// The view bucket this pane renders.
    pub fn bucket(&self) -> DocumentView {
        match self {
            PaneSide::Original => DocumentView::Original,
            PaneSide::Translated => DocumentView::Translated,
        }
    }
}

/// Workflow step recorded in the persistence payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowStep {
    #[serde(rename = "translate")]
    Translate,
    #[serde(rename = "layout")]
    Layout,
    #[serde(rename = "final-layout")]
    FinalLayout,
}

impl Default for WorkflowStep {
    fn default() -> Self {
        WorkflowStep::Translate
    }
}

/// Dimensions and background of one rendered page, in normalized document
/// coordinates.
///
/// Supplied by the rendering provider; the core consumes it for boundary
/// clamping and for coloring deletion rectangles to match the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetrics {
    pub width: f64,
    pub height: f64,
    /// CSS color of the page background, used for deletion rectangles.
    #[serde(default = "default_page_background")]
    pub background_color: String,
}

fn default_page_background() -> String {
    "#ffffff".to_string()
}

impl PageMetrics {
    /// Creates page metrics with the default white background.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background_color: default_page_background(),
        }
    }

    /// Creates page metrics with an explicit background color.
    pub fn with_background(width: f64, height: f64, background_color: impl Into<String>) -> Self {
        Self {
            width,
            height,
            background_color: background_color.into(),
        }
    }
}
