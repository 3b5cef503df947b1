//! Per-view element collections with z-ordering.
//!
//! The store holds three independent buckets (original, translated,
//! final-layout). Each bucket keeps its elements in id-keyed maps plus one
//! explicit `layer_order` list that is the paint order, kept consistent
//! with the per-element z-index fields. Collections are not partitioned by
//! page; consumers filter by page at read time.
//!
//! Update and delete against an unknown id are silent no-ops: the UI may
//! race between async state updates, and the store tolerates stale ids
//! rather than propagating errors into an interactive surface.

use std::collections::HashMap;

use tracing::debug;

use pagemark_core::{DocumentView, ElementId, ElementKind, Point, Rect};

use crate::elements::{
    DeletionRectangle, DeletionRectanglePatch, ElementRef, ImageElement, ImagePatch, ShapeElement,
    ShapePatch, TextField, TextFieldPatch,
};

/// One view bucket: four element collections plus the paint-order list.
#[derive(Debug, Clone, Default)]
pub struct ViewBucket {
    text_fields: HashMap<ElementId, TextField>,
    shapes: HashMap<ElementId, ShapeElement>,
    images: HashMap<ElementId, ImageElement>,
    deletion_rectangles: HashMap<ElementId, DeletionRectangle>,
    /// Element ids low-to-high in paint order. Ties in z-index resolve by
    /// position in this list, which preserves insertion order until a
    /// reorder operation changes it.
    layer_order: Vec<ElementId>,
    next_id: ElementId,
}

impl ViewBucket {
    fn generate_id(&mut self) -> ElementId {
        self.next_id += 1;
        self.next_id
    }

    /// Ensures future generated ids do not collide with restored ones.
    fn bump_next_id(&mut self, id: ElementId) {
        if id > self.next_id {
            self.next_id = id;
        }
    }

    fn kind_of(&self, id: ElementId) -> Option<ElementKind> {
        if self.text_fields.contains_key(&id) {
            Some(ElementKind::TextField)
        } else if self.shapes.contains_key(&id) {
            Some(ElementKind::Shape)
        } else if self.images.contains_key(&id) {
            Some(ElementKind::Image)
        } else if self.deletion_rectangles.contains_key(&id) {
            Some(ElementKind::DeletionRectangle)
        } else {
            None
        }
    }

    fn element(&self, id: ElementId) -> Option<ElementRef<'_>> {
        if let Some(e) = self.text_fields.get(&id) {
            return Some(ElementRef::TextField(e));
        }
        if let Some(e) = self.shapes.get(&id) {
            return Some(ElementRef::Shape(e));
        }
        if let Some(e) = self.images.get(&id) {
            return Some(ElementRef::Image(e));
        }
        self.deletion_rectangles
            .get(&id)
            .map(ElementRef::DeletionRectangle)
    }

    fn max_z(&self) -> Option<i32> {
        self.layer_order
            .iter()
            .filter_map(|&id| self.element(id).map(|e| e.z_index()))
            .max()
    }

    fn min_z(&self) -> Option<i32> {
        self.layer_order
            .iter()
            .filter_map(|&id| self.element(id).map(|e| e.z_index()))
            .min()
    }

    fn set_z(&mut self, id: ElementId, z: i32) {
        if let Some(e) = self.text_fields.get_mut(&id) {
            e.z_index = z;
        } else if let Some(e) = self.shapes.get_mut(&id) {
            e.z_index = z;
        } else if let Some(e) = self.images.get_mut(&id) {
            e.z_index = z;
        } else if let Some(e) = self.deletion_rectangles.get_mut(&id) {
            e.z_index = z;
        }
    }

    fn z_of(&self, id: ElementId) -> Option<i32> {
        self.element(id).map(|e| e.z_index())
    }

    fn remove_from_order(&mut self, id: ElementId) {
        self.layer_order.retain(|&other| other != id);
    }
}

/// The element store: three independent view buckets.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    original: ViewBucket,
    translated: ViewBucket,
    final_layout: ViewBucket,
}

impl ElementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn bucket(&self, view: DocumentView) -> &ViewBucket {
        match view {
            DocumentView::Original => &self.original,
            DocumentView::Translated => &self.translated,
            DocumentView::FinalLayout => &self.final_layout,
        }
    }

    fn bucket_mut(&mut self, view: DocumentView) -> &mut ViewBucket {
        match view {
            DocumentView::Original => &mut self.original,
            DocumentView::Translated => &mut self.translated,
            DocumentView::FinalLayout => &mut self.final_layout,
        }
    }

    // ---- add ----------------------------------------------------------

    /// Adds a text field, assigning its id, and returns the id.
    ///
    /// The element keeps whatever z-index it carries (the default band for
    /// freshly built elements) and is appended to the paint-order list.
    pub fn add_text_field(&mut self, view: DocumentView, mut field: TextField) -> ElementId {
        let bucket = self.bucket_mut(view);
        let id = bucket.generate_id();
        field.id = id;
        bucket.text_fields.insert(id, field);
        bucket.layer_order.push(id);
        id
    }

    /// Adds a shape, assigning its id, and returns the id.
    pub fn add_shape(&mut self, view: DocumentView, mut shape: ShapeElement) -> ElementId {
        let bucket = self.bucket_mut(view);
        let id = bucket.generate_id();
        shape.id = id;
        bucket.shapes.insert(id, shape);
        bucket.layer_order.push(id);
        id
    }

    /// Adds an image, assigning its id, and returns the id.
    pub fn add_image(&mut self, view: DocumentView, mut image: ImageElement) -> ElementId {
        let bucket = self.bucket_mut(view);
        let id = bucket.generate_id();
        image.id = id;
        bucket.images.insert(id, image);
        bucket.layer_order.push(id);
        id
    }

    /// Adds a deletion rectangle, assigning its id, and returns the id.
    pub fn add_deletion_rectangle(
        &mut self,
        view: DocumentView,
        mut rect: DeletionRectangle,
    ) -> ElementId {
        let bucket = self.bucket_mut(view);
        let id = bucket.generate_id();
        rect.id = id;
        bucket.deletion_rectangles.insert(id, rect);
        bucket.layer_order.push(id);
        id
    }

    // ---- update -------------------------------------------------------

    /// Applies a partial update to a text field.
    ///
    /// `ongoing` marks a live-drag intermediate update; the store applies
    /// both identically, the flag exists so history recording can coalesce
    /// a gesture into one entry. Unknown ids are silent no-ops. Returns the
    /// element states before and after the patch when it applied.
    pub fn update_text_field(
        &mut self,
        view: DocumentView,
        id: ElementId,
        patch: &TextFieldPatch,
        ongoing: bool,
    ) -> Option<(TextField, TextField)> {
        let _ = ongoing;
        match self.bucket_mut(view).text_fields.get_mut(&id) {
            Some(field) => {
                let before = field.clone();
                patch.apply(field);
                Some((before, field.clone()))
            }
            None => {
                debug!(id, ?view, "update_text_field on unknown id ignored");
                None
            }
        }
    }

    /// Applies a partial update to a shape. Unknown ids are silent no-ops.
    pub fn update_shape(
        &mut self,
        view: DocumentView,
        id: ElementId,
        patch: &ShapePatch,
        ongoing: bool,
    ) -> Option<(ShapeElement, ShapeElement)> {
        let _ = ongoing;
        match self.bucket_mut(view).shapes.get_mut(&id) {
            Some(shape) => {
                let before = shape.clone();
                patch.apply(shape);
                Some((before, shape.clone()))
            }
            None => {
                debug!(id, ?view, "update_shape on unknown id ignored");
                None
            }
        }
    }

    /// Applies a partial update to an image. Unknown ids are silent no-ops.
    pub fn update_image(
        &mut self,
        view: DocumentView,
        id: ElementId,
        patch: &ImagePatch,
        ongoing: bool,
    ) -> Option<(ImageElement, ImageElement)> {
        let _ = ongoing;
        match self.bucket_mut(view).images.get_mut(&id) {
            Some(image) => {
                let before = image.clone();
                patch.apply(image);
                Some((before, image.clone()))
            }
            None => {
                debug!(id, ?view, "update_image on unknown id ignored");
                None
            }
        }
    }

    /// Applies a partial update to a deletion rectangle. Unknown ids are
    /// silent no-ops.
    pub fn update_deletion_rectangle(
        &mut self,
        view: DocumentView,
        id: ElementId,
        patch: &DeletionRectanglePatch,
        ongoing: bool,
    ) -> Option<(DeletionRectangle, DeletionRectangle)> {
        let _ = ongoing;
        match self.bucket_mut(view).deletion_rectangles.get_mut(&id) {
            Some(rect) => {
                let before = rect.clone();
                patch.apply(rect);
                Some((before, rect.clone()))
            }
            None => {
                debug!(id, ?view, "update_deletion_rectangle on unknown id ignored");
                None
            }
        }
    }

    // ---- delete -------------------------------------------------------

    /// Deletes a text field. Unknown ids are silent no-ops. Returns the
    /// removed element and its paint-order position for undo restoration.
    pub fn delete_text_field(
        &mut self,
        view: DocumentView,
        id: ElementId,
    ) -> Option<(TextField, usize)> {
        let bucket = self.bucket_mut(view);
        let removed = bucket.text_fields.remove(&id);
        match removed {
            Some(field) => {
                let index = order_index(&bucket.layer_order, id);
                bucket.remove_from_order(id);
                Some((field, index))
            }
            None => {
                debug!(id, ?view, "delete_text_field on unknown id ignored");
                None
            }
        }
    }

    /// Deletes a shape. Unknown ids are silent no-ops.
    pub fn delete_shape(
        &mut self,
        view: DocumentView,
        id: ElementId,
    ) -> Option<(ShapeElement, usize)> {
        let bucket = self.bucket_mut(view);
        match bucket.shapes.remove(&id) {
            Some(shape) => {
                let index = order_index(&bucket.layer_order, id);
                bucket.remove_from_order(id);
                Some((shape, index))
            }
            None => {
                debug!(id, ?view, "delete_shape on unknown id ignored");
                None
            }
        }
    }

    /// Deletes an image. Unknown ids are silent no-ops.
    pub fn delete_image(
        &mut self,
        view: DocumentView,
        id: ElementId,
    ) -> Option<(ImageElement, usize)> {
        let bucket = self.bucket_mut(view);
        match bucket.images.remove(&id) {
            Some(image) => {
                let index = order_index(&bucket.layer_order, id);
                bucket.remove_from_order(id);
                Some((image, index))
            }
            None => {
                debug!(id, ?view, "delete_image on unknown id ignored");
                None
            }
        }
    }

    /// Deletes a deletion rectangle. Unknown ids are silent no-ops.
    pub fn delete_deletion_rectangle(
        &mut self,
        view: DocumentView,
        id: ElementId,
    ) -> Option<(DeletionRectangle, usize)> {
        let bucket = self.bucket_mut(view);
        match bucket.deletion_rectangles.remove(&id) {
            Some(rect) => {
                let index = order_index(&bucket.layer_order, id);
                bucket.remove_from_order(id);
                Some((rect, index))
            }
            None => {
                debug!(id, ?view, "delete_deletion_rectangle on unknown id ignored");
                None
            }
        }
    }

    // ---- restore (undo support) --------------------------------------

    /// Re-inserts a previously deleted text field with its original id at
    /// the given paint-order position.
    pub fn restore_text_field(&mut self, view: DocumentView, field: TextField, index: usize) {
        let bucket = self.bucket_mut(view);
        let id = field.id;
        bucket.bump_next_id(id);
        bucket.text_fields.insert(id, field);
        insert_in_order(&mut bucket.layer_order, id, index);
    }

    /// Re-inserts a previously deleted shape.
    pub fn restore_shape(&mut self, view: DocumentView, shape: ShapeElement, index: usize) {
        let bucket = self.bucket_mut(view);
        let id = shape.id;
        bucket.bump_next_id(id);
        bucket.shapes.insert(id, shape);
        insert_in_order(&mut bucket.layer_order, id, index);
    }

    /// Re-inserts a previously deleted image.
    pub fn restore_image(&mut self, view: DocumentView, image: ImageElement, index: usize) {
        let bucket = self.bucket_mut(view);
        let id = image.id;
        bucket.bump_next_id(id);
        bucket.images.insert(id, image);
        insert_in_order(&mut bucket.layer_order, id, index);
    }

    /// Re-inserts a previously deleted deletion rectangle.
    pub fn restore_deletion_rectangle(
        &mut self,
        view: DocumentView,
        rect: DeletionRectangle,
        index: usize,
    ) {
        let bucket = self.bucket_mut(view);
        let id = rect.id;
        bucket.bump_next_id(id);
        bucket.deletion_rectangles.insert(id, rect);
        insert_in_order(&mut bucket.layer_order, id, index);
    }

    // ---- z-order ------------------------------------------------------

    /// Moves an element to the top of the paint order and gives it a
    /// z-index above every other element in the bucket.
    pub fn move_to_front(&mut self, view: DocumentView, id: ElementId) {
        let bucket = self.bucket_mut(view);
        if bucket.kind_of(id).is_none() {
            debug!(id, ?view, "move_to_front on unknown id ignored");
            return;
        }
        bucket.remove_from_order(id);
        bucket.layer_order.push(id);
        let z = bucket.max_z().unwrap_or(0) + 1;
        bucket.set_z(id, z);
    }

    /// Moves an element to the bottom of the paint order and gives it a
    /// z-index below every other element in the bucket.
    pub fn move_to_back(&mut self, view: DocumentView, id: ElementId) {
        let bucket = self.bucket_mut(view);
        if bucket.kind_of(id).is_none() {
            debug!(id, ?view, "move_to_back on unknown id ignored");
            return;
        }
        bucket.remove_from_order(id);
        bucket.layer_order.insert(0, id);
        let z = bucket.min_z().unwrap_or(0) - 1;
        bucket.set_z(id, z);
    }

    /// Swaps an element with its next-higher neighbor in the paint order,
    /// exchanging z-index values with it.
    pub fn move_forward(&mut self, view: DocumentView, id: ElementId) {
        let bucket = self.bucket_mut(view);
        let Some(index) = bucket.layer_order.iter().position(|&other| other == id) else {
            debug!(id, ?view, "move_forward on unknown id ignored");
            return;
        };
        if index + 1 >= bucket.layer_order.len() {
            return;
        }
        let neighbor = bucket.layer_order[index + 1];
        bucket.layer_order.swap(index, index + 1);
        let za = bucket.z_of(id);
        let zb = bucket.z_of(neighbor);
        if let (Some(za), Some(zb)) = (za, zb) {
            bucket.set_z(id, zb);
            bucket.set_z(neighbor, za);
        }
    }

    /// Swaps an element with its next-lower neighbor in the paint order,
    /// exchanging z-index values with it.
    pub fn move_backward(&mut self, view: DocumentView, id: ElementId) {
        let bucket = self.bucket_mut(view);
        let Some(index) = bucket.layer_order.iter().position(|&other| other == id) else {
            debug!(id, ?view, "move_backward on unknown id ignored");
            return;
        };
        if index == 0 {
            return;
        }
        let neighbor = bucket.layer_order[index - 1];
        bucket.layer_order.swap(index - 1, index);
        let za = bucket.z_of(id);
        let zb = bucket.z_of(neighbor);
        if let (Some(za), Some(zb)) = (za, zb) {
            bucket.set_z(id, zb);
            bucket.set_z(neighbor, za);
        }
    }

    /// Sets an element's z-index directly (undo restoration). Unknown ids
    /// are silent no-ops.
    pub fn set_z_index(&mut self, view: DocumentView, id: ElementId, z: i32) {
        self.bucket_mut(view).set_z(id, z);
    }

    /// An element's z-index, if it exists.
    pub fn z_index_of(&self, view: DocumentView, id: ElementId) -> Option<i32> {
        self.bucket(view).z_of(id)
    }

    /// Whether the element is last in the paint order (topmost).
    pub fn is_at_front(&self, view: DocumentView, id: ElementId) -> bool {
        self.bucket(view).layer_order.last() == Some(&id)
    }

    /// Whether the element is first in the paint order (bottommost).
    pub fn is_at_back(&self, view: DocumentView, id: ElementId) -> bool {
        self.bucket(view).layer_order.first() == Some(&id)
    }

    /// The bucket's paint-order list.
    pub fn layer_order(&self, view: DocumentView) -> &[ElementId] {
        &self.bucket(view).layer_order
    }

    /// Replaces the paint order wholesale (persistence load). Unknown ids
    /// in the incoming list are dropped; known ids missing from it are
    /// appended in their previous relative order.
    pub fn set_layer_order(&mut self, view: DocumentView, order: &[ElementId]) {
        let bucket = self.bucket_mut(view);
        let mut rebuilt: Vec<ElementId> = order
            .iter()
            .copied()
            .filter(|&id| bucket.kind_of(id).is_some())
            .collect();
        for &id in &bucket.layer_order {
            if !rebuilt.contains(&id) {
                rebuilt.push(id);
            }
        }
        bucket.layer_order = rebuilt;
    }

    // ---- read access --------------------------------------------------

    /// Text fields of a bucket, in paint order.
    pub fn text_fields(&self, view: DocumentView) -> Vec<&TextField> {
        let bucket = self.bucket(view);
        bucket
            .layer_order
            .iter()
            .filter_map(|id| bucket.text_fields.get(id))
            .collect()
    }

    /// Shapes of a bucket, in paint order.
    pub fn shapes(&self, view: DocumentView) -> Vec<&ShapeElement> {
        let bucket = self.bucket(view);
        bucket
            .layer_order
            .iter()
            .filter_map(|id| bucket.shapes.get(id))
            .collect()
    }

    /// Images of a bucket, in paint order.
    pub fn images(&self, view: DocumentView) -> Vec<&ImageElement> {
        let bucket = self.bucket(view);
        bucket
            .layer_order
            .iter()
            .filter_map(|id| bucket.images.get(id))
            .collect()
    }

    /// Deletion rectangles of a bucket, in paint order.
    pub fn deletion_rectangles(&self, view: DocumentView) -> Vec<&DeletionRectangle> {
        let bucket = self.bucket(view);
        bucket
            .layer_order
            .iter()
            .filter_map(|id| bucket.deletion_rectangles.get(id))
            .collect()
    }

    /// Looks up a single text field.
    pub fn text_field(&self, view: DocumentView, id: ElementId) -> Option<&TextField> {
        self.bucket(view).text_fields.get(&id)
    }

    /// Looks up a single shape.
    pub fn shape(&self, view: DocumentView, id: ElementId) -> Option<&ShapeElement> {
        self.bucket(view).shapes.get(&id)
    }

    /// Looks up a single image.
    pub fn image(&self, view: DocumentView, id: ElementId) -> Option<&ImageElement> {
        self.bucket(view).images.get(&id)
    }

    /// Looks up a single deletion rectangle.
    pub fn deletion_rectangle(
        &self,
        view: DocumentView,
        id: ElementId,
    ) -> Option<&DeletionRectangle> {
        self.bucket(view).deletion_rectangles.get(&id)
    }

    /// Kind-tagged lookup across all four collections of a bucket.
    pub fn element(&self, view: DocumentView, id: ElementId) -> Option<ElementRef<'_>> {
        self.bucket(view).element(id)
    }

    /// The kind of an element, if it exists.
    pub fn kind_of(&self, view: DocumentView, id: ElementId) -> Option<ElementKind> {
        self.bucket(view).kind_of(id)
    }

    /// Bounding rectangle of an element, if it exists.
    pub fn rect_of(&self, view: DocumentView, id: ElementId) -> Option<Rect> {
        self.element(view, id).map(|e| e.bounds())
    }

    /// Position of an element, if it exists.
    pub fn position_of(&self, view: DocumentView, id: ElementId) -> Option<Point> {
        self.rect_of(view, id).map(|r| r.origin())
    }

    /// Number of elements in a bucket.
    pub fn len(&self, view: DocumentView) -> usize {
        self.bucket(view).layer_order.len()
    }

    /// Whether a bucket is empty.
    pub fn is_empty(&self, view: DocumentView) -> bool {
        self.bucket(view).layer_order.is_empty()
    }

    /// Removes every element from a bucket (bulk "clear translations").
    pub fn clear_view(&mut self, view: DocumentView) {
        let bucket = self.bucket_mut(view);
        bucket.text_fields.clear();
        bucket.shapes.clear();
        bucket.images.clear();
        bucket.deletion_rectangles.clear();
        bucket.layer_order.clear();
    }
}

fn order_index(order: &[ElementId], id: ElementId) -> usize {
    order
        .iter()
        .position(|&other| other == id)
        .unwrap_or(order.len())
}

fn insert_in_order(order: &mut Vec<ElementId>, id: ElementId, index: usize) {
    let index = index.min(order.len());
    order.insert(index, id);
}
