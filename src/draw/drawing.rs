//! Owned, ordered object registry backing the canvas.

use super::object::DrawingObject;
use crate::util::{Point, Rect};

/// Stable handle to an object inside a [`Drawing`].
///
/// Handles are monotonically increasing identifiers; removing an object never
/// invalidates the handles of the others, and a stale handle simply stops
/// resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

/// The drawing: an ordered sequence of objects where sequence position is
/// z-order (front = end of the list).
///
/// The drawing is exclusively owned by the canvas controller; tools address
/// objects through [`ObjectId`] handles, never through independent copies, so
/// deselecting never destroys anything.
#[derive(Debug, Default)]
pub struct Drawing {
    entries: Vec<(ObjectId, DrawingObject)>,
    next_id: u64,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Adds an object on top of the stack and returns its handle.
    pub fn push(&mut self, object: DrawingObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, object));
        id
    }

    /// Removes the object behind `id`, returning it if the handle was live.
    pub fn remove(&mut self, id: ObjectId) -> Option<DrawingObject> {
        let index = self.index_of(id)?;
        Some(self.entries.remove(index).1)
    }

    /// Removes every object.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: ObjectId) -> Option<&DrawingObject> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, object)| object)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut DrawingObject> {
        self.entries
            .iter_mut()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, object)| object)
    }

    /// Objects in z-order, back to front.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &DrawingObject)> {
        self.entries.iter().map(|(id, object)| (*id, object))
    }

    /// Moves the object to the front of the stacking order.
    pub fn raise_to_front(&mut self, id: ObjectId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                let entry = self.entries.remove(index);
                self.entries.push(entry);
                true
            }
            None => false,
        }
    }

    /// Moves the object to the back of the stacking order.
    pub fn lower_to_back(&mut self, id: ObjectId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                let entry = self.entries.remove(index);
                self.entries.insert(0, entry);
                true
            }
            None => false,
        }
    }

    /// Finds the single object nearest to `point`.
    ///
    /// Distance ties resolve to the most recently stacked object, which keeps
    /// the result deterministic for a given display-list state and matches
    /// the intuition that the thing on top is the thing you clicked.
    pub fn nearest(&self, point: Point) -> Option<ObjectId> {
        let mut best: Option<(ObjectId, f64)> = None;
        for (id, object) in &self.entries {
            let distance = object.distance_to(point);
            if distance.is_finite() {
                // `>=` so a later (higher-stacked) object wins exact ties.
                let better = best.map_or(true, |(_, best_distance)| distance <= best_distance);
                if better {
                    best = Some((*id, distance));
                }
            }
        }
        best.map(|(id, _)| id)
    }

    /// Objects whose bounding box is fully enclosed by `rect`, back to front.
    pub fn enclosed(&self, rect: Rect) -> Vec<ObjectId> {
        self.entries
            .iter()
            .filter(|(_, object)| {
                object
                    .bounding_box()
                    .is_some_and(|bbox| rect.contains_rect(bbox))
            })
            .map(|(id, _)| *id)
            .collect()
    }

    fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.entries.iter().position(|(entry_id, _)| *entry_id == id)
    }
}

impl FromIterator<DrawingObject> for Drawing {
    fn from_iter<T: IntoIterator<Item = DrawingObject>>(iter: T) -> Self {
        let mut drawing = Drawing::new();
        for object in iter {
            drawing.push(object);
        }
        drawing
    }
}
