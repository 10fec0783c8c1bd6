//! Spatial Index Module
//!
//! R-tree based point queries for element hit testing. Each entry carries a
//! paint order so point queries can report elements front-to-back, the way
//! a rendering surface's "elements at point" lookup does.

use crate::insertion::{Bounds, ElementId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// An element's bounding box and paint order.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub element: ElementId,
    /// Paint order; higher is painted later, i.e. in front
    pub z: u64,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(element: ElementId, z: u64, bounds: Bounds) -> Self {
        Self {
            element,
            z,
            min_x: bounds.x,
            min_y: bounds.y,
            max_x: bounds.right(),
            max_y: bounds.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

/// Spatial index over element bounds.
/// Provides O(log n) point queries for hit testing.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ElementId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build an index from `(element, z, bounds)` triples in one pass.
    pub fn from_entries<I>(items: I) -> Self
    where
        I: Iterator<Item = (ElementId, u64, Bounds)>,
    {
        let entries: Vec<SpatialEntry> = items
            .map(|(element, z, bounds)| SpatialEntry::new(element, z, bounds))
            .collect();

        let entries_map: HashMap<ElementId, SpatialEntry> =
            entries.iter().map(|e| (e.element, *e)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    pub fn insert(&mut self, element: ElementId, z: u64, bounds: Bounds) {
        if let Some(old_entry) = self.entries.remove(&element) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(element, z, bounds);
        self.tree.insert(entry);
        self.entries.insert(element, entry);
    }

    pub fn remove(&mut self, element: ElementId) -> bool {
        if let Some(entry) = self.entries.remove(&element) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Elements containing the point, front-most first.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<ElementId> {
        let point_envelope = AABB::from_point([x, y]);

        let mut hits: Vec<&SpatialEntry> = self
            .tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .collect();
        hits.sort_by(|a, b| b.z.cmp(&a.z).then(a.element.cmp(&b.element)));
        hits.into_iter().map(|entry| entry.element).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
