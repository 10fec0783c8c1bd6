//! In-memory element tree.
//!
//! A [`SpatialQuery`] implementation over a snapshot of element geometry.
//! Hosts without direct access to their rendering surface (headless
//! authoring tools, tests) build one of these and hand it to the insertion
//! resolver. Point lookups go through an R-tree [`SpatialIndex`]; paint
//! order follows insertion order, so children appended after their parent
//! are in front of it.

use crate::insertion::{Bounds, ElementId, ElementRole, LayoutMode, Point, SpatialQuery};
use crate::spatial_index::SpatialIndex;
use std::collections::HashMap;

/// Description of an element to append
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementSpec {
    pub tag: Option<String>,
    pub role: ElementRole,
    pub layout: LayoutMode,
    pub bounds: Bounds,
}

impl ElementSpec {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    /// A drop container tagged with its block type
    pub fn container(tag: impl Into<String>, bounds: Bounds) -> Self {
        Self::new(bounds).tag(tag).role(ElementRole::DropContainer)
    }

    /// A placed block tagged with its block type
    pub fn block(tag: impl Into<String>, bounds: Bounds) -> Self {
        Self::new(bounds).tag(tag)
    }

    pub fn media(bounds: Bounds) -> Self {
        Self::new(bounds).role(ElementRole::Media)
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn role(mut self, role: ElementRole) -> Self {
        self.role = role;
        self
    }

    pub fn layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }
}

#[derive(Clone, Debug)]
struct ElementNode {
    spec: ElementSpec,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    z: u64,
}

pub struct ElementTree {
    nodes: HashMap<ElementId, ElementNode>,
    index: SpatialIndex,
    root: ElementId,
    next_id: u64,
}

impl ElementTree {
    /// Create a tree holding only a document-level root
    pub fn new(viewport: Bounds) -> Self {
        let root = ElementId(0);
        let spec = ElementSpec::new(viewport).role(ElementRole::Document);
        let mut index = SpatialIndex::new();
        index.insert(root, 0, viewport);

        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            ElementNode {
                spec,
                parent: None,
                children: Vec::new(),
                z: 0,
            },
        );

        Self {
            nodes,
            index,
            root,
            next_id: 1,
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Append an element as the last child of `parent`.
    /// Returns `None` if `parent` is not in the tree.
    pub fn append(&mut self, parent: ElementId, spec: ElementSpec) -> Option<ElementId> {
        let parent_node = self.nodes.get_mut(&parent)?;
        let id = ElementId(self.next_id);
        self.next_id += 1;
        parent_node.children.push(id);

        // Ids only grow, so the id doubles as paint order
        let z = id.0;
        self.index.insert(id, z, spec.bounds);
        self.nodes.insert(
            id,
            ElementNode {
                spec,
                parent: Some(parent),
                children: Vec::new(),
                z,
            },
        );
        Some(id)
    }

    /// Move an element after a relayout. Returns false for unknown elements.
    pub fn set_bounds(&mut self, element: ElementId, bounds: Bounds) -> bool {
        let Some(node) = self.nodes.get_mut(&element) else {
            return false;
        };
        node.spec.bounds = bounds;
        self.index.insert(element, node.z, bounds);
        true
    }

    /// Remove an element and its whole subtree. The root cannot be removed.
    pub fn remove(&mut self, element: ElementId) -> bool {
        if element == self.root {
            return false;
        }
        let Some(node) = self.nodes.remove(&element) else {
            return false;
        };
        if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|child| *child != element);
        }
        self.index.remove(element);

        let mut pending = node.children;
        while let Some(child) = pending.pop() {
            if let Some(removed) = self.nodes.remove(&child) {
                self.index.remove(child);
                pending.extend(removed.children);
            }
        }
        true
    }

    /// Drop every element except the root, e.g. before re-snapshotting a page
    pub fn clear(&mut self) {
        let root = self.root;
        self.nodes.retain(|id, _| *id == root);
        self.index.clear();
        if let Some(node) = self.nodes.get_mut(&root) {
            node.children.clear();
            self.index.insert(root, node.z, node.spec.bounds);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl SpatialQuery for ElementTree {
    fn elements_at_point(&self, point: Point) -> Vec<ElementId> {
        self.index.query_point(point.x, point.y)
    }

    fn bounds(&self, element: ElementId) -> Option<Bounds> {
        self.nodes.get(&element).map(|node| node.spec.bounds)
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(&element).and_then(|node| node.parent)
    }

    fn children(&self, element: ElementId) -> Vec<ElementId> {
        self.nodes
            .get(&element)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    fn tag(&self, element: ElementId) -> Option<&str> {
        self.nodes.get(&element).and_then(|node| node.spec.tag.as_deref())
    }

    fn role(&self, element: ElementId) -> ElementRole {
        self.nodes
            .get(&element)
            .map(|node| node.spec.role)
            .unwrap_or_default()
    }

    fn layout(&self, element: ElementId) -> LayoutMode {
        self.nodes
            .get(&element)
            .map(|node| node.spec.layout)
            .unwrap_or_default()
    }
}
