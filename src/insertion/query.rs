//! Host-facing spatial query surface.
//!
//! The insertion resolver never touches a rendering surface directly. It
//! asks a [`SpatialQuery`] for elements under a point, their bounds, their
//! place in the tree and their layout mode. A live editor implements the
//! trait over its real element tree; tests and headless hosts use
//! [`crate::element_tree::ElementTree`].

use serde::{Deserialize, Serialize};

/// Opaque handle to a host element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

/// Pointer position in host pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Element bounding rectangle in host pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Whether the element occupies any area on screen
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Euclidean distance from `point` to the nearest point of the rect.
    /// Zero when the point is inside.
    pub fn distance_to(&self, point: Point) -> f32 {
        let nearest_x = point.x.clamp(self.x, self.right().max(self.x));
        let nearest_y = point.y.clamp(self.y, self.bottom().max(self.y));
        let dx = point.x - nearest_x;
        let dy = point.y - nearest_y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// What an element is to the drag engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementRole {
    /// Root or document-level element, never a drop target
    Document,
    /// Explicitly marked as accepting dropped blocks
    DropContainer,
    /// Media leaf (image, video, embed) whose box is sized by its wrapper
    Media,
    #[default]
    Plain,
}

/// Main axis of a flex or grid container's flow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowAxis {
    Row,
    Column,
}

/// Computed layout mode of an element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutMode {
    Flex(FlowAxis),
    Grid(FlowAxis),
    #[default]
    Other,
}

/// Spatial queries the insertion resolver needs from its host.
///
/// Implementations answer from whatever geometry snapshot they hold; the
/// resolver treats every answer as authoritative for the current frame.
pub trait SpatialQuery {
    /// Elements containing `point`, front-most first
    fn elements_at_point(&self, point: Point) -> Vec<ElementId>;

    /// Bounding rectangle; `None` for detached or unknown elements
    fn bounds(&self, element: ElementId) -> Option<Bounds>;

    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// Child elements in document order
    fn children(&self, element: ElementId) -> Vec<ElementId>;

    /// Block type tag used for containment checks
    fn tag(&self, element: ElementId) -> Option<&str>;

    fn role(&self, element: ElementId) -> ElementRole;

    fn layout(&self, element: ElementId) -> LayoutMode;
}
