//! Structural insertion: where a dragged block lands in the element tree.
//!
//! While the placement module answers "which grid cells", this module
//! answers "which container, next to which sibling, on which side". It works
//! purely through the [`SpatialQuery`] trait so it can be driven by a live
//! rendering surface or by a synthetic tree in tests.
//!
//! ## Modules
//!
//! - `query` - the host spatial query trait and its geometry types
//! - `resolver` - pointer to [`InsertionTarget`] resolution
//! - `orientation` - row vs column detection for containers
//! - `indicator` - the insertion line shown while dragging

mod indicator;
mod orientation;
mod query;
mod resolver;

pub use indicator::{IndicatorController, IndicatorLine, LineAxis};
pub use orientation::is_container_horizontal;
pub use query::{Bounds, ElementId, ElementRole, FlowAxis, LayoutMode, Point, SpatialQuery};
pub use resolver::resolve_insertion;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalSide {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalSide {
    Top,
    Bottom,
}

/// Side of the reference element the new block goes on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InsertionSide {
    pub horizontal: HorizontalSide,
    pub vertical: VerticalSide,
}

impl InsertionSide {
    /// Half-plane test of `point` against the center of `bounds`.
    ///
    /// A point exactly on a midline resolves to `Right` / `Bottom`.
    pub fn from_point(bounds: &Bounds, point: Point) -> Self {
        let center = bounds.center();
        Self {
            horizontal: if point.x >= center.x {
                HorizontalSide::Right
            } else {
                HorizontalSide::Left
            },
            vertical: if point.y >= center.y {
                VerticalSide::Bottom
            } else {
                VerticalSide::Top
            },
        }
    }

    /// Whether the block goes after the reference along the container axis
    pub fn is_after(&self, horizontal_container: bool) -> bool {
        if horizontal_container {
            self.horizontal == HorizontalSide::Right
        } else {
            self.vertical == VerticalSide::Bottom
        }
    }
}

/// Resolved drop location for one pointer position
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertionTarget {
    pub container: ElementId,
    pub reference_element: ElementId,
    pub is_container_horizontal: bool,
    pub side: InsertionSide,
    pub coordinates: Point,
}

impl InsertionTarget {
    /// The reference is the container itself, i.e. the container is empty
    pub fn is_into_empty_container(&self) -> bool {
        self.container == self.reference_element
    }
}
