//! Core types for the brick grid.
//!
//! This module defines the grid model shared by every other part of the
//! engine: breakpoints, cell-unit rectangles, blocks and the size
//! constraints a block's schema declares. All grid quantities are integer
//! cell units and are scoped to a breakpoint.

use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::{Index, IndexMut};

// ============================================================================
// Breakpoints
// ============================================================================

/// Layout context a block is positioned in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

impl Breakpoint {
    pub fn label(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Desktop => "desktop",
        }
    }

    pub fn all() -> &'static [Breakpoint] {
        &[Breakpoint::Mobile, Breakpoint::Desktop]
    }
}

/// One value per breakpoint.
///
/// Indexable by [`Breakpoint`], so `cols[bp]` reads the same as the
/// breakpoint-keyed tables it replaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerBreakpoint<T> {
    pub mobile: T,
    pub desktop: T,
}

impl<T> PerBreakpoint<T> {
    pub const fn new(mobile: T, desktop: T) -> Self {
        Self { mobile, desktop }
    }

    #[inline]
    pub fn get(&self, breakpoint: Breakpoint) -> &T {
        match breakpoint {
            Breakpoint::Mobile => &self.mobile,
            Breakpoint::Desktop => &self.desktop,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, breakpoint: Breakpoint) -> &mut T {
        match breakpoint {
            Breakpoint::Mobile => &mut self.mobile,
            Breakpoint::Desktop => &mut self.desktop,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerBreakpoint<U> {
        PerBreakpoint {
            mobile: f(self.mobile),
            desktop: f(self.desktop),
        }
    }
}

impl<T> Index<Breakpoint> for PerBreakpoint<T> {
    type Output = T;

    fn index(&self, breakpoint: Breakpoint) -> &T {
        self.get(breakpoint)
    }
}

impl<T> IndexMut<Breakpoint> for PerBreakpoint<T> {
    fn index_mut(&mut self, breakpoint: Breakpoint) -> &mut T {
        self.get_mut(breakpoint)
    }
}

// ============================================================================
// Grid Geometry
// ============================================================================

/// A cell on the grid, typically the cell under the pointer.
///
/// Coordinates may be negative when the pointer is left of or above the
/// grid; validators reject such points rather than clamping them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Cell-unit rectangle with a top-left origin
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl GridRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge. Widened so rects near `i32::MAX` cannot wrap.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Exclusive bottom edge, widened like [`GridRect::right`]
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    #[inline]
    pub const fn origin(&self) -> GridPoint {
        GridPoint::new(self.x, self.y)
    }

    /// Same size, moved so its origin sits on `point`
    #[inline]
    pub const fn moved_to(&self, point: GridPoint) -> Self {
        Self::new(point.x, point.y, self.w, self.h)
    }

    /// Whether the rect lies inside a grid `cols` columns wide.
    ///
    /// Rows are unbounded below, so only the top edge is checked vertically.
    #[inline]
    pub const fn fits_columns(&self, cols: i32) -> bool {
        self.x >= 0 && self.right() <= cols as i64 && self.y >= 0
    }
}

// ============================================================================
// Blocks
// ============================================================================

/// Position of a block at one breakpoint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPosition {
    #[serde(flatten)]
    pub rect: GridRect,
    /// User-set height override. Only honored by the mobile layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_height: Option<i32>,
}

impl BlockPosition {
    pub const fn new(rect: GridRect) -> Self {
        Self {
            rect,
            manual_height: None,
        }
    }

    pub const fn with_manual_height(mut self, height: i32) -> Self {
        self.manual_height = Some(height);
        self
    }

    /// Height used for mobile layout: the manual override when set
    #[inline]
    pub fn effective_height(&self) -> i32 {
        self.manual_height.unwrap_or(self.rect.h)
    }
}

/// A movable block ("brick") placed on the grid.
///
/// Blocks are treated as immutable values by the engine: every operation
/// that changes a position hands back a new block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique identifier for this block
    pub id: String,
    /// Block type, the key into the block registry
    #[serde(rename = "type")]
    pub block_type: String,
    /// Opaque block properties, owned by the block's renderer
    #[serde(default)]
    pub props: Map<String, Value>,
    /// Independent position per breakpoint
    pub position: PerBreakpoint<BlockPosition>,
}

impl Block {
    /// Create a block with a freshly generated id
    pub fn new(block_type: impl Into<String>, position: PerBreakpoint<BlockPosition>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), block_type, position)
    }

    pub fn with_id(
        id: impl Into<String>,
        block_type: impl Into<String>,
        position: PerBreakpoint<BlockPosition>,
    ) -> Self {
        Self {
            id: id.into(),
            block_type: block_type.into(),
            props: Map::new(),
            position,
        }
    }

    #[inline]
    pub fn rect(&self, breakpoint: Breakpoint) -> GridRect {
        self.position[breakpoint].rect
    }

    /// Copy of this block with the position at `breakpoint` replaced
    pub fn with_position(&self, breakpoint: Breakpoint, position: BlockPosition) -> Self {
        let mut block = self.clone();
        block.position[breakpoint] = position;
        block
    }
}

// ============================================================================
// Size Constraints
// ============================================================================

/// Size limits a block type declares in its schema.
///
/// Preferred sizes are optional; the drop validator falls back to the
/// minimum width and the grid's default height when they are absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeConstraints {
    pub min_width: PerBreakpoint<i32>,
    pub min_height: PerBreakpoint<i32>,
    #[serde(default)]
    pub preferred_width: PerBreakpoint<Option<i32>>,
    #[serde(default)]
    pub preferred_height: PerBreakpoint<Option<i32>>,
}

impl SizeConstraints {
    pub fn new(min_width: PerBreakpoint<i32>, min_height: PerBreakpoint<i32>) -> Self {
        Self {
            min_width,
            min_height,
            preferred_width: PerBreakpoint::default(),
            preferred_height: PerBreakpoint::default(),
        }
    }

    pub fn with_preferred_width(mut self, breakpoint: Breakpoint, width: i32) -> Self {
        self.preferred_width[breakpoint] = Some(width);
        self
    }

    pub fn with_preferred_height(mut self, breakpoint: Breakpoint, height: i32) -> Self {
        self.preferred_height[breakpoint] = Some(height);
        self
    }

    /// Reject schemas no drag could ever satisfy.
    ///
    /// Minimums may be zero (the validator raises width to one cell) but not
    /// negative; preferred sizes must be positive when present.
    pub fn validate(&self, block_type: &str) -> LayoutResult<()> {
        let invalid = |field: &'static str, value: i32| LayoutError::InvalidConstraint {
            block_type: block_type.to_string(),
            field,
            value,
        };

        for &bp in Breakpoint::all() {
            if self.min_width[bp] < 0 {
                return Err(invalid("minWidth", self.min_width[bp]));
            }
            if self.min_height[bp] < 0 {
                return Err(invalid("minHeight", self.min_height[bp]));
            }
            if let Some(width) = self.preferred_width[bp].filter(|w| *w <= 0) {
                return Err(invalid("preferredWidth", width));
            }
            if let Some(height) = self.preferred_height[bp].filter(|h| *h <= 0) {
                return Err(invalid("preferredHeight", height));
            }
        }
        Ok(())
    }
}
