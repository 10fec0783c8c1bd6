//! Grid placement: where a block may sit on the column grid.
//!
//! ## Architecture
//!
//! [`Grid`] wraps a [`GridConfig`] and carries the placement operations as
//! methods, split across submodules by concern. Every operation is a pure
//! function of its arguments: layouts are borrowed, never mutated, and
//! results are new rects or new blocks.
//!
//! ## Modules
//!
//! - `collision` - AABB overlap and directional side classification
//! - `drop` - drop validation, full-space checks and committing a drop
//! - `mobile` - deriving the stacked mobile layout from the desktop one
//! - `ghost` - live drag preview with collisions and the forbidden hint

mod collision;
mod drop;
mod ghost;
mod mobile;

pub use collision::{CollisionSide, CollisionSides};
pub use ghost::{Collision, GhostPosition, sort_by_distance};

use crate::config::GridConfig;
use crate::types::Breakpoint;

/// The column grid placement is computed against
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    config: GridConfig,
}

impl Grid {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Column count at `breakpoint`
    #[inline]
    pub fn cols(&self, breakpoint: Breakpoint) -> i32 {
        self.config.layout_cols[breakpoint]
    }
}
