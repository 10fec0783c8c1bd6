//! Drop validation - can a block of a given size land at a grid point.

use super::Grid;
use crate::types::{Block, BlockPosition, Breakpoint, GridPoint, GridRect, SizeConstraints};
use tracing::trace;

impl Grid {
    /// Concrete size a newly dropped block takes at `breakpoint`.
    ///
    /// Width is the preferred width, or the minimum width (at least one
    /// cell), capped at the column count. Height is the preferred height or
    /// the grid's default for the breakpoint.
    pub fn drop_size(&self, breakpoint: Breakpoint, constraints: &SizeConstraints) -> (i32, i32) {
        let min_width = constraints.min_width[breakpoint].max(1);
        let width = constraints.preferred_width[breakpoint]
            .unwrap_or(min_width)
            .min(self.cols(breakpoint));
        let height = constraints.preferred_height[breakpoint]
            .unwrap_or(self.config().default_preferred_height[breakpoint]);
        (width, height)
    }

    /// Validate a drop at `drop_point` and return the rect the block takes.
    ///
    /// Returns `None` when the rect would leave the grid or, with
    /// `check_collisions`, overlap any block in `layout`. The dragged block
    /// itself must already be excluded from `layout` by the caller.
    pub fn can_drop(
        &self,
        layout: &[Block],
        breakpoint: Breakpoint,
        drop_point: GridPoint,
        constraints: &SizeConstraints,
        check_collisions: bool,
    ) -> Option<GridRect> {
        let (width, height) = self.drop_size(breakpoint, constraints);
        let rect = GridRect::new(drop_point.x, drop_point.y, width, height);

        if !rect.fits_columns(self.cols(breakpoint)) {
            trace!(?rect, bp = breakpoint.label(), "drop out of bounds");
            return None;
        }

        if check_collisions && Self::collides_with_any(layout, breakpoint, &rect, None) {
            trace!(?rect, bp = breakpoint.label(), "drop collides");
            return None;
        }

        Some(rect)
    }

    /// Whether `rect` is in bounds and free of every block except `exclude_id`
    pub fn can_take_full_space(
        &self,
        layout: &[Block],
        breakpoint: Breakpoint,
        rect: &GridRect,
        exclude_id: &str,
    ) -> bool {
        rect.fits_columns(self.cols(breakpoint))
            && !Self::collides_with_any(layout, breakpoint, rect, Some(exclude_id))
    }

    /// Move `block` to `rect` at `breakpoint` if the rect is a legal spot.
    ///
    /// Returns a new block; `block` is left untouched. A manual height set
    /// on the old position is kept.
    pub fn commit_drop(
        &self,
        layout: &[Block],
        block: &Block,
        breakpoint: Breakpoint,
        rect: GridRect,
    ) -> Option<Block> {
        if !self.can_take_full_space(layout, breakpoint, &rect, &block.id) {
            return None;
        }
        let position = BlockPosition {
            rect,
            ..block.position[breakpoint]
        };
        Some(block.with_position(breakpoint, position))
    }

    fn collides_with_any(
        layout: &[Block],
        breakpoint: Breakpoint,
        rect: &GridRect,
        exclude_id: Option<&str>,
    ) -> bool {
        layout
            .iter()
            .filter(|block| Some(block.id.as_str()) != exclude_id)
            .any(|block| rect.overlaps(&block.rect(breakpoint)))
    }
}
