//! Mobile layout derivation from a desktop layout.

use super::Grid;
use crate::constants::MOBILE_ROW_SPACING;
use crate::types::{Block, BlockPosition, Breakpoint, GridRect};
use tracing::debug;

impl Grid {
    /// Stack every block full-width on mobile in desktop reading order.
    ///
    /// Blocks are ordered by desktop `(y, x)`; ties keep their layout order.
    /// Each block keeps its mobile height (its manual height when set, at
    /// least one row) and is separated from the next by [`MOBILE_ROW_SPACING`] blank rows.
    /// Desktop positions are copied through untouched.
    pub fn derive_mobile_layout(&self, layout: &[Block]) -> Vec<Block> {
        let mut ordered: Vec<&Block> = layout.iter().collect();
        ordered.sort_by_key(|block| {
            let rect = block.rect(Breakpoint::Desktop);
            (rect.y, rect.x)
        });

        let width = self.cols(Breakpoint::Mobile);
        let mut current_y = 0;
        let derived: Vec<Block> = ordered
            .into_iter()
            .map(|block| {
                let mobile = &block.position.mobile;
                let rect = GridRect::new(0, current_y, width, mobile.effective_height().max(1));
                current_y = current_y
                    .saturating_add(rect.h)
                    .saturating_add(MOBILE_ROW_SPACING);
                block.with_position(
                    Breakpoint::Mobile,
                    BlockPosition {
                        rect,
                        manual_height: mobile.manual_height,
                    },
                )
            })
            .collect();

        debug!(blocks = derived.len(), height = current_y, "derived mobile layout");
        derived
    }

    /// Set a manual mobile height on `block`, returning the resized copy
    pub fn resize_mobile(&self, block: &Block, height: i32) -> Block {
        let position = block.position.mobile.with_manual_height(height.max(1));
        block.with_position(Breakpoint::Mobile, position)
    }
}
