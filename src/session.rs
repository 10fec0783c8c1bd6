//! Drag session - per-frame orchestration of one block drag.
//!
//! ## Performance Notes
//!
//! `pointer_move` is called for every pointer event during a drag, often
//! 60+ times per second. Each frame runs one ghost computation and one
//! insertion resolution and nothing else; frame timings are kept in an
//! [`FrameStats`] so hosts can check the budget.
//!
//! ## Ordering
//!
//! Frames are numbered. Hosts that apply results asynchronously compare a
//! frame's number with [`DragSession::is_stale`] and drop anything older
//! than the latest frame. Cancelling is just dropping the session (after
//! hiding the indicator with [`DragSession::cancel`]).

use crate::coords::GridConverter;
use crate::insertion::{IndicatorController, InsertionTarget, Point, SpatialQuery, resolve_insertion};
use crate::perf::{FrameStats, TARGET_FRAME_MS, measure};
use crate::placement::{GhostPosition, Grid};
use crate::profile_scope;
use crate::registry::ContainmentRules;
use crate::types::{Block, Breakpoint, GridPoint};
use std::time::Instant;
use tracing::debug;

/// Frames between frame-budget checks
const BUDGET_CHECK_INTERVAL: u64 = 120;

/// Everything computed for one pointer position
#[derive(Clone, Debug)]
pub struct DragFrame<'l> {
    pub frame: u64,
    pub drop_point: GridPoint,
    pub ghost: GhostPosition<'l>,
    pub insertion: Option<InsertionTarget>,
}

pub struct DragSession<'g> {
    grid: &'g Grid,
    block: Block,
    breakpoint: Breakpoint,
    converter: GridConverter,
    /// Pointer offset from the block's top-left corner at grab time
    grab_offset: Point,
    frame: u64,
    stats: FrameStats,
}

impl<'g> DragSession<'g> {
    pub fn new(grid: &'g Grid, block: Block, breakpoint: Breakpoint, converter: GridConverter) -> Self {
        debug!(id = %block.id, block_type = %block.block_type, bp = breakpoint.label(), "drag started");
        Self {
            grid,
            block,
            breakpoint,
            converter,
            grab_offset: Point::default(),
            frame: 0,
            stats: FrameStats::new(),
        }
    }

    pub fn with_grab_offset(mut self, offset: Point) -> Self {
        self.grab_offset = offset;
        self
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    /// Number of the latest frame
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_stale(&self, frame: u64) -> bool {
        frame < self.frame
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Cell the block's top-left corner lands on for `pointer`
    pub fn drop_point(&self, pointer: Point) -> GridPoint {
        self.converter.pixel_to_cell(Point::new(
            pointer.x - self.grab_offset.x,
            pointer.y - self.grab_offset.y,
        ))
    }

    /// Compute the ghost and insertion point for a new pointer position and
    /// update the indicator to match.
    pub fn pointer_move<'l, Q, R>(
        &mut self,
        layout: &'l [Block],
        query: &Q,
        rules: &R,
        indicator: &mut IndicatorController,
        pointer: Point,
        now: Instant,
    ) -> DragFrame<'l>
    where
        Q: SpatialQuery + ?Sized,
        R: ContainmentRules + ?Sized,
    {
        profile_scope!("drag_frame", TARGET_FRAME_MS / 2.0);

        self.frame += 1;
        let drop_point = self.drop_point(pointer);

        let ((ghost, insertion), elapsed_ms) = measure(|| {
            let ghost = self
                .grid
                .ghost_position(&self.block, layout, self.breakpoint, drop_point);
            let insertion = resolve_insertion(query, rules, &self.block.block_type, pointer);
            (ghost, insertion)
        });
        self.stats.record(elapsed_ms);
        if self.frame % BUDGET_CHECK_INTERVAL == 0 {
            self.stats.warn_if_over_budget("drag_frame", TARGET_FRAME_MS / 2.0);
        }

        match insertion
            .as_ref()
            .and_then(|target| Some((target, query.bounds(target.reference_element)?)))
        {
            Some((target, reference)) => indicator.show(target, &reference),
            None => indicator.hide(now),
        }
        indicator.tick(now);

        DragFrame {
            frame: self.frame,
            drop_point,
            ghost,
            insertion,
        }
    }

    /// End the drag at `pointer`.
    ///
    /// Returns the moved block when its exact size fits there, or `None`
    /// when the spot is forbidden. The indicator is hidden either way.
    pub fn finish(self, layout: &[Block], indicator: &mut IndicatorController, pointer: Point) -> Option<Block> {
        indicator.hide_now();
        let rect = self.block.rect(self.breakpoint).moved_to(self.drop_point(pointer));
        let committed = self.grid.commit_drop(layout, &self.block, self.breakpoint, rect);
        debug!(
            id = %self.block.id,
            frames = self.frame,
            committed = committed.is_some(),
            avg_frame_ms = self.stats.average(),
            "drag finished"
        );
        committed
    }

    /// Abandon the drag
    pub fn cancel(self, indicator: &mut IndicatorController) {
        indicator.hide_now();
        debug!(id = %self.block.id, frames = self.frame, "drag cancelled");
    }
}
