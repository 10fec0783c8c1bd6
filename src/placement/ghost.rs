//! Ghost positioning - live preview of a dragged block.
//!
//! ## Performance Notes
//!
//! Called on every pointer move during a drag. Collisions borrow the
//! colliding blocks instead of cloning them, and the side sets are bit sets,
//! so a frame allocates at most the collision vector.

use super::{CollisionSides, Grid};
use crate::profile_scope;
use crate::types::{Block, Breakpoint, GridPoint, GridRect};
use serde::Serialize;
use tracing::trace;

/// A block the dragged rect overlaps
#[derive(Clone, Debug, Serialize)]
pub struct Collision<'a> {
    pub block: &'a Block,
    pub sides: CollisionSides,
    /// Smaller of the x and y origin deltas. A proximity signal for
    /// tie-breaking, not a geometric distance.
    pub distance: u32,
}

/// Preview rect for a dragged block at the current pointer cell
#[derive(Clone, Debug, Serialize)]
pub struct GhostPosition<'a> {
    #[serde(flatten)]
    pub rect: GridRect,
    /// No legal placement of the block's exact size exists here.
    /// Advisory only; callers decide whether to still attempt the drop.
    pub forbidden: bool,
    pub collisions: Vec<Collision<'a>>,
}

impl Grid {
    /// Every block the dragged block would overlap at `drop_point`.
    ///
    /// The dragged rect keeps the block's current size at `breakpoint`.
    /// Results follow layout order; use [`sort_by_distance`] for closest
    /// first.
    pub fn detect_collisions<'a>(
        &self,
        dragged: &Block,
        layout: &'a [Block],
        breakpoint: Breakpoint,
        drop_point: GridPoint,
    ) -> Vec<Collision<'a>> {
        let dragged_rect = dragged.rect(breakpoint).moved_to(drop_point);

        layout
            .iter()
            .filter(|other| other.id != dragged.id)
            .filter_map(|other| {
                let other_rect = other.rect(breakpoint);
                let sides = dragged_rect.collision_sides(&other_rect);
                if sides.is_empty() {
                    return None;
                }
                let distance = dragged_rect
                    .x
                    .abs_diff(other_rect.x)
                    .min(dragged_rect.y.abs_diff(other_rect.y));
                Some(Collision {
                    block: other,
                    sides,
                    distance,
                })
            })
            .collect()
    }

    pub fn ghost_position<'a>(
        &self,
        dragged: &Block,
        layout: &'a [Block],
        breakpoint: Breakpoint,
        drop_point: GridPoint,
    ) -> GhostPosition<'a> {
        profile_scope!("ghost_position");

        let rect = dragged.rect(breakpoint).moved_to(drop_point);
        let collisions = self.detect_collisions(dragged, layout, breakpoint, drop_point);
        let forbidden = !self.can_take_full_space(layout, breakpoint, &rect, &dragged.id);

        if forbidden {
            trace!(id = %dragged.id, ?rect, collisions = collisions.len(), "ghost forbidden");
        }

        GhostPosition {
            rect,
            forbidden,
            collisions,
        }
    }
}

/// Order collisions closest first. Equal distances keep layout order.
pub fn sort_by_distance(collisions: &mut [Collision<'_>]) {
    collisions.sort_by_key(|collision| collision.distance);
}
