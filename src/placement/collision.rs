//! Collision detection between grid rectangles.

use crate::types::GridRect;
use serde::{Serialize, Serializer};

/// Edge of a target rect that a moving rect overlaps
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl CollisionSide {
    pub fn all() -> &'static [CollisionSide] {
        &[
            CollisionSide::Top,
            CollisionSide::Bottom,
            CollisionSide::Left,
            CollisionSide::Right,
        ]
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            CollisionSide::Top => 1 << 0,
            CollisionSide::Bottom => 1 << 1,
            CollisionSide::Left => 1 << 2,
            CollisionSide::Right => 1 << 3,
        }
    }
}

/// Set of colliding sides.
///
/// Stored as bits so classification never allocates on the drag hot path.
/// Serializes as a list in top, bottom, left, right order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CollisionSides(u8);

impl CollisionSides {
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub fn insert(&mut self, side: CollisionSide) {
        self.0 |= side.bit();
    }

    #[inline]
    pub fn contains(&self, side: CollisionSide) -> bool {
        self.0 & side.bit() != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CollisionSide> + use<> {
        let sides = *self;
        CollisionSide::all()
            .iter()
            .copied()
            .filter(move |side| sides.contains(*side))
    }
}

impl FromIterator<CollisionSide> for CollisionSides {
    fn from_iter<I: IntoIterator<Item = CollisionSide>>(iter: I) -> Self {
        let mut sides = Self::empty();
        for side in iter {
            sides.insert(side);
        }
        sides
    }
}

impl Serialize for CollisionSides {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl GridRect {
    /// Strict AABB overlap. Rects that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &GridRect) -> bool {
        i64::from(self.x) < other.right()
            && self.right() > i64::from(other.x)
            && i64::from(self.y) < other.bottom()
            && self.bottom() > i64::from(other.y)
    }

    /// Which sides of `target` this (moving) rect overlaps.
    ///
    /// Each side is tested on its own, so a corner overlap reports two sides
    /// and a rect covering the target entirely reports all four. Empty when
    /// the rects do not overlap.
    pub fn collision_sides(&self, target: &GridRect) -> CollisionSides {
        let mut sides = CollisionSides::empty();
        if !self.overlaps(target) {
            return sides;
        }

        // Overlap already guarantees the far edge has crossed, so each side
        // reduces to the near edge being at or beyond the target's edge.
        if self.y <= target.y {
            sides.insert(CollisionSide::Top);
        }
        if self.bottom() >= target.bottom() {
            sides.insert(CollisionSide::Bottom);
        }
        if self.x <= target.x {
            sides.insert(CollisionSide::Left);
        }
        if self.right() >= target.right() {
            sides.insert(CollisionSide::Right);
        }
        sides
    }
}
