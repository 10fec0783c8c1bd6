//! Unit tests for drop validation.

use crate::helpers::{TestLayoutBuilder, desktop_constraints};
use brickgrid::{Breakpoint, Grid, GridPoint, GridRect};

#[test]
fn test_drop_past_right_edge_is_rejected() {
    let grid = Grid::default();
    let layout = TestLayoutBuilder::new()
        .with_block("a", GridRect::new(0, 0, 10, 5))
        .build();
    let constraints = desktop_constraints(1, Some(10), None);

    // 25 + 10 = 35 > 32 columns
    let result = grid.can_drop(&layout, Breakpoint::Desktop, GridPoint::new(25, 0), &constraints, true);
    assert_eq!(result, None);
}

#[test]
fn test_drop_flush_with_right_edge_is_accepted() {
    let grid = Grid::default();
    let constraints = desktop_constraints(1, Some(10), Some(3));
    let result = grid.can_drop(&[], Breakpoint::Desktop, GridPoint::new(22, 4), &constraints, true);
    assert_eq!(result, Some(GridRect::new(22, 4, 10, 3)));
}

#[test]
fn test_drop_next_to_block_is_accepted() {
    let grid = Grid::default();
    let layout = TestLayoutBuilder::new()
        .with_block("a", GridRect::new(0, 0, 10, 5))
        .build();
    let constraints = desktop_constraints(1, Some(10), Some(5));
    let result = grid.can_drop(&layout, Breakpoint::Desktop, GridPoint::new(10, 0), &constraints, true);
    assert_eq!(result, Some(GridRect::new(10, 0, 10, 5)));
}

#[test]
fn test_accepted_rects_stay_in_bounds() {
    let grid = Grid::default();
    for &bp in Breakpoint::all() {
        let cols = grid.cols(bp);
        for preferred in [None, Some(1), Some(5), Some(cols), Some(cols + 7)] {
            let mut constraints = desktop_constraints(3, None, None);
            constraints.preferred_width[bp] = preferred;
            for x in -2..=cols + 2 {
                for y in [-1, 0, 7] {
                    let point = GridPoint::new(x, y);
                    if let Some(rect) = grid.can_drop(&[], bp, point, &constraints, true) {
                        assert!(rect.x >= 0, "{rect:?}");
                        assert!(rect.right() <= i64::from(cols), "{rect:?}");
                        assert!(rect.y >= 0, "{rect:?}");
                        assert!(rect.w >= 1 && rect.h >= 1, "{rect:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_accepted_rects_never_overlap_layout() {
    let grid = Grid::default();
    let layout = TestLayoutBuilder::new()
        .with_block("a", GridRect::new(0, 0, 10, 5))
        .with_block("b", GridRect::new(12, 3, 6, 6))
        .with_block("c", GridRect::new(4, 10, 20, 2))
        .build();
    let constraints = desktop_constraints(4, Some(6), Some(3));

    let mut accepted = 0;
    for x in 0..32 {
        for y in 0..16 {
            let point = GridPoint::new(x, y);
            if let Some(rect) = grid.can_drop(&layout, Breakpoint::Desktop, point, &constraints, true) {
                accepted += 1;
                for block in &layout {
                    assert!(!rect.overlaps(&block.rect(Breakpoint::Desktop)), "{rect:?} overlaps {}", block.id);
                }
            }
        }
    }
    assert!(accepted > 0);
}

#[test]
fn test_mobile_drop_uses_mobile_defaults() {
    let grid = Grid::default();
    let constraints = desktop_constraints(4, Some(20), Some(9));
    let rect = grid
        .can_drop(&[], Breakpoint::Mobile, GridPoint::new(0, 0), &constraints, true)
        .unwrap();
    assert_eq!(rect.w, 1);
    assert_eq!(rect.h, grid.config().default_preferred_height.mobile);
}

#[test]
fn test_can_take_full_space_ignores_excluded_block() {
    let grid = Grid::default();
    let layout = TestLayoutBuilder::new()
        .with_block("a", GridRect::new(0, 0, 10, 5))
        .build();
    let rect = GridRect::new(2, 1, 10, 5);
    assert!(grid.can_take_full_space(&layout, Breakpoint::Desktop, &rect, "a"));
    assert!(!grid.can_take_full_space(&layout, Breakpoint::Desktop, &rect, "other"));
}

#[test]
fn test_extreme_drop_points_are_rejected() {
    let grid = Grid::default();
    let constraints = desktop_constraints(4, Some(10), Some(5));
    let layout = TestLayoutBuilder::new()
        .with_block("a", GridRect::new(0, 0, 10, 5))
        .build();

    for point in [
        GridPoint::new(i32::MAX - 1, 0),
        GridPoint::new(i32::MAX, i32::MAX),
        GridPoint::new(0, i32::MAX),
        GridPoint::new(i32::MIN, i32::MIN),
    ] {
        let accepted = grid.can_drop(&layout, Breakpoint::Desktop, point, &constraints, true);
        // Rows are unbounded, so only the bottom-most point may be accepted
        if point.x == 0 {
            assert_eq!(accepted, Some(GridRect::new(0, i32::MAX, 10, 5)));
        } else {
            assert!(accepted.is_none(), "{point:?}");
        }
    }

    let far = GridRect::new(i32::MAX - 2, i32::MAX - 2, 10, 10);
    assert!(!grid.can_take_full_space(&layout, Breakpoint::Desktop, &far, "x"));
}
