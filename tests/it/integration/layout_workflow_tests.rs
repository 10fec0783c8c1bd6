//! Layout editing workflows: add from a palette, move, resize, re-stack.

use crate::helpers::{TestLayoutBuilder, init_tracing};
use brickgrid::registry::BlockRegistry;
use brickgrid::{Block, BlockPosition, Breakpoint, Grid, GridPoint, GridRect, PerBreakpoint};

const MANIFEST: &str = r#"{
    "text": {
        "constraints": {
            "minWidth": { "mobile": 1, "desktop": 4 },
            "minHeight": { "mobile": 1, "desktop": 1 },
            "preferredWidth": { "mobile": null, "desktop": 8 },
            "preferredHeight": { "mobile": null, "desktop": 6 }
        }
    }
}"#;

fn ids(layout: &[Block]) -> Vec<&str> {
    layout.iter().map(|b| b.id.as_str()).collect()
}

/// Drop a new block of `block_type` at `point` on desktop, the way a
/// palette drop would.
fn add_from_palette(
    grid: &Grid,
    registry: &BlockRegistry,
    layout: &[Block],
    block_type: &str,
    point: GridPoint,
) -> Option<Block> {
    let constraints = registry.constraints(block_type).ok()?;
    let desktop = grid.can_drop(layout, Breakpoint::Desktop, point, constraints, true)?;
    // Mobile positions are re-derived, so only the size matters here
    let mobile = grid.can_drop(layout, Breakpoint::Mobile, GridPoint::new(0, 0), constraints, false)?;
    Some(Block::new(
        block_type,
        PerBreakpoint::new(BlockPosition::new(mobile), BlockPosition::new(desktop)),
    ))
}

#[test]
fn test_palette_drop_then_restack() {
    init_tracing();
    let grid = Grid::default();
    let registry = BlockRegistry::from_json(MANIFEST).unwrap();
    let mut layout = TestLayoutBuilder::new()
        .with_block("a", GridRect::new(0, 0, 10, 5))
        .build();

    let added = add_from_palette(&grid, &registry, &layout, "text", GridPoint::new(0, 6)).unwrap();
    assert_eq!(added.rect(Breakpoint::Desktop), GridRect::new(0, 6, 8, 6));
    assert!(!added.id.is_empty());
    layout.push(added.clone());

    let mobile = grid.derive_mobile_layout(&layout);
    assert_eq!(ids(&mobile), vec!["a", added.id.as_str()]);
    assert_eq!(mobile[1].rect(Breakpoint::Mobile), GridRect::new(0, 5, 8, 4));
}

#[test]
fn test_palette_drop_onto_block_is_refused() {
    let grid = Grid::default();
    let registry = BlockRegistry::from_json(MANIFEST).unwrap();
    let layout = TestLayoutBuilder::new()
        .with_block("a", GridRect::new(0, 0, 10, 5))
        .build();

    assert!(add_from_palette(&grid, &registry, &layout, "text", GridPoint::new(4, 2)).is_none());
    assert!(add_from_palette(&grid, &registry, &layout, "text", GridPoint::new(25, 0)).is_none());
    assert!(add_from_palette(&grid, &registry, &layout, "video", GridPoint::new(12, 0)).is_none());
}

#[test]
fn test_move_reorders_mobile_stack() {
    let grid = Grid::default();
    let layout = TestLayoutBuilder::new()
        .with_block("a", GridRect::new(0, 0, 10, 5))
        .with_block("b", GridRect::new(12, 0, 10, 5))
        .build();

    let moved = grid
        .commit_drop(&layout, &layout[0], Breakpoint::Desktop, GridRect::new(0, 8, 10, 5))
        .unwrap();
    assert_eq!(layout[0].rect(Breakpoint::Desktop), GridRect::new(0, 0, 10, 5));

    let updated: Vec<Block> = layout
        .iter()
        .map(|b| if b.id == moved.id { moved.clone() } else { b.clone() })
        .collect();
    let mobile = grid.derive_mobile_layout(&updated);
    assert_eq!(ids(&mobile), vec!["b", "a"]);
}

#[test]
fn test_moving_in_place_over_own_footprint() {
    let grid = Grid::default();
    let layout = TestLayoutBuilder::new()
        .with_block("a", GridRect::new(0, 0, 10, 5))
        .build();

    let moved = grid.commit_drop(&layout, &layout[0], Breakpoint::Desktop, GridRect::new(2, 1, 10, 5));
    assert_eq!(moved.unwrap().rect(Breakpoint::Desktop), GridRect::new(2, 1, 10, 5));
}

#[test]
fn test_manual_resize_survives_desktop_moves() {
    let grid = Grid::default();
    let layout = TestLayoutBuilder::new()
        .with_block("a", GridRect::new(0, 0, 10, 5))
        .with_block("b", GridRect::new(0, 6, 10, 5))
        .build();

    let resized = grid.resize_mobile(&layout[0], 9);
    let moved = grid
        .commit_drop(&layout, &resized, Breakpoint::Desktop, GridRect::new(12, 0, 10, 5))
        .unwrap();
    assert_eq!(moved.position.mobile.manual_height, Some(9));

    let mobile = grid.derive_mobile_layout(&[moved, layout[1].clone()]);
    assert_eq!(mobile[0].rect(Breakpoint::Mobile).h, 9);
    assert_eq!(mobile[1].rect(Breakpoint::Mobile).y, 10);
}
