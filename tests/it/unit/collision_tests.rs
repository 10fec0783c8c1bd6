//! Unit tests for collision detection.

use brickgrid::GridRect;
use brickgrid::placement::{CollisionSide, CollisionSides};

fn sample_rects() -> Vec<GridRect> {
    let mut rects = Vec::new();
    for x in [0, 3, 9, 10, 20] {
        for y in [0, 2, 5, 8] {
            for (w, h) in [(1, 1), (10, 5), (4, 12)] {
                rects.push(GridRect::new(x, y, w, h));
            }
        }
    }
    rects
}

#[test]
fn test_overlap_symmetry() {
    let rects = sample_rects();
    for a in &rects {
        for b in &rects {
            assert_eq!(a.overlaps(b), b.overlaps(a), "{a:?} / {b:?}");
        }
    }
}

#[test]
fn test_sides_imply_overlap() {
    let rects = sample_rects();
    for a in &rects {
        for b in &rects {
            if !a.overlaps(b) {
                assert!(a.collision_sides(b).is_empty(), "{a:?} / {b:?}");
            }
        }
    }
}

#[test]
fn test_moving_from_above_hits_top() {
    let target = GridRect::new(0, 10, 10, 10);
    let moving = GridRect::new(0, 5, 10, 6);
    let sides = moving.collision_sides(&target);
    assert!(sides.contains(CollisionSide::Top));
    assert!(!sides.contains(CollisionSide::Bottom));
}

#[test]
fn test_rect_strictly_inside_crosses_no_edge() {
    let target = GridRect::new(0, 0, 10, 10);
    let moving = GridRect::new(2, 2, 3, 3);
    assert!(moving.overlaps(&target));
    assert!(moving.collision_sides(&target).is_empty());
}

#[test]
fn test_rect_covering_target_reports_every_side() {
    let target = GridRect::new(2, 2, 3, 3);
    let moving = GridRect::new(0, 0, 10, 10);
    assert_eq!(moving.collision_sides(&target).len(), 4);
}

#[test]
fn test_collision_sides_from_iter() {
    let sides: CollisionSides = [CollisionSide::Left, CollisionSide::Left, CollisionSide::Top]
        .into_iter()
        .collect();
    assert_eq!(sides.len(), 2);
    assert_eq!(
        sides.iter().collect::<Vec<_>>(),
        vec![CollisionSide::Top, CollisionSide::Left]
    );
}
