//! Container orientation detection.

use super::query::{Bounds, ElementId, FlowAxis, LayoutMode, SpatialQuery};
use tracing::debug;

/// Whether `container` lays its children out in a row.
///
/// Flex and grid containers answer from their flow axis. Anything else is
/// inferred: with two or more visible children, the spread between the first
/// and last child centers decides; with fewer, the container's own aspect
/// does. The inference is a best guess and is logged as such.
pub fn is_container_horizontal<Q>(query: &Q, container: ElementId) -> bool
where
    Q: SpatialQuery + ?Sized,
{
    match query.layout(container) {
        LayoutMode::Flex(FlowAxis::Row) | LayoutMode::Grid(FlowAxis::Row) => true,
        LayoutMode::Flex(FlowAxis::Column) | LayoutMode::Grid(FlowAxis::Column) => false,
        LayoutMode::Other => infer_orientation(query, container),
    }
}

fn infer_orientation<Q>(query: &Q, container: ElementId) -> bool
where
    Q: SpatialQuery + ?Sized,
{
    let mut visible = query
        .children(container)
        .into_iter()
        .filter_map(|child| query.bounds(child))
        .filter(Bounds::is_visible);

    let first = visible.next();
    let last = visible.last();

    if let (Some(first), Some(last)) = (first, last) {
        let (a, b) = (first.center(), last.center());
        let spread_x = (b.x - a.x).abs();
        let spread_y = (b.y - a.y).abs();
        debug!(?container, spread_x, spread_y, "orientation inferred from children");
        return spread_x > spread_y;
    }

    let Some(bounds) = query.bounds(container) else {
        debug!(?container, "orientation unknown, defaulting to column");
        return false;
    };
    debug!(
        ?container,
        width = bounds.width,
        height = bounds.height,
        "orientation inferred from container aspect"
    );
    bounds.width > bounds.height
}
