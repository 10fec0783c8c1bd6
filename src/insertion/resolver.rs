//! Pointer to insertion point resolution.
//!
//! ## Performance Notes
//!
//! Runs on every pointer move. Each call performs one point query plus a
//! handful of bounds and parent lookups; nothing is cached between calls, so
//! the last call always reflects the latest geometry.

use super::orientation::is_container_horizontal;
use super::query::{Bounds, ElementId, ElementRole, Point, SpatialQuery};
use super::{InsertionSide, InsertionTarget};
use crate::profile_scope;
use crate::registry::ContainmentRules;
use tracing::{debug, trace};

/// How the element under the pointer relates to drop containers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DropSite {
    /// A marked drop container
    Container(ElementId),
    /// A direct child of the nearest drop container above the hit element
    Child(ElementId),
}

/// Resolve where a block tagged `dragged_tag` would be inserted if dropped
/// at `coordinates`.
///
/// Returns `None` when nothing droppable is under the pointer or the
/// containment rules forbid the block in the resolved container.
pub fn resolve_insertion<Q, R>(
    query: &Q,
    rules: &R,
    dragged_tag: &str,
    coordinates: Point,
) -> Option<InsertionTarget>
where
    Q: SpatialQuery + ?Sized,
    R: ContainmentRules + ?Sized,
{
    profile_scope!("resolve_insertion");

    let Some(target) = pick_target(query, coordinates) else {
        trace!(?coordinates, "no element under pointer");
        return None;
    };
    let Some(site) = classify(query, target) else {
        trace!(?target, "element is not inside a drop container");
        return None;
    };

    let (reference_element, container) = match site {
        DropSite::Container(container) => {
            match closest_child(query, container, coordinates) {
                Some(child) => (child, query.parent(child).unwrap_or(container)),
                None => (container, container),
            }
        }
        DropSite::Child(child) => (child, query.parent(child)?),
    };

    let reference_bounds = query.bounds(reference_element)?;
    let side = InsertionSide::from_point(&reference_bounds, coordinates);

    let Some(container_tag) = query.tag(container) else {
        debug!(?container, "drop container has no tag");
        return None;
    };
    if !rules.can_contain(container_tag, dragged_tag) {
        debug!(container_tag, dragged_tag, "containment rejected");
        return None;
    }

    Some(InsertionTarget {
        container,
        reference_element,
        is_container_horizontal: is_container_horizontal(query, container),
        side,
        coordinates,
    })
}

/// Element under the pointer closest to it, skipping document-level ones.
///
/// Elements reported at the point normally contain it, so ties are common;
/// they resolve to the front-most element. A media leaf is swapped for the
/// wrapper that sizes it.
fn pick_target<Q>(query: &Q, point: Point) -> Option<ElementId>
where
    Q: SpatialQuery + ?Sized,
{
    let picked = closest(
        query,
        query
            .elements_at_point(point)
            .into_iter()
            .filter(|element| query.role(*element) != ElementRole::Document),
        point,
    )?;

    if query.role(picked) == ElementRole::Media {
        if let Some(wrapper) = query.parent(picked) {
            if query.role(wrapper) == ElementRole::Plain {
                return Some(wrapper);
            }
        }
    }
    Some(picked)
}

/// Relate `target` to its nearest drop container. A target nested below a
/// direct child of that container is replaced by the direct child, so the
/// reference element is always a sibling the new block can sit next to.
fn classify<Q>(query: &Q, target: ElementId) -> Option<DropSite>
where
    Q: SpatialQuery + ?Sized,
{
    if query.role(target) == ElementRole::DropContainer {
        return Some(DropSite::Container(target));
    }

    let mut child = target;
    while let Some(parent) = query.parent(child) {
        match query.role(parent) {
            ElementRole::DropContainer => return Some(DropSite::Child(child)),
            ElementRole::Document => return None,
            _ => child = parent,
        }
    }
    None
}

/// Visible child of `container` closest to `point`, first in document order
/// on ties
fn closest_child<Q>(query: &Q, container: ElementId, point: Point) -> Option<ElementId>
where
    Q: SpatialQuery + ?Sized,
{
    closest(query, query.children(container).into_iter(), point)
}

fn closest<Q>(query: &Q, candidates: impl Iterator<Item = ElementId>, point: Point) -> Option<ElementId>
where
    Q: SpatialQuery + ?Sized,
{
    let mut best: Option<(ElementId, f32)> = None;
    for element in candidates {
        let Some(bounds) = query.bounds(element).filter(Bounds::is_visible) else {
            continue;
        };
        let distance = bounds.distance_to(point);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((element, distance));
        }
    }
    best.map(|(element, _)| element)
}
