//! Path reconstruction from parent maps.

use std::collections::HashMap;

use blindpath_core::Position;

/// Maps each discovered position to the position it was reached from.
/// The search origin maps to `None`.
pub type ParentMap = HashMap<Position, Option<Position>>;

/// Walk `came_from` back from `node` to the origin and return the route in
/// origin → `node` order.
pub fn reconstruct_path(came_from: &ParentMap, node: Position) -> Vec<Position> {
    let mut path = vec![node];
    let mut cur = node;
    while let Some(&Some(parent)) = came_from.get(&cur) {
        path.push(parent);
        cur = parent;
    }
    path.reverse();
    path
}

/// Stitch the two halves of a bidirectional search at `meeting`.
///
/// The forward half runs start → `meeting`; the backward half follows
/// `bwd_parent` from the successor of `meeting` out to the goal, so the
/// meeting cell appears exactly once.
pub fn merge_paths(
    fwd_parent: &ParentMap,
    bwd_parent: &ParentMap,
    meeting: Position,
) -> Vec<Position> {
    let mut path = reconstruct_path(fwd_parent, meeting);
    let mut next = bwd_parent.get(&meeting).copied().flatten();
    while let Some(p) = next {
        path.push(p);
        next = bwd_parent.get(&p).copied().flatten();
    }
    path
}
