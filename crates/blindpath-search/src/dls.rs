use std::collections::HashSet;

use blindpath_core::Grid;

use crate::neighbors::Neighbors;
use crate::path::{ParentMap, reconstruct_path};
use crate::trace::{StepRecorder, Trace};

/// Depth limit used when none is configured.
pub const DEFAULT_DEPTH_LIMIT: usize = 15;

/// Depth-first search that does not expand positions at depth `limit` or
/// deeper.
///
/// The goal is still recognised when popped at exactly `limit`. A goal that
/// lies only beyond the limit yields an empty path.
///
/// Stack entries carry the position that pushed them, and a position takes
/// its parent from the entry that is actually expanded. The path therefore
/// follows the depth counter and never has more than `limit + 1` cells.
pub fn dls(grid: &Grid, limit: usize) -> Trace {
    let start = grid.start();
    let mut stack = vec![(start, 0usize, None)];
    let mut came_from = ParentMap::new();
    let mut visited = HashSet::new();
    let mut rec = StepRecorder::new();
    let mut nb = Neighbors::new();

    while let Some((current, depth, parent)) = stack.pop() {
        rec.record(current, stack.iter().map(|&(p, _, _)| p), &visited);

        if current == grid.goal() {
            came_from.insert(current, parent);
            return rec.finish("dls", reconstruct_path(&came_from, current));
        }
        if visited.contains(&current) || depth >= limit {
            continue;
        }
        visited.insert(current);
        came_from.insert(current, parent);

        // Reverse so the first clockwise neighbor ends up on top.
        for n in nb.clockwise(grid, current).iter().rev() {
            if !visited.contains(&n.pos) {
                stack.push((n.pos, depth + 1, Some(current)));
            }
        }
    }

    rec.finish("dls", Vec::new())
}
