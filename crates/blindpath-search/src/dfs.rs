use std::collections::HashSet;

use blindpath_core::Grid;

use crate::neighbors::Neighbors;
use crate::path::{ParentMap, reconstruct_path};
use crate::trace::{StepRecorder, Trace};

/// Depth-first search from the grid's start to its goal.
///
/// The stack may hold several entries for one position; entries popped after
/// that position was expanded are recorded as steps and then discarded. A
/// position keeps the parent it was first discovered from.
pub fn dfs(grid: &Grid) -> Trace {
    let start = grid.start();
    let mut stack = vec![start];
    let mut came_from = ParentMap::from([(start, None)]);
    let mut visited = HashSet::new();
    let mut rec = StepRecorder::new();
    let mut nb = Neighbors::new();

    while let Some(current) = stack.pop() {
        rec.record(current, stack.iter().copied(), &visited);

        if current == grid.goal() {
            return rec.finish("dfs", reconstruct_path(&came_from, current));
        }
        if !visited.insert(current) {
            continue;
        }

        // Reverse so the first clockwise neighbor ends up on top.
        for n in nb.clockwise(grid, current).iter().rev() {
            if !visited.contains(&n.pos) {
                stack.push(n.pos);
                came_from.entry(n.pos).or_insert(Some(current));
            }
        }
    }

    rec.finish("dfs", Vec::new())
}
