use std::collections::{HashSet, VecDeque};

use blindpath_core::Grid;

use crate::neighbors::Neighbors;
use crate::path::{ParentMap, reconstruct_path};
use crate::trace::{StepRecorder, Trace};

/// Breadth-first search from the grid's start to its goal.
///
/// Expands in strict insertion order and never queues a position twice, so
/// the path found is shortest by number of moves (diagonals count as one).
pub fn bfs(grid: &Grid) -> Trace {
    let start = grid.start();
    let mut queue = VecDeque::from([start]);
    let mut in_queue = HashSet::from([start]);
    let mut came_from = ParentMap::from([(start, None)]);
    let mut visited = HashSet::new();
    let mut rec = StepRecorder::new();
    let mut nb = Neighbors::new();

    while let Some(current) = queue.pop_front() {
        in_queue.remove(&current);
        rec.record(current, queue.iter().copied(), &visited);

        if current == grid.goal() {
            return rec.finish("bfs", reconstruct_path(&came_from, current));
        }
        if !visited.insert(current) {
            continue;
        }

        for n in nb.clockwise(grid, current) {
            if !visited.contains(&n.pos) && in_queue.insert(n.pos) {
                queue.push_back(n.pos);
                came_from.insert(n.pos, Some(current));
            }
        }
    }

    rec.finish("bfs", Vec::new())
}
