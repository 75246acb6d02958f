use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use blindpath_core::{Grid, Position};

use crate::neighbors::Neighbors;
use crate::path::{ParentMap, reconstruct_path};
use crate::trace::{StepRecorder, Trace};

/// Heap entry ordered by accumulated cost, then by push sequence.
#[derive(Clone, Copy, Debug)]
struct Entry {
    cost: f64,
    seq: u64,
    pos: Position,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest, oldest entry first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Uniform-cost search from the grid's start to its goal.
///
/// Finds a cheapest path under the fixed move costs. Equal-cost entries pop
/// in the order they were pushed. Recorded frontiers list the heap in its
/// storage order, not sorted.
pub fn ucs(grid: &Grid) -> Trace {
    let start = grid.start();
    let mut seq: u64 = 0;
    let mut open = BinaryHeap::from([Entry {
        cost: 0.0,
        seq,
        pos: start,
    }]);
    let mut came_from = ParentMap::from([(start, None)]);
    let mut cost_so_far: HashMap<Position, f64> = HashMap::from([(start, 0.0)]);
    let mut visited = HashSet::new();
    let mut rec = StepRecorder::new();
    let mut nb = Neighbors::new();

    while let Some(Entry { cost, pos: current, .. }) = open.pop() {
        rec.record(current, open.iter().map(|e| e.pos), &visited);

        if current == grid.goal() {
            return rec.finish("ucs", reconstruct_path(&came_from, current));
        }
        // Stale entry.
        if !visited.insert(current) {
            continue;
        }

        for n in nb.clockwise(grid, current) {
            let tentative = cost + n.cost;
            if cost_so_far
                .get(&n.pos)
                .is_some_and(|&known| tentative >= known)
            {
                continue;
            }
            cost_so_far.insert(n.pos, tentative);
            seq += 1;
            open.push(Entry {
                cost: tentative,
                seq,
                pos: n.pos,
            });
            came_from.insert(n.pos, Some(current));
        }
    }

    rec.finish("ucs", Vec::new())
}
