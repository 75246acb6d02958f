use std::collections::{HashSet, VecDeque};

use blindpath_core::{Grid, Position};

use crate::neighbors::Neighbors;
use crate::path::{ParentMap, merge_paths};
use crate::trace::{StepRecorder, Trace};

/// One side of a bidirectional search.
struct Side {
    queue: VecDeque<Position>,
    visited: HashSet<Position>,
    parent: ParentMap,
}

impl Side {
    fn new(origin: Position) -> Self {
        Self {
            queue: VecDeque::from([origin]),
            visited: HashSet::from([origin]),
            parent: ParentMap::from([(origin, None)]),
        }
    }

    /// Queue every neighbor of `p` this side has not seen yet.
    fn expand(&mut self, grid: &Grid, nb: &mut Neighbors, p: Position) {
        for n in nb.clockwise(grid, p) {
            if self.visited.insert(n.pos) {
                self.queue.push_back(n.pos);
                self.parent.insert(n.pos, Some(p));
            }
        }
    }
}

/// Record the step for a freshly popped position: the frontier is the
/// forward queue followed by the backward queue, the visited set is the
/// union of both sides.
fn record(rec: &mut StepRecorder, current: Position, fwd: &Side, bwd: &Side) {
    rec.record_owned(
        current,
        fwd.queue.iter().chain(bwd.queue.iter()).copied(),
        fwd.visited.union(&bwd.visited).copied().collect(),
    );
}

/// Final state of both sides and the cell where they met, if any.
struct Meeting {
    rec: StepRecorder,
    fwd: Side,
    bwd: Side,
    cell: Option<Position>,
}

fn search(grid: &Grid) -> Meeting {
    let mut fwd = Side::new(grid.start());
    let mut bwd = Side::new(grid.goal());
    let mut rec = StepRecorder::new();
    let mut nb = Neighbors::new();
    let mut cell = None;

    while !fwd.queue.is_empty() || !bwd.queue.is_empty() {
        if let Some(current) = fwd.queue.pop_front() {
            record(&mut rec, current, &fwd, &bwd);
            if bwd.visited.contains(&current) {
                cell = Some(current);
                break;
            }
            fwd.expand(grid, &mut nb, current);
        }

        if let Some(current) = bwd.queue.pop_front() {
            record(&mut rec, current, &fwd, &bwd);
            if fwd.visited.contains(&current) {
                cell = Some(current);
                break;
            }
            bwd.expand(grid, &mut nb, current);
        }
    }

    Meeting { rec, fwd, bwd, cell }
}

/// Bidirectional breadth-first search: one BFS from the start, one from the
/// goal, alternating a single expansion each (forward first).
///
/// Each side marks positions visited when it queues them. The search stops
/// when a side pops a position the other side has already seen; that
/// position is the meeting cell where the two halves are joined.
pub fn bidirectional(grid: &Grid) -> Trace {
    let Meeting { rec, fwd, bwd, cell } = search(grid);
    let path = match cell {
        Some(m) => merge_paths(&fwd.parent, &bwd.parent, m),
        None => Vec::new(),
    };
    rec.finish("bidirectional", path)
}
