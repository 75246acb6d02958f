use blindpath_core::Grid;

use crate::dls::dls;
use crate::trace::{StepRecorder, Trace};

/// Iterative-deepening DFS: depth-limited search with limits
/// `0, 1, …, rows * cols - 1`.
///
/// The steps of every attempt are kept, in order, in the returned trace, so
/// it re-records the shallow levels once per limit. Stops at the first
/// attempt that reaches the goal.
pub fn iddfs(grid: &Grid) -> Trace {
    let mut rec = StepRecorder::new();

    for limit in 0..grid.len() {
        let attempt = dls(grid, limit);
        log::trace!(
            "iddfs: limit {limit} recorded {} steps",
            attempt.steps.len()
        );
        rec.extend(attempt.steps);
        if !attempt.path.is_empty() {
            return rec.finish("iddfs", attempt.path);
        }
    }

    rec.finish("iddfs", Vec::new())
}
