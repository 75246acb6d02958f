//! Step recording: the per-expansion snapshots a search leaves behind.

use std::collections::HashSet;

use blindpath_core::Position;

/// One exploration event: the popped position plus copies of the frontier
/// and visited set as they stood at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub current: Position,
    pub frontier: Vec<Position>,
    pub visited: HashSet<Position>,
}

/// The full result of a strategy run: every recorded step and the final path.
///
/// An empty `path` means the goal was not reached. That is a normal outcome,
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    pub steps: Vec<Step>,
    pub path: Vec<Position>,
}

impl Trace {
    /// Whether a path to the goal was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of distinct positions expanded, taken from the last step's
    /// visited snapshot. This can be lower than `steps.len()` because stale
    /// pops are recorded too.
    pub fn nodes_explored(&self) -> usize {
        self.steps.last().map_or(0, |s| s.visited.len())
    }

    /// Number of moves in the path (cells minus one), or `None` without a path.
    pub fn edge_count(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Accumulates [`Step`]s during a run.
#[derive(Debug, Default)]
pub(crate) struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Snapshot `current`, the remaining frontier and the visited set.
    pub(crate) fn record(
        &mut self,
        current: Position,
        frontier: impl IntoIterator<Item = Position>,
        visited: &HashSet<Position>,
    ) {
        self.steps.push(Step {
            current,
            frontier: frontier.into_iter().collect(),
            visited: visited.clone(),
        });
    }

    /// Like [`record`](Self::record) but with a visited set that has
    /// already been built for this step.
    pub(crate) fn record_owned(
        &mut self,
        current: Position,
        frontier: impl IntoIterator<Item = Position>,
        visited: HashSet<Position>,
    ) {
        self.steps.push(Step {
            current,
            frontier: frontier.into_iter().collect(),
            visited,
        });
    }

    /// Append the steps of a finished sub-run.
    pub(crate) fn extend(&mut self, steps: Vec<Step>) {
        self.steps.extend(steps);
    }

    /// Close the run, logging a one-line summary.
    pub(crate) fn finish(self, strategy: &str, path: Vec<Position>) -> Trace {
        let trace = Trace {
            steps: self.steps,
            path,
        };
        log::debug!(
            "{strategy}: {} steps, {} explored, path of {} cells",
            trace.steps.len(),
            trace.nodes_explored(),
            trace.path.len()
        );
        trace
    }
}
