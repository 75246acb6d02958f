//! Playback: turning a finished [`Trace`] into per-frame snapshots.
//!
//! Frame `i < steps.len()` shows step `i` as it was recorded. Every later
//! frame shows the final state, visited set plus path, so a viewer can hold
//! the result on screen for [`HOLD_FRAMES`] extra frames.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use blindpath_core::{Grid, Position};

use crate::trace::Trace;

/// Frames appended after the last step to hold the final state.
pub const HOLD_FRAMES: usize = 40;

/// Total number of frames for `trace`, including the hold frames.
pub fn frame_count(trace: &Trace) -> usize {
    trace.steps.len() + HOLD_FRAMES
}

/// Search progress as seen at a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Searching,
    Found,
    NotFound,
}

/// What a grid cell shows in a frame, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Wall,
    Start,
    Goal,
    /// On the final path, at this index.
    Path(usize),
    Frontier,
    Visited,
    Empty,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    /// The position popped in this frame, if the search is still running.
    pub current: Option<Position>,
    pub frontier: HashSet<Position>,
    pub visited: Cow<'a, HashSet<Position>>,
    /// The final path; empty until the search is done.
    pub path: &'a [Position],
    pub status: Status,
    /// 1-based step shown, clamped to `step_count`.
    pub step_number: usize,
    pub step_count: usize,
    path_index: HashMap<Position, usize>,
}

/// Build the snapshot for `frame`.
pub fn snapshot(frame: usize, trace: &Trace) -> Snapshot<'_> {
    let step_count = trace.steps.len();
    let step_number = (frame + 1).min(step_count);

    if let Some(step) = trace.steps.get(frame) {
        return Snapshot {
            current: Some(step.current),
            frontier: step.frontier.iter().copied().collect(),
            visited: Cow::Borrowed(&step.visited),
            path: &[],
            status: Status::Searching,
            step_number,
            step_count,
            path_index: HashMap::new(),
        };
    }

    let visited = match trace.steps.last() {
        Some(step) => Cow::Borrowed(&step.visited),
        None => Cow::Owned(HashSet::new()),
    };
    let mut path_index = HashMap::with_capacity(trace.path.len());
    for (i, &p) in trace.path.iter().enumerate() {
        path_index.entry(p).or_insert(i);
    }
    Snapshot {
        current: None,
        frontier: HashSet::new(),
        visited,
        path: &trace.path,
        status: if trace.found() {
            Status::Found
        } else {
            Status::NotFound
        },
        step_number,
        step_count,
        path_index,
    }
}

impl Snapshot<'_> {
    /// Classify `p`: wall, start, goal, path, frontier, visited, empty.
    pub fn cell(&self, grid: &Grid, p: Position) -> CellKind {
        if grid.is_wall(p) {
            CellKind::Wall
        } else if p == grid.start() {
            CellKind::Start
        } else if p == grid.goal() {
            CellKind::Goal
        } else if let Some(&i) = self.path_index.get(&p) {
            CellKind::Path(i)
        } else if self.frontier.contains(&p) {
            CellKind::Frontier
        } else if self.visited.contains(&p) {
            CellKind::Visited
        } else {
            CellKind::Empty
        }
    }

    #[inline]
    pub fn is_current(&self, p: Position) -> bool {
        self.current == Some(p)
    }

    /// Whether every step has been shown.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.status != Status::Searching
    }

    #[inline]
    pub fn nodes_explored(&self) -> usize {
        self.visited.len()
    }

    /// Distinct positions in the frontier.
    #[inline]
    pub fn frontier_size(&self) -> usize {
        self.frontier.len()
    }

    /// Number of cells on the path once the search is done and succeeded.
    pub fn path_length(&self) -> Option<usize> {
        (self.status == Status::Found).then_some(self.path.len())
    }
}
