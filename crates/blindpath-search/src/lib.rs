//! Uninformed search on 2D grids, recorded step by step.
//!
//! Six strategies explore a [`Grid`](blindpath_core::Grid) from its start to
//! its goal and return a [`Trace`]: every pop as a [`Step`] (current
//! position, frontier, visited set) plus the final path.
//!
//! - **BFS** ([`bfs`]): shortest path by number of moves
//! - **DFS** ([`dfs`]): clockwise-first depth search
//! - **UCS** ([`ucs`]): cheapest path, ties broken by discovery order
//! - **DLS** ([`dls`]): DFS bounded by a depth limit
//! - **IDDFS** ([`iddfs`]): DLS with growing limits
//! - **Bidirectional** ([`bidirectional`]): two BFS fronts joined where they meet
//!
//! Every call builds fresh state from the read-only grid, so runs are pure
//! and deterministic. "No path" is an empty [`Trace::path`], not an error.
//! The [`playback`] module maps a trace to per-frame snapshots for viewers.
//!
//! # Move model
//!
//! | Direction | Offset | Cost |
//! |---|---|---|
//! | up | (-1, 0) | 1.0 |
//! | right | (0, 1) | 1.0 |
//! | down | (1, 0) | 1.0 |
//! | down-right | (1, 1) | 1.414 |
//! | left | (0, -1) | 1.0 |
//! | up-left | (-1, -1) | 1.414 |

mod bfs;
mod bidir;
mod dfs;
mod dls;
mod iddfs;
mod neighbors;
mod path;
pub mod playback;
mod strategy;
mod trace;
mod ucs;

#[cfg(test)]
mod testutil;

pub use bfs::bfs;
pub use bidir::bidirectional;
pub use dfs::dfs;
pub use dls::{DEFAULT_DEPTH_LIMIT, dls};
pub use iddfs::iddfs;
pub use neighbors::{DIAGONAL_COST, DIRECTIONS, Neighbor, Neighbors, ORTHOGONAL_COST, neighbors};
pub use path::{ParentMap, merge_paths, reconstruct_path};
pub use strategy::{Strategy, UnknownStrategy};
pub use trace::{Step, Trace};
