//! **blindpath-core**: grid model shared by the blindpath crates.
//!
//! This crate provides the [`Position`] value type, the immutable [`Grid`]
//! searched by `blindpath-search`, and the [`GridConfig`] layer that builds
//! and validates grids from caller-supplied constants.

pub mod config;
pub mod geom;
pub mod grid;

pub use config::{GridConfig, GridError};
pub use geom::{Position, PositionIter};
pub use grid::Grid;
