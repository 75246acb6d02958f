//! Pathfinder: an interactive terminal front end for the blindpath search
//! strategies.
//!
//! The binary shows a menu, runs the chosen strategy on the grid, prints a
//! summary and then plays the recorded trace back in the terminal.

pub mod colors;
pub mod load;
pub mod menu;
pub mod report;
pub mod session;
pub mod view;
