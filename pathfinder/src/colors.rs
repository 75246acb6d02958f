//! Colour palette for the playback screen.

use blindpath_crossterm::Color;

// -- Grid cells --

pub const START: Color = Color::from_hex("#1565C0");
pub const GOAL: Color = Color::from_hex("#2E7D32");
pub const WALL: Color = Color::from_hex("#37474F");
pub const FRONTIER: Color = Color::from_hex("#00ACC1");
pub const VISITED: Color = Color::from_hex("#9E9E9E");
pub const PATH: Color = Color::from_hex("#F9A825");
/// Bracket marking the cell popped in the current frame.
pub const CURRENT: Color = Color::from_hex("#AB47BC");
/// Unexplored open cell.
pub const BG: Color = Color::from_hex("#E8E8E8");

// -- Labels on cells --

pub const WALL_LABEL: Color = Color::from_hex("#78909C");
pub const DARK_LABEL: Color = Color::from_hex("#212121");
pub const VISITED_LABEL: Color = Color::from_hex("#424242");
pub const WHITE: Color = Color::from_hex("#FFFFFF");

// -- Panels --

pub const PANEL_BG: Color = Color::from_hex("#1A1A1A");
pub const PANEL_TEXT: Color = Color::from_hex("#CCCCCC");
pub const PANEL_LABEL: Color = Color::from_hex("#BBBBBB");
pub const PANEL_HINT: Color = Color::from_hex("#AAAAAA");

// -- Statistic values --

pub const YES: Color = Color::from_hex("#69F0AE");
pub const NO: Color = Color::from_hex("#FF5252");
pub const VALUE: Color = Color::from_hex("#82B1FF");
