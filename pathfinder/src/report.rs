//! Plain-text summary printed after each run.

use std::fmt::Write as _;

use blindpath_core::Grid;
use blindpath_search::Trace;

/// Width of the `=` and `-` rules framing the menu and reports.
pub const RULE_WIDTH: usize = 62;

pub fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, RULE_WIDTH).collect()
}

/// Result block: path length, nodes explored, wall count and the numbered
/// route, or the "no path" variant.
pub fn summary(grid: &Grid, trace: &Trace) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "{}", rule('='));
    if trace.found() {
        let _ = writeln!(s, "  PATH FOUND!   Length: {} steps", trace.path.len());
        let _ = writeln!(s, "  Nodes explored : {}", trace.nodes_explored());
        let _ = writeln!(s, "  Static walls   : {}", grid.walls().len());
        let _ = writeln!(s, "\n  Route:");
        let last = trace.path.len() - 1;
        for (i, cell) in trace.path.iter().enumerate() {
            let tag = if i == 0 {
                " (Start)"
            } else if i == last {
                " (Goal)"
            } else {
                ""
            };
            let _ = writeln!(s, "    {i:3}.  {cell}{tag}");
        }
    } else {
        let _ = writeln!(s, "  NO PATH FOUND");
        let _ = writeln!(s, "  Nodes explored : {}", trace.nodes_explored());
        let _ = writeln!(s, "  Static walls   : {}", grid.walls().len());
    }
    let _ = writeln!(s, "{}", rule('='));
    s
}
