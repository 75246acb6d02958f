//! Text menu: banner, strategy list and answer parsing.

use std::io::{self, Write};

use blindpath_search::Strategy;

use crate::report::rule;

/// What the user picked at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Run(Strategy),
    Quit,
    Invalid,
}

/// Parse a menu answer. Accepts `1`-`6` or a strategy name; DLS gets
/// `depth_limit`.
pub fn parse_choice(input: &str, depth_limit: usize) -> Choice {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Choice::Quit;
    }
    match input.parse::<Strategy>() {
        Ok(st) => Choice::Run(st.with_depth_limit(depth_limit)),
        Err(_) => Choice::Invalid,
    }
}

/// `y` or `yes`, in any case.
pub fn is_yes(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes")
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", rule('='))?;
    writeln!(out, "{:18}AI  PATHFINDER", "")?;
    writeln!(out, "{:12}Uninformed / Blind Search", "")?;
    writeln!(out, "{}", rule('='))
}

/// The numbered strategy list framed by `-` rules.
pub fn write_menu<W: Write>(out: &mut W, depth_limit: usize) -> io::Result<()> {
    writeln!(out, "\n{}", rule('-'))?;
    writeln!(out, "  SELECT ALGORITHM:")?;
    writeln!(out, "{}", rule('-'))?;
    for (i, st) in Strategy::all(depth_limit).into_iter().enumerate() {
        writeln!(
            out,
            "  {}.  {:14}  -  {}",
            i + 1,
            st.short_name(),
            st.long_name()
        )?;
    }
    writeln!(out, "{}", rule('-'))
}
