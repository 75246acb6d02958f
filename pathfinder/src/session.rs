//! The interactive loop: menu, run, report, playback, repeat.
//!
//! Input and output are generic so the loop can be driven from a test with
//! in-memory buffers; playback is a callback that receives the strategy's
//! short name and trace.

use std::io::{self, BufRead, Write};

use blindpath_core::Grid;
use blindpath_search::{Strategy, Trace};

use crate::menu::{self, Choice};
use crate::report;

/// Called after a run to show the trace; `None` skips playback.
pub type Player<'a> = Option<&'a mut dyn FnMut(&str, &Trace) -> io::Result<()>>;

/// Run `strategy`, print its summary and hand the trace to `player`.
pub fn run_once<W: Write>(
    out: &mut W,
    grid: &Grid,
    strategy: Strategy,
    player: &mut Player<'_>,
) -> io::Result<Trace> {
    writeln!(out, "\n  Running  {} ...", strategy.long_name())?;
    let trace = strategy.run(grid);
    log::info!(
        "{strategy}: {} steps, {} explored, path of {} cells",
        trace.steps.len(),
        trace.nodes_explored(),
        trace.path.len()
    );
    write!(out, "{}", report::summary(grid, &trace))?;

    if let Some(play) = player.as_mut() {
        writeln!(out, "\n  Opening animated visualization ...\n")?;
        out.flush()?;
        play(strategy.short_name(), &trace)?;
    }
    Ok(trace)
}

/// Read one trimmed line; `None` at end of input.
fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    read_answer(input)
}

/// Menu loop until the user quits, declines another run, or input ends.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    grid: &Grid,
    depth_limit: usize,
    mut player: Player<'_>,
) -> io::Result<()> {
    menu::write_banner(out)?;

    loop {
        menu::write_menu(out, depth_limit)?;
        let Some(answer) = prompt(input, out, "\n  Enter choice (1-6, or q to quit): ")? else {
            break;
        };
        let strategy = match menu::parse_choice(&answer, depth_limit) {
            Choice::Run(st) => st,
            Choice::Quit => break,
            Choice::Invalid => {
                writeln!(out, "  Invalid choice. Please enter 1-6.")?;
                continue;
            }
        };

        run_once(out, grid, strategy, &mut player)?;

        match prompt(input, out, "\n  Run another algorithm? (y / n): ")? {
            Some(again) if menu::is_yes(&again) => {}
            _ => break,
        }
    }

    writeln!(out, "\n  Goodbye!\n")?;
    Ok(())
}
