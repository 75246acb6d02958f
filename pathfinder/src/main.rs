//! Pathfinder: uninformed grid search, step by step in the terminal.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use blindpath_search::{DEFAULT_DEPTH_LIMIT, Strategy, Trace};
use clap::Parser;

use pathfinder::{load, session, view};

/// Default delay between playback frames.
const DEFAULT_INTERVAL_MS: u64 = 180;

#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(about = "Visualize uninformed search strategies on a grid", long_about = None)]
struct Cli {
    /// Run one strategy (1-6 or a name such as bfs, dls, bidirectional) and exit
    #[arg(short, long)]
    algo: Option<Strategy>,

    /// JSON grid file; the built-in 10x10 grid is used otherwise
    #[arg(short, long)]
    grid: Option<PathBuf>,

    /// Replace the walls with random ones at this density (0.0 to 1.0)
    #[arg(long, value_name = "DENSITY")]
    random_walls: Option<f64>,

    /// Depth limit for depth-limited search
    #[arg(short, long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth_limit: usize,

    /// Milliseconds between playback frames
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Print the summary only, without animated playback
    #[arg(long)]
    no_animate: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let grid = load::load_grid(cli.grid.as_deref(), cli.random_walls, &mut rand::rng())?;

    let interval = Duration::from_millis(cli.interval_ms);
    let mut animate = |name: &str, trace: &Trace| view::animate(&grid, name, trace, interval);
    let mut player: session::Player<'_> = if cli.no_animate {
        None
    } else {
        Some(&mut animate)
    };

    let mut stdout = io::stdout();
    match cli.algo {
        Some(strategy) => {
            let strategy = strategy.with_depth_limit(cli.depth_limit);
            session::run_once(&mut stdout, &grid, strategy, &mut player)?;
        }
        None => {
            let stdin = io::stdin();
            session::run(&mut stdin.lock(), &mut stdout, &grid, cli.depth_limit, player)?;
        }
    }
    Ok(())
}
