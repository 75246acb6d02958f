use std::fmt;
use std::str::FromStr;

use blindpath_core::Grid;

use crate::bfs::bfs;
use crate::bidir::bidirectional;
use crate::dfs::dfs;
use crate::dls::{DEFAULT_DEPTH_LIMIT, dls};
use crate::iddfs::iddfs;
use crate::trace::Trace;
use crate::ucs::ucs;

/// The six search strategies, with their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Bfs,
    Dfs,
    Ucs,
    Dls { limit: usize },
    Iddfs,
    Bidirectional,
}

impl Strategy {
    /// All strategies in menu order, DLS using `depth_limit`.
    pub const fn all(depth_limit: usize) -> [Strategy; 6] {
        [
            Self::Bfs,
            Self::Dfs,
            Self::Ucs,
            Self::Dls { limit: depth_limit },
            Self::Iddfs,
            Self::Bidirectional,
        ]
    }

    /// Short label, e.g. `"BFS"`.
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Ucs => "UCS",
            Self::Dls { .. } => "DLS",
            Self::Iddfs => "IDDFS",
            Self::Bidirectional => "Bidirectional",
        }
    }

    /// Descriptive label, e.g. `"Breadth-First Search"`.
    pub fn long_name(self) -> String {
        match self {
            Self::Bfs => "Breadth-First Search".to_string(),
            Self::Dfs => "Depth-First Search".to_string(),
            Self::Ucs => "Uniform Cost Search".to_string(),
            Self::Dls { limit } => format!("Depth-Limited Search (L={limit})"),
            Self::Iddfs => "Iterative Deepening DFS".to_string(),
            Self::Bidirectional => "Bidirectional Search".to_string(),
        }
    }

    /// Replace the DLS depth limit; other strategies are returned unchanged.
    pub const fn with_depth_limit(self, limit: usize) -> Self {
        match self {
            Self::Dls { .. } => Self::Dls { limit },
            other => other,
        }
    }

    /// Run this strategy on `grid`.
    pub fn run(self, grid: &Grid) -> Trace {
        match self {
            Self::Bfs => bfs(grid),
            Self::Dfs => dfs(grid),
            Self::Ucs => ucs(grid),
            Self::Dls { limit } => dls(grid, limit),
            Self::Iddfs => iddfs(grid),
            Self::Bidirectional => bidirectional(grid),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Error returned when a strategy name does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy \u{201c}{}\u{201d}; expected 1-6 or one of bfs, dfs, ucs, dls, iddfs, bidirectional",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    /// Accepts a menu number (`"1"`–`"6"`) or a case-insensitive short name.
    /// DLS parses with [`DEFAULT_DEPTH_LIMIT`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let all = Self::all(DEFAULT_DEPTH_LIMIT);
        if let Ok(n) = key.parse::<usize>() {
            if (1..=all.len()).contains(&n) {
                return Ok(all[n - 1]);
            }
        }
        match key.as_str() {
            "bidi" | "bidir" => return Ok(Self::Bidirectional),
            "iddfs" | "ids" => return Ok(Self::Iddfs),
            _ => {}
        }
        all.into_iter()
            .find(|st| st.short_name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| UnknownStrategy(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{
        assert_valid_path, isolated_goal, random_grid, reachable, reference_grid, shortest_edges,
        split_grid, visited_monotone,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_numbers_and_names() {
        assert_eq!("1".parse::<Strategy>(), Ok(Strategy::Bfs));
        assert_eq!(" 6 ".parse::<Strategy>(), Ok(Strategy::Bidirectional));
        assert_eq!("ucs".parse::<Strategy>(), Ok(Strategy::Ucs));
        assert_eq!(
            "DLS".parse::<Strategy>(),
            Ok(Strategy::Dls {
                limit: DEFAULT_DEPTH_LIMIT
            })
        );
        assert_eq!("bidir".parse::<Strategy>(), Ok(Strategy::Bidirectional));
        assert!("7".parse::<Strategy>().is_err());
        assert!("astar".parse::<Strategy>().is_err());
    }

    #[test]
    fn names_follow_menu() {
        let all = Strategy::all(15);
        let short: Vec<&str> = all.iter().map(|s| s.short_name()).collect();
        assert_eq!(short, ["BFS", "DFS", "UCS", "DLS", "IDDFS", "Bidirectional"]);
        assert_eq!(all[3].long_name(), "Depth-Limited Search (L=15)");
        assert_eq!(Strategy::Dls { limit: 4 }.long_name(), "Depth-Limited Search (L=4)");
    }

    #[test]
    fn depth_limit_only_touches_dls() {
        assert_eq!(
            Strategy::Dls { limit: 15 }.with_depth_limit(3),
            Strategy::Dls { limit: 3 }
        );
        assert_eq!(Strategy::Iddfs.with_depth_limit(3), Strategy::Iddfs);
    }

    #[test]
    fn every_strategy_finds_a_valid_reference_path() {
        let grid = reference_grid();
        for st in Strategy::all(DEFAULT_DEPTH_LIMIT) {
            let trace = st.run(&grid);
            assert_valid_path(&grid, &trace.path);
        }
    }

    #[test]
    fn runs_are_deterministic() {
        let grid = reference_grid();
        for st in Strategy::all(DEFAULT_DEPTH_LIMIT) {
            assert_eq!(st.run(&grid), st.run(&grid), "{st} differs between runs");
        }
    }

    #[test]
    fn reference_grid_summaries() {
        let grid = reference_grid();
        let summary = |st: Strategy| {
            let t = st.run(&grid);
            (t.steps.len(), t.nodes_explored(), t.path.len())
        };
        assert_eq!(summary(Strategy::Bfs), (87, 86, 10));
        assert_eq!(summary(Strategy::Dfs), (21, 20, 18));
        assert_eq!(summary(Strategy::Ucs), (87, 86, 10));
        assert_eq!(summary(Strategy::Dls { limit: 15 }), (54, 30, 16));
        assert_eq!(summary(Strategy::Iddfs), (1215, 30, 16));
        assert_eq!(summary(Strategy::Bidirectional), (53, 69, 10));
    }

    #[test]
    fn bfs_path_is_no_longer_than_dfs() {
        let grid = reference_grid();
        let b = Strategy::Bfs.run(&grid);
        let d = Strategy::Dfs.run(&grid);
        assert!(b.found());
        assert!(b.path.len() <= d.path.len());
    }

    #[test]
    fn isolated_goal_defeats_every_strategy() {
        let grid = isolated_goal();
        for st in Strategy::all(DEFAULT_DEPTH_LIMIT) {
            let trace = st.run(&grid);
            assert!(trace.path.is_empty(), "{st} found a path");
            if st == Strategy::Bidirectional {
                // The backward side is seeded with the goal itself.
                continue;
            }
            let last = &trace.steps.last().unwrap().visited;
            assert!(!last.contains(&grid.goal()), "{st} visited the goal");
        }
    }

    #[test]
    fn disconnected_grid_yields_no_path() {
        let grid = split_grid();
        for st in Strategy::all(DEFAULT_DEPTH_LIMIT) {
            assert!(st.run(&grid).path.is_empty(), "{st} crossed the wall");
        }
    }

    #[test]
    fn visited_never_shrinks_within_a_run() {
        let grid = reference_grid();
        for st in [
            Strategy::Bfs,
            Strategy::Dfs,
            Strategy::Ucs,
            Strategy::Dls { limit: 15 },
            Strategy::Bidirectional,
        ] {
            assert!(visited_monotone(&st.run(&grid).steps), "{st}");
        }
    }

    #[test]
    fn random_grids_hold_path_properties() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let grid = random_grid(&mut rng);
            let connected = reachable(&grid).contains(&grid.goal());
            let best_edges = shortest_edges(&grid);
            for st in Strategy::all(DEFAULT_DEPTH_LIMIT) {
                let trace = st.run(&grid);
                if trace.found() {
                    assert_valid_path(&grid, &trace.path);
                } else if !matches!(st, Strategy::Dls { .. }) {
                    assert!(!connected, "{st} missed a reachable goal");
                }
            }
            assert_eq!(Strategy::Bfs.run(&grid).edge_count(), best_edges);
        }
    }

    #[test]
    fn random_grids_ucs_is_cheapest() {
        use crate::testutil::{cheapest_cost, path_cost};
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let grid = random_grid(&mut rng);
            let trace = Strategy::Ucs.run(&grid);
            match cheapest_cost(&grid) {
                Some(best) => assert!((path_cost(&grid, &trace.path) - best).abs() < 1e-9),
                None => assert!(!trace.found()),
            }
        }
    }
}
