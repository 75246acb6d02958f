//! Building the grid from the command line: the reference grid, a JSON grid
//! file, and optional random walls.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use blindpath_core::{Grid, GridConfig, GridError};
use rand::Rng;

/// Errors while loading or building the grid.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    Grid(GridError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "{} is not a valid grid file: {source}", path.display())
            }
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for LoadError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Parse a grid file.
pub fn read_config(path: &Path) -> Result<GridConfig, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// The reference grid, or the one in `file`, with walls replaced at
/// `density` when given.
pub fn load_grid<R: Rng>(
    file: Option<&Path>,
    density: Option<f64>,
    rng: &mut R,
) -> Result<Grid, LoadError> {
    let mut cfg = match file {
        Some(path) => read_config(path)?,
        None => GridConfig::reference(),
    };
    if let Some(density) = density {
        cfg.scatter_walls(density, rng)?;
    }
    let grid = cfg.build()?;
    log::debug!(
        "grid {}x{}, start {}, goal {}, {} walls",
        grid.rows(),
        grid.cols(),
        grid.start(),
        grid.goal(),
        grid.walls().len()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blindpath_core::Position;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pathfinder-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_to_reference() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = load_grid(None, None, &mut rng).unwrap();
        assert_eq!(grid, GridConfig::reference().build().unwrap());
    }

    #[test]
    fn reads_json_grid() {
        let path = temp_file(
            "ok.json",
            r#"{"rows":3,"cols":4,"start":{"row":0,"col":0},"goal":{"row":2,"col":3},"walls":[{"row":1,"col":1}]}"#,
        );
        let mut rng = StdRng::seed_from_u64(1);
        let grid = load_grid(Some(&path), None, &mut rng).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 4));
        assert_eq!(grid.goal(), Position::new(2, 3));
        assert!(grid.is_wall(Position::new(1, 1)));
    }

    #[test]
    fn walls_are_optional() {
        let path = temp_file(
            "nowalls.json",
            r#"{"rows":2,"cols":2,"start":{"row":0,"col":0},"goal":{"row":1,"col":1}}"#,
        );
        let cfg = read_config(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(cfg.walls.is_empty());
    }

    #[test]
    fn reports_bad_files() {
        let mut rng = StdRng::seed_from_u64(1);
        let missing = std::env::temp_dir().join("pathfinder-does-not-exist.json");
        assert!(matches!(
            load_grid(Some(&missing), None, &mut rng),
            Err(LoadError::Io { .. })
        ));

        let path = temp_file("bad.json", "{ not json");
        let err = load_grid(Some(&path), None, &mut rng).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, LoadError::Json { .. }));

        let path = temp_file(
            "walled.json",
            r#"{"rows":2,"cols":2,"start":{"row":0,"col":0},"goal":{"row":1,"col":1},"walls":[{"row":1,"col":1}]}"#,
        );
        let err = load_grid(Some(&path), None, &mut rng).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, LoadError::Grid(GridError::Walled { .. })));
    }

    #[test]
    fn random_walls_replace_reference_walls() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = load_grid(None, Some(0.0), &mut rng).unwrap();
        assert!(grid.walls().is_empty());

        let err = load_grid(None, Some(1.5), &mut rng).unwrap_err();
        assert!(matches!(err, LoadError::Grid(GridError::InvalidDensity(_))));
    }
}
