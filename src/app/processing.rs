//! Loading and enumeration steps, with verbose reporting.
//!
//! Both steps write their user-facing output to the supplied writer and their
//! diagnostics to the verbose log.

use std::io::Write;
use std::path::Path;

use super::error::AppError;
use super::{verbose_eprintln, verbose_println};
use crate::maze::{Cell, Coord, Grid};
use crate::maze_loader::{self, LoadOptions, MazeLoaderError};
use crate::path;

/// Printed whenever the maze file cannot be opened.
const OPEN_FAILURE_MESSAGE: &str = "ERROR: Can't open file.";
/// Printed when the maze file opens but cannot be read.
const READ_FAILURE_MESSAGE: &str = "ERROR: Can't read file.";

/// Reports a loader failure and decides whether the run can go on.
///
/// Open and read failures are announced on `out`. In lenient mode every
/// failure is logged and swallowed; otherwise it is returned.
fn handle_load_error(
    err: MazeLoaderError,
    stage: &str,
    options: LoadOptions,
    quiet_mode: bool,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    match err {
        MazeLoaderError::OpenFile(..) => writeln!(out, "{}", OPEN_FAILURE_MESSAGE)?,
        MazeLoaderError::ReadFile(..) => writeln!(out, "{}", READ_FAILURE_MESSAGE)?,
        _ => {}
    }
    verbose_eprintln!(quiet_mode, "   [{}] {}", stage, err);
    if options.lenient {
        verbose_println!(quiet_mode, "   => Lenient mode, continuing.");
        Ok(())
    } else {
        Err(AppError::MazeLoad(err))
    }
}

/// Sizes and loads the maze file into the canonical grid.
///
/// In lenient mode an unreadable file yields an empty grid (or an all-wall
/// grid when only the second read fails), which has no paths.
pub fn load_maze(
    maze_file_path: &Path,
    options: LoadOptions,
    quiet_mode: bool,
    out: &mut dyn Write,
) -> Result<Grid, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Determining maze size...");
    let size = match maze_loader::determine_size(maze_file_path) {
        Ok(size) => {
            verbose_println!(quiet_mode, "   => {} row(s).", size);
            size
        }
        Err(e) => {
            handle_load_error(e, "sizing", options, quiet_mode, out)?;
            0
        }
    };

    verbose_println!(quiet_mode, "[STEP 2] Loading {}x{} grid...", size, size);
    let grid = match maze_loader::load(maze_file_path, size, options) {
        Ok(grid) => grid,
        Err(e) => {
            handle_load_error(e, "loading", options, quiet_mode, out)?;
            Grid::filled(size, Cell::Wall)
        }
    };

    verbose_println!(quiet_mode, "   => Grid:\n{}", grid);
    verbose_println!(quiet_mode, "   => {} open exit(s).", grid.open_exits());
    Ok(grid)
}

/// Prints every path from the fixed start and the final total, logging each
/// path's coordinates as it is found. Returns the number of paths.
pub fn enumerate_maze_paths(
    grid: &mut Grid,
    quiet_mode: bool,
    out: &mut dyn Write,
) -> Result<usize, AppError> {
    verbose_println!(
        quiet_mode,
        "[STEP 3] Enumerating paths from {}...",
        path::START
    );
    let mut log_path = |index: usize, coords: &[Coord]| {
        if quiet_mode {
            return;
        }
        let route = coords
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" <- ");
        verbose_println!(quiet_mode, "   Path {}: {}", index, route);
    };
    let total = path::enumerate_paths(grid, path::START, out, &mut log_path)?;
    verbose_println!(quiet_mode, "   => {} path(s) found.", total);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn data_file(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("data")
            .join(name)
    }

    fn lenient() -> LoadOptions {
        LoadOptions {
            lenient: true,
            ..LoadOptions::default()
        }
    }

    #[test]
    fn strict_open_failure_reports_once_and_stops() {
        let mut out = Vec::new();
        let result = load_maze(&data_file("missing.txt"), LoadOptions::default(), true, &mut out);
        assert!(matches!(result, Err(AppError::MazeLoad(_))));
        assert_eq!(String::from_utf8(out).unwrap(), "ERROR: Can't open file.\n");
    }

    #[test]
    fn lenient_open_failure_reports_twice_and_continues() {
        let mut out = Vec::new();
        let mut grid = load_maze(&data_file("missing.txt"), lenient(), true, &mut out).unwrap();
        assert_eq!(grid.size(), 0);

        let total = enumerate_maze_paths(&mut grid, true, &mut out).unwrap();
        assert_eq!(total, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ERROR: Can't open file.\nERROR: Can't open file.\n0 total paths\n"
        );
    }

    #[test]
    fn loads_and_enumerates_fixture() {
        let mut out = Vec::new();
        let mut grid =
            load_maze(&data_file("three_by_three.txt"), LoadOptions::default(), true, &mut out)
                .unwrap();
        let total = enumerate_maze_paths(&mut grid, true, &mut out).unwrap();
        assert_eq!(total, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Path 1: .,.,.,.\n1 total paths\n"
        );
    }

    #[test]
    fn non_utf8_maze_keeps_its_path() {
        let mut out = Vec::new();
        let mut grid =
            load_maze(&data_file("latin1_start.txt"), LoadOptions::default(), true, &mut out)
                .unwrap();
        assert_eq!(enumerate_maze_paths(&mut grid, true, &mut out).unwrap(), 1);
        assert_eq!(out, b"Path 1: .,.,.,\xe9\n1 total paths\n");
    }

    #[test]
    fn lenient_read_failure_is_announced() {
        // A directory opens but cannot be read as a file.
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests");
        let mut out = Vec::new();
        let grid = load_maze(&dir, lenient(), true, &mut out).unwrap();
        assert_eq!(grid.open_exits(), 0);
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("ERROR: Can't read file.\n"));
    }
}
