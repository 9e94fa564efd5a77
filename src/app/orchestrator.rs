//! Main application orchestrator.
//!
//! Coordinates a run:
//! 1. Initializes logging unless quiet.
//! 2. Validates the maze path.
//! 3. Sizes and loads the canonical grid (`processing::load_maze`).
//! 4. Enumerates and prints every path (`processing::enumerate_maze_paths`).
//!
//! Path listings go to stdout; everything else goes to the verbose log,
//! which is flushed after initialization, after loading and at exit.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use crate::maze_loader::LoadOptions;
use std::io::{self, BufWriter, Write};

/// Flushes the verbose log, reporting failures on stderr since the log
/// itself may be what is failing.
fn flush_log(quiet_mode: bool, when: &str) {
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to flush verbose log {}: {}", when, e);
        }
    }
}

/// Runs the application for the parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` when the maze path is invalid, when loading fails in
/// strict mode, or when writing to stdout fails.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let maze_file_path = &cli.maze_file;
    let quiet_mode = cli.quiet;
    let options = LoadOptions {
        max_size: cli.max_size,
        lenient: cli.lenient,
    };

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Keep going without the log file.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
            flush_log(quiet_mode, "after initialization");
        }
    }

    if let Err(e) = file_handler::validate_maze_file(maze_file_path) {
        verbose_eprintln!(quiet_mode, "Input Error: {}", e);
        if !options.lenient {
            flush_log(quiet_mode, "on error");
            return Err(e);
        }
    }

    verbose_println!(quiet_mode, "Maze file: {}", maze_file_path.display());
    verbose_println!(
        quiet_mode,
        "Max size: {}, lenient: {}",
        options.max_size,
        options.lenient
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = match processing::load_maze(maze_file_path, options, quiet_mode, &mut out) {
        Ok(mut grid) => {
            flush_log(quiet_mode, "after loading");
            processing::enumerate_maze_paths(&mut grid, quiet_mode, &mut out)
        }
        Err(e) => Err(e),
    };

    // Output written before a failure still has to reach stdout.
    out.flush()?;

    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "Run aborted: {}", e);
    }
    flush_log(quiet_mode, "at exit");

    result.map(|_| ())
}
