//! File system helpers for the application layer: checking the maze path
//! before loading and creating the verbose log file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError};
use std::path::Path;

use super::error::AppError;

/// Rejects maze paths that exist but are not regular files.
///
/// A missing file is not an error here. The loader reports it as an open
/// failure so that lenient runs can still continue past it.
pub fn validate_maze_file(maze_file_path: &Path) -> Result<(), AppError> {
    if maze_file_path.exists() && !maze_file_path.is_file() {
        return Err(AppError::InvalidPath(format!(
            "Path is not a file: {}",
            maze_file_path.display()
        )));
    }
    Ok(())
}

/// Creates (or truncates) the log file and wraps it in a `BufWriter`.
///
/// The writer is not flushed here; callers flush after each step.
pub fn init_log_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Overwrite the log each run.
        .open(file_path)?;
    Ok(BufWriter::new(file))
}
