use once_cell::sync::Lazy;
use std::fmt::Arguments;
use std::fs::File;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;
use std::sync::Mutex;

use super::file_handler;

// Global static logger instance
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Initializes the global logger to write to the specified file path.
/// The file is created if missing and truncated otherwise, so each run starts fresh.
pub fn init_global_logger(log_file_path: &Path) -> Result<(), IoError> {
    let writer = file_handler::init_log_writer(log_file_path)?;
    if let Ok(mut logger_guard) = LOGGER.lock() {
        *logger_guard = Some(writer);
    }
    Ok(())
}

/// Writes a verbose message to the global logger.
/// Messages are dropped when the logger was never initialized.
pub fn log_verbose_message_args(args: Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "{}", args).is_err() {
                // Fallback to stderr if log writing fails
                eprintln!("Fallback (log write failed): {}", args);
            }
        }
    } else {
        eprintln!("Fallback (logger mutex error): {}", args);
    }
}

/// Writes a verbose error message to the global logger.
pub fn log_verbose_error_args(args: Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "ERROR: {}", args).is_err() {
                eprintln!("Fallback (log write failed) ERROR: {}", args);
            }
        }
    } else {
        eprintln!("Fallback (logger mutex error) ERROR: {}", args);
    }
}

/// Flushes buffered log output to disk. A no-op when logging is disabled.
pub fn flush_global_logger() -> Result<(), IoError> {
    match LOGGER.lock() {
        Ok(mut logger_guard) => match logger_guard.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        },
        Err(_) => Ok(()),
    }
}
