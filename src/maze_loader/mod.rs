// error module
pub mod error;
// loader module
mod loader;

pub use error::MazeLoaderError;
pub use loader::{count_rows, determine_size, load, parse_grid, LoadOptions, DEFAULT_MAX_SIZE};
