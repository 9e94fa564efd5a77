use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for maze loading operations.
#[derive(Error, Debug)]
pub enum MazeLoaderError {
    /// Error when the maze file cannot be opened.
    #[error("Failed to open maze file '{0}': {1}")]
    OpenFile(String, std::io::Error),

    /// Error when the maze file is opened but reading it fails.
    #[error("Failed to read maze file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the row count exceeds the supported dimension.
    #[error("Maze is {size}x{size}, larger than the supported maximum of {max}")]
    TooLarge { size: usize, max: usize },

    /// Error when the file holds fewer cells than its row count implies.
    #[error("Maze of size {size} needs {expected} cells, found {found}")]
    Truncated {
        size: usize,
        expected: usize,
        found: usize,
    },

    /// Error when a search marker symbol appears in the input.
    #[error("Reserved symbol '{symbol}' at row {row}, column {col}")]
    ReservedSymbol { symbol: char, row: usize, col: usize },
}

impl MazeLoaderError {
    /// True when the maze file could not be opened at all.
    pub fn is_open_failure(&self) -> bool {
        matches!(self, MazeLoaderError::OpenFile(..))
    }
}
