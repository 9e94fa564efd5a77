use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Maze loading error: {0}")]
    MazeLoad(#[from] crate::maze_loader::MazeLoaderError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}
