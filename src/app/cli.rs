use clap::Parser;
use std::path::PathBuf;

use crate::maze_loader::DEFAULT_MAX_SIZE;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Lists every path from the maze start to an exit on its right edge.", long_about = None)]
pub struct Cli {
    /// Maze file: N rows of N cells, '#' for walls
    pub maze_file: PathBuf,

    /// Do not write the verbose log file.
    #[clap(short, long)]
    pub quiet: bool,

    /// Where verbose output is logged.
    #[clap(long, value_name = "PATH", default_value = "maze_paths.log")]
    pub log_file: PathBuf,

    /// Largest accepted maze dimension.
    #[clap(long, value_name = "N", default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: usize,

    /// Report unreadable or malformed input and keep going instead of failing.
    #[clap(long)]
    pub lenient: bool,
}
