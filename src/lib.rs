//! Enumerates every simple path from a maze's fixed start cell to the exits
//! on its right edge.
//!
//! - [`maze_loader`]: reads a maze file into a [`maze::Grid`]
//! - [`path`]: the backtracking search, path printing and the enumeration loop
//! - [`app`]: command-line front end

pub mod app;
pub mod maze;
pub mod maze_loader;
pub mod path;
