// grid module
mod grid;

pub use grid::{Cell, Coord, Direction, Grid, WALL_SYMBOL};
