use crate::maze::{Cell, Coord, Direction, Grid};

/// Fixed entry cell: row 1, column 0.
pub const START: Coord = Coord::of(1, 0);

/// Coordinates of a discovered path, recorded as a stack.
///
/// The exit is pushed first and the start last, so the bottom of the stack is
/// the exit and the top is the start.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MazePath {
    coords: Vec<Coord>,
}

impl MazePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Coord) {
        self.coords.push(pos);
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The exit cell, i.e. the first coordinate pushed.
    pub fn exit(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    /// Coordinates in exit-to-start order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Empties the path, yielding coordinates in exit-to-start order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, Coord> {
        self.coords.drain(..)
    }
}

/// Outcome of checking a single cell during the search.
enum Probe {
    Blocked,
    Exit,
    Enter,
}

/// One cell on the active branch and the next direction to try from it.
struct Frame {
    pos: Coord,
    next_dir: usize,
}

/// `PathExplorer` finds one path from a cell to any exit by depth-first
/// backtracking over a mutable grid.
pub struct PathExplorer;

impl PathExplorer {
    /// Searches for a path from `start` to an open cell in the last column.
    ///
    /// Each cell is evaluated in this order: out of bounds, blocked (wall,
    /// sealed, dead end or in progress), exit, interior. Interior cells are
    /// marked in progress, neighbours are tried up, down, left, right and the
    /// first success wins. A cell whose neighbours all fail becomes a dead end.
    ///
    /// On success the path is pushed onto `path` exit first and start last,
    /// and the cells along it are left marked in progress. `grid` is a
    /// disposable copy; the markings are not undone.
    pub fn search(grid: &mut Grid, start: Coord, path: &mut MazePath) -> bool {
        let mut stack: Vec<Frame> = Vec::new();

        match Self::probe(grid, start) {
            Probe::Blocked => return false,
            Probe::Exit => {
                path.push(start);
                return true;
            }
            Probe::Enter => {
                grid.set(start, Cell::InProgress);
                stack.push(Frame {
                    pos: start,
                    next_dir: 0,
                });
            }
        }

        while let Some(frame) = stack.last_mut() {
            let Some(&dir) = Direction::SEARCH_ORDER.get(frame.next_dir) else {
                // Every neighbour failed.
                grid.set(frame.pos, Cell::DeadEnd);
                stack.pop();
                continue;
            };
            frame.next_dir += 1;

            let Some(next) = frame.pos.step(dir) else {
                continue;
            };

            match Self::probe(grid, next) {
                Probe::Blocked => {}
                Probe::Exit => {
                    path.push(next);
                    while let Some(done) = stack.pop() {
                        path.push(done.pos);
                    }
                    return true;
                }
                Probe::Enter => {
                    grid.set(next, Cell::InProgress);
                    stack.push(Frame {
                        pos: next,
                        next_dir: 0,
                    });
                }
            }
        }

        false
    }

    fn probe(grid: &Grid, pos: Coord) -> Probe {
        match grid.get(pos) {
            None => Probe::Blocked,
            Some(cell) if !cell.is_open() => Probe::Blocked,
            Some(_) if grid.is_exit_column(pos) => Probe::Exit,
            Some(_) => Probe::Enter,
        }
    }
}
