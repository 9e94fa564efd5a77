use std::fmt::{Display, Formatter};

/// Symbol used in maze files for impassable cells.
pub const WALL_SYMBOL: u8 = b'#';
/// Marker for a cell on the active search branch.
pub const IN_PROGRESS_SYMBOL: u8 = b'*';
/// Marker for a cell already proven to lead nowhere.
pub const DEAD_END_SYMBOL: u8 = b'!';

/// A single maze cell.
///
/// `Open` keeps the byte read from the maze file so paths are printed with
/// the original characters, whatever their encoding. `Wall` comes from the
/// input, `Sealed` is an exit closed by a previously reported path; both
/// block the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open(u8),
    Wall,
    Sealed,
    InProgress,
    DeadEnd,
}

impl Cell {
    /// Maps a symbol read from a maze file to a cell.
    pub fn from_symbol(symbol: u8) -> Cell {
        match symbol {
            WALL_SYMBOL => Cell::Wall,
            IN_PROGRESS_SYMBOL => Cell::InProgress,
            DEAD_END_SYMBOL => Cell::DeadEnd,
            other => Cell::Open(other),
        }
    }

    pub fn symbol(&self) -> u8 {
        match self {
            Cell::Open(c) => *c,
            Cell::Wall | Cell::Sealed => WALL_SYMBOL,
            Cell::InProgress => IN_PROGRESS_SYMBOL,
            Cell::DeadEnd => DEAD_END_SYMBOL,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Cell::Open(_))
    }
}

/// Neighbour directions, in the order the search tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// A (row, column) position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn of(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Returns the neighbour in `dir`, or `None` when that would leave the
    /// grid through the top or left edge. Bottom and right edges are checked
    /// by [`Grid::get`].
    pub fn step(&self, dir: Direction) -> Option<Coord> {
        match dir {
            Direction::Up => self.row.checked_sub(1).map(|row| Coord::of(row, self.col)),
            Direction::Down => Some(Coord::of(self.row + 1, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Coord::of(self.row, col)),
            Direction::Right => Some(Coord::of(self.row, self.col + 1)),
        }
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square maze grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `size` x `size` grid with every cell set to `fill`.
    pub fn filled(size: usize, fill: Cell) -> Grid {
        Grid {
            size,
            cells: vec![fill; size * size],
        }
    }

    /// Builds a grid from row-major cells. Returns `None` unless exactly
    /// `size * size` cells are supplied.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Option<Grid> {
        if cells.len() == size * size {
            Some(Grid { size, cells })
        } else {
            None
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn has(&self, pos: Coord) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn get(&self, pos: Coord) -> Option<Cell> {
        if self.has(pos) {
            Some(self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    /// Overwrites the cell at `pos`. Out-of-bounds writes are ignored and
    /// reported through the return value.
    pub fn set(&mut self, pos: Coord, cell: Cell) -> bool {
        if self.has(pos) {
            self.cells[pos.row * self.size + pos.col] = cell;
            true
        } else {
            false
        }
    }

    /// Exits live in the last column.
    pub fn is_exit_column(&self, pos: Coord) -> bool {
        self.size > 0 && pos.col == self.size - 1
    }

    /// Number of open cells in the exit column.
    pub fn open_exits(&self) -> usize {
        if self.size == 0 {
            return 0;
        }
        (0..self.size)
            .filter(|&row| {
                self.get(Coord::of(row, self.size - 1))
                    .is_some_and(|cell| cell.is_open())
            })
            .count()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|cell| char::from(cell.symbol())).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
