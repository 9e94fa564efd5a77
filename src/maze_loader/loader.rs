use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::MazeLoaderError;
use crate::maze::{Cell, Coord, Grid};

/// Largest grid dimension accepted unless configured otherwise.
pub const DEFAULT_MAX_SIZE: usize = 15;

//─────────────────────────────────────────────────────────────────────────────

/// Controls how strictly maze input is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub max_size: usize,
    /// Accept oversized or short grids and pre-marked cells instead of failing.
    pub lenient: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            max_size: DEFAULT_MAX_SIZE,
            lenient: false,
        }
    }
}

/// Reads the raw bytes of the maze file, separating open failures from read
/// failures. No encoding is assumed; every byte is a potential cell.
fn read_maze_file(file_path: &Path) -> Result<Vec<u8>, MazeLoaderError> {
    let display = file_path.display().to_string();
    let mut file =
        File::open(file_path).map_err(|e| MazeLoaderError::OpenFile(display.clone(), e))?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|e| MazeLoaderError::ReadFile(display, e))?;
    Ok(content)
}

/// Determines the maze dimension by counting the rows of the file.
///
/// Row lengths are not checked here; see [`load`].
pub fn determine_size(file_path: &Path) -> Result<usize, MazeLoaderError> {
    let content = read_maze_file(file_path)?;
    Ok(count_rows(&content))
}

/// Loads an `size` x `size` grid from the maze file.
///
/// The caller is expected to obtain `size` from [`determine_size`].
pub fn load(file_path: &Path, size: usize, options: LoadOptions) -> Result<Grid, MazeLoaderError> {
    let content = read_maze_file(file_path)?;
    parse_grid(&content, size, options)
}

/// Counts newline-delimited rows. A final row without a trailing newline counts.
pub fn count_rows(content: &[u8]) -> usize {
    let newlines = content.iter().filter(|&&b| b == b'\n').count();
    match content.last() {
        Some(&last) if last != b'\n' => newlines + 1,
        _ => newlines,
    }
}

/// Whitespace as a whitespace-skipping stream sees it.
fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Fills a grid from the non-whitespace bytes of `content`, row-major.
///
/// Whitespace only separates symbols, so `"# # #"` and `"###"` read the same.
pub fn parse_grid(content: &[u8], size: usize, options: LoadOptions) -> Result<Grid, MazeLoaderError> {
    if size > options.max_size && !options.lenient {
        return Err(MazeLoaderError::TooLarge {
            size,
            max: options.max_size,
        });
    }

    let expected = size * size;
    let mut grid = Grid::filled(size, Cell::Wall);
    let mut found = 0;

    for (index, symbol) in content
        .iter()
        .copied()
        .filter(|&b| !is_separator(b))
        .take(expected)
        .enumerate()
    {
        let pos = Coord::of(index / size, index % size);
        let cell = Cell::from_symbol(symbol);
        if !cell.is_open() && cell != Cell::Wall && !options.lenient {
            return Err(MazeLoaderError::ReservedSymbol {
                symbol: char::from(symbol),
                row: pos.row,
                col: pos.col,
            });
        }
        grid.set(pos, cell);
        found += 1;
    }

    // Missing cells stay walls in lenient mode.
    if found < expected && !options.lenient {
        return Err(MazeLoaderError::Truncated {
            size,
            expected,
            found,
        });
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &[u8] = b"# # #\n. . #\n# . .\n";

    fn lenient() -> LoadOptions {
        LoadOptions {
            lenient: true,
            ..LoadOptions::default()
        }
    }

    fn data_file(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("data")
            .join(name)
    }

    #[test]
    fn counts_rows_like_a_line_reader() {
        assert_eq!(count_rows(b""), 0);
        assert_eq!(count_rows(b"\n"), 1);
        assert_eq!(count_rows(b"ab\ncd"), 2);
        assert_eq!(count_rows(SAMPLE), 3);
    }

    #[test]
    fn parses_spaced_and_packed_rows_alike() {
        let spaced = parse_grid(SAMPLE, 3, LoadOptions::default()).unwrap();
        let packed = parse_grid(b"###\n..#\n#..\n", 3, LoadOptions::default()).unwrap();
        assert_eq!(spaced, packed);
        assert_eq!(spaced.get(Coord::of(1, 0)), Some(Cell::Open(b'.')));
        assert_eq!(spaced.get(Coord::of(0, 2)), Some(Cell::Wall));
    }

    #[test]
    fn rejects_oversized_grid_unless_lenient() {
        let options = LoadOptions {
            max_size: 2,
            lenient: false,
        };
        assert!(matches!(
            parse_grid(SAMPLE, 3, options),
            Err(MazeLoaderError::TooLarge { size: 3, max: 2 })
        ));
        let relaxed = LoadOptions {
            lenient: true,
            ..options
        };
        assert_eq!(parse_grid(SAMPLE, 3, relaxed).unwrap().size(), 3);
    }

    #[test]
    fn short_input_is_truncated_or_padded() {
        assert!(matches!(
            parse_grid(b"..\n.", 2, LoadOptions::default()),
            Err(MazeLoaderError::Truncated {
                expected: 4,
                found: 3,
                ..
            })
        ));
        let grid = parse_grid(b"..\n.", 2, lenient()).unwrap();
        assert_eq!(grid.get(Coord::of(1, 1)), Some(Cell::Wall));
    }

    #[test]
    fn reserved_markers_are_rejected_in_strict_mode() {
        let err = parse_grid(b"..\n*.\n", 2, LoadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            MazeLoaderError::ReservedSymbol {
                symbol: '*',
                row: 1,
                col: 0
            }
        ));
        let grid = parse_grid(b"..\n*.\n", 2, lenient()).unwrap();
        assert_eq!(grid.get(Coord::of(1, 0)), Some(Cell::InProgress));
    }

    #[test]
    fn any_byte_is_one_cell() {
        // Latin-1 'é' as the start cell; not valid UTF-8.
        let grid = parse_grid(b"###\n\xe9.#\n#..\n", 3, LoadOptions::default()).unwrap();
        assert_eq!(grid.get(Coord::of(1, 0)), Some(Cell::Open(0xE9)));
        assert_eq!(grid.get(Coord::of(1, 1)), Some(Cell::Open(b'.')));
    }

    #[test]
    fn loads_file_that_is_not_utf8() {
        let path = data_file("latin1_start.txt");
        let size = determine_size(&path).unwrap();
        assert_eq!(size, 3);
        let grid = load(&path, size, LoadOptions::default()).unwrap();
        assert_eq!(grid.get(Coord::of(1, 0)), Some(Cell::Open(0xE9)));
    }

    #[test]
    fn loading_is_repeatable() {
        let path = data_file("single_corridor.txt");
        let size = determine_size(&path).unwrap();
        let first = load(&path, size, LoadOptions::default()).unwrap();
        let second = load(&path, size, LoadOptions::default()).unwrap();
        assert_eq!(size, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_is_an_open_failure() {
        let path = data_file("does_not_exist.txt");
        let err = determine_size(&path).unwrap_err();
        assert!(err.is_open_failure());
        assert!(load(&path, 3, LoadOptions::default())
            .unwrap_err()
            .is_open_failure());
    }
}
