use std::io::Write;

use super::explorer::MazePath;
use crate::maze::{Cell, Coord, Grid};

/// Writes a discovered path and closes its exit on the canonical grid.
///
/// Symbols are read from `canonical`, not from the searched copy, so the
/// original input characters are printed. Output is exit first, start last,
/// comma separated and newline terminated. Once the start cell has been
/// written the exit cell is replaced by [`Cell::Sealed`].
///
/// `path` is drained; the drained coordinates are returned in output order.
pub fn display_and_seal(
    path: &mut MazePath,
    canonical: &mut Grid,
    writer: &mut dyn Write,
) -> std::io::Result<Vec<Coord>> {
    let coords: Vec<Coord> = path.drain().collect();

    for (i, pos) in coords.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        if let Some(cell) = canonical.get(*pos) {
            writer.write_all(&[cell.symbol()])?;
        }
    }
    writer.write_all(b"\n")?;

    if let Some(exit) = coords.first() {
        canonical.set(*exit, Cell::Sealed);
    }

    Ok(coords)
}
