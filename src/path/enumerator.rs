use std::io::Write;

use super::explorer::{MazePath, PathExplorer};
use super::recorder::display_and_seal;
use crate::maze::{Coord, Grid};

/// Repeatedly searches a fresh copy of `canonical` from `start`, printing
/// each path as `Path <k>: ...` and sealing its exit, until a search fails.
/// Finishes with a `<total> total paths` line and returns the total.
///
/// `on_path` sees each path's 1-based index and coordinates (exit first)
/// right after it is printed; the coordinates are dropped afterwards.
///
/// Every success seals one exit, so the loop runs at most once per open
/// exit cell plus one final failing search.
pub fn enumerate_paths(
    canonical: &mut Grid,
    start: Coord,
    writer: &mut dyn Write,
    on_path: &mut dyn FnMut(usize, &[Coord]),
) -> std::io::Result<usize> {
    let mut total = 0;

    loop {
        let mut scratch = canonical.clone();
        let mut path = MazePath::new();
        if !PathExplorer::search(&mut scratch, start, &mut path) {
            break;
        }

        total += 1;
        write!(writer, "Path {}: ", total)?;
        let coords = display_and_seal(&mut path, canonical, writer)?;
        on_path(total, &coords);
    }

    writeln!(writer, "{} total paths", total)?;
    Ok(total)
}
