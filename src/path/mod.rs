// explorer module
mod explorer;
// recorder module
mod recorder;
// enumerator module
mod enumerator;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use enumerator::enumerate_paths;
pub use explorer::{MazePath, PathExplorer, START};
pub use recorder::display_and_seal;
