//! Workbook access layer for the blockmap engine.
//!
//! The engine only ever talks to the [`traits`] in this crate; the in-memory
//! [`Workbook`] is the reference backend and the one the test suites build
//! fixtures with. Cell-addressing is 0-based throughout.

pub mod error;
pub mod table;
pub mod traits;
pub mod workbook;

pub use error::IoError;
pub use table::read_key_value_table;
pub use traits::{BookReader, CellData, SheetReader, SheetWriter};
pub use workbook::{Workbook, Worksheet};

// Re-export for convenience
pub use blockmap_common::{CellValue, Coord, Rect};
