//! Metadata-driven record↔grid mapping.
//!
//! Layout directives are a two-column key/value table embedded in the target
//! workbook. [`BlockBuild::initialize`] reads that table, resolves A1-style
//! references into rectangles ([`extract_options`]), and folds the declared
//! column list into a [`DataMap`] ([`build_data_map`]): the rectangle of
//! record *N* and of each of its columns come out of pure coordinate
//! translation, so a layout change in the document never requires a rebuild
//! of the calling code.
//!
//! The resolution pipeline is synchronous and purely functional; the only
//! mutable state is the orchestrator's one-way pipe cache.

mod block;
mod builder;
mod datamap;
mod error;
mod options;
mod pipe;

pub use block::{BlockBuild, BlockLayout, DEFAULT_METADATA_SHEET};
pub use builder::{BOUNDARY_KEY, BuildFn, IS_VERTICAL_ELEMENT_KEY, IS_VERTICAL_KEY, build_data_map};
pub use datamap::DataMap;
pub use error::BlockMapError;
pub use options::{OptionValue, Options, OptionsFn, extract_options};
pub use pipe::RecordPipe;

// Re-export for convenience
pub use blockmap_common::{CellValue, Coord, Rect};
pub use once_cell::sync::OnceCell;
