//! Orchestration: metadata lookup, option extraction, map construction, and
//! the per-instance pipe cache.

use std::collections::BTreeMap;

use blockmap_common::Coord;
use blockmap_workbook::{BookReader, read_key_value_table};
use once_cell::sync::OnceCell;

use crate::builder::{BuildFn, build_data_map};
use crate::datamap::DataMap;
use crate::error::BlockMapError;
use crate::options::{Options, OptionsFn, extract_options};

/// Sheet holding the layout directives unless overridden.
pub const DEFAULT_METADATA_SHEET: &str = "Metadata";

/// Resolution configuration shared by concrete block builders.
///
/// The strategy slots are plain `fn` pointers, so a substituted extraction or
/// build step cannot capture per-instance state: the same layout value can be
/// cloned across builders freely.
#[derive(Debug, Clone)]
pub struct BlockLayout {
    /// Name of the metadata sheet.
    pub metadata_sheet: String,
    /// Top-left cell of the key/value table.
    pub begin: Coord,
    /// Human label → column name, applied to keys during extraction only.
    pub friendly: BTreeMap<String, String>,
    /// Declared column names; unique, in caller order.
    pub columns: Vec<String>,
    /// Option extraction step.
    pub extract: OptionsFn,
    /// Map construction step.
    pub build: BuildFn,
}

impl BlockLayout {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            metadata_sheet: DEFAULT_METADATA_SHEET.to_string(),
            begin: Coord::ORIGIN,
            friendly: BTreeMap::new(),
            columns: columns.into_iter().map(Into::into).collect(),
            extract: extract_options,
            build: build_data_map,
        }
    }

    pub fn with_metadata_sheet(mut self, name: impl Into<String>) -> Self {
        self.metadata_sheet = name.into();
        self
    }

    pub fn with_begin(mut self, begin: Coord) -> Self {
        self.begin = begin;
        self
    }

    pub fn with_friendly_name(
        mut self,
        label: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        self.friendly.insert(label.into(), column.into());
        self
    }

    pub fn with_extractor(mut self, extract: OptionsFn) -> Self {
        self.extract = extract;
        self
    }

    pub fn with_builder(mut self, build: BuildFn) -> Self {
        self.build = build;
        self
    }
}

/// Base of every concrete record builder.
///
/// Implementors hold a [`BlockLayout`] and a [`OnceCell`] pipe slot and
/// supply [`BlockBuild::create`], the factory for the channel that actually
/// moves field values. Resolution ([`BlockBuild::initialize`]) and the pipe
/// cache ([`BlockBuild::pipe`]) come as provided methods.
pub trait BlockBuild {
    /// Sheet handle the concrete pipe factory consumes.
    type Sheet: ?Sized;
    /// Channel that reads or writes field values through resolved coordinates.
    type Pipe;

    fn layout(&self) -> &BlockLayout;

    /// Backing storage for the pipe cache. The cell transitions once from
    /// unset to set and is never reset.
    fn pipe_cell(&self) -> &OnceCell<Self::Pipe>;

    /// Build the pipe for `sheet`. Called at most once per instance, from
    /// [`BlockBuild::pipe`].
    fn create(&self, sheet: &Self::Sheet) -> Self::Pipe;

    /// Resolve the metadata table of `book` into a coordinate model.
    ///
    /// The table is read in full, then options are built, then the map;
    /// there is no partial or streaming resolution. The result is never
    /// cached: every call re-reads and re-resolves, even when a pipe already
    /// exists, so one workbook can carry differently-shaped record sets on
    /// different sheets. A missing metadata sheet surfaces as the workbook
    /// layer's own error, unchanged.
    fn initialize<B: BookReader>(&self, book: &B) -> Result<(DataMap, Options), BlockMapError> {
        let layout = self.layout();
        let sheet = book.sheet(&layout.metadata_sheet)?;
        let pairs = read_key_value_table(sheet, layout.begin);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sheet = %layout.metadata_sheet,
            rows = pairs.len(),
            "metadata table read"
        );
        let options = (layout.extract)(&pairs, &layout.friendly)?;
        let map = (layout.build)(&layout.columns, &options)?;
        Ok((map, options))
    }

    /// The instance's pipe, created on first call. Later calls return that
    /// same pipe regardless of the sheet passed, so two record sets living in
    /// the same workbook share one underlying channel. The cell serialises
    /// concurrent first calls.
    fn pipe(&self, sheet: &Self::Sheet) -> &Self::Pipe {
        self.pipe_cell().get_or_init(|| self.create(sheet))
    }
}
