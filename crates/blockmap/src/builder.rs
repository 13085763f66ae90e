//! Folding a declared column list and resolved options into a [`DataMap`].

use std::collections::BTreeMap;

use blockmap_common::Rect;

use crate::datamap::DataMap;
use crate::error::BlockMapError;
use crate::options::{OptionValue, Options};

/// Key of the required record-boundary option.
pub const BOUNDARY_KEY: &str = "Boundary";
/// Key of the record tiling-axis option.
pub const IS_VERTICAL_KEY: &str = "IsVertical";
/// Key of the element tiling-axis option.
pub const IS_VERTICAL_ELEMENT_KEY: &str = "IsVerticalElement";

/// Build strategy slot. A plain `fn` pointer: substituted strategies cannot
/// capture state and stay pure by construction.
pub type BuildFn = fn(&[String], &Options) -> Result<DataMap, BlockMapError>;

/// Default construction of a [`DataMap`].
///
/// `Boundary` must be present as a range. The two axis options default to
/// vertical when absent or not readable as booleans. A column with a range
/// option under its exact name gets that block, re-expressed relative to the
/// boundary's top-left corner; a column without one lands on the record's
/// anchor cell as `(0, 0, 1, 1)`. Unconfigured columns therefore all share
/// the anchor cell; callers that declare more than one column are expected
/// to configure each of them.
pub fn build_data_map(columns: &[String], options: &Options) -> Result<DataMap, BlockMapError> {
    let boundary = options
        .get(BOUNDARY_KEY)
        .and_then(OptionValue::as_range)
        .ok_or_else(|| BlockMapError::ConfigurationMissing {
            key: BOUNDARY_KEY.to_string(),
        })?;
    let vertical = options
        .get(IS_VERTICAL_KEY)
        .and_then(OptionValue::as_bool)
        .unwrap_or(true);
    let vertical_element = options
        .get(IS_VERTICAL_ELEMENT_KEY)
        .and_then(OptionValue::as_bool)
        .unwrap_or(true);

    let origin = boundary.top_left();
    let mut relative = BTreeMap::new();
    for name in columns {
        let rect = match options.get(name).and_then(OptionValue::as_range) {
            Some(abs) => abs.relative_to(origin).ok_or_else(|| {
                // A block above/left of the boundary has no record-relative form.
                BlockMapError::ConfigurationMissing { key: name.clone() }
            })?,
            None => Rect::new(0, 0, 1, 1),
        };
        relative.insert(name.clone(), rect);
    }
    Ok(DataMap::new(boundary, relative, vertical, vertical_element))
}
