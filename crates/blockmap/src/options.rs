//! Turning raw metadata-table rows into typed options.

use std::collections::BTreeMap;

use blockmap_common::{CellValue, RangeRef, Rect};
use blockmap_workbook::CellData;

use crate::error::BlockMapError;

/// A resolved configuration value: a literal scalar or a cell block.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Scalar(CellValue),
    Range(Rect),
}

impl OptionValue {
    pub fn as_range(&self) -> Option<Rect> {
        match self {
            OptionValue::Range(rect) => Some(*rect),
            OptionValue::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&CellValue> {
        match self {
            OptionValue::Scalar(value) => Some(value),
            OptionValue::Range(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(CellValue::as_bool)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, OptionValue::Scalar(value) if value.is_empty())
    }
}

/// Resolved option map, keyed by (possibly remapped) name. Built once per
/// resolution pass and read-only afterwards.
pub type Options = BTreeMap<String, OptionValue>;

/// Extraction strategy slot. A plain `fn` pointer: substituted strategies
/// cannot capture state and stay pure by construction.
pub type OptionsFn =
    fn(&[(String, CellData)], &BTreeMap<String, String>) -> Result<Options, BlockMapError>;

/// Default extraction. Per `(key, cell)` pair:
///
/// * text containing `!` that parses as a range address becomes
///   [`OptionValue::Range`] (the formula text is preferred over the literal
///   value; the sheet qualifier is dropped, rectangles are sheet-agnostic);
/// * anything else keeps the cell's literal value as [`OptionValue::Scalar`];
/// * an empty resolved value fails with
///   [`BlockMapError::ConfigurationValueNull`] under the key as it appears in
///   the sheet;
/// * `friendly` remaps human labels to column names before insertion, and on
///   duplicate keys the later table row wins.
pub fn extract_options(
    pairs: &[(String, CellData)],
    friendly: &BTreeMap<String, String>,
) -> Result<Options, BlockMapError> {
    let mut options = Options::new();
    for (key, cell) in pairs {
        let value = resolve_value(cell);
        if value.is_empty() {
            return Err(BlockMapError::ConfigurationValueNull { key: key.clone() });
        }
        let name = friendly.get(key).unwrap_or(key).clone();
        options.insert(name, value);
    }
    Ok(options)
}

fn resolve_value(cell: &CellData) -> OptionValue {
    if let Some(text) = reference_text(cell)
        && text.contains('!')
        && let Ok(range) = RangeRef::parse(text)
    {
        return OptionValue::Range(range.rect);
    }
    OptionValue::Scalar(cell.value.clone())
}

fn reference_text(cell: &CellData) -> Option<&str> {
    if let Some(formula) = cell.formula.as_deref() {
        return Some(formula.trim_start_matches('=').trim());
    }
    if let CellValue::Text(text) = &cell.value {
        return Some(text.trim());
    }
    None
}
