//! Sparse in-memory workbook. The reference backend for tests and for hosts
//! that assemble documents in code before handing them to a real engine.

use std::collections::BTreeMap;

use blockmap_common::CellValue;
use rustc_hash::FxHashMap;

use crate::error::IoError;
use crate::traits::{BookReader, CellData, SheetReader, SheetWriter};

/// One sheet: a sparse map from `(row, col)` to cell contents, 0-based.
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    cells: FxHashMap<(u32, u32), CellData>,
}

impl Worksheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&mut self, row: u32, col: u32, value: impl Into<CellValue>) {
        self.cells.entry((row, col)).or_default().value = value.into();
    }

    pub fn set_formula(&mut self, row: u32, col: u32, formula: impl Into<String>) {
        self.cells.entry((row, col)).or_default().formula = Some(formula.into());
    }

    pub fn value(&self, row: u32, col: u32) -> CellValue {
        self.cells
            .get(&(row, col))
            .map(|cell| cell.value.clone())
            .unwrap_or_default()
    }
}

impl SheetReader for Worksheet {
    fn cell(&self, row: u32, col: u32) -> CellData {
        self.cells.get(&(row, col)).cloned().unwrap_or_default()
    }
}

impl SheetWriter for Worksheet {
    fn set_value(&mut self, row: u32, col: u32, value: CellValue) {
        Worksheet::set_value(self, row, col, value);
    }

    fn set_formula(&mut self, row: u32, col: u32, formula: String) {
        Worksheet::set_formula(self, row, col, formula);
    }
}

/// Named collection of [`Worksheet`]s.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: BTreeMap<String, Worksheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create-if-missing lookup: returns the existing sheet or a fresh empty
    /// one registered under `name`.
    pub fn add_sheet(&mut self, name: impl Into<String>) -> &mut Worksheet {
        self.sheets.entry(name.into()).or_default()
    }

    pub fn sheet(&self, name: &str) -> Result<&Worksheet, IoError> {
        self.sheets.get(name).ok_or_else(|| IoError::SheetNotFound {
            name: name.to_string(),
        })
    }

    pub fn sheet_mut(&mut self, name: &str) -> Result<&mut Worksheet, IoError> {
        self.sheets
            .get_mut(name)
            .ok_or_else(|| IoError::SheetNotFound {
                name: name.to_string(),
            })
    }

    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    pub fn set_value(
        &mut self,
        sheet: &str,
        row: u32,
        col: u32,
        value: impl Into<CellValue>,
    ) -> Result<(), IoError> {
        self.sheet_mut(sheet)?.set_value(row, col, value);
        Ok(())
    }

    pub fn get_value(&self, sheet: &str, row: u32, col: u32) -> Option<CellValue> {
        self.sheets.get(sheet).map(|s| s.value(row, col))
    }
}

impl BookReader for Workbook {
    type Sheet = Worksheet;

    fn sheet(&self, name: &str) -> Result<&Worksheet, IoError> {
        Workbook::sheet(self, name)
    }

    fn has_sheet(&self, name: &str) -> bool {
        Workbook::has_sheet(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_cells_read_back_empty() {
        let mut book = Workbook::new();
        book.add_sheet("Data");
        let sheet = book.sheet("Data").unwrap();
        assert_eq!(sheet.value(10, 10), CellValue::Empty);
        assert!(sheet.cell(10, 10).is_empty());
    }

    #[test]
    fn values_and_formulas_live_on_one_cell() {
        let mut book = Workbook::new();
        let sheet = book.add_sheet("Data");
        sheet.set_value(1, 1, 3.5);
        sheet.set_formula(1, 1, "=Other!A1");
        let cell = sheet.cell(1, 1);
        assert_eq!(cell.value, CellValue::Number(3.5));
        assert_eq!(cell.formula.as_deref(), Some("=Other!A1"));
    }

    #[test]
    fn missing_sheet_lookup_fails_by_name() {
        let book = Workbook::new();
        assert_eq!(
            book.sheet("Metadata").unwrap_err(),
            IoError::SheetNotFound {
                name: "Metadata".to_string()
            }
        );
    }

    #[test]
    fn add_sheet_is_idempotent() {
        let mut book = Workbook::new();
        book.add_sheet("Data");
        book.set_value("Data", 0, 0, "x").unwrap();
        book.add_sheet("Data");
        assert_eq!(
            book.get_value("Data", 0, 0),
            Some(CellValue::Text("x".into()))
        );
        assert!(book.set_value("Missing", 0, 0, "x").is_err());
    }
}
