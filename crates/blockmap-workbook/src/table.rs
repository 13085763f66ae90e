//! Two-column key/value table scanning.

use blockmap_common::Coord;

use crate::traits::{CellData, SheetReader};

/// Read the key/value table anchored at `origin`: keys in `origin.col`,
/// values one column to the right, row by row downward. Scanning stops at the
/// first row whose key cell renders to blank text; rows below a blank key are
/// never visited, so a gap terminates the table.
///
/// Pairs keep their order of appearance; duplicate keys are the consumer's
/// concern.
pub fn read_key_value_table<S: SheetReader + ?Sized>(
    sheet: &S,
    origin: Coord,
) -> Vec<(String, CellData)> {
    let mut pairs = Vec::new();
    for row in origin.row.. {
        let key = sheet.value(row, origin.col).to_string();
        let key = key.trim();
        if key.is_empty() {
            break;
        }
        pairs.push((key.to_string(), sheet.cell(row, origin.col + 1)));
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(rows = pairs.len(), "key/value table read");
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::Worksheet;
    use blockmap_common::CellValue;

    #[test]
    fn reads_until_first_blank_key() {
        let mut sheet = Worksheet::new();
        sheet.set_value(0, 0, "Boundary");
        sheet.set_formula(0, 1, "=Data!C3:E3");
        sheet.set_value(1, 0, "IsVertical");
        sheet.set_value(1, 1, false);
        // row 2 left blank on purpose
        sheet.set_value(3, 0, "Orphan");
        sheet.set_value(3, 1, "ignored");

        let pairs = read_key_value_table(&sheet, Coord::ORIGIN);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "Boundary");
        assert_eq!(pairs[0].1.formula.as_deref(), Some("=Data!C3:E3"));
        assert_eq!(pairs[1].0, "IsVertical");
        assert_eq!(pairs[1].1.value, CellValue::Boolean(false));
    }

    #[test]
    fn origin_offsets_both_columns() {
        let mut sheet = Worksheet::new();
        sheet.set_value(2, 3, "Key");
        sheet.set_value(2, 4, 7);
        let pairs = read_key_value_table(&sheet, Coord::new(2, 3));
        assert_eq!(pairs, vec![("Key".to_string(), sheet.cell(2, 4))]);
    }

    #[test]
    fn whitespace_key_terminates() {
        let mut sheet = Worksheet::new();
        sheet.set_value(0, 0, "  ");
        sheet.set_value(0, 1, "value");
        assert!(read_key_value_table(&sheet, Coord::ORIGIN).is_empty());
    }
}
