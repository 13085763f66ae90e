//! Cell-by-cell record channel over a resolved [`DataMap`].

use std::collections::BTreeMap;

use blockmap_common::{CellValue, Rect};
use blockmap_workbook::{SheetReader, SheetWriter};

use crate::datamap::DataMap;

/// In-memory pipe: reads and writes one record's columns against any sheet
/// implementing the workbook traits.
///
/// A column block holds one element per slot along the map's element axis:
/// `height` slots for vertical elements, `width` for horizontal. Writes stop
/// at the block's capacity; callers compare their collection sizes against
/// [`DataMap::max_elements`] and split records that would overflow.
#[derive(Debug, Clone)]
pub struct RecordPipe {
    map: DataMap,
}

impl RecordPipe {
    pub fn new(map: DataMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &DataMap {
        &self.map
    }

    fn slots(&self, rect: Rect) -> u32 {
        if self.map.is_vertical_element() {
            rect.height
        } else {
            rect.width
        }
    }

    fn slot_cell(&self, rect: Rect, slot: u32) -> (u32, u32) {
        if self.map.is_vertical_element() {
            (rect.row + slot, rect.col)
        } else {
            (rect.row, rect.col + slot)
        }
    }

    /// Read record `index`: per column, one value per element slot, with
    /// trailing empty slots dropped.
    pub fn pull<S: SheetReader + ?Sized>(
        &self,
        sheet: &S,
        index: u32,
    ) -> BTreeMap<String, Vec<CellValue>> {
        let mut record = BTreeMap::new();
        for (name, rect) in self.map.column_positions(index) {
            let mut values = Vec::with_capacity(self.slots(rect) as usize);
            for slot in 0..self.slots(rect) {
                let (row, col) = self.slot_cell(rect, slot);
                values.push(sheet.value(row, col));
            }
            while values.last().is_some_and(CellValue::is_empty) {
                values.pop();
            }
            record.insert(name.to_string(), values);
        }
        record
    }

    /// Write `record` into the blocks of record `index`, element by element,
    /// stopping at each block's capacity. Columns absent from `record` are
    /// left untouched. Returns the number of cells written.
    pub fn push<S: SheetWriter + ?Sized>(
        &self,
        sheet: &mut S,
        index: u32,
        record: &BTreeMap<String, Vec<CellValue>>,
    ) -> usize {
        let mut written = 0;
        for (name, rect) in self.map.column_positions(index) {
            let Some(values) = record.get(name) else {
                continue;
            };
            for (slot, value) in values.iter().take(self.slots(rect) as usize).enumerate() {
                let (row, col) = self.slot_cell(rect, slot as u32);
                sheet.set_value(row, col, value.clone());
                written += 1;
            }
        }
        written
    }
}
