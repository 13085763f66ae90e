//! Pure coordinate algebra over a resolved layout.

use std::collections::BTreeMap;

use blockmap_common::{Coord, Rect};
use once_cell::sync::OnceCell;

/// Coordinate model for one record family.
///
/// `boundary` is the rectangle of record index 0; every other record is a
/// congruent translation of it along exactly one axis, so rectangles for
/// different indices never overlap. Column rectangles are stored relative to
/// a record's own top-left corner and reused for every index by translation,
/// so iterating a large record set never recomputes per-column geometry.
///
/// The model assumes its inputs were validated upstream; it raises no errors
/// and does not check that columns stay inside `boundary` or apart from each
/// other.
#[derive(Debug, Clone)]
pub struct DataMap {
    boundary: Rect,
    columns: BTreeMap<String, Rect>,
    vertical: bool,
    vertical_element: bool,
    max_elements: OnceCell<u32>,
}

impl DataMap {
    pub fn new(
        boundary: Rect,
        columns: BTreeMap<String, Rect>,
        vertical: bool,
        vertical_element: bool,
    ) -> Self {
        Self {
            boundary,
            columns,
            vertical,
            vertical_element,
            max_elements: OnceCell::new(),
        }
    }

    /// Rectangle of record index 0.
    pub fn boundary(&self) -> Rect {
        self.boundary
    }

    /// Axis along which records tile: rows when true, columns otherwise.
    pub fn is_vertical(&self) -> bool {
        self.vertical
    }

    /// Axis along which a multi-valued column's elements tile.
    pub fn is_vertical_element(&self) -> bool {
        self.vertical_element
    }

    /// Record-relative column rectangles, keyed by column name.
    pub fn columns(&self) -> &BTreeMap<String, Rect> {
        &self.columns
    }

    /// Rectangle occupied by record `index`: `boundary` translated `index`
    /// steps along the tiling axis. Same extent for every index.
    pub fn position(&self, index: u32) -> Rect {
        let Rect {
            row,
            col,
            width,
            height,
        } = self.boundary;
        if self.vertical {
            Rect::new(row + index * height, col, width, height)
        } else {
            Rect::new(row, col + index * width, width, height)
        }
    }

    /// Absolute column rectangles for record `index`.
    pub fn column_positions(&self, index: u32) -> impl Iterator<Item = (&str, Rect)> {
        self.column_positions_at(self.position(index).top_left())
    }

    /// Absolute column rectangles for a record anchored at `top_left`: each
    /// relative rectangle translated by `top_left`, extents preserved.
    pub fn column_positions_at(&self, top_left: Coord) -> impl Iterator<Item = (&str, Rect)> {
        self.columns
            .iter()
            .map(move |(name, rel)| (name.as_str(), rel.translate(top_left)))
    }

    /// Largest element capacity across the columns: the maximum column
    /// height (vertical elements) or width (horizontal). Computed on first
    /// access and cached for the map's lifetime. A caller whose collection
    /// exceeds this must split the logical record into several physical ones.
    pub fn max_elements(&self) -> u32 {
        *self.max_elements.get_or_init(|| {
            self.columns
                .values()
                .map(|rect| {
                    if self.vertical_element {
                        rect.height
                    } else {
                        rect.width
                    }
                })
                .max()
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataMap {
        let mut columns = BTreeMap::new();
        columns.insert("Name".to_string(), Rect::new(0, 0, 1, 1));
        columns.insert("Score".to_string(), Rect::new(0, 1, 1, 1));
        DataMap::new(Rect::new(2, 2, 3, 1), columns, true, true)
    }

    #[test]
    fn position_zero_is_the_boundary() {
        let map = sample();
        assert_eq!(map.position(0), map.boundary());
    }

    #[test]
    fn vertical_tiling_steps_rows_by_height() {
        let map = sample();
        assert_eq!(map.position(0), Rect::new(2, 2, 3, 1));
        assert_eq!(map.position(1), Rect::new(3, 2, 3, 1));
        assert_eq!(map.position(5), Rect::new(7, 2, 3, 1));
        for index in 0..8 {
            let a = map.position(index);
            let b = map.position(index + 1);
            assert_eq!(b.row - a.row, map.boundary().height);
            assert_eq!(b.col, a.col);
            assert_eq!((a.width, a.height), (3, 1));
        }
    }

    #[test]
    fn horizontal_tiling_steps_cols_by_width() {
        let mut columns = BTreeMap::new();
        columns.insert("Name".to_string(), Rect::new(0, 0, 1, 1));
        let map = DataMap::new(Rect::new(1, 4, 2, 3), columns, false, false);
        assert_eq!(map.position(0), Rect::new(1, 4, 2, 3));
        assert_eq!(map.position(1), Rect::new(1, 6, 2, 3));
        assert_eq!(map.position(3), Rect::new(1, 10, 2, 3));
    }

    #[test]
    fn column_positions_translate_per_index() {
        let map = sample();
        let cols: BTreeMap<_, _> = map.column_positions(0).collect();
        assert_eq!(cols["Name"], Rect::new(2, 2, 1, 1));
        assert_eq!(cols["Score"], Rect::new(2, 3, 1, 1));

        let cols: BTreeMap<_, _> = map.column_positions(5).collect();
        assert_eq!(cols["Name"], Rect::new(7, 2, 1, 1));
        assert_eq!(cols["Score"], Rect::new(7, 3, 1, 1));
    }

    #[test]
    fn column_translation_roundtrips() {
        let map = sample();
        for index in [0u32, 1, 9] {
            let anchor = map.position(index).top_left();
            for (name, abs) in map.column_positions(index) {
                let rel = map.columns()[name];
                assert_eq!(abs.relative_to(anchor), Some(rel));
                assert_eq!((abs.width, abs.height), (rel.width, rel.height));
            }
        }
    }

    #[test]
    fn max_elements_follows_the_element_axis() {
        let mut columns = BTreeMap::new();
        columns.insert("Tags".to_string(), Rect::new(0, 0, 2, 4));
        columns.insert("Name".to_string(), Rect::new(0, 2, 1, 1));

        let vertical = DataMap::new(Rect::new(0, 0, 3, 4), columns.clone(), true, true);
        assert_eq!(vertical.max_elements(), 4);
        assert_eq!(vertical.max_elements(), 4);

        let horizontal = DataMap::new(Rect::new(0, 0, 3, 4), columns, true, false);
        assert_eq!(horizontal.max_elements(), 2);
    }

    #[test]
    fn max_elements_of_empty_map_is_zero() {
        let map = DataMap::new(Rect::new(0, 0, 1, 1), BTreeMap::new(), true, true);
        assert_eq!(map.max_elements(), 0);
    }
}
