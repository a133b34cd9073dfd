//! Row representations.
//!
//! `RawRecord` is a data row keyed by header name, in column order.
//! `SheetRecord` types are the fixed-field structs built from it.

use crate::db::schema::Table;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    cells: Vec<(String, String)>,
}

impl RawRecord {
    /// Pair `header` with `row`; short rows are padded with empty strings,
    /// cells beyond the header are dropped.
    pub fn from_row(header: &[String], row: &[String]) -> Self {
        let cells = header
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), row.get(i).cloned().unwrap_or_default()))
            .collect();
        Self { cells }
    }

    /// Value of `column`, or `""` when the column does not exist.
    pub fn get(&self, column: &str) -> &str {
        self.cells
            .iter()
            .find(|(h, _)| h == column)
            .map_or("", |(_, v)| v.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A typed row of one of the tracker tables.
pub trait SheetRecord: Sized {
    const TABLE: Table;

    fn from_raw(raw: &RawRecord) -> Self;

    /// Values in `TABLE.input_columns()` order (no `Created At`).
    fn values(&self) -> Vec<String>;

    /// `(column, value)` pairs that must be non-empty before saving.
    fn required(&self) -> Vec<(&'static str, &str)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn short_rows_are_padded_and_extra_cells_dropped() {
        let header = s(&["Sprint", "Dates", "Created At"]);
        let short = RawRecord::from_row(&header, &s(&["Sprint 1"]));
        assert_eq!(short.get("Sprint"), "Sprint 1");
        assert_eq!(short.get("Dates"), "");
        assert_eq!(short.len(), 3);

        let long = RawRecord::from_row(&header, &s(&["a", "b", "c", "d"]));
        assert_eq!(long.values().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(long.get("Unknown"), "");
    }
}
