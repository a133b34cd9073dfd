//! Table rendering utilities for CLI outputs.
//!
//! Column widths follow the widest cell, capped at `max_width`; longer cells
//! wrap onto extra lines. Cells may contain ANSI styling.

use super::formatting::{pad_right, strip_ansi, visible_width, wrap};

pub struct Column {
    pub header: String,
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .max()
                    .unwrap_or(0);
                widest.max(visible_width(&col.header)).min(col.max_width.max(1))
            })
            .collect()
    }

    /// Split a cell into display lines; styled cells that fit are kept as-is.
    fn cell_lines(cell: &str, width: usize) -> Vec<String> {
        if visible_width(cell) <= width {
            vec![cell.to_string()]
        } else {
            wrap(&strip_ansi(cell), width)
        }
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad_right(&c.header, *w))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("  "));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<Vec<String>> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| Self::cell_lines(row.get(i).map_or("", |c| c.as_str()), *w))
                .collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);

            for line in 0..height {
                let parts: Vec<String> = cells
                    .iter()
                    .zip(&widths)
                    .map(|(c, w)| pad_right(c.get(line).map_or("", |s| s.as_str()), *w))
                    .collect();
                out.push_str(parts.join("  ").trim_end());
                out.push('\n');
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_size_to_content_and_wrap_long_cells() {
        let mut t = Table::new(vec![Column::new("Sprint", 10), Column::new("Goal", 12)]);
        t.add_row(vec!["Sprint 1".into(), "Automated ingestion & write".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Sprint    Goal");
        assert_eq!(lines[1], "--------  ------------");
        assert_eq!(lines[2], "Sprint 1  Automated");
        assert_eq!(lines[3], "          ingestion &");
        assert_eq!(lines[4], "          write");
    }

    #[test]
    fn missing_cells_render_blank() {
        let mut t = Table::new(vec![Column::new("A", 5), Column::new("B", 5)]);
        t.add_row(vec!["x".into()]);
        assert!(t.render().lines().nth(2).unwrap().starts_with('x'));
    }
}
