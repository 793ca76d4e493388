//! Column alignment for the inline report.
//!
//! Follows elastic tabstop rules: every cell but the last one of a row is a
//! column cell, and a column's width is computed over each run of
//! consecutive rows that have a column cell at that index. Rows of different
//! record kinds therefore align where they share columns and break the block
//! where they don't. Cells are left-aligned and padded with spaces to the
//! widest cell of their block plus [`PADDING`].

use unicode_width::UnicodeWidthStr;

/// Spaces after the widest cell of a column block.
pub const PADDING: usize = 1;

#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of column cells (all but the trailing one) in `row`.
    fn column_cells(&self, row: usize) -> usize {
        self.rows[row].len().saturating_sub(1)
    }

    /// Padded width of every column cell, indexed `[row][column]`.
    fn widths(&self) -> Vec<Vec<usize>> {
        let mut widths: Vec<Vec<usize>> = (0..self.rows.len())
            .map(|row| vec![0; self.column_cells(row)])
            .collect();
        let max_columns = (0..self.rows.len())
            .map(|row| self.column_cells(row))
            .max()
            .unwrap_or(0);

        for column in 0..max_columns {
            let mut row = 0;
            while row < self.rows.len() {
                if self.column_cells(row) <= column {
                    row += 1;
                    continue;
                }
                let start = row;
                let mut width = 0;
                while row < self.rows.len() && self.column_cells(row) > column {
                    width = width.max(self.rows[row][column].width() + PADDING);
                    row += 1;
                }
                for w in &mut widths[start..row] {
                    w[column] = width;
                }
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();
        for (cells, row_widths) in self.rows.iter().zip(&widths) {
            for (cell, width) in cells.iter().zip(row_widths) {
                out.push_str(cell);
                let pad = width.saturating_sub(cell.width());
                out.extend(std::iter::repeat_n(' ', pad));
            }
            if let Some(last) = cells.last() {
                out.push_str(last);
            }
            out.push('\n');
        }
        out
    }
}
