use serde::Serialize;

use crate::indent::indent_depth;
use crate::warning::ParseWarning;

/// One dictionary sense. Empty strings mean the field was absent in the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub number_label: String,
    pub gloss: String,
}

impl Entry {
    #[must_use]
    pub fn new(number_label: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            number_label: number_label.into(),
            gloss: gloss.into(),
        }
    }

    /// Display nesting depth derived from the numbering label.
    #[must_use]
    pub fn depth(&self) -> usize {
        indent_depth(&self.number_label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    pub entries: Vec<Entry>,
    pub verbalization: String,
    pub table: Option<Table>,
    pub warnings: Vec<ParseWarning>,
}

impl ParsedDocument {
    /// True when the page has no senses, i.e. the word is not documented.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub width: usize,
}

/// A grid slot. `col_span == 0` marks a placeholder consumed by an earlier
/// cell's span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub text: String,
    pub col_span: usize,
    pub column_index: usize,
    pub is_header_row: bool,
    pub is_header_cell: bool,
}

impl Cell {
    #[must_use]
    pub fn placeholder(column_index: usize) -> Self {
        Self {
            column_index,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.col_span == 0
    }
}

/// Normalized inflection grid. Every row holds exactly `column_count` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub column_count: usize,
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Real (non-placeholder) cells of a row, left to right.
    pub fn cells_in_row(row: &[Cell]) -> impl Iterator<Item = &Cell> {
        row.iter().filter(|cell| !cell.is_placeholder())
    }

    /// Display width of a cell: the widths of every column it spans plus the
    /// separators between them.
    #[must_use]
    pub fn cell_width(&self, cell: &Cell) -> usize {
        let end = (cell.column_index + cell.col_span).min(self.columns.len());
        let spanned = self.columns[cell.column_index.min(end)..end]
            .iter()
            .map(|column| column.width)
            .sum::<usize>();
        spanned + cell.col_span.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, ColumnInfo, Entry, ParsedDocument, Table};

    #[test]
    fn entry_depth_follows_label() {
        assert_eq!(Entry::new("1.", "x").depth(), 0);
        assert_eq!(Entry::new("1.2.", "x").depth(), 1);
    }

    #[test]
    fn placeholder_has_zero_span() {
        let cell = Cell::placeholder(3);
        assert!(cell.is_placeholder());
        assert_eq!(cell.column_index, 3);
        assert!(cell.text.is_empty());
    }

    #[test]
    fn cell_width_sums_spanned_columns_and_separators() {
        let table = Table {
            column_count: 3,
            columns: vec![
                ColumnInfo { width: 4 },
                ColumnInfo { width: 5 },
                ColumnInfo { width: 2 },
            ],
            rows: Vec::new(),
        };
        let merged = Cell {
            text: "x".to_string(),
            col_span: 2,
            column_index: 1,
            ..Cell::default()
        };
        assert_eq!(table.cell_width(&merged), 8);
    }

    #[test]
    fn document_without_senses_is_empty() {
        let doc = ParsedDocument {
            verbalization: "note".to_string(),
            table: Some(Table::default()),
            ..ParsedDocument::default()
        };
        assert!(doc.is_empty());
    }
}
