use tracing::debug;

use crate::document::{DocumentTree, MarkupNode};
use crate::model::{Cell, ColumnInfo, Table};
use crate::warning::{ParseWarning, WarningCode};

pub const MORPHOLOGY_CLASS: &str = "dict_MorphoTable";
pub const INFLECTION_TABLE_CLASS: &str = "inflections";

const TABLE_TAG: &str = "table";
const ROW_TAG: &str = "tr";
const HEADER_SECTION_TAG: &str = "thead";
const HEADER_CELL_TAG: &str = "th";
const DATA_CELL_TAG: &str = "td";

/// HTML clamps `colspan` to this value.
const MAX_COLSPAN: usize = 1000;

/// Span of a cell, or the raw attribute when it is not a positive integer.
fn column_span<'a, N: MarkupNode<'a>>(cell: N) -> Result<usize, &'a str> {
    let Some(raw) = cell.attribute("colspan") else {
        return Ok(1);
    };

    match raw.trim().parse::<usize>() {
        Ok(span) if span >= 1 => Ok(span.min(MAX_COLSPAN)),
        _ => Err(raw),
    }
}

fn row_cells<'a, N: MarkupNode<'a>>(row: N) -> impl Iterator<Item = N> {
    row.child_nodes()
        .into_iter()
        .filter(|child| matches!(child.tag_name(), HEADER_CELL_TAG | DATA_CELL_TAG))
}

pub(crate) fn find_inflection_table<'a, N: MarkupNode<'a>>(root: N) -> Option<N> {
    root.find_all_by_class(MORPHOLOGY_CLASS)
        .into_iter()
        .flat_map(|section| section.find_all_by_tag(TABLE_TAG))
        .find(|table| table.has_class(INFLECTION_TABLE_CLASS))
}

fn count_columns<'a, N: MarkupNode<'a>>(first_row: N) -> usize {
    row_cells(first_row)
        .map(|cell| column_span(cell).unwrap_or(1))
        .sum()
}

fn build_row<'a, N: MarkupNode<'a>>(
    row: N,
    row_index: usize,
    column_count: usize,
    warnings: &mut Vec<ParseWarning>,
) -> Vec<Cell> {
    let is_header_row = row.parent_tag_name() == Some(HEADER_SECTION_TAG);
    let mut cells = (0..column_count)
        .map(|index| Cell {
            is_header_row,
            ..Cell::placeholder(index)
        })
        .collect::<Vec<_>>();

    let mut cursor = 0_usize;
    for child in row_cells(row) {
        let mut span = column_span(child).unwrap_or_else(|raw| {
            warnings.push(
                ParseWarning::new(
                    WarningCode::InvalidColspan,
                    format!("colspan '{raw}' is not a positive integer; using 1"),
                )
                .with_row(row_index)
                .with_column(cursor),
            );
            1
        });

        if cursor >= column_count {
            warnings.push(
                ParseWarning::new(
                    WarningCode::CellOverflow,
                    format!("row is wider than {column_count} columns; extra cells dropped"),
                )
                .with_row(row_index)
                .with_column(cursor),
            );
            break;
        }

        if cursor + span > column_count {
            let clipped = column_count - cursor;
            warnings.push(
                ParseWarning::new(
                    WarningCode::SpanClipped,
                    format!("colspan {span} runs past the last column; clipped to {clipped}"),
                )
                .with_row(row_index)
                .with_column(cursor),
            );
            span = clipped;
        }

        cells[cursor] = Cell {
            text: child.text_content(),
            col_span: span,
            column_index: cursor,
            is_header_row,
            is_header_cell: child.tag_name() == HEADER_CELL_TAG,
        };
        cursor += span;
    }

    if cursor < column_count {
        warnings.push(
            ParseWarning::new(
                WarningCode::RowUnderfilled,
                format!("row covers {cursor} of {column_count} columns"),
            )
            .with_row(row_index)
            .with_column(cursor),
        );
    }

    cells
}

/// Width of every column: the longest real cell text starting there, counted
/// in code points. A merged cell counts only toward its starting column.
pub(crate) fn column_widths(rows: &[Vec<Cell>], column_count: usize) -> Vec<ColumnInfo> {
    (0..column_count)
        .map(|index| ColumnInfo {
            width: rows
                .iter()
                .filter_map(|row| row.get(index))
                .filter(|cell| !cell.is_placeholder())
                .map(|cell| cell.text.chars().count())
                .max()
                .unwrap_or(0),
        })
        .collect()
}

/// Normalizes the page's inflection table, if it has one.
pub fn build_table<T: DocumentTree>(
    tree: &T,
    warnings: &mut Vec<ParseWarning>,
) -> Option<Table> {
    let table = find_inflection_table(tree.root())?;
    let row_nodes = table.find_all_by_tag(ROW_TAG);
    let column_count = row_nodes.first().map_or(0, |first| count_columns(*first));

    let rows = row_nodes
        .into_iter()
        .enumerate()
        .map(|(index, row)| build_row(row, index, column_count, warnings))
        .collect::<Vec<_>>();
    let columns = column_widths(&rows, column_count);

    debug!(
        columns = column_count,
        rows = rows.len(),
        "built inflection table"
    );

    Some(Table {
        column_count,
        columns,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::{build_table, column_widths};
    use crate::document::HtmlDocument;
    use crate::model::{Cell, Table};
    use crate::warning::{ParseWarning, WarningCode};

    fn table_from(inner: &str) -> (Option<Table>, Vec<ParseWarning>) {
        let markup = format!(
            r#"<div class="dict_MorphoTable"><table class="inflections">{inner}</table></div>"#
        );
        let doc = HtmlDocument::parse(&markup).expect("fixture should parse");
        let mut warnings = Vec::new();
        let table = build_table(&doc, &mut warnings);
        (table, warnings)
    }

    fn span_sum(row: &[Cell]) -> usize {
        Table::cells_in_row(row).map(|cell| cell.col_span).sum()
    }

    #[test]
    fn absent_table_is_none() {
        let doc = HtmlDocument::parse("<div class=\"dict_Sense\"></div>").expect("parse");
        let mut warnings = Vec::new();
        assert!(build_table(&doc, &mut warnings).is_none());
        assert!(warnings.is_empty());
    }

    #[test]
    fn inflection_table_outside_morphology_section_is_ignored() {
        let doc = HtmlDocument::parse(
            r#"<table class="inflections"><tr><td>x</td></tr></table>
               <div class="dict_MorphoTable"><table class="other"><tr><td>y</td></tr></table></div>"#,
        )
        .expect("parse");
        let mut warnings = Vec::new();
        assert!(build_table(&doc, &mut warnings).is_none());
    }

    #[test]
    fn spanning_header_cell_records_text_once() {
        let (table, warnings) = table_from(
            r#"<thead><tr><th>Locījums</th><th colspan="2">Skaitlis</th></tr></thead>
               <tbody><tr><td>Nom.</td><td>māja</td><td>mājas</td></tr></tbody>"#,
        );
        let table = table.expect("table should be found");

        assert!(warnings.is_empty());
        assert_eq!(table.column_count, 3);

        let header = &table.rows[0];
        assert_eq!(header.len(), 3);
        assert_eq!(header[1].text, "Skaitlis");
        assert_eq!(header[1].col_span, 2);
        assert_eq!(header[1].column_index, 1);
        assert!(header[1].is_header_row && header[1].is_header_cell);
        assert!(header[2].is_placeholder());

        let body = &table.rows[1];
        assert!(!body[0].is_header_row);
        assert!(!body[0].is_header_cell);
        assert_eq!(body[2].text, "mājas");
    }

    #[test]
    fn header_cell_in_body_row_is_flagged_independently() {
        let (table, _) = table_from("<tr><th>Ģen.</th><td>mājas</td></tr>");
        let row = &table.expect("table").rows[0];
        assert!(!row[0].is_header_row);
        assert!(row[0].is_header_cell);
        assert!(!row[1].is_header_cell);
    }

    #[test]
    fn every_row_is_full_width_and_fully_covered() {
        let (table, warnings) = table_from(
            r#"<thead><tr><th></th><th colspan="2">Vsk.</th><th colspan="2">Dsk.</th></tr></thead>
               <tbody>
                 <tr><td>Nom.</td><td colspan="2">galds</td><td>galdi</td><td>-</td></tr>
                 <tr><td>Ģen.</td><td>galda</td><td>-</td><td colspan="2">galdu</td></tr>
               </tbody>"#,
        );
        let table = table.expect("table");

        assert!(warnings.is_empty());
        assert_eq!(table.column_count, 5);
        for row in &table.rows {
            assert_eq!(row.len(), table.column_count);
            assert_eq!(span_sum(row), table.column_count);
        }
    }

    #[test]
    fn column_width_comes_from_the_longest_real_cell() {
        let (table, _) = table_from(
            r#"<thead><tr><th>A</th><th colspan="2">Bb</th></tr></thead>
               <tbody><tr><td>ab</td><td>abcde</td><td>a</td></tr></tbody>"#,
        );
        let table = table.expect("table");
        let widths = table.columns.iter().map(|c| c.width).collect::<Vec<_>>();
        assert_eq!(widths, vec![2, 5, 1]);
    }

    #[test]
    fn merged_cell_width_lands_on_its_starting_column() {
        let (table, _) = table_from(
            r#"<tr><th colspan="2">vienskaitlis</th></tr>
               <tr><td>a</td><td>b</td></tr>"#,
        );
        let table = table.expect("table");
        assert_eq!(table.columns[0].width, 12);
        assert_eq!(table.columns[1].width, 1);
    }

    #[test]
    fn widths_count_code_points_not_bytes() {
        let (table, _) = table_from("<tr><td>ķēķis</td></tr>");
        assert_eq!(table.expect("table").columns[0].width, 5);
    }

    #[test]
    fn invalid_colspan_degrades_to_one() {
        let (table, warnings) = table_from(
            r#"<tr><td colspan="abc">a</td><td colspan="0">b</td><td colspan="-2">c</td></tr>"#,
        );
        let table = table.expect("table");

        assert_eq!(table.column_count, 3);
        assert!(table.rows[0].iter().all(|cell| cell.col_span == 1));
        assert_eq!(warnings.len(), 3);
        assert!(
            warnings
                .iter()
                .all(|warning| warning.code == WarningCode::InvalidColspan)
        );
    }

    #[test]
    fn wide_rows_are_clipped_not_overrun() {
        let (table, warnings) = table_from(
            r#"<tr><td>a</td><td>b</td></tr>
               <tr><td>c</td><td colspan="3">d</td></tr>
               <tr><td>e</td><td>f</td><td>g</td></tr>"#,
        );
        let table = table.expect("table");

        assert_eq!(table.column_count, 2);
        assert_eq!(table.rows[1][1].col_span, 1);
        assert_eq!(table.rows[2][1].text, "f");
        let codes = warnings.iter().map(|w| w.code).collect::<Vec<_>>();
        assert_eq!(codes, vec![WarningCode::SpanClipped, WarningCode::CellOverflow]);
        assert_eq!(warnings[1].row, Some(2));
    }

    #[test]
    fn short_rows_keep_trailing_placeholders() {
        let (table, warnings) = table_from(
            r#"<tr><td>a</td><td>b</td><td>c</td></tr>
               <tr><td>d</td></tr>"#,
        );
        let table = table.expect("table");

        assert_eq!(table.rows[1].len(), 3);
        assert!(table.rows[1][1].is_placeholder());
        assert!(table.rows[1][2].is_placeholder());
        assert_eq!(warnings[0].code, WarningCode::RowUnderfilled);
        assert_eq!(warnings[0].column, Some(1));
    }

    #[test]
    fn empty_table_has_no_columns() {
        let (table, warnings) = table_from("");
        let table = table.expect("an empty table is still a table");
        assert_eq!(table.column_count, 0);
        assert!(table.columns.is_empty());
        assert!(table.rows.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn placeholder_only_column_has_zero_width() {
        let rows = vec![vec![Cell::placeholder(0)]];
        assert_eq!(column_widths(&rows, 1)[0].width, 0);
    }
}
