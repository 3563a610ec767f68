//! Table conversion to a fixed `Grid`.
//!
//! Geometry is inferred in one pass: one row per `tr` anywhere below the table
//! (so rows inside `thead`/`tbody` count) and as many columns as the widest row,
//! where a row's width is the larger of its `th` count and its `td` count.
//! `colspan` and `rowspan` are not honoured.

use crate::dom::{HtmlElement, HtmlNode};
use crate::text::escape_text;

/// Grid dimensions inferred from a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TableGeometry {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
}

pub(crate) fn table_geometry(rows: &[&HtmlElement]) -> TableGeometry {
    let columns = rows
        .iter()
        .map(|row| {
            let headers = row.descendant_elements("th").count();
            let cells = row.descendant_elements("td").count();
            headers.max(cells)
        })
        .max()
        .unwrap_or(0);
    TableGeometry {
        rows: rows.len(),
        columns,
    }
}

pub(crate) fn push_table(element: &HtmlElement, output: &mut String) {
    let rows: Vec<&HtmlElement> = element.descendant_elements("tr").collect();
    let geometry = table_geometry(&rows);

    output.push_str("<InlineUIContainer><Grid>");
    output.push_str("<Grid.RowDefinitions>");
    for _ in 0..geometry.rows {
        output.push_str("<RowDefinition/>");
    }
    output.push_str("</Grid.RowDefinitions>");
    output.push_str("<Grid.ColumnDefinitions>");
    for _ in 0..geometry.columns {
        output.push_str("<ColumnDefinition/>");
    }
    output.push_str("</Grid.ColumnDefinitions>");

    for (row_index, row) in rows.iter().enumerate() {
        // Header cells take the first columns, data cells continue after them.
        let headers = row.descendant_elements("th").map(|cell| (cell, true));
        let cells = row.descendant_elements("td").map(|cell| (cell, false));
        for (column_index, (cell, is_header)) in headers.chain(cells).enumerate() {
            push_cell(cell, row_index, column_index, is_header, output);
        }
    }

    output.push_str("</Grid></InlineUIContainer>");
}

/// Only a cell whose first child is text is rendered; richer cells stay empty.
fn push_cell(cell: &HtmlElement, row: usize, column: usize, is_header: bool, output: &mut String) {
    let Some(HtmlNode::Text(text)) = cell.first_child() else {
        return;
    };
    output.push_str(&format!(
        r#"<TextBlock Grid.Row="{row}" Grid.Column="{column}" Text="{}""#,
        escape_text(text.trim())
    ));
    if is_header {
        output.push_str(r#" FontWeight="Bold""#);
    }
    output.push_str("/>");
}
