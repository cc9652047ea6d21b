//! Elastic ASCII table rendering for terminal reports.
//!
//! Columns size themselves to their widest cell. Cells that read as numbers
//! are right-aligned so columns of means and counts line up.

use std::fmt::Write as _;

pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let column_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(column_count) {
            widths[idx] = widths[idx].max(sanitize(cell).chars().count());
        }
    }
    for width in &mut widths {
        *width = (*width).max(1);
    }

    let mut output = String::new();
    write_row(&mut output, headers, &widths, false);
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(&mut output, &separators, &widths, false);
    for row in rows {
        write_row(&mut output, row, &widths, true);
    }
    output
}

pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

fn write_row(output: &mut String, cells: &[String], widths: &[usize], align_numbers: bool) {
    let mut rendered = Vec::with_capacity(cells.len());
    for (idx, cell) in cells.iter().enumerate().take(widths.len()) {
        let clean = sanitize(cell);
        let padding = widths[idx].saturating_sub(clean.chars().count());
        if align_numbers && is_numeric(&clean) {
            rendered.push(format!("{}{}", " ".repeat(padding), clean));
        } else {
            rendered.push(format!("{}{}", clean, " ".repeat(padding)));
        }
    }
    let mut line = rendered.join("  ");
    while line.ends_with(' ') {
        line.pop();
    }
    let _ = writeln!(output, "{line}");
}

fn sanitize(cell: &str) -> String {
    cell.chars()
        .map(|ch| match ch {
            '\n' | '\r' | '\t' => ' ',
            other => other,
        })
        .collect()
}

fn is_numeric(cell: &str) -> bool {
    !cell.is_empty() && cell.parse::<f64>().is_ok()
}
