//! Renders a result table for terminal review or spreadsheet import.

use matcher_core::tabulator::ResultTable;

fn header_row(coded: bool) -> Vec<&'static str> {
    if coded {
        vec!["input", "order", "code", "sector", "similarity"]
    } else {
        vec!["input", "order", "sector", "similarity"]
    }
}

fn cells(result: &ResultTable) -> Vec<Vec<String>> {
    result
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.input.clone(), row.order.to_string()];
            if result.coded {
                cells.push(row.code.clone().unwrap_or_default());
            }
            cells.push(row.sector.clone());
            cells.push(format!("{:.4}", row.similarity));
            cells
        })
        .collect()
}

/// Aligned text table, best guess first per input.
pub fn table(result: &ResultTable) -> String {
    let headers = header_row(result.coded);
    let rows = cells(result);

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{:<width$}", header, width = widths[i]));
    }
    out.push('\n');
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{:<width$}", cell, width = widths[i]));
        }
        out.push('\n');
    }
    out
}

/// CSV with a header line; fields quoted only when they need it.
pub fn csv(result: &ResultTable) -> String {
    let mut out = String::new();
    out.push_str(&header_row(result.coded).join(","));
    out.push('\n');
    for row in cells(result) {
        let quoted: Vec<String> = row.iter().map(|cell| csv_field(cell)).collect();
        out.push_str(&quoted.join(","));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
