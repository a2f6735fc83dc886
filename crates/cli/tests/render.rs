use cli::render;
use matcher_core::tabulator::{MatchRow, ResultTable};

fn plain_table() -> ResultTable {
    ResultTable {
        coded: false,
        rows: vec![
            MatchRow {
                input: "farming".to_string(),
                order: 1,
                code: None,
                sector: "Agriculture".to_string(),
                similarity: 0.9,
            },
            MatchRow {
                input: "farming".to_string(),
                order: 2,
                code: None,
                sector: "Mining".to_string(),
                similarity: 0.2,
            },
        ],
    }
}

fn coded_table() -> ResultTable {
    ResultTable {
        coded: true,
        rows: vec![MatchRow {
            input: "coal".to_string(),
            order: 1,
            code: Some("21".to_string()),
            sector: "Mining, Quarrying, and Oil and Gas Extraction".to_string(),
            similarity: 0.8,
        }],
    }
}

#[test]
fn text_table_has_a_header_and_one_line_per_row() {
    let out = render::table(&plain_table());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("input"));
    assert!(!lines[0].contains("code"));
    assert!(lines[1].contains("Agriculture"));
    assert!(lines[1].contains("0.9000"));
    assert!(lines[2].contains("Mining"));
}

#[test]
fn text_table_shows_codes_for_coded_catalogs() {
    let out = render::table(&coded_table());
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].contains("code"));
    assert!(lines[1].contains("21"));
}

#[test]
fn csv_quotes_fields_containing_commas() {
    let out = render::csv(&coded_table());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "input,order,code,sector,similarity");
    assert_eq!(
        lines[1],
        "coal,1,21,\"Mining, Quarrying, and Oil and Gas Extraction\",0.8000"
    );
}

#[test]
fn csv_leaves_plain_fields_unquoted() {
    let out = render::csv(&plain_table());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "input,order,sector,similarity");
    assert_eq!(lines[1], "farming,1,Agriculture,0.9000");
}
