use matcher_core::catalog::ClassificationCatalog;
use matcher_core::ranker::RankedEntry;
use matcher_core::tabulator;
use matcher_core::MatchError;

fn ranked_row(entries: &[(usize, f32)]) -> Vec<RankedEntry> {
    entries
        .iter()
        .map(|&(index, score)| RankedEntry { index, score })
        .collect()
}

#[test]
fn resolves_top_guesses_against_a_plain_catalog() {
    let catalog = ClassificationCatalog::from_labels(
        "IOCC",
        vec![
            "Agriculture".to_string(),
            "Mining".to_string(),
            "Manufacturing".to_string(),
        ],
    );
    let inputs = vec!["farming".to_string()];
    let ranked = vec![ranked_row(&[(0, 0.9), (1, 0.2), (2, 0.1)])];

    let table = tabulator::tabulate(&inputs, &ranked, &catalog, 2).unwrap();
    assert!(!table.coded);
    assert_eq!(table.rows.len(), 2);

    assert_eq!(table.rows[0].input, "farming");
    assert_eq!(table.rows[0].order, 1);
    assert_eq!(table.rows[0].sector, "Agriculture");
    assert_eq!(table.rows[0].code, None);
    assert!((table.rows[0].similarity - 0.9).abs() < 1e-6);

    assert_eq!(table.rows[1].order, 2);
    assert_eq!(table.rows[1].sector, "Mining");
}

#[test]
fn carries_codes_for_a_coded_catalog() {
    let catalog = ClassificationCatalog::from_pairs(
        "NACE",
        vec![
            ("A01".to_string(), "Crop farming".to_string()),
            ("B05".to_string(), "Coal mining".to_string()),
        ],
    );
    let inputs = vec!["coal".to_string()];
    let ranked = vec![ranked_row(&[(1, 0.8), (0, 0.3)])];

    let table = tabulator::tabulate(&inputs, &ranked, &catalog, 1).unwrap();
    assert!(table.coded);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].order, 1);
    assert_eq!(table.rows[0].code.as_deref(), Some("B05"));
    assert_eq!(table.rows[0].sector, "Coal mining");
    assert!((table.rows[0].similarity - 0.8).abs() < 1e-6);
}

#[test]
fn emits_rows_in_input_then_rank_order() {
    let catalog = ClassificationCatalog::from_labels(
        "IOCC",
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
    );
    let inputs = vec!["first".to_string(), "second".to_string()];
    let ranked = vec![
        ranked_row(&[(2, 0.7), (0, 0.5), (1, 0.1)]),
        ranked_row(&[(1, 0.9), (2, 0.4), (0, 0.2)]),
    ];

    let table = tabulator::tabulate(&inputs, &ranked, &catalog, 3).unwrap();
    assert_eq!(table.rows.len(), inputs.len() * 3);

    let keys: Vec<(String, usize)> = table
        .rows
        .iter()
        .map(|r| (r.input.clone(), r.order))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("first".to_string(), 1),
            ("first".to_string(), 2),
            ("first".to_string(), 3),
            ("second".to_string(), 1),
            ("second".to_string(), 2),
            ("second".to_string(), 3),
        ]
    );
}

#[test]
fn rejects_more_guesses_than_reference_entries() {
    let catalog =
        ClassificationCatalog::from_labels("IOCC", vec!["a".to_string(), "b".to_string()]);
    let inputs = vec!["x".to_string()];
    let ranked = vec![ranked_row(&[(0, 0.9), (1, 0.1)])];

    let err = tabulator::tabulate(&inputs, &ranked, &catalog, 3).unwrap_err();
    assert!(matches!(
        err,
        MatchError::InsufficientReferenceEntries {
            requested: 3,
            available: 2
        }
    ));
}

#[test]
fn rejects_zero_guesses() {
    let catalog = ClassificationCatalog::from_labels("IOCC", vec!["a".to_string()]);
    let inputs = vec!["x".to_string()];
    let ranked = vec![ranked_row(&[(0, 0.9)])];

    assert!(matches!(
        tabulator::tabulate(&inputs, &ranked, &catalog, 0).unwrap_err(),
        MatchError::InsufficientReferenceEntries { .. }
    ));
}
