use fractic_expense_tracker::{entities::ImportIssue, util::ExpenseImportUtil};

const EXPORT: &str = "\
Expenses 2024,,,,,,
March,,,,,,
Date,Place,Amount,Notes,Type,Week,Method
2024-03-01,Costco,$212.40,,Groceries,9,CIBC MC
2024-03-02,Vet,85,,Pet Care,9,WS VISA
,Esso,,,Fuel,9,
2024-03-04,Cafe,4.50,,Dining Out,10,Debit
";

#[test]
fn validates_export_with_default_rules() {
    let util = ExpenseImportUtil::default();
    let report = util.validate_string(EXPORT).unwrap();
    assert_eq!(report.valid_count, 3);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].row, 6);
    assert_eq!(
        report.errors[0].issues,
        vec![
            ImportIssue::MissingDate,
            ImportIssue::MissingAmount,
            ImportIssue::InvalidType("Fuel".into()),
            ImportIssue::MissingMethod,
        ]
    );

    let printed = util.print_report(&report, "march.csv");
    assert!(printed.contains("Invalid rows: 1"));
    assert!(printed.contains("Error #1 - Row 6:"));
    assert!(printed.contains("    Place: Esso\n"));
}

#[test]
fn validates_with_ron_rules() {
    let util = ExpenseImportUtil::with_ron_rules(
        r#"(categories: ["Groceries", "Pet Care", "Dining Out", "Fuel"], payment_methods: ["CIBC MC", "WS VISA", "Debit"])"#,
    )
    .unwrap();
    let report = util.validate_string(EXPORT).unwrap();
    assert_eq!(
        report.errors[0].issues,
        vec![
            ImportIssue::MissingDate,
            ImportIssue::MissingAmount,
            ImportIssue::MissingMethod,
        ]
    );
    assert!(ExpenseImportUtil::with_ron_rules("(categories: [").is_err());
}

#[test]
fn validates_file() {
    let path = std::env::temp_dir().join("fractic-expense-tracker-import-test.csv");
    std::fs::write(&path, EXPORT).unwrap();

    let (report, printed) = ExpenseImportUtil::default().validate_file(&path).unwrap();
    assert_eq!(report.valid_count, 3);
    assert!(printed.contains("CSV Validation Results:"));
    assert!(printed.contains("fractic-expense-tracker-import-test.csv"));

    std::fs::remove_file(&path).unwrap();
    assert!(ExpenseImportUtil::default().validate_file(&path).is_err());
}

#[test]
fn validates_converter_output_with_blank_header_rows() {
    // The spreadsheet converter writes its three header rows as blank lines.
    let export = "\n\n\n\
2024-04-01,Metro,10.00,,Groceries,14,Debit
2024-04-02,Esso,(40.00),,Gas,14,VISA

2024-04-04,Hydro,inf,,Utilities,14,Cheque
";
    let report = ExpenseImportUtil::default().validate_string(export).unwrap();
    assert_eq!(report.valid_count, 2);
    assert_eq!(report.errors.len(), 2);

    assert_eq!(report.errors[0].row, 5);
    assert_eq!(
        report.errors[0].issues,
        vec![ImportIssue::InvalidAmount("(40.00)".into())]
    );
    assert_eq!(report.errors[1].row, 6);
    assert_eq!(
        report.errors[1].issues,
        vec![ImportIssue::NotEnoughColumns { has: 0 }]
    );
}
