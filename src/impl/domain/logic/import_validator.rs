use crate::entities::{ExpenseImportRow, ImportIssue, ImportRules};

/// Checks a single import row against the rules. Returns every problem found,
/// in column order; an empty vector means the row can be imported.
pub(crate) fn validate_import_row(row: &ExpenseImportRow, rules: &ImportRules) -> Vec<ImportIssue> {
    let mut issues = Vec::new();

    if row.date.is_empty() {
        issues.push(ImportIssue::MissingDate);
    }

    if row.amount.is_empty() {
        issues.push(ImportIssue::MissingAmount);
    } else if !is_spreadsheet_number(&row.amount) {
        issues.push(ImportIssue::InvalidAmount(row.amount.clone()));
    }

    if row.expense_type.is_empty() {
        issues.push(ImportIssue::MissingType);
    } else if !rules.is_known_category(&row.expense_type) {
        issues.push(ImportIssue::InvalidType(row.expense_type.clone()));
    }

    if row.method.is_empty() {
        issues.push(ImportIssue::MissingMethod);
    } else if !rules.is_known_payment_method(&row.method) {
        issues.push(ImportIssue::InvalidMethod(row.method.clone()));
    }

    issues
}

/// Spreadsheet exports only decorate amounts with a currency sign and
/// thousands separators. Anything else must be a plain float literal, which
/// includes `inf` and `nan` but not accounting-style `(12.50)`.
fn is_spreadsheet_number(raw: &str) -> bool {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned.trim().parse::<f64>().is_ok()
}
