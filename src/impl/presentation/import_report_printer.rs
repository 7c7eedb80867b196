use crate::entities::{ImportIssue, ImportReport, ImportRowData};

const RULE_WIDTH: usize = 80;
const WRAP_WIDTH: usize = 78;

impl std::fmt::Display for ImportIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportIssue::NotEnoughColumns { has } => {
                write!(f, "Not enough columns (has {}, needs 7)", has)
            }
            ImportIssue::MissingDate => write!(f, "Missing Date"),
            ImportIssue::MissingAmount => write!(f, "Missing Amount"),
            ImportIssue::InvalidAmount(raw) => write!(f, "Invalid Amount: \"{}\"", raw),
            ImportIssue::MissingType => write!(f, "Missing Type"),
            ImportIssue::InvalidType(raw) => write!(f, "Invalid Type: \"{}\"", raw),
            ImportIssue::MissingMethod => write!(f, "Missing Method"),
            ImportIssue::InvalidMethod(raw) => write!(f, "Invalid Method: \"{}\"", raw),
        }
    }
}

pub(crate) struct ImportReportPrinter;

impl ImportReportPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_report(&self, report: &ImportReport, source: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut output = String::new();

        output.push_str(&format!("{}\nCSV Validation Results: {}\n{}\n\n", rule, source, rule));
        output.push_str(&format!("Valid rows: {}\n", report.valid_count));
        output.push_str(&format!("Invalid rows: {}\n\n", report.invalid_count()));

        if report.is_clean() {
            output.push_str("No errors found! All rows are valid.\n");
            return output;
        }

        output.push_str(&format!("{}\nERRORS:\n{}\n\n", rule, rule));
        for (i, error) in report.errors.iter().enumerate() {
            output.push_str(&format!("Error #{} - Row {}:\n", i + 1, error.row));

            let issues = error
                .issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            let wrap_options = textwrap::Options::new(WRAP_WIDTH)
                .initial_indent("  Issue: ")
                .subsequent_indent("         ");
            for line in textwrap::wrap(&issues, wrap_options) {
                output.push_str(&line);
                output.push('\n');
            }

            match &error.data {
                ImportRowData::Parsed(row) => {
                    output.push_str("  Data:\n");
                    for (key, value) in [
                        ("Date", &row.date),
                        ("Place", &row.place),
                        ("Amount", &row.amount),
                        ("Notes", &row.notes),
                        ("Type", &row.expense_type),
                        ("Week", &row.week),
                        ("Method", &row.method),
                    ] {
                        let value = if value.is_empty() { "(empty)" } else { value.as_str() };
                        output.push_str(&format!("    {}: {}\n", key, value));
                    }
                }
                ImportRowData::Raw(fields) => {
                    output.push_str(&format!("  Raw: {:?}\n", fields));
                }
            }
            output.push('\n');
        }
        output
    }
}
