use std::fs;

use fractic_server_error::ServerError;

use crate::{
    entities::{
        ExpenseImportRecord, ExpenseImportRow, ImportRowData, EXPENSE_IMPORT_COLUMNS,
        EXPENSE_IMPORT_HEADER_ROWS,
    },
    errors::{InvalidCsv, ReadError},
};

pub(crate) trait ExpenseImportCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<ExpenseImportRecord>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<ExpenseImportRecord>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct ExpenseImportCsvDatasourceImpl;

impl ExpenseImportCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ExpenseImportCsvDatasource for ExpenseImportCsvDatasourceImpl {
    /// Works line by line so that blank lines count as rows: spreadsheet
    /// exports write their header rows as blank lines, and a blank data line
    /// is reported rather than silently dropped.
    fn from_string(&self, s: &str) -> Result<Vec<ExpenseImportRecord>, ServerError> {
        s.lines()
            .enumerate()
            .skip(EXPENSE_IMPORT_HEADER_ROWS)
            .map(|(i, line)| {
                let row = (i + 1) as u64;
                let fields = parse_line(line)?;
                if fields.len() < EXPENSE_IMPORT_COLUMNS {
                    return Ok(ExpenseImportRecord {
                        row,
                        data: ImportRowData::Raw(fields),
                    });
                }

                // Extract from CSV record.
                let field = |i: usize| fields[i].trim().to_string();

                // Build.
                Ok(ExpenseImportRecord {
                    row,
                    data: ImportRowData::Parsed(ExpenseImportRow {
                        date: field(0),
                        place: field(1),
                        amount: field(2),
                        notes: field(3),
                        expense_type: field(4),
                        week: field(5),
                        method: field(6),
                    }),
                })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<ExpenseImportRecord>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}

/// Splits a single CSV line into its raw fields. A blank line has no fields.
fn parse_line(line: &str) -> Result<Vec<String>, ServerError> {
    if line.is_empty() {
        return Ok(vec![]);
    }
    let mut record = csv::StringRecord::new();
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes())
        .read_record(&mut record)
        .map_err(|e| InvalidCsv::with_debug(&e))?;
    Ok(record.iter().map(String::from).collect())
}
