use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::repositories::inputs_repository_impl::InputsRepositoryImpl,
    domain::{
        logic::import_validator::validate_import_row,
        repositories::inputs_repository::InputsRepository,
    },
    entities::{
        ExpenseImportRecord, ImportIssue, ImportReport, ImportRowData, ImportRowError,
        ImportRules,
    },
};

pub trait ImportUsecase {
    fn validate_string(&self, csv: &str, rules: &ImportRules) -> Result<ImportReport, ServerError>;

    fn validate_file<P>(&self, csv: P, rules: &ImportRules) -> Result<ImportReport, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct ImportUsecaseImpl<
    R1 = InputsRepositoryImpl, // Default.
> where
    R1: InputsRepository,
{
    inputs_repository: R1,
}

impl<R1> ImportUsecase for ImportUsecaseImpl<R1>
where
    R1: InputsRepository,
{
    fn validate_string(&self, csv: &str, rules: &ImportRules) -> Result<ImportReport, ServerError> {
        let records = self.inputs_repository.expense_import_from_string(csv)?;
        Ok(build_report(records, rules))
    }

    fn validate_file<P>(&self, csv: P, rules: &ImportRules) -> Result<ImportReport, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let records = self.inputs_repository.expense_import_from_file(csv)?;
        Ok(build_report(records, rules))
    }
}

impl ImportUsecaseImpl {
    pub(crate) fn new() -> Self {
        ImportUsecaseImpl {
            inputs_repository: InputsRepositoryImpl::new(),
        }
    }
}

fn build_report(records: Vec<ExpenseImportRecord>, rules: &ImportRules) -> ImportReport {
    let mut report = ImportReport::default();
    for record in records {
        let issues = match &record.data {
            ImportRowData::Raw(fields) => vec![ImportIssue::NotEnoughColumns { has: fields.len() }],
            ImportRowData::Parsed(row) => validate_import_row(row, rules),
        };
        if issues.is_empty() {
            report.valid_count += 1;
        } else {
            report.errors.push(ImportRowError {
                row: record.row,
                issues,
                data: record.data,
            });
        }
    }
    info!(
        valid = report.valid_count,
        invalid = report.invalid_count(),
        "validated expense import"
    );
    report
}
