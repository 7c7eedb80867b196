use fractic_server_error::ServerError;

use crate::entities::{AllocationRequest, ExpenseImportRecord};

pub trait InputsRepository {
    fn allocation_request_from_string(&self, json: &str) -> Result<AllocationRequest, ServerError>;

    fn expense_import_from_string(&self, csv: &str) -> Result<Vec<ExpenseImportRecord>, ServerError>;

    fn expense_import_from_file<P>(&self, csv: P) -> Result<Vec<ExpenseImportRecord>, ServerError>
    where
        P: AsRef<std::path::Path>;
}
