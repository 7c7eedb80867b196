use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        allocation_request_json_datasource::{
            AllocationRequestJsonDatasource, AllocationRequestJsonDatasourceImpl,
        },
        expense_import_csv_datasource::{
            ExpenseImportCsvDatasource, ExpenseImportCsvDatasourceImpl,
        },
    },
    domain::repositories::inputs_repository::InputsRepository,
    entities::{AllocationRequest, ExpenseImportRecord},
};

pub(crate) struct InputsRepositoryImpl<
    DS1 = AllocationRequestJsonDatasourceImpl, // Default.
    DS2 = ExpenseImportCsvDatasourceImpl,      // Default.
> where
    DS1: AllocationRequestJsonDatasource,
    DS2: ExpenseImportCsvDatasource,
{
    allocation_request_datasource: DS1,
    expense_import_datasource: DS2,
}

impl<DS1, DS2> InputsRepository for InputsRepositoryImpl<DS1, DS2>
where
    DS1: AllocationRequestJsonDatasource,
    DS2: ExpenseImportCsvDatasource,
{
    fn allocation_request_from_string(&self, json: &str) -> Result<AllocationRequest, ServerError> {
        self.allocation_request_datasource.from_string(json)
    }

    fn expense_import_from_string(&self, csv: &str) -> Result<Vec<ExpenseImportRecord>, ServerError> {
        self.expense_import_datasource.from_string(csv)
    }

    fn expense_import_from_file<P>(&self, csv: P) -> Result<Vec<ExpenseImportRecord>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.expense_import_datasource.from_file(csv)
    }
}

impl InputsRepositoryImpl {
    pub(crate) fn new() -> Self {
        InputsRepositoryImpl {
            allocation_request_datasource: AllocationRequestJsonDatasourceImpl::new(),
            expense_import_datasource: ExpenseImportCsvDatasourceImpl::new(),
        }
    }
}
