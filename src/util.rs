use fractic_server_error::ServerError;

use crate::{
    data::{
        models::import_rules_model::ImportRulesModel,
        repositories::inputs_repository_impl::InputsRepositoryImpl,
    },
    domain::{
        repositories::inputs_repository::InputsRepository as _,
        usecases::import_usecase::{ImportUsecase as _, ImportUsecaseImpl},
    },
    entities::{ImportReport, ImportRules},
    errors::InvalidRon,
    presentation::{
        import_report_printer::ImportReportPrinter,
        shell_payload_fmt::{saved_allocations_json, summary_json},
    },
    session::AllocationSession,
};

pub type Payload = String;
pub type Report = String;

/// Entry point for the shell's allocation modal: opens sessions from the JSON
/// the shell sends and turns results back into JSON.
pub struct AllocationUtil {
    inputs_repository: InputsRepositoryImpl,
}

impl AllocationUtil {
    pub fn new() -> Self {
        Self {
            inputs_repository: InputsRepositoryImpl::new(),
        }
    }

    pub fn open_from_json(&self, request_json: &str) -> Result<AllocationSession, ServerError> {
        let request = self
            .inputs_repository
            .allocation_request_from_string(request_json)?;
        AllocationSession::open(request.context, &request.people)
    }

    pub fn summary_to_json(&self, session: &AllocationSession) -> Result<Payload, ServerError> {
        summary_json(&session.summary())
    }

    pub fn save_to_json(&self, session: AllocationSession) -> Result<Payload, ServerError> {
        saved_allocations_json(&session.save()?)
    }
}

/// Checks exported expense spreadsheets before they are imported.
pub struct ExpenseImportUtil {
    rules: ImportRules,
    import_usecase: ImportUsecaseImpl,
    printer: ImportReportPrinter,
}

impl ExpenseImportUtil {
    pub fn new(rules: ImportRules) -> Self {
        Self {
            rules,
            import_usecase: ImportUsecaseImpl::new(),
            printer: ImportReportPrinter::new(),
        }
    }

    /// Rules in RON form: `(categories: [...], payment_methods: [...])`.
    pub fn with_ron_rules(rules_ron: &str) -> Result<Self, ServerError> {
        let rules: ImportRulesModel =
            ron::from_str(rules_ron).map_err(|e| InvalidRon::with_debug("ImportRules", &e))?;
        Ok(Self::new(rules.into()))
    }

    pub fn rules(&self) -> &ImportRules {
        &self.rules
    }

    pub fn validate_string(&self, csv: &str) -> Result<ImportReport, ServerError> {
        self.import_usecase.validate_string(csv, &self.rules)
    }

    pub fn validate_file<T>(&self, csv: T) -> Result<(ImportReport, Report), ServerError>
    where
        T: AsRef<std::path::Path>,
    {
        let source = csv.as_ref().display().to_string();
        let report = self.import_usecase.validate_file(csv, &self.rules)?;
        let printed = self.printer.print_report(&report, &source);
        Ok((report, printed))
    }

    pub fn print_report(&self, report: &ImportReport, source: &str) -> Report {
        self.printer.print_report(report, source)
    }
}

impl Default for ExpenseImportUtil {
    fn default() -> Self {
        Self::new(ImportRules::default())
    }
}
