/// Categories and payment methods an imported expense row may use.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRules {
    pub categories: Vec<String>,
    pub payment_methods: Vec<String>,
}

/// One data row of an expense spreadsheet export, values trimmed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseImportRow {
    pub date: String,
    pub place: String,
    pub amount: String,
    pub notes: String,
    pub expense_type: String,
    pub week: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportIssue {
    NotEnoughColumns { has: usize },
    MissingDate,
    MissingAmount,
    InvalidAmount(String),
    MissingType,
    InvalidType(String),
    MissingMethod,
    InvalidMethod(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportRowData {
    Parsed(ExpenseImportRow),
    /// Raw fields of a row too short to be split into columns.
    Raw(Vec<String>),
}

/// A data row as read from the file, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseImportRecord {
    pub row: u64,
    pub data: ImportRowData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportRowError {
    /// Line number in the source file.
    pub row: u64,
    pub issues: Vec<ImportIssue>,
    pub data: ImportRowData,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportReport {
    pub valid_count: usize,
    pub errors: Vec<ImportRowError>,
}

// --

pub const EXPENSE_IMPORT_COLUMNS: usize = 7;
pub const EXPENSE_IMPORT_HEADER_ROWS: usize = 3;

const DEFAULT_CATEGORIES: [&str; 14] = [
    "Housing",
    "Utilities",
    "Groceries",
    "Dining Out",
    "Insurance",
    "Gas",
    "Vehicle Maintenance",
    "Entertainment",
    "Subscriptions",
    "Recreation Activities",
    "Pet Care",
    "Tax - Medical",
    "Tax - Donation",
    "Other",
];

const DEFAULT_PAYMENT_METHODS: [&str; 7] =
    ["Cash", "Debit", "Cheque", "CIBC MC", "PCF MC", "WS VISA", "VISA"];

impl Default for ImportRules {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            payment_methods: DEFAULT_PAYMENT_METHODS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ImportRules {
    pub fn is_known_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn is_known_payment_method(&self, method: &str) -> bool {
        self.payment_methods.iter().any(|m| m == method)
    }
}

impl ImportReport {
    pub fn invalid_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
