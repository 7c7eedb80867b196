// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod allocation_request_json_datasource;
        pub(crate) mod expense_import_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod allocation_request_model;
        pub(crate) mod amount_input_model;
        pub(crate) mod import_rules_model;
        pub(crate) mod iso_currency_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod inputs_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod allocation_summary;
        pub(crate) mod expense;
        pub(crate) mod expense_import;
        pub(crate) mod person;
        pub(crate) mod person_allocation;
        pub(crate) mod remainder_policy;
    }
    pub(crate) mod logic {
        pub(crate) mod allocation_validator;
        pub(crate) mod equal_split;
        pub(crate) mod import_validator;
        pub(crate) mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod inputs_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod allocation_session;
        pub(crate) mod import_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod import_report_printer;
    pub(crate) mod shell_payload_fmt;
    pub(crate) mod utils;
    pub(crate) mod validation_message_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::allocation_summary::*;
        pub use crate::domain::entities::expense::*;
        pub use crate::domain::entities::expense_import::*;
        pub use crate::domain::entities::person::*;
        pub use crate::domain::entities::person_allocation::*;
        pub use crate::domain::entities::remainder_policy::*;
    }

    pub mod logic {
        pub use crate::domain::logic::allocation_validator::validate_allocation;
        pub use crate::domain::logic::equal_split::split_equally;
    }

    pub mod session {
        pub use crate::domain::usecases::allocation_session::AllocationSession;
    }
}
