use fractic_server_error::{define_client_error, define_internal_error};

use crate::entities::PersonId;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidJson, "Invalid {json_type} (invalid JSON format).", { json_type: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });

// Allocation-related.
define_client_error!(
    InvalidExpenseAmount,
    "Invalid {field} ({amount}). Must be a finite amount greater than or equal to zero.",
    { field: &str, amount: f64 }
);
define_client_error!(
    DuplicatePerson,
    "Person '{person_id}' is selected more than once.",
    { person_id: &PersonId }
);
define_client_error!(
    UnknownPerson,
    "Person '{person_id}' is not part of this allocation.",
    { person_id: &PersonId }
);
define_client_error!(
    AllocationNotValid,
    "Allocation cannot be saved: {details}",
    { details: &str }
);

// Presentation-related.
define_internal_error!(
    PayloadSerializationError,
    "Error serializing {payload_type} payload.",
    { payload_type: &str }
);
