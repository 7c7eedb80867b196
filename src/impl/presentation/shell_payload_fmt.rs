use fractic_server_error::ServerError;
use serde_derive::Serialize;

use crate::{
    entities::{AllocationSummary, SavedAllocation},
    errors::PayloadSerializationError,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AllocationSummaryPayload {
    total_allocated: f64,
    total_original_allocated: f64,
    is_valid: bool,
    error_message: String,
}

/// `{"totalAllocated", "totalOriginalAllocated", "isValid", "errorMessage"}`
pub(crate) fn summary_json(summary: &AllocationSummary) -> Result<String, ServerError> {
    let payload = AllocationSummaryPayload {
        total_allocated: summary.total_allocated,
        total_original_allocated: summary.total_original_allocated,
        is_valid: summary.is_valid,
        error_message: summary.error_message(),
    };
    serde_json::to_string(&payload)
        .map_err(|e| PayloadSerializationError::with_debug("AllocationSummary", &e))
}

/// `[{"id", "name", "amount", "originalAmount"}, ...]`
pub(crate) fn saved_allocations_json(saved: &[SavedAllocation]) -> Result<String, ServerError> {
    serde_json::to_string(saved)
        .map_err(|e| PayloadSerializationError::with_debug("SavedAllocation", &e))
}

#[cfg(test)]
mod tests {
    use iso_currency::Currency;

    use super::*;
    use crate::entities::PersonId;

    #[test]
    fn saved_allocation_shape() {
        let saved = vec![
            SavedAllocation {
                id: PersonId::Numeric(1),
                name: "A".into(),
                amount: 50.0,
                original_amount: None,
            },
            SavedAllocation {
                id: PersonId::Text("b".into()),
                name: "B".into(),
                amount: 50.0,
                original_amount: Some(70.0),
            },
        ];
        assert_eq!(
            saved_allocations_json(&saved).unwrap(),
            r#"[{"id":1,"name":"A","amount":50.0,"originalAmount":null},{"id":"b","name":"B","amount":50.0,"originalAmount":70.0}]"#
        );
    }

    #[test]
    fn summary_shape() {
        let summary = AllocationSummary {
            total_allocated: 100.0,
            total_original_allocated: 0.0,
            is_valid: true,
            error: None,
            currency: Currency::CAD,
        };
        assert_eq!(
            summary_json(&summary).unwrap(),
            r#"{"totalAllocated":100.0,"totalOriginalAllocated":0.0,"isValid":true,"errorMessage":""}"#
        );
    }
}
