use fractic_server_error::ServerError;

use crate::{
    data::models::allocation_request_model::AllocationRequestModel, entities::AllocationRequest,
    errors::InvalidJson,
};

pub(crate) trait AllocationRequestJsonDatasource {
    fn from_string(&self, s: &str) -> Result<AllocationRequest, ServerError>;
}

pub(crate) struct AllocationRequestJsonDatasourceImpl;

impl AllocationRequestJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl AllocationRequestJsonDatasource for AllocationRequestJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<AllocationRequest, ServerError> {
        let model: AllocationRequestModel = serde_json::from_str(s)
            .map_err(|e| InvalidJson::with_debug("AllocationRequest", &e))?;
        Ok(model.into())
    }
}

#[cfg(test)]
mod tests {
    use iso_currency::Currency;

    use super::*;
    use crate::entities::PersonId;

    #[test]
    fn parses_insurance_request() {
        let request = AllocationRequestJsonDatasourceImpl::new()
            .from_string(
                r#"{
                    "expense": {"amount": 40, "originalCost": 100, "currency": "usd"},
                    "selectedPeople": [
                        {"id": 1, "name": "A", "amount": 20, "originalAmount": 60},
                        {"id": "b-2", "name": "B"}
                    ],
                    "insuranceEligible": true
                }"#,
            )
            .unwrap();
        assert!(request.context.insurance_eligible);
        assert_eq!(request.context.allocation_base(), 100.0);
        assert_eq!(request.context.currency, Currency::USD);
        assert_eq!(request.people[0].id, PersonId::Numeric(1));
        assert_eq!(request.people[0].original_amount, Some(60.0));
        assert_eq!(request.people[1].id, PersonId::Text("b-2".into()));
        assert_eq!(request.people[1].amount, None);
    }

    #[test]
    fn standard_request_defaults() {
        let request = AllocationRequestJsonDatasourceImpl::new()
            .from_string(r#"{"expense": {"amount": 12.5}, "selectedPeople": []}"#)
            .unwrap();
        assert!(!request.context.insurance_eligible);
        assert_eq!(request.context.currency, Currency::CAD);
        assert!(request.people.is_empty());
    }

    #[test]
    fn rejects_bad_input() {
        let datasource = AllocationRequestJsonDatasourceImpl::new();
        assert!(datasource.from_string("{").is_err());
        assert!(datasource
            .from_string(r#"{"expense": {"amount": 1, "currency": "XYZ"}, "selectedPeople": []}"#)
            .is_err());
    }
}
