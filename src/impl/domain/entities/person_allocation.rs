use serde_derive::Serialize;

use super::person::{PersonId, SelectedPerson};

/// One person's share of an expense while it is being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonAllocationEntry {
    pub person_id: PersonId,
    pub person_name: String,
    /// Share of the out-of-pocket total.
    pub amount: f64,
    /// Share of the original cost. Only meaningful for insurance-eligible
    /// expenses.
    pub original_amount: Option<f64>,
}

/// Finalized allocation handed back to the shell on save.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAllocation {
    pub id: PersonId,
    pub name: String,
    pub amount: f64,
    pub original_amount: Option<f64>,
}

// --

impl PersonAllocationEntry {
    pub fn new(person_id: impl Into<PersonId>, person_name: impl Into<String>, amount: f64) -> Self {
        Self {
            person_id: person_id.into(),
            person_name: person_name.into(),
            amount,
            original_amount: None,
        }
    }

    pub fn with_original_amount(mut self, original_amount: f64) -> Self {
        self.original_amount = Some(original_amount);
        self
    }
}

impl From<&SelectedPerson> for PersonAllocationEntry {
    fn from(person: &SelectedPerson) -> Self {
        Self {
            person_id: person.id.clone(),
            person_name: person.name.clone(),
            amount: person.amount.unwrap_or(0.0),
            original_amount: Some(person.original_amount.unwrap_or(0.0)),
        }
    }
}
