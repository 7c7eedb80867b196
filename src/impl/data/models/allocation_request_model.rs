use serde_derive::Deserialize;

use crate::entities::{
    AllocationContext, AllocationRequest, Expense, PersonId, SelectedPerson, DEFAULT_CURRENCY,
};

use super::iso_currency_model::IsoCurrencyModel;

/// What the shell sends when the allocation modal opens.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AllocationRequestModel {
    pub expense: ExpenseModel,
    pub selected_people: Vec<SelectedPersonModel>,
    #[serde(default)]
    pub insurance_eligible: bool,
    #[serde(default)]
    pub original_cost: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExpenseModel {
    pub amount: f64,
    #[serde(default)]
    pub original_cost: Option<f64>,
    #[serde(default)]
    pub currency: Option<IsoCurrencyModel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SelectedPersonModel {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub original_amount: Option<f64>,
}

impl Into<Expense> for ExpenseModel {
    fn into(self) -> Expense {
        Expense {
            amount: self.amount,
            original_cost: self.original_cost,
            currency: self.currency.map(Into::into).unwrap_or(DEFAULT_CURRENCY),
        }
    }
}

impl Into<SelectedPerson> for SelectedPersonModel {
    fn into(self) -> SelectedPerson {
        SelectedPerson {
            id: self.id,
            name: self.name,
            amount: self.amount,
            original_amount: self.original_amount,
        }
    }
}

impl Into<AllocationRequest> for AllocationRequestModel {
    fn into(self) -> AllocationRequest {
        let expense: Expense = self.expense.into();
        let context = if self.insurance_eligible {
            AllocationContext::insurance(&expense, self.original_cost)
        } else {
            AllocationContext::standard(&expense)
        };
        AllocationRequest {
            context,
            people: self.selected_people.into_iter().map(Into::into).collect(),
        }
    }
}
