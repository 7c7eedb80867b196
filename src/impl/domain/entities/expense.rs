use iso_currency::Currency;

use super::person::SelectedPerson;

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Out-of-pocket total to allocate.
    pub amount: f64,
    /// Pre-reimbursement cost, only set for insurance-eligible expenses.
    pub original_cost: Option<f64>,
    pub currency: Currency,
}

/// Everything the validator needs to know about the expense being split.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationContext {
    pub expense_amount: f64,
    pub insurance_eligible: bool,
    pub allocation_base: Option<f64>,
    pub currency: Currency,
}

/// Expense context and selected people, as supplied by the shell when the
/// allocation is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationRequest {
    pub context: AllocationContext,
    pub people: Vec<SelectedPerson>,
}

// --

pub const DEFAULT_CURRENCY: Currency = Currency::CAD;

impl Expense {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            original_cost: None,
            currency: DEFAULT_CURRENCY,
        }
    }

    pub fn with_original_cost(mut self, original_cost: f64) -> Self {
        self.original_cost = Some(original_cost);
        self
    }
}

impl AllocationContext {
    pub fn standard(expense: &Expense) -> Self {
        Self {
            expense_amount: expense.amount,
            insurance_eligible: false,
            allocation_base: expense.original_cost,
            currency: expense.currency,
        }
    }

    pub fn insurance(expense: &Expense, original_cost: Option<f64>) -> Self {
        Self {
            expense_amount: expense.amount,
            insurance_eligible: true,
            allocation_base: original_cost.or(expense.original_cost),
            currency: expense.currency,
        }
    }

    /// Original-cost basis the per-person original amounts must add up to.
    /// Falls back to the expense amount when no original cost is known.
    pub fn allocation_base(&self) -> f64 {
        self.allocation_base.unwrap_or(self.expense_amount)
    }
}
