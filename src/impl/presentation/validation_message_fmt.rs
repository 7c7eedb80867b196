use iso_currency::Currency;

use crate::entities::{AllocationSummary, ValidationFailure};

use super::utils::format_amount;

impl ValidationFailure {
    pub fn message(&self, currency: Currency) -> String {
        let fmt = |amount: f64| format_amount(amount, currency);
        match self {
            ValidationFailure::ExceedsExpense { allocated, expense } => format!(
                "Total allocated ({}) exceeds the expense amount ({}).",
                fmt(*allocated),
                fmt(*expense)
            ),
            ValidationFailure::LessThanExpense { allocated, expense } => format!(
                "Total allocated ({}) is less than the expense amount ({}).",
                fmt(*allocated),
                fmt(*expense)
            ),
            ValidationFailure::ExceedsOriginalCost {
                allocated,
                original_cost,
            } => format!(
                "Total original cost allocated ({}) exceeds the original cost ({}).",
                fmt(*allocated),
                fmt(*original_cost)
            ),
            ValidationFailure::LessThanOriginalCost {
                allocated,
                original_cost,
            } => format!(
                "Total original cost allocated ({}) is less than the original cost ({}).",
                fmt(*allocated),
                fmt(*original_cost)
            ),
            ValidationFailure::ExceedsOutOfPocket {
                allocated,
                out_of_pocket,
            } => format!(
                "Total out-of-pocket allocated ({}) exceeds the out-of-pocket amount ({}).",
                fmt(*allocated),
                fmt(*out_of_pocket)
            ),
            ValidationFailure::LessThanOutOfPocket {
                allocated,
                out_of_pocket,
            } => format!(
                "Total out-of-pocket allocated ({}) is less than the out-of-pocket amount ({}).",
                fmt(*allocated),
                fmt(*out_of_pocket)
            ),
            ValidationFailure::OutOfPocketExceedsOriginalCost => {
                "Out-of-pocket cannot exceed original cost for any person.".to_string()
            }
            ValidationFailure::NonPositiveAmount => {
                "All amounts must be greater than zero.".to_string()
            }
        }
    }
}

impl AllocationSummary {
    /// Human-readable reason the allocation is not valid yet. Empty when
    /// there is nothing to report.
    pub fn error_message(&self) -> String {
        self.error
            .as_ref()
            .map(|e| e.message(self.currency))
            .unwrap_or_default()
    }
}
