use iso_currency::Currency;

/// Why an allocation does not (yet) reconcile with its expense. Variants are
/// listed in the order they take precedence.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationFailure {
    // Standard mode.
    ExceedsExpense { allocated: f64, expense: f64 },
    LessThanExpense { allocated: f64, expense: f64 },

    // Insurance mode.
    ExceedsOriginalCost { allocated: f64, original_cost: f64 },
    LessThanOriginalCost { allocated: f64, original_cost: f64 },
    ExceedsOutOfPocket { allocated: f64, out_of_pocket: f64 },
    LessThanOutOfPocket { allocated: f64, out_of_pocket: f64 },
    OutOfPocketExceedsOriginalCost,

    // Both modes.
    NonPositiveAmount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSummary {
    pub total_allocated: f64,
    pub total_original_allocated: f64,
    pub is_valid: bool,
    pub error: Option<ValidationFailure>,
    pub currency: Currency,
}
