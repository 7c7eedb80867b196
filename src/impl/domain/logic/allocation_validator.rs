use tracing::trace;

use crate::entities::{AllocationContext, AllocationSummary, PersonAllocationEntry, ValidationFailure};

use super::utils::within_tolerance;

/// Computes totals and a validity verdict for the given per-person entries.
///
/// Standard expenses reconcile the entries' `amount` against the expense
/// amount. Insurance-eligible expenses additionally reconcile the entries'
/// `original_amount` against the allocation base, and cap every person's
/// out-of-pocket share at their original-cost share.
///
/// Invalid allocations are not errors: they are reported through
/// `is_valid = false` and, once the user has started allocating, a
/// `ValidationFailure` describing the first problem found.
pub fn validate_allocation(
    entries: &[PersonAllocationEntry],
    context: &AllocationContext,
) -> AllocationSummary {
    let summary = if context.insurance_eligible {
        validate_insurance(entries, context)
    } else {
        validate_standard(entries, context)
    };
    trace!(
        entries = entries.len(),
        insurance_eligible = context.insurance_eligible,
        total_allocated = summary.total_allocated,
        total_original_allocated = summary.total_original_allocated,
        is_valid = summary.is_valid,
        "validated allocation"
    );
    summary
}

fn validate_standard(
    entries: &[PersonAllocationEntry],
    context: &AllocationContext,
) -> AllocationSummary {
    let expense = context.expense_amount;
    let total: f64 = entries.iter().map(|e| e.amount).sum();

    let valid_amount = within_tolerance(total, expense);
    let amount_required = expense != 0.0;
    let all_positive = entries
        .iter()
        .all(|e| is_acceptable_share(e.amount, amount_required));
    let has_negative = entries.iter().any(|e| e.amount < 0.0);

    let error = if !valid_amount && total > expense {
        Some(ValidationFailure::ExceedsExpense {
            allocated: total,
            expense,
        })
    } else if !valid_amount && total < expense && total > 0.0 {
        Some(ValidationFailure::LessThanExpense {
            allocated: total,
            expense,
        })
    } else if !all_positive && (total > 0.0 || has_negative) {
        Some(ValidationFailure::NonPositiveAmount)
    } else {
        None
    };

    AllocationSummary {
        total_allocated: total,
        total_original_allocated: 0.0,
        is_valid: valid_amount && all_positive,
        error,
        currency: context.currency,
    }
}

fn validate_insurance(
    entries: &[PersonAllocationEntry],
    context: &AllocationContext,
) -> AllocationSummary {
    let expense = context.expense_amount;
    let base = context.allocation_base();
    let original = |e: &PersonAllocationEntry| e.original_amount.unwrap_or(0.0);

    let total: f64 = entries.iter().map(|e| e.amount).sum();
    let total_original: f64 = entries.iter().map(original).sum();

    let valid_original = within_tolerance(total_original, base);
    let valid_amount = within_tolerance(total, expense);
    let amount_required = expense != 0.0;
    let original_required = base != 0.0;
    let all_positive = entries.iter().all(|e| {
        is_acceptable_share(e.amount, amount_required)
            && is_acceptable_share(original(e), original_required)
    });
    let has_negative = entries
        .iter()
        .any(|e| e.amount < 0.0 || original(e) < 0.0);
    let amounts_consistent = entries.iter().all(|e| e.amount <= original(e));

    let error = if !valid_original && total_original > base {
        Some(ValidationFailure::ExceedsOriginalCost {
            allocated: total_original,
            original_cost: base,
        })
    } else if !valid_original && total_original < base && total_original > 0.0 {
        Some(ValidationFailure::LessThanOriginalCost {
            allocated: total_original,
            original_cost: base,
        })
    } else if !valid_amount && total > expense {
        Some(ValidationFailure::ExceedsOutOfPocket {
            allocated: total,
            out_of_pocket: expense,
        })
    } else if !valid_amount && total < expense && total > 0.0 {
        Some(ValidationFailure::LessThanOutOfPocket {
            allocated: total,
            out_of_pocket: expense,
        })
    } else if !amounts_consistent {
        Some(ValidationFailure::OutOfPocketExceedsOriginalCost)
    } else if !all_positive && (total > 0.0 || total_original > 0.0 || has_negative) {
        Some(ValidationFailure::NonPositiveAmount)
    } else {
        None
    };

    AllocationSummary {
        total_allocated: total,
        total_original_allocated: total_original,
        is_valid: valid_original && valid_amount && all_positive && amounts_consistent,
        error,
        currency: context.currency,
    }
}

/// Shares must be strictly positive while there is something to allocate.
/// When the basis is exactly zero the only acceptable share is zero, so an
/// insurance expense reimbursed in full (out-of-pocket 0) is allocated with
/// zero out-of-pocket shares and positive original-cost shares.
fn is_acceptable_share(share: f64, positive_required: bool) -> bool {
    if positive_required {
        share > 0.0
    } else {
        share == 0.0
    }
}
