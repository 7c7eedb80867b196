use std::{collections::HashSet, str::FromStr as _};

use fractic_server_error::ServerError;
use tracing::{debug, info, warn};

use crate::{
    data::models::amount_input_model::AmountInputModel,
    domain::logic::{allocation_validator::validate_allocation, equal_split::split_equally},
    entities::{
        AllocationContext, AllocationSummary, PersonAllocationEntry, PersonId, RemainderPolicy,
        SavedAllocation, SelectedPerson,
    },
    errors::{AllocationNotValid, DuplicatePerson, InvalidAmount, InvalidExpenseAmount, UnknownPerson},
};

/// Per-person allocation of one expense while the shell is editing it.
///
/// The session owns the entries and recomputes the summary on request; it
/// never adds or removes people on its own. Dropping it discards the edits.
#[derive(Debug, Clone)]
pub struct AllocationSession {
    context: AllocationContext,
    entries: Vec<PersonAllocationEntry>,
}

impl AllocationSession {
    /// Seeds one entry per selected person from their previously saved
    /// amounts (zero when there are none).
    pub fn open(context: AllocationContext, people: &[SelectedPerson]) -> Result<Self, ServerError> {
        check_basis("expense amount", context.expense_amount)?;
        if context.insurance_eligible {
            check_basis("original cost", context.allocation_base())?;
        }
        let entries = seed_entries(people)?;
        debug!(
            people = entries.len(),
            insurance_eligible = context.insurance_eligible,
            "opened allocation"
        );
        Ok(Self { context, entries })
    }

    /// Re-initializes the entries after the selected-people list changed.
    pub fn reselect(&mut self, people: &[SelectedPerson]) -> Result<AllocationSummary, ServerError> {
        self.entries = seed_entries(people)?;
        debug!(people = self.entries.len(), "reselected people");
        Ok(self.summary())
    }

    pub fn context(&self) -> &AllocationContext {
        &self.context
    }

    pub fn entries(&self) -> &[PersonAllocationEntry] {
        &self.entries
    }

    pub fn summary(&self) -> AllocationSummary {
        validate_allocation(&self.entries, &self.context)
    }

    pub fn set_amount(
        &mut self,
        person_id: &PersonId,
        amount: f64,
    ) -> Result<AllocationSummary, ServerError> {
        check_share(amount)?;
        self.entry_mut(person_id)?.amount = amount;
        debug!(%person_id, amount, "edited amount");
        Ok(self.summary())
    }

    pub fn set_original_amount(
        &mut self,
        person_id: &PersonId,
        original_amount: f64,
    ) -> Result<AllocationSummary, ServerError> {
        check_share(original_amount)?;
        self.entry_mut(person_id)?.original_amount = Some(original_amount);
        debug!(%person_id, original_amount, "edited original amount");
        Ok(self.summary())
    }

    /// Same as `set_amount`, from the raw text of an input field.
    pub fn set_amount_input(
        &mut self,
        person_id: &PersonId,
        raw: &str,
    ) -> Result<AllocationSummary, ServerError> {
        let amount: AmountInputModel = AmountInputModel::from_str(raw)?;
        self.set_amount(person_id, amount.into())
    }

    /// Same as `set_original_amount`, from the raw text of an input field.
    pub fn set_original_amount_input(
        &mut self,
        person_id: &PersonId,
        raw: &str,
    ) -> Result<AllocationSummary, ServerError> {
        let original_amount: AmountInputModel = AmountInputModel::from_str(raw)?;
        self.set_original_amount(person_id, original_amount.into())
    }

    /// Divides the expense evenly across everyone. For insurance-eligible
    /// expenses the original cost is divided as well.
    pub fn split_equally(&mut self, policy: RemainderPolicy) -> AllocationSummary {
        let n = self.entries.len();
        let amounts = split_equally(self.context.expense_amount, n, policy);
        for (entry, amount) in self.entries.iter_mut().zip(amounts) {
            entry.amount = amount;
        }
        if self.context.insurance_eligible {
            let originals = split_equally(self.context.allocation_base(), n, policy);
            for (entry, original) in self.entries.iter_mut().zip(originals) {
                entry.original_amount = Some(original);
            }
        }
        debug!(people = n, ?policy, "split equally");
        self.summary()
    }

    /// Hands the allocation back to the caller. Only a valid allocation can
    /// be saved.
    pub fn save(self) -> Result<Vec<SavedAllocation>, ServerError> {
        let summary = self.summary();
        if !summary.is_valid {
            let message = summary.error_message();
            warn!(error = %message, "rejected invalid allocation");
            let details = if message.is_empty() {
                "amounts do not add up to the expense."
            } else {
                message.as_str()
            };
            return Err(AllocationNotValid::new(details));
        }
        let insurance_eligible = self.context.insurance_eligible;
        let saved: Vec<SavedAllocation> = self
            .entries
            .into_iter()
            .map(|e| SavedAllocation {
                id: e.person_id,
                name: e.person_name,
                amount: e.amount,
                original_amount: if insurance_eligible {
                    Some(e.original_amount.unwrap_or(0.0))
                } else {
                    None
                },
            })
            .collect();
        info!(
            people = saved.len(),
            total_allocated = summary.total_allocated,
            "saved allocation"
        );
        Ok(saved)
    }

    fn entry_mut(&mut self, person_id: &PersonId) -> Result<&mut PersonAllocationEntry, ServerError> {
        self.entries
            .iter_mut()
            .find(|e| &e.person_id == person_id)
            .ok_or_else(|| UnknownPerson::new(person_id))
    }
}

fn seed_entries(people: &[SelectedPerson]) -> Result<Vec<PersonAllocationEntry>, ServerError> {
    let mut seen = HashSet::new();
    people
        .iter()
        .map(|person| {
            if !seen.insert(&person.id) {
                return Err(DuplicatePerson::new(&person.id));
            }
            Ok(PersonAllocationEntry::from(person))
        })
        .collect()
}

fn check_basis(field: &str, amount: f64) -> Result<(), ServerError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(InvalidExpenseAmount::new(field, amount));
    }
    Ok(())
}

fn check_share(amount: f64) -> Result<(), ServerError> {
    if !amount.is_finite() {
        return Err(InvalidAmount::new(&amount.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Expense, ValidationFailure};

    fn people() -> Vec<SelectedPerson> {
        vec![SelectedPerson::new(1u64, "A"), SelectedPerson::new(2u64, "B")]
    }

    #[test]
    fn seeds_from_previous_amounts() {
        let people = vec![
            SelectedPerson::new(1u64, "A").with_amounts(30.0, None),
            SelectedPerson::new(2u64, "B"),
        ];
        let session =
            AllocationSession::open(AllocationContext::standard(&Expense::new(100.0)), &people)
                .unwrap();
        assert_eq!(session.entries()[0].amount, 30.0);
        assert_eq!(session.entries()[1].amount, 0.0);
        assert!(matches!(
            session.summary().error,
            Some(ValidationFailure::LessThanExpense { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_people_and_bad_expense() {
        let duplicated = vec![SelectedPerson::new(1u64, "A"), SelectedPerson::new(1u64, "A again")];
        let context = AllocationContext::standard(&Expense::new(10.0));
        assert!(AllocationSession::open(context.clone(), &duplicated).is_err());
        assert!(
            AllocationSession::open(AllocationContext::standard(&Expense::new(-1.0)), &people())
                .is_err()
        );
        assert!(AllocationSession::open(
            AllocationContext::standard(&Expense::new(f64::NAN)),
            &people()
        )
        .is_err());
    }

    #[test]
    fn edits_and_saves() {
        let mut session =
            AllocationSession::open(AllocationContext::standard(&Expense::new(100.0)), &people())
                .unwrap();
        let a = PersonId::Numeric(1);
        let b = PersonId::Numeric(2);
        assert!(!session.set_amount(&a, 70.0).unwrap().is_valid);
        assert!(session.set_amount_input(&b, "$30.00").unwrap().is_valid);
        assert!(session.set_amount(&PersonId::Numeric(3), 1.0).is_err());
        assert!(session.set_amount_input(&b, "thirty").is_err());

        let saved = session.save().unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].amount, 70.0);
        assert_eq!(saved[1].amount, 30.0);
        assert!(saved.iter().all(|s| s.original_amount.is_none()));
    }

    #[test]
    fn save_rejected_when_invalid() {
        let session =
            AllocationSession::open(AllocationContext::standard(&Expense::new(100.0)), &people())
                .unwrap();
        assert!(session.save().is_err());
    }

    #[test]
    fn insurance_split_and_save() {
        let expense = Expense::new(40.0).with_original_cost(100.0);
        let mut session =
            AllocationSession::open(AllocationContext::insurance(&expense, None), &people())
                .unwrap();
        let summary = session.split_equally(RemainderPolicy::default());
        assert!(summary.is_valid);
        assert_eq!(summary.total_original_allocated, 100.0);

        let saved = session.save().unwrap();
        assert_eq!(saved[0].amount, 20.0);
        assert_eq!(saved[0].original_amount, Some(50.0));
    }

    #[test]
    fn reselect_reseeds_entries() {
        let mut session =
            AllocationSession::open(AllocationContext::standard(&Expense::new(90.0)), &people())
                .unwrap();
        session.split_equally(RemainderPolicy::default());
        let summary = session
            .reselect(&[
                SelectedPerson::new(1u64, "A"),
                SelectedPerson::new(2u64, "B"),
                SelectedPerson::new(3u64, "C"),
            ])
            .unwrap();
        assert_eq!(session.entries().len(), 3);
        assert_eq!(summary.total_allocated, 0.0);
        assert!(session.split_equally(RemainderPolicy::default()).is_valid);
        assert!(session.entries().iter().all(|e| e.amount == 30.0));
    }
}
