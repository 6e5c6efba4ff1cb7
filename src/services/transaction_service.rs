//! Business logic for recording ledger entries.

use uuid::Uuid;

use crate::errors::FleetError;
use crate::fleet::{
    find_existing_collection, Fleet, Transaction, TransactionInput, TransactionType,
};
use crate::services::ServiceResult;

/// Validated entry point for appending transactions to the ledger.
pub struct TransactionService;

impl TransactionService {
    /// Records a new transaction and returns its identifier.
    ///
    /// All validation runs before any mutation: a rejected entry leaves the
    /// ledger untouched. Income entries are additionally checked against the
    /// Collection-Guard so a vehicle cannot be charged rent twice for the
    /// same calendar day. Expenses carry no such restriction.
    pub fn record(fleet: &mut Fleet, input: TransactionInput) -> ServiceResult<Uuid> {
        if input.vehicle_id.is_nil() {
            return Err(FleetError::Validation("A vehicle must be selected".into()));
        }
        if !input.amount.is_finite() || input.amount < 0.0 {
            return Err(FleetError::Validation(
                "Amount must be a non-negative number".into(),
            ));
        }
        if input.kind == TransactionType::Income {
            if let Some(existing) =
                find_existing_collection(&fleet.transactions, input.vehicle_id, input.date)
            {
                return Err(FleetError::Validation(format!(
                    "Rent for {} was already collected at {}",
                    input.date, existing.date
                )));
            }
        }

        let transaction = Transaction {
            id: Uuid::new_v4(),
            vehicle_id: input.vehicle_id,
            amount: input.amount,
            kind: input.kind,
            date: input.instant(),
            notes: input.notes.filter(|notes| !notes.trim().is_empty()),
            // Categories only mean something on expenses.
            category: match input.kind {
                TransactionType::Expense => input.category,
                TransactionType::Income => None,
            },
        };
        tracing::debug!(
            vehicle = %transaction.vehicle_id,
            amount = transaction.amount,
            kind = ?transaction.kind,
            "transaction recorded"
        );
        Ok(fleet.insert_transaction(transaction))
    }

    /// Ledger snapshot in display order (newest entry first).
    pub fn list(fleet: &Fleet) -> &[Transaction] {
        &fleet.transactions
    }

    /// Head of the ledger, for the dashboard's recent-activity list.
    pub fn recent(fleet: &Fleet, limit: usize) -> &[Transaction] {
        &fleet.transactions[..fleet.transactions.len().min(limit)]
    }
}
