use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ledger entry: rent collected from, or an expense logged against,
/// one vehicle.
///
/// `vehicle_id` is not referentially checked; a transaction may outlive the
/// registry entry it points at, so lookups must tolerate unknown vehicles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub amount: f64,
    pub kind: TransactionType,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Only meaningful for expenses; income entries carry no category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ExpenseCategory>,
}

impl Transaction {
    /// Calendar day used for same-day comparisons and chart bucketing.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionType::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionType::Expense)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExpenseCategory {
    Fuel,
    Repair,
    Salary,
    Miscellaneous,
}

/// Entry-form input for a new transaction.
///
/// Date and time-of-day arrive separately from the quick-entry form and are
/// normalized to a single UTC instant when the record is created.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub vehicle_id: Uuid,
    pub amount: f64,
    pub kind: TransactionType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub notes: Option<String>,
    pub category: Option<ExpenseCategory>,
}

impl TransactionInput {
    /// A rent collection (income) entry for a vehicle.
    pub fn collection(vehicle_id: Uuid, amount: f64, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            vehicle_id,
            amount,
            kind: TransactionType::Income,
            date,
            time,
            notes: None,
            category: None,
        }
    }

    /// An expense entry for a vehicle.
    pub fn expense(
        vehicle_id: Uuid,
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Self {
        Self {
            vehicle_id,
            amount,
            kind: TransactionType::Expense,
            date,
            time,
            notes: None,
            category: Some(category),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Combines the separate date and time fields into one UTC instant.
    pub fn instant(&self) -> DateTime<Utc> {
        NaiveDateTime::new(self.date, self.time).and_utc()
    }
}
