//! Pure, read-only aggregation over the transaction ledger.
//!
//! Nothing here caches or mutates; every call recomputes from the current
//! ledger contents, so callers can treat the outputs as reactive views.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::transaction::Transaction;

/// Number of distinct calendar days the dashboard chart covers.
pub const CHART_WINDOW_DAYS: usize = 7;

/// Headline figures for the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTotals {
    /// Income collected on the reference day only.
    pub today_income: f64,
    /// All-time income.
    pub total_revenue: f64,
    /// All-time expenses.
    pub total_expense: f64,
    pub net_profit: f64,
}

impl DailyTotals {
    pub fn zero() -> Self {
        Self {
            today_income: 0.0,
            total_revenue: 0.0,
            total_expense: 0.0,
            net_profit: 0.0,
        }
    }
}

/// One calendar day of the revenue-trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBucket {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

/// Sums today's income and the all-time revenue/expense/profit figures.
///
/// "Today" means the same UTC calendar day as `reference`. An empty ledger
/// yields all zeros.
pub fn compute_daily_totals(transactions: &[Transaction], reference: DateTime<Utc>) -> DailyTotals {
    let today = reference.date_naive();
    let mut totals = DailyTotals::zero();
    for transaction in transactions {
        if transaction.is_income() {
            totals.total_revenue += transaction.amount;
            if transaction.day() == today {
                totals.today_income += transaction.amount;
            }
        } else {
            totals.total_expense += transaction.amount;
        }
    }
    totals.net_profit = totals.total_revenue - totals.total_expense;
    totals
}

/// Buckets the ledger by calendar day and keeps the most recent
/// [`CHART_WINDOW_DAYS`] buckets, ascending by date.
///
/// Days without any transaction are absent from the result, not zero-filled.
pub fn compute_chart_series(transactions: &[Transaction]) -> Vec<ChartBucket> {
    let mut buckets: BTreeMap<NaiveDate, ChartBucket> = BTreeMap::new();
    for transaction in transactions {
        let bucket = buckets.entry(transaction.day()).or_insert(ChartBucket {
            date: transaction.day(),
            income: 0.0,
            expense: 0.0,
        });
        if transaction.is_income() {
            bucket.income += transaction.amount;
        } else {
            bucket.expense += transaction.amount;
        }
    }
    let series: Vec<ChartBucket> = buckets.into_values().collect();
    let skip = series.len().saturating_sub(CHART_WINDOW_DAYS);
    series.into_iter().skip(skip).collect()
}

/// Collection-Guard lookup: the first income entry already recorded for this
/// vehicle on this calendar day, if any.
///
/// Expenses are never constrained, so only income entries are considered.
pub fn find_existing_collection(
    transactions: &[Transaction],
    vehicle_id: Uuid,
    day: NaiveDate,
) -> Option<&Transaction> {
    transactions.iter().find(|transaction| {
        transaction.vehicle_id == vehicle_id && transaction.is_income() && transaction.day() == day
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::transaction::{ExpenseCategory, TransactionType};
    use chrono::NaiveTime;

    fn txn(vehicle_id: Uuid, kind: TransactionType, amount: f64, day: &str, hour: u32) -> Transaction {
        let date = day.parse::<NaiveDate>().unwrap();
        let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap();
        Transaction {
            id: Uuid::new_v4(),
            vehicle_id,
            amount,
            kind,
            date: date.and_time(time).and_utc(),
            notes: None,
            category: matches!(kind, TransactionType::Expense).then_some(ExpenseCategory::Repair),
        }
    }

    fn reference(day: &str) -> DateTime<Utc> {
        day.parse::<NaiveDate>()
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
            .and_utc()
    }

    #[test]
    fn empty_ledger_yields_zero_totals() {
        let totals = compute_daily_totals(&[], Utc::now());
        assert_eq!(totals, DailyTotals::zero());
    }

    #[test]
    fn totals_split_income_and_expense_and_balance_exactly() {
        let r1 = Uuid::new_v4();
        let r2 = Uuid::new_v4();
        let ledger = vec![
            txn(r1, TransactionType::Income, 250.0, "2024-01-01", 9),
            txn(r1, TransactionType::Expense, 50.0, "2024-01-01", 14),
            txn(r2, TransactionType::Income, 300.0, "2024-01-02", 10),
        ];
        let totals = compute_daily_totals(&ledger, reference("2024-01-02"));
        assert_eq!(totals.today_income, 300.0);
        assert_eq!(totals.total_revenue, 550.0);
        assert_eq!(totals.total_expense, 50.0);
        assert_eq!(totals.net_profit, 500.0);
        assert_eq!(totals.net_profit, totals.total_revenue - totals.total_expense);
    }

    #[test]
    fn today_income_ignores_other_days() {
        let r1 = Uuid::new_v4();
        let ledger = vec![
            txn(r1, TransactionType::Income, 250.0, "2024-01-01", 9),
            txn(r1, TransactionType::Income, 250.0, "2024-01-02", 9),
        ];
        let totals = compute_daily_totals(&ledger, reference("2024-01-01"));
        assert_eq!(totals.today_income, 250.0);
        assert_eq!(totals.total_revenue, 500.0);
    }

    #[test]
    fn chart_series_groups_by_day_ascending() {
        let r1 = Uuid::new_v4();
        let r2 = Uuid::new_v4();
        // Head-of-ledger order is newest first; bucketing must re-sort by date.
        let ledger = vec![
            txn(r2, TransactionType::Income, 300.0, "2024-01-02", 10),
            txn(r1, TransactionType::Expense, 50.0, "2024-01-01", 14),
            txn(r1, TransactionType::Income, 250.0, "2024-01-01", 9),
        ];
        let series = compute_chart_series(&ledger);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, "2024-01-01".parse::<NaiveDate>().unwrap());
        assert_eq!(series[0].income, 250.0);
        assert_eq!(series[0].expense, 50.0);
        assert_eq!(series[1].date, "2024-01-02".parse::<NaiveDate>().unwrap());
        assert_eq!(series[1].income, 300.0);
        assert_eq!(series[1].expense, 0.0);
    }

    #[test]
    fn chart_series_drops_oldest_days_beyond_window() {
        let r1 = Uuid::new_v4();
        let ledger: Vec<Transaction> = (1..=10)
            .map(|day| {
                txn(
                    r1,
                    TransactionType::Income,
                    day as f64,
                    &format!("2024-03-{day:02}"),
                    9,
                )
            })
            .collect();
        let series = compute_chart_series(&ledger);
        assert_eq!(series.len(), CHART_WINDOW_DAYS);
        assert_eq!(series[0].date, "2024-03-04".parse::<NaiveDate>().unwrap());
        assert_eq!(series.last().unwrap().date, "2024-03-10".parse::<NaiveDate>().unwrap());
        assert!(series.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn chart_series_is_idempotent() {
        let r1 = Uuid::new_v4();
        let ledger = vec![
            txn(r1, TransactionType::Income, 250.0, "2024-01-01", 9),
            txn(r1, TransactionType::Expense, 75.0, "2024-01-03", 16),
        ];
        assert_eq!(compute_chart_series(&ledger), compute_chart_series(&ledger));
        assert_eq!(
            compute_daily_totals(&ledger, reference("2024-01-03")),
            compute_daily_totals(&ledger, reference("2024-01-03")),
        );
    }

    #[test]
    fn collection_guard_matches_income_only() {
        let r1 = Uuid::new_v4();
        let day = "2024-01-01".parse::<NaiveDate>().unwrap();
        let ledger = vec![txn(r1, TransactionType::Expense, 50.0, "2024-01-01", 9)];
        assert!(find_existing_collection(&ledger, r1, day).is_none());

        let ledger = vec![txn(r1, TransactionType::Income, 250.0, "2024-01-01", 9)];
        let found = find_existing_collection(&ledger, r1, day).expect("collection exists");
        assert_eq!(found.amount, 250.0);
        assert!(find_existing_collection(&ledger, Uuid::new_v4(), day).is_none());
        assert!(
            find_existing_collection(&ledger, r1, "2024-01-02".parse().unwrap()).is_none()
        );
    }
}
