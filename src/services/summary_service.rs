//! Query facade over the ledger aggregator.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::fleet::{
    compute_chart_series, compute_daily_totals, find_existing_collection, ChartBucket, DailyTotals,
    Fleet, Transaction,
};

/// Derived read-only views of the fleet ledger.
///
/// Every method recomputes from current state; results are plain values with
/// no caching, so repeated calls on an unchanged ledger are identical.
pub struct SummaryService;

impl SummaryService {
    pub fn daily_totals(fleet: &Fleet, reference: DateTime<Utc>) -> DailyTotals {
        compute_daily_totals(&fleet.transactions, reference)
    }

    pub fn chart_series(fleet: &Fleet) -> Vec<ChartBucket> {
        compute_chart_series(&fleet.transactions)
    }

    /// Collection-Guard query surfaced to the entry form, so it can warn
    /// before submission and show when the day's rent was taken.
    pub fn existing_collection(
        fleet: &Fleet,
        vehicle_id: Uuid,
        day: NaiveDate,
    ) -> Option<&Transaction> {
        find_existing_collection(&fleet.transactions, vehicle_id, day)
    }
}
