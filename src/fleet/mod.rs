//! Fleet domain models and derived reporting helpers.

#[allow(clippy::module_inception)]
pub mod fleet;
pub mod stats;
pub mod transaction;
pub mod vehicle;

pub use fleet::Fleet;
pub use stats::{
    compute_chart_series, compute_daily_totals, find_existing_collection, ChartBucket, DailyTotals,
};
pub use transaction::{ExpenseCategory, Transaction, TransactionInput, TransactionType};
pub use vehicle::{Vehicle, VehiclePatch, VehicleStatus};
