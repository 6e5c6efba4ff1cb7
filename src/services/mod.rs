//! Command and query services the presentation layer talks to.

pub mod summary_service;
pub mod transaction_service;
pub mod vehicle_service;

pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;
pub use vehicle_service::VehicleService;

use crate::errors::FleetError;

pub type ServiceResult<T> = Result<T, FleetError>;
