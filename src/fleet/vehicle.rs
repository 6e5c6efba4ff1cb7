use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered vehicle and its rental configuration.
///
/// Vehicles are created when the registry is seeded and are never deleted;
/// the mutable fields are replaced atomically through
/// [`VehicleService::update`](crate::services::VehicleService::update).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub driver_name: String,
    pub plate_number: String,
    pub status: VehicleStatus,
    /// Expected daily rent collection, always non-negative.
    pub target_daily: f64,
}

impl Vehicle {
    pub fn new(
        name: impl Into<String>,
        driver_name: impl Into<String>,
        plate_number: impl Into<String>,
        status: VehicleStatus,
        target_daily: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            driver_name: driver_name.into(),
            plate_number: plate_number.into(),
            status,
            target_daily: target_daily.max(0.0),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, VehicleStatus::Active)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Inactive,
}

/// Replacement values for the editable subset of a vehicle's configuration.
///
/// `status`, `id`, and `plate_number` are not editable through this path.
#[derive(Debug, Clone)]
pub struct VehiclePatch {
    pub name: String,
    pub driver_name: String,
    pub target_daily: f64,
}
