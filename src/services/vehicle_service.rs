//! Business logic for vehicle registry configuration.

use uuid::Uuid;

use crate::errors::FleetError;
use crate::fleet::{Fleet, Vehicle, VehiclePatch};
use crate::services::ServiceResult;

/// Read and edit access to the vehicle registry.
pub struct VehicleService;

impl VehicleService {
    /// Replaces the editable configuration of the vehicle matching `id`.
    ///
    /// Exactly `name`, `driver_name`, and `target_daily` change; `id`,
    /// `plate_number`, and `status` stay as they are. The daily target is
    /// coerced to a non-negative number. An unknown id fails with
    /// [`FleetError::NotFound`] and leaves the registry unchanged.
    pub fn update(fleet: &mut Fleet, id: Uuid, patch: VehiclePatch) -> ServiceResult<()> {
        let vehicle = fleet
            .vehicle_mut(id)
            .ok_or_else(|| FleetError::NotFound(format!("Vehicle {id} is not registered")))?;
        vehicle.name = patch.name;
        vehicle.driver_name = patch.driver_name;
        vehicle.target_daily = patch.target_daily.max(0.0);
        fleet.touch();
        Ok(())
    }

    pub fn get(fleet: &Fleet, id: Uuid) -> ServiceResult<&Vehicle> {
        fleet
            .vehicle(id)
            .ok_or_else(|| FleetError::NotFound(format!("Vehicle {id} is not registered")))
    }

    pub fn list(fleet: &Fleet) -> &[Vehicle] {
        &fleet.vehicles
    }
}
