use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    transaction::Transaction,
    vehicle::{Vehicle, VehicleStatus},
};

/// The whole in-memory application state: the vehicle registry plus the
/// transaction ledger.
///
/// There is no persistence; a process restart starts over from [`Fleet::seed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fleet {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    /// Display order: most recently created first. Aggregation re-sorts by
    /// the actual transaction date, since entries may be backdated.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Fleet {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            vehicles: Vec::new(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The fixed starting registry: two active rickshaws and an empty ledger.
    pub fn seed() -> Self {
        let mut fleet = Self::new();
        fleet.vehicles.push(Vehicle::new(
            "Rickshaw 01",
            "Raju",
            "KA-01-AB-1001",
            VehicleStatus::Active,
            250.0,
        ));
        fleet.vehicles.push(Vehicle::new(
            "Rickshaw 02",
            "Babu",
            "KA-01-XY-2002",
            VehicleStatus::Active,
            300.0,
        ));
        fleet
    }

    pub fn vehicle(&self, id: Uuid) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn vehicle_mut(&mut self, id: Uuid) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|vehicle| vehicle.id == id)
    }

    /// Display name for a vehicle id, tolerating ids the registry no longer
    /// (or never) knew about.
    pub fn vehicle_name(&self, id: Uuid) -> Option<&str> {
        self.vehicle(id).map(|vehicle| vehicle.name.as_str())
    }

    /// Prepends a transaction so the newest entry is listed first.
    pub fn insert_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        self.touch();
        id
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
