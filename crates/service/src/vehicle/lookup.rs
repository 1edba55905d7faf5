use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Vehicle as seen by the cargo domain (non-owning reference target).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i32,
    pub number: String,
    pub model: String,
}

impl From<models::vehicle::Model> for Vehicle {
    fn from(m: models::vehicle::Model) -> Self {
        Self { id: m.id, number: m.number, model: m.model }
    }
}

/// Resolves a vehicle by its external number.
#[async_trait]
pub trait VehicleLookup: Send + Sync {
    /// Returns `ServiceError::NotFound` when no vehicle carries `number`.
    async fn resolve(&self, number: &str) -> Result<Vehicle, ServiceError>;
}

/// Simple in-memory lookup for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockVehicleLookup {
        vehicles: Mutex<HashMap<String, Vehicle>>, // key: number
        last_id: Mutex<i32>,
    }

    impl MockVehicleLookup {
        /// Register a vehicle; ids are assigned in insertion order starting at 1.
        /// Re-registering a number replaces that vehicle under a fresh id.
        pub fn insert(&self, number: &str, model: &str) -> Vehicle {
            let mut last = self.last_id.lock().unwrap();
            *last += 1;
            let vehicle = Vehicle { id: *last, number: number.to_string(), model: model.to_string() };
            self.vehicles.lock().unwrap().insert(number.to_string(), vehicle.clone());
            vehicle
        }
    }

    #[async_trait]
    impl VehicleLookup for MockVehicleLookup {
        async fn resolve(&self, number: &str) -> Result<Vehicle, ServiceError> {
            let vehicles = self.vehicles.lock().unwrap();
            vehicles
                .get(number.trim())
                .cloned()
                .ok_or_else(|| ServiceError::not_found("vehicle", format!("number {}", number)))
        }
    }
}
