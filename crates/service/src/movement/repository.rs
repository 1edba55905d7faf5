use std::collections::HashMap;

use async_trait::async_trait;

use super::domain::{CargoMovement, NewCargoMovement};
use crate::errors::ServiceError;

/// Repository abstraction for cargo movement persistence.
#[async_trait]
pub trait MovementRepository: Send + Sync {
    async fn insert(&self, movement: NewCargoMovement) -> Result<CargoMovement, ServiceError>;
    async fn exists_for_cargo(&self, cargo_id: i32) -> Result<bool, ServiceError>;
    /// Newest first, skipping `skip` rows and returning at most `limit`.
    async fn list_by_cargo(&self, cargo_id: i32, skip: u64, limit: u64) -> Result<Vec<CargoMovement>, ServiceError>;
    /// Movement count per cargo id; ids without movements are absent.
    async fn count_by_cargo(&self, cargo_ids: &[i32]) -> Result<HashMap<i32, u64>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockMovementRepository {
        rows: Mutex<Vec<CargoMovement>>,
    }

    #[async_trait]
    impl MovementRepository for MockMovementRepository {
        async fn insert(&self, movement: NewCargoMovement) -> Result<CargoMovement, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let saved = CargoMovement {
                id: rows.len() as i32 + 1,
                cargo_id: movement.cargo_id,
                movement_date: movement.movement_date,
                from_location: movement.from_location,
                to_location: movement.to_location,
            };
            rows.push(saved.clone());
            Ok(saved)
        }

        async fn exists_for_cargo(&self, cargo_id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().any(|m| m.cargo_id == cargo_id))
        }

        async fn list_by_cargo(&self, cargo_id: i32, skip: u64, limit: u64) -> Result<Vec<CargoMovement>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            let mut matching: Vec<CargoMovement> = rows.iter().filter(|m| m.cargo_id == cargo_id).cloned().collect();
            matching.sort_by(|a, b| b.movement_date.cmp(&a.movement_date));
            Ok(matching.into_iter().skip(skip as usize).take(limit as usize).collect())
        }

        async fn count_by_cargo(&self, cargo_ids: &[i32]) -> Result<HashMap<i32, u64>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            let mut counts = HashMap::new();
            for m in rows.iter().filter(|m| cargo_ids.contains(&m.cargo_id)) {
                *counts.entry(m.cargo_id).or_insert(0) += 1;
            }
            Ok(counts)
        }
    }
}
