use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use super::domain::{CargoMovementListRequest, CargoMovementRequest, CargoMovementResponse, NewCargoMovement};
use super::repository::MovementRepository;
use crate::cargo::repository::CargoRepository;
use crate::errors::ServiceError;

/// Records and lists movements of existing cargo.
pub struct CargoMovementService<M: MovementRepository, C: CargoRepository> {
    movements: Arc<M>,
    cargos: Arc<C>,
}

impl<M: MovementRepository, C: CargoRepository> CargoMovementService<M, C> {
    pub fn new(movements: Arc<M>, cargos: Arc<C>) -> Self { Self { movements, cargos } }

    /// Record a movement of an existing cargo; the date defaults to now.
    #[instrument(skip(self, request), fields(cargo_id = request.cargo_id))]
    pub async fn record(&self, request: CargoMovementRequest) -> Result<CargoMovementResponse, ServiceError> {
        let from_location = request.from_location.trim();
        let to_location = request.to_location.trim();
        if from_location.is_empty() || to_location.is_empty() {
            return Err(ServiceError::Validation("from_location and to_location are required".into()));
        }
        if !self.cargos.exists(request.cargo_id).await? {
            return Err(ServiceError::not_found("cargo", format!("id {}", request.cargo_id)));
        }

        let saved = self
            .movements
            .insert(NewCargoMovement {
                cargo_id: request.cargo_id,
                movement_date: request.movement_date.unwrap_or_else(Utc::now),
                from_location: from_location.to_string(),
                to_location: to_location.to_string(),
            })
            .await?;
        info!(movement_id = saved.id, cargo_id = saved.cargo_id, "cargo_movement_recorded");
        Ok(saved.into())
    }

    /// Movements of one cargo, newest first, windowed by `from`/`size`.
    #[instrument(skip(self, request), fields(cargo_id = request.cargo_id))]
    pub async fn list(&self, request: &CargoMovementListRequest) -> Result<Vec<CargoMovementResponse>, ServiceError> {
        if !self.movements.exists_for_cargo(request.cargo_id).await? {
            return Err(ServiceError::NotFound(format!("no movements recorded for cargo {}", request.cargo_id)));
        }
        let (skip, limit) = request.window();
        let rows = self.movements.list_by_cargo(request.cargo_id, skip, limit).await?;
        debug!(skip, limit, returned = rows.len(), "cargo_movement_list");
        Ok(rows.into_iter().map(CargoMovementResponse::from).collect())
    }

    /// Number of movements per cargo id; ids without movements are absent.
    pub async fn counts_per_cargo(&self, cargo_ids: &[i32]) -> Result<HashMap<i32, u64>, ServiceError> {
        self.movements.count_by_cargo(cargo_ids).await
    }
}
