use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use models::cargo_movement;

use crate::errors::ServiceError;
use crate::movement::domain::{CargoMovement, NewCargoMovement};
use crate::movement::repository::MovementRepository;

pub struct SeaOrmMovementRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl MovementRepository for SeaOrmMovementRepository {
    async fn insert(&self, movement: NewCargoMovement) -> Result<CargoMovement, ServiceError> {
        let am = cargo_movement::ActiveModel {
            cargo_id: Set(movement.cargo_id),
            movement_date: Set(movement.movement_date),
            from_location: Set(movement.from_location),
            to_location: Set(movement.to_location),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?.into())
    }

    async fn exists_for_cargo(&self, cargo_id: i32) -> Result<bool, ServiceError> {
        let n = cargo_movement::Entity::find()
            .filter(cargo_movement::Column::CargoId.eq(cargo_id))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn list_by_cargo(&self, cargo_id: i32, skip: u64, limit: u64) -> Result<Vec<CargoMovement>, ServiceError> {
        let rows = cargo_movement::Entity::find()
            .filter(cargo_movement::Column::CargoId.eq(cargo_id))
            .order_by_desc(cargo_movement::Column::MovementDate)
            .order_by_desc(cargo_movement::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(CargoMovement::from).collect())
    }

    async fn count_by_cargo(&self, cargo_ids: &[i32]) -> Result<HashMap<i32, u64>, ServiceError> {
        if cargo_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows: Vec<(i32, i64)> = cargo_movement::Entity::find()
            .select_only()
            .column(cargo_movement::Column::CargoId)
            .column_as(Expr::col(cargo_movement::Column::Id).count(), "count")
            .filter(cargo_movement::Column::CargoId.is_in(cargo_ids.iter().copied()))
            .group_by(cargo_movement::Column::CargoId)
            .into_tuple()
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|(id, n)| (id, n.max(0) as u64)).collect())
    }
}
