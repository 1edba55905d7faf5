use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

use common::pagination::{Page, Pagination};
use models::{cargo, cargo_movement, vehicle};

use crate::cargo::domain::{Cargo, CargoDraft};
use crate::cargo::filter::CargoPredicate;
use crate::cargo::repository::CargoRepository;
use crate::errors::ServiceError;
use crate::vehicle::Vehicle;

pub struct SeaOrmCargoRepository {
    pub db: DatabaseConnection,
}

fn joined((c, v): (cargo::Model, Option<vehicle::Model>)) -> Result<Cargo, ServiceError> {
    let vehicle = v.ok_or_else(|| {
        ServiceError::Db(format!("cargo {} references missing vehicle {}", c.id, c.vehicle_id))
    })?;
    Ok(Cargo::from_parts(c, Vehicle::from(vehicle)))
}

#[async_trait]
impl CargoRepository for SeaOrmCargoRepository {
    async fn save(&self, draft: CargoDraft) -> Result<Cargo, ServiceError> {
        let txn = self.db.begin().await?;
        let model = match draft.id {
            None => {
                cargo::ActiveModel {
                    description: Set(draft.description.clone()),
                    weight: Set(draft.weight),
                    status: Set(draft.status),
                    vehicle_id: Set(draft.vehicle.id),
                    ..Default::default()
                }
                .insert(&txn)
                .await?
            }
            Some(id) => {
                if cargo::Entity::find_by_id(id).one(&txn).await?.is_none() {
                    // dropping txn rolls back
                    return Err(ServiceError::not_found("cargo", format!("id {}", id)));
                }
                cargo::ActiveModel {
                    id: ActiveValue::Unchanged(id),
                    description: Set(draft.description.clone()),
                    // filled from description by the entity's before_save
                    description_folded: ActiveValue::NotSet,
                    weight: Set(draft.weight),
                    status: Set(draft.status),
                    vehicle_id: Set(draft.vehicle.id),
                }
                .update(&txn)
                .await?
            }
        };
        txn.commit().await?;
        Ok(Cargo::from_parts(model, draft.vehicle))
    }

    async fn find_by_id_with_vehicle(&self, id: i32) -> Result<Option<Cargo>, ServiceError> {
        cargo::Entity::find_by_id(id)
            .find_also_related(vehicle::Entity)
            .one(&self.db)
            .await?
            .map(joined)
            .transpose()
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(cargo::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        // movements go with their cargo even where the FK cascade is not enforced
        let txn = self.db.begin().await?;
        let moves = cargo_movement::Entity::delete_many()
            .filter(cargo_movement::Column::CargoId.eq(id))
            .exec(&txn)
            .await?;
        let res = cargo::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        debug!(id, rows_affected = res.rows_affected, movements = moves.rows_affected, "cargo_delete");
        Ok(())
    }

    async fn find_page(&self, predicate: &CargoPredicate, page: Pagination) -> Result<Page<Cargo>, ServiceError> {
        let per_page = page.size.max(1);
        if Pagination::new(page.page, per_page).offset().is_none() {
            return Err(ServiceError::Validation(format!("page {} is out of range", page.page)));
        }
        // count and fetch must see the same snapshot
        let txn = self.db.begin().await?;
        let (totals, rows) = {
            let paginator = cargo::Entity::find()
                .find_also_related(vehicle::Entity)
                .filter(predicate.to_condition())
                .order_by_asc(cargo::Column::Id)
                .paginate(&txn, per_page);
            let totals = paginator.num_items_and_pages().await?;
            let rows = paginator.fetch_page(page.page).await?;
            (totals, rows)
        };
        txn.commit().await?;

        let items = rows.into_iter().map(joined).collect::<Result<Vec<_>, _>>()?;
        Ok(Page {
            items,
            page_index: page.page,
            total_pages: totals.number_of_pages,
            total_items: totals.number_of_items,
        })
    }

    async fn find_all(&self, predicate: &CargoPredicate) -> Result<Vec<Cargo>, ServiceError> {
        cargo::Entity::find()
            .find_also_related(vehicle::Entity)
            .filter(predicate.to_condition())
            .order_by_asc(cargo::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(joined)
            .collect()
    }
}
