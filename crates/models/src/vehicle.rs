use sea_orm::{entity::prelude::*, ActiveModelTrait, ActiveValue, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::search::fold_case;
use crate::{cargo, errors};

/// Transport unit a cargo is assigned to. Owned by the vehicle subsystem;
/// this crate only reads it and seeds it for tests.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub number: String,
    /// `search::fold_case(number)`, maintained on save
    pub number_folded: String,
    pub model: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Cargo }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Cargo => Entity::has_many(cargo::Entity).into(),
        }
    }
}

impl Related<cargo::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cargo.def() }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(ref number) = self.number {
            self.number_folded = ActiveValue::Set(fold_case(number));
        }
        Ok(self)
    }
}

pub fn validate_number(number: &str) -> Result<(), errors::ModelError> {
    if number.trim().is_empty() {
        return Err(errors::ModelError::Validation("vehicle number required".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, number: &str, model: &str) -> Result<Model, errors::ModelError> {
    validate_number(number)?;
    let am = ActiveModel {
        number: Set(number.trim().to_string()),
        model: Set(model.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_number<C: ConnectionTrait>(db: &C, number: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Number.eq(number.trim()))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
