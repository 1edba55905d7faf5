use sea_orm::entity::prelude::*;
use sea_orm::sea_query::ForeignKeyAction;
use serde::{Deserialize, Serialize};

use crate::cargo;

/// One transfer of a cargo between two locations.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cargo_movement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cargo_id: i32,
    pub movement_date: DateTimeUtc,
    pub from_location: String,
    pub to_location: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Cargo }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Cargo => Entity::belongs_to(cargo::Entity)
                .from(Column::CargoId)
                .to(cargo::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<cargo::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cargo.def() }
}

impl ActiveModelBehavior for ActiveModel {}
