use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use crate::search::fold_case;
use crate::{cargo_movement, errors, vehicle};

/// Delivery state of a cargo, stored as its upper-case name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CargoStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "IN_TRANSIT")]
    InTransit,
    #[sea_orm(string_value = "DELIVERED")]
    Delivered,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

impl CargoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CargoStatus::Pending => "PENDING",
            CargoStatus::InTransit => "IN_TRANSIT",
            CargoStatus::Delivered => "DELIVERED",
            CargoStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for CargoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for CargoStatus {
    type Err = errors::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(CargoStatus::Pending),
            "IN_TRANSIT" => Ok(CargoStatus::InTransit),
            "DELIVERED" => Ok(CargoStatus::Delivered),
            "CANCELLED" => Ok(CargoStatus::Cancelled),
            other => Err(errors::ModelError::Validation(format!("unknown cargo status: {other}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cargo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    /// `search::fold_case(description)`, maintained on save
    pub description_folded: String,
    pub weight: f64,
    pub status: CargoStatus,
    pub vehicle_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Vehicle, Movement }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Vehicle => Entity::belongs_to(vehicle::Entity)
                .from(Column::VehicleId)
                .to(vehicle::Column::Id)
                .into(),
            Relation::Movement => Entity::has_many(cargo_movement::Entity).into(),
        }
    }
}

impl Related<vehicle::Entity> for Entity {
    fn to() -> RelationDef { Relation::Vehicle.def() }
}

impl Related<cargo_movement::Entity> for Entity {
    fn to() -> RelationDef { Relation::Movement.def() }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(ref description) = self.description {
            self.description_folded = ActiveValue::Set(fold_case(description));
        }
        Ok(self)
    }
}
