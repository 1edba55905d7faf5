use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIST_SIZE: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoMovement {
    pub id: i32,
    pub cargo_id: i32,
    pub movement_date: DateTime<Utc>,
    pub from_location: String,
    pub to_location: String,
}

impl From<models::cargo_movement::Model> for CargoMovement {
    fn from(m: models::cargo_movement::Model) -> Self {
        Self {
            id: m.id,
            cargo_id: m.cargo_id,
            movement_date: m.movement_date,
            from_location: m.from_location,
            to_location: m.to_location,
        }
    }
}

/// Write shape with the date already settled.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCargoMovement {
    pub cargo_id: i32,
    pub movement_date: DateTime<Utc>,
    pub from_location: String,
    pub to_location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoMovementRequest {
    pub cargo_id: i32,
    /// defaults to the time of recording
    #[serde(default)]
    pub movement_date: Option<DateTime<Utc>>,
    pub from_location: String,
    pub to_location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoMovementListRequest {
    pub cargo_id: i32,
    /// number of newest movements to skip
    #[serde(default)]
    pub from: Option<u64>,
    /// maximum number of movements returned
    #[serde(default)]
    pub size: Option<u64>,
}

impl CargoMovementListRequest {
    /// (skip, limit) with defaults applied; limit is at least 1.
    pub fn window(&self) -> (u64, u64) {
        (self.from.unwrap_or(0), self.size.unwrap_or(DEFAULT_LIST_SIZE).max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoMovementResponse {
    pub id: i32,
    pub cargo_id: i32,
    pub movement_date: DateTime<Utc>,
    pub from_location: String,
    pub to_location: String,
}

impl From<CargoMovement> for CargoMovementResponse {
    fn from(m: CargoMovement) -> Self {
        Self {
            id: m.id,
            cargo_id: m.cargo_id,
            movement_date: m.movement_date,
            from_location: m.from_location,
            to_location: m.to_location,
        }
    }
}
