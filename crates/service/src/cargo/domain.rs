use serde::{Deserialize, Serialize};

pub use models::cargo::CargoStatus;

use crate::vehicle::Vehicle;

/// Write shape for the store. It can only be built with a resolved vehicle,
/// so a cargo never reaches the store without one.
#[derive(Debug, Clone, PartialEq)]
pub struct CargoDraft {
    /// `None` inserts a new row, `Some` replaces an existing one.
    pub id: Option<i32>,
    pub description: String,
    pub weight: f64,
    pub status: CargoStatus,
    pub vehicle: Vehicle,
}

impl CargoDraft {
    pub fn from_request(request: &CargoRequest, vehicle: Vehicle) -> Self {
        Self {
            id: None,
            description: request.description.clone(),
            weight: request.weight,
            status: request.status,
            vehicle,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

/// Persisted cargo together with its vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    pub id: i32,
    pub description: String,
    pub weight: f64,
    pub status: CargoStatus,
    pub vehicle: Vehicle,
}

impl Cargo {
    pub fn from_parts(model: models::cargo::Model, vehicle: Vehicle) -> Self {
        Self {
            id: model.id,
            description: model.description,
            weight: model.weight,
            status: model.status,
            vehicle,
        }
    }
}

/// Create/update input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoRequest {
    pub description: String,
    pub weight: f64,
    pub status: CargoStatus,
    pub vehicle_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub id: i32,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoResponse {
    pub id: i32,
    pub description: String,
    pub weight: f64,
    pub status: CargoStatus,
    pub vehicle: VehicleSummary,
}

impl From<Cargo> for CargoResponse {
    fn from(c: Cargo) -> Self {
        Self {
            id: c.id,
            description: c.description,
            weight: c.weight,
            status: c.status,
            vehicle: VehicleSummary { id: c.vehicle.id, number: c.vehicle.number },
        }
    }
}

/// Optional search parameters; an absent field puts no constraint on that attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CargoSearchRequest {
    /// case-insensitive substring of the description
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<CargoStatus>,
    /// inclusive lower bound on weight
    #[serde(default)]
    pub min_weight: Option<f64>,
    /// inclusive upper bound on weight
    #[serde(default)]
    pub max_weight: Option<f64>,
    #[serde(default)]
    pub vehicle_number: Option<String>,
}

/// Row shape of the paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoSearchResponse {
    pub id: i32,
    pub description: String,
    pub weight: f64,
    pub status: CargoStatus,
    pub vehicle_number: String,
}

impl From<Cargo> for CargoSearchResponse {
    fn from(c: Cargo) -> Self {
        Self {
            id: c.id,
            description: c.description,
            weight: c.weight,
            status: c.status,
            vehicle_number: c.vehicle.number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoListResponse {
    pub items: Vec<CargoSearchResponse>,
    /// 1-based
    pub current_page: u64,
    pub total_pages: u64,
}
