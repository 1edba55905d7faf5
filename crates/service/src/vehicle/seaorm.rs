use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::debug;

use super::lookup::{Vehicle, VehicleLookup};
use crate::errors::ServiceError;

/// Reads the `vehicle` table by number.
pub struct SeaOrmVehicleLookup {
    pub db: DatabaseConnection,
}

#[async_trait]
impl VehicleLookup for SeaOrmVehicleLookup {
    async fn resolve(&self, number: &str) -> Result<Vehicle, ServiceError> {
        let found = models::vehicle::find_by_number(&self.db, number).await?;
        debug!(%number, found = found.is_some(), "vehicle_lookup");
        found
            .map(Vehicle::from)
            .ok_or_else(|| ServiceError::not_found("vehicle", format!("number {}", number)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn resolves_seeded_vehicle() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let seeded = models::vehicle::create(&db, "CE4242CE", "Renault T").await?;
        let lookup = SeaOrmVehicleLookup { db };

        let v = lookup.resolve("CE4242CE").await?;
        assert_eq!(v.id, seeded.id);
        assert_eq!(v.model, "Renault T");

        let missing = lookup.resolve("NOPE").await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
