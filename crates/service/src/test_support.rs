#![cfg(test)]
use configs::DatabaseConfig;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

use crate::vehicle::Vehicle;

/// Fresh in-memory SQLite database with the schema in place; every call is
/// isolated from the others.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ensure_schema: true,
        ..Default::default()
    };
    connect_with_config(&cfg).await
}

pub async fn seed_vehicle(db: &DatabaseConnection, number: &str) -> Result<Vehicle, anyhow::Error> {
    Ok(models::vehicle::create(db, number, "Volvo FH16").await?.into())
}
