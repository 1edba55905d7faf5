use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseBackend, EntityTrait, PaginatorTrait};

use super::setup_test_db;
use crate::{cargo, cargo_movement, db, vehicle};

#[tokio::test]
async fn sqlite_connection_uses_sqlite_backend() -> Result<()> {
    let db = setup_test_db().await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);
    Ok(())
}

#[tokio::test]
async fn ensure_schema_is_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    // second run must not fail on existing tables
    db::ensure_schema(&db).await?;

    assert_eq!(vehicle::Entity::find().count(&db).await?, 0);
    assert_eq!(cargo::Entity::find().count(&db).await?, 0);
    assert_eq!(cargo_movement::Entity::find().count(&db).await?, 0);
    Ok(())
}
