use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use tracing::{debug, info};

use configs::DatabaseConfig;

use crate::{cargo, cargo_movement, vehicle};

/// Connect with pool settings from the `[database]` section and create the
/// schema when `ensure_schema` is set.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    info!(backend = ?db.get_database_backend(), max_connections = cfg.max_connections, "database_connected");
    if cfg.ensure_schema {
        ensure_schema(&db).await?;
    }
    Ok(db)
}

/// Create any missing table from the entity definitions, parents first.
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmts = vec![
        schema.create_table_from_entity(vehicle::Entity),
        schema.create_table_from_entity(cargo::Entity),
        schema.create_table_from_entity(cargo_movement::Entity),
    ];
    for stmt in stmts.iter_mut() {
        stmt.if_not_exists();
        db.execute(backend.build(&*stmt)).await?;
    }
    debug!(tables = stmts.len(), "schema_ensured");
    Ok(())
}
