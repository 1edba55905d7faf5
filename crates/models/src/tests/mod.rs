/// Entity CRUD against an in-memory SQLite database
pub mod crud_tests;

/// Schema bootstrap and connection configuration
pub mod db_tests;

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the schema created.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ensure_schema: true,
        ..Default::default()
    };
    crate::db::connect_with_config(&cfg).await
}
