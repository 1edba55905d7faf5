use configs::AppConfig;
use sea_orm::DatabaseConnection;

const CONFIG_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sqlite_memory.toml");

/// Load the fixture config the way a deployment would (`CONFIG_PATH`), set up
/// logging and open a fresh in-memory database with the schema in place.
pub async fn sqlite_stack() -> anyhow::Result<(AppConfig, DatabaseConnection)> {
    std::env::set_var("CONFIG_PATH", CONFIG_FIXTURE);
    let cfg = AppConfig::load_and_validate()?;
    common::utils::logging::init_from_config(&cfg.logging);

    let db = models::db::connect_with_config(&cfg.database).await?;
    Ok((cfg, db))
}
