#![cfg(test)]
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use models::db::{connect_with_config, DatabaseConfig};

// Ensure the schema is created only once across the entire test process
static SCHEMA: OnceCell<()> = OnceCell::const_new();

/// A fresh connection with the schema in place, or `None` when the database
/// tests are disabled (`SKIP_DB_TESTS`) or no `DATABASE_URL` is reachable.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let _ = dotenvy::dotenv();
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("skip: DATABASE_URL not set");
        return None;
    };
    let cfg = DatabaseConfig {
        url,
        max_connections: 5,
        connect_timeout_secs: 5,
        acquire_timeout_secs: 5,
        ..DatabaseConfig::default()
    };
    let db = match connect_with_config(&cfg).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {e}");
            return None;
        }
    };
    if let Err(e) = SCHEMA.get_or_try_init(|| models::schema::ensure_schema(&db)).await {
        eprintln!("skip: cannot ensure schema: {e}");
        return None;
    }
    Some(db)
}

/// Unique suffix so concurrent tests never collide on codes.
pub fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}
