use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use configs::DatabaseConfig;

use crate::db::connect_with_config;



/// Transaction handling tests
pub mod transaction_tests;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connect and migrate, or `None` when no database is configured.
pub(crate) async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    let Some(cfg) = test_db_config() else {
        eprintln!("skip: DATABASE_URL missing or SKIP_DB_TESTS set");
        return Ok(None);
    };
    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect_with_config(&cfg).await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;
    Ok(Some(connect_with_config(&cfg).await?))
}

/// Pool settings for tests, or `None` when no database is configured.
pub(crate) fn test_db_config() -> Option<DatabaseConfig> {
    let _ = dotenvy::dotenv();
    if std::env::var("SKIP_DB_TESTS").is_ok() { return None; }
    let url = std::env::var("DATABASE_URL").ok()?;
    Some(DatabaseConfig { url, min_connections: 1, ..Default::default() })
}
