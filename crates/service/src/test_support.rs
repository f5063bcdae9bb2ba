#![cfg(test)]
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use configs::DatabaseConfig;
use models::db::connect_with_config;

use crate::domain::{FruitInput, FruitRecord, NewFruit, NewProvider, ProviderInput, ProviderRecord};
use crate::store::{MemoryStore, Store, StoreError, StoreTx};
use crate::{FruitService, ProviderService};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn db_config() -> Option<DatabaseConfig> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return None; }
    let url = std::env::var("DATABASE_URL").ok()?;
    Some(DatabaseConfig { url, max_connections: 20, min_connections: 1, acquire_timeout_secs: 10, ..Default::default() })
}

/// Postgres connection for gateway tests, or `None` when no database is configured.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    let Some(cfg) = db_config() else {
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

/// Both orchestrators sharing one fresh in-memory store.
pub fn memory_services() -> (ProviderService, FruitService) {
    let store = Arc::new(MemoryStore::new());
    (ProviderService::new(store.clone()), FruitService::new(store))
}

pub fn provider_input(name: &str, country: &str) -> ProviderInput {
    ProviderInput { name: name.into(), country: country.into() }
}

pub fn fruit_input(name: &str, weight_in_kilos: i32, provider_id: i64) -> FruitInput {
    FruitInput { name: name.into(), weight_in_kilos, provider_id }
}

/// Gateway whose reads predate a concurrent commit: name and fruit-reference
/// checks answer "free", and lookups of absent rows return the row as it was
/// before someone else deleted it. Writes still hit the real constraints.
pub struct StaleReads(pub MemoryStore);

struct StaleTx(Box<dyn StoreTx>);

fn ghost_provider(id: i64) -> ProviderRecord {
    ProviderRecord { id, name: format!("Deleted {id}"), country: "Nowhere".into() }
}

#[async_trait]
impl Store for StaleReads {
    async fn begin(&self) -> Result<Box<dyn StoreTx>, StoreError> {
        Ok(Box::new(StaleTx(self.0.begin().await?)))
    }
}

#[async_trait]
impl StoreTx for StaleTx {
    async fn find_provider(&mut self, id: i64) -> Result<Option<ProviderRecord>, StoreError> {
        Ok(Some(self.0.find_provider(id).await?.unwrap_or_else(|| ghost_provider(id))))
    }
    async fn provider_exists(&mut self, id: i64) -> Result<bool, StoreError> { self.0.provider_exists(id).await }
    async fn provider_name_exists(&mut self, _: &str) -> Result<bool, StoreError> { Ok(false) }
    async fn list_providers(&mut self) -> Result<Vec<ProviderRecord>, StoreError> { self.0.list_providers().await }
    async fn insert_provider(&mut self, new: NewProvider) -> Result<ProviderRecord, StoreError> { self.0.insert_provider(new).await }
    async fn update_provider(&mut self, p: ProviderRecord) -> Result<ProviderRecord, StoreError> { self.0.update_provider(p).await }
    async fn delete_provider(&mut self, id: i64) -> Result<(), StoreError> { self.0.delete_provider(id).await }
    async fn provider_has_fruits(&mut self, _: i64) -> Result<bool, StoreError> { Ok(false) }
    async fn find_fruit(&mut self, id: i64) -> Result<Option<FruitRecord>, StoreError> {
        let found = self.0.find_fruit(id).await?;
        Ok(Some(found.unwrap_or_else(|| FruitRecord {
            id,
            name: "Deleted".into(),
            weight_in_kilos: 1,
            provider: ghost_provider(0),
        })))
    }
    async fn list_fruits(&mut self) -> Result<Vec<FruitRecord>, StoreError> { self.0.list_fruits().await }
    async fn list_fruits_by_provider(&mut self, id: i64) -> Result<Vec<FruitRecord>, StoreError> { self.0.list_fruits_by_provider(id).await }
    async fn insert_fruit(&mut self, new: NewFruit) -> Result<FruitRecord, StoreError> { self.0.insert_fruit(new).await }
    async fn update_fruit(&mut self, f: FruitRecord) -> Result<FruitRecord, StoreError> { self.0.update_fruit(f).await }
    async fn commit(self: Box<Self>) -> Result<(), StoreError> { self.0.commit().await }
}
