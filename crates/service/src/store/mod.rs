//! Storage gateway: transactional access to provider and fruit rows.
//!
//! Every orchestrator call opens one [`StoreTx`], performs its checks and writes through it,
//! and commits at the end. Dropping a transaction without committing discards its writes.
//! Implementations enforce the same constraints as the database schema (unique provider
//! name, fruit → provider foreign key restricting deletes) and report violations as
//! dedicated [`StoreError`] variants.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{FruitRecord, NewFruit, NewProvider, ProviderRecord};

pub mod memory;
pub mod seaorm;

pub use memory::MemoryStore;
pub use seaorm::SeaOrmStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    /// An update targeted a row that no longer exists.
    #[error("row not found: {0}")]
    Missing(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn StoreTx>, StoreError>;
}

/// One unit of work against storage. Lists come back in ascending id order.
#[async_trait]
pub trait StoreTx: Send {
    async fn find_provider(&mut self, id: i64) -> Result<Option<ProviderRecord>, StoreError>;
    async fn provider_exists(&mut self, id: i64) -> Result<bool, StoreError>;
    async fn provider_name_exists(&mut self, name: &str) -> Result<bool, StoreError>;
    async fn list_providers(&mut self) -> Result<Vec<ProviderRecord>, StoreError>;
    async fn insert_provider(&mut self, new: NewProvider) -> Result<ProviderRecord, StoreError>;
    async fn update_provider(&mut self, provider: ProviderRecord) -> Result<ProviderRecord, StoreError>;
    async fn delete_provider(&mut self, id: i64) -> Result<(), StoreError>;
    async fn provider_has_fruits(&mut self, provider_id: i64) -> Result<bool, StoreError>;

    async fn find_fruit(&mut self, id: i64) -> Result<Option<FruitRecord>, StoreError>;
    async fn list_fruits(&mut self) -> Result<Vec<FruitRecord>, StoreError>;
    async fn list_fruits_by_provider(&mut self, provider_id: i64) -> Result<Vec<FruitRecord>, StoreError>;
    async fn insert_fruit(&mut self, new: NewFruit) -> Result<FruitRecord, StoreError>;
    async fn update_fruit(&mut self, fruit: FruitRecord) -> Result<FruitRecord, StoreError>;

    async fn commit(self: Box<Self>) -> Result<(), StoreError>;
}
