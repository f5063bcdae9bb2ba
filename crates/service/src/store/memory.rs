//! In-process gateway with the same constraint semantics as the Postgres schema.
//!
//! A transaction holds the table lock for its whole lifetime and works on a private copy,
//! which replaces the shared tables on commit. Dropping the transaction discards the copy.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::{FruitRecord, NewFruit, NewProvider, ProviderRecord};
use crate::store::{Store, StoreError, StoreTx};

#[derive(Debug, Clone)]
struct FruitRow {
    name: String,
    weight_in_kilos: i32,
    provider_id: i64,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    providers: BTreeMap<i64, ProviderRecord>,
    fruits: BTreeMap<i64, FruitRow>,
    provider_seq: i64,
    fruit_seq: i64,
}

impl Tables {
    fn name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.providers.values().any(|p| p.name == name && Some(p.id) != except)
    }

    fn provider(&self, id: i64) -> Result<ProviderRecord, StoreError> {
        self.providers
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::ForeignKeyViolation(format!("fk_fruit_provider: provider {id} does not exist")))
    }

    fn fruit_record(&self, id: i64, row: &FruitRow) -> Result<FruitRecord, StoreError> {
        let provider = self.providers.get(&row.provider_id).cloned().ok_or_else(|| {
            StoreError::Backend(format!("fruit {id} references a missing provider"))
        })?;
        Ok(FruitRecord { id, name: row.name.clone(), weight_in_kilos: row.weight_in_kilos, provider })
    }
}

/// Cloning shares the underlying tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

pub struct MemoryTx {
    guard: OwnedMutexGuard<Tables>,
    work: Tables,
}

#[async_trait]
impl Store for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn StoreTx>, StoreError> {
        let guard = Arc::clone(&self.tables).lock_owned().await;
        let work = guard.clone();
        Ok(Box::new(MemoryTx { guard, work }))
    }
}

#[async_trait]
impl StoreTx for MemoryTx {
    async fn find_provider(&mut self, id: i64) -> Result<Option<ProviderRecord>, StoreError> {
        Ok(self.work.providers.get(&id).cloned())
    }

    async fn provider_exists(&mut self, id: i64) -> Result<bool, StoreError> {
        Ok(self.work.providers.contains_key(&id))
    }

    async fn provider_name_exists(&mut self, name: &str) -> Result<bool, StoreError> {
        Ok(self.work.name_taken(name, None))
    }

    async fn list_providers(&mut self) -> Result<Vec<ProviderRecord>, StoreError> {
        Ok(self.work.providers.values().cloned().collect())
    }

    async fn insert_provider(&mut self, new: NewProvider) -> Result<ProviderRecord, StoreError> {
        if self.work.name_taken(&new.name, None) {
            return Err(StoreError::UniqueViolation(format!("provider_name_key: {}", new.name)));
        }
        self.work.provider_seq += 1;
        let record = ProviderRecord { id: self.work.provider_seq, name: new.name, country: new.country };
        self.work.providers.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_provider(&mut self, provider: ProviderRecord) -> Result<ProviderRecord, StoreError> {
        if !self.work.providers.contains_key(&provider.id) {
            return Err(StoreError::Missing(format!("no provider row with id {}", provider.id)));
        }
        if self.work.name_taken(&provider.name, Some(provider.id)) {
            return Err(StoreError::UniqueViolation(format!("provider_name_key: {}", provider.name)));
        }
        self.work.providers.insert(provider.id, provider.clone());
        Ok(provider)
    }

    async fn delete_provider(&mut self, id: i64) -> Result<(), StoreError> {
        if self.work.fruits.values().any(|f| f.provider_id == id) {
            return Err(StoreError::ForeignKeyViolation(format!("fk_fruit_provider: provider {id} is still referenced")));
        }
        self.work.providers.remove(&id);
        Ok(())
    }

    async fn provider_has_fruits(&mut self, provider_id: i64) -> Result<bool, StoreError> {
        Ok(self.work.fruits.values().any(|f| f.provider_id == provider_id))
    }

    async fn find_fruit(&mut self, id: i64) -> Result<Option<FruitRecord>, StoreError> {
        self.work.fruits.get(&id).map(|row| self.work.fruit_record(id, row)).transpose()
    }

    async fn list_fruits(&mut self) -> Result<Vec<FruitRecord>, StoreError> {
        self.work.fruits.iter().map(|(id, row)| self.work.fruit_record(*id, row)).collect()
    }

    async fn list_fruits_by_provider(&mut self, provider_id: i64) -> Result<Vec<FruitRecord>, StoreError> {
        self.work
            .fruits
            .iter()
            .filter(|(_, row)| row.provider_id == provider_id)
            .map(|(id, row)| self.work.fruit_record(*id, row))
            .collect()
    }

    async fn insert_fruit(&mut self, new: NewFruit) -> Result<FruitRecord, StoreError> {
        let provider = self.work.provider(new.provider.id)?;
        self.work.fruit_seq += 1;
        let id = self.work.fruit_seq;
        let row = FruitRow { name: new.name, weight_in_kilos: new.weight_in_kilos, provider_id: provider.id };
        let record = FruitRecord { id, name: row.name.clone(), weight_in_kilos: row.weight_in_kilos, provider };
        self.work.fruits.insert(id, row);
        Ok(record)
    }

    async fn update_fruit(&mut self, fruit: FruitRecord) -> Result<FruitRecord, StoreError> {
        if !self.work.fruits.contains_key(&fruit.id) {
            return Err(StoreError::Missing(format!("no fruit row with id {}", fruit.id)));
        }
        let provider = self.work.provider(fruit.provider.id)?;
        let row = FruitRow { name: fruit.name.clone(), weight_in_kilos: fruit.weight_in_kilos, provider_id: provider.id };
        self.work.fruits.insert(fruit.id, row);
        Ok(FruitRecord { provider, ..fruit })
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let MemoryTx { mut guard, work } = *self;
        *guard = work;
        Ok(())
    }
}
