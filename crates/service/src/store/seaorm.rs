use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    NotSet, PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait, Unchanged,
};

use models::{fruit, provider};

use crate::domain::{FruitRecord, NewFruit, NewProvider, ProviderRecord};
use crate::store::{Store, StoreError, StoreTx};

/// SeaORM-backed gateway over a Postgres pool.
#[derive(Clone)]
pub struct SeaOrmStore {
    pub db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

pub struct SeaOrmTx {
    txn: DatabaseTransaction,
}

fn classify(err: DbErr) -> StoreError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return StoreError::Missing(err.to_string());
    }
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => StoreError::UniqueViolation(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => StoreError::ForeignKeyViolation(msg),
        _ => StoreError::Backend(err.to_string()),
    }
}

impl From<provider::Model> for ProviderRecord {
    fn from(m: provider::Model) -> Self {
        Self { id: m.id, name: m.name, country: m.country }
    }
}

fn fruit_record(row: (fruit::Model, Option<provider::Model>)) -> Result<FruitRecord, StoreError> {
    let (f, p) = row;
    let p = p.ok_or_else(|| StoreError::Backend(format!("fruit {} references a missing provider", f.id)))?;
    Ok(FruitRecord { id: f.id, name: f.name, weight_in_kilos: f.weight_in_kilos, provider: p.into() })
}

#[async_trait]
impl Store for SeaOrmStore {
    async fn begin(&self) -> Result<Box<dyn StoreTx>, StoreError> {
        let txn = self.db.begin().await.map_err(classify)?;
        Ok(Box::new(SeaOrmTx { txn }))
    }
}

#[async_trait]
impl StoreTx for SeaOrmTx {
    async fn find_provider(&mut self, id: i64) -> Result<Option<ProviderRecord>, StoreError> {
        let found = provider::Entity::find_by_id(id).one(&self.txn).await.map_err(classify)?;
        Ok(found.map(Into::into))
    }

    async fn provider_exists(&mut self, id: i64) -> Result<bool, StoreError> {
        let n = provider::Entity::find_by_id(id).count(&self.txn).await.map_err(classify)?;
        Ok(n > 0)
    }

    async fn provider_name_exists(&mut self, name: &str) -> Result<bool, StoreError> {
        let n = provider::Entity::find()
            .filter(provider::Column::Name.eq(name))
            .count(&self.txn)
            .await
            .map_err(classify)?;
        Ok(n > 0)
    }

    async fn list_providers(&mut self) -> Result<Vec<ProviderRecord>, StoreError> {
        let rows = provider::Entity::find()
            .order_by_asc(provider::Column::Id)
            .all(&self.txn)
            .await
            .map_err(classify)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_provider(&mut self, new: NewProvider) -> Result<ProviderRecord, StoreError> {
        let am = provider::ActiveModel { id: NotSet, name: Set(new.name), country: Set(new.country) };
        let saved = am.insert(&self.txn).await.map_err(classify)?;
        Ok(saved.into())
    }

    async fn update_provider(&mut self, p: ProviderRecord) -> Result<ProviderRecord, StoreError> {
        let am = provider::ActiveModel { id: Unchanged(p.id), name: Set(p.name), country: Set(p.country) };
        let saved = am.update(&self.txn).await.map_err(classify)?;
        Ok(saved.into())
    }

    async fn delete_provider(&mut self, id: i64) -> Result<(), StoreError> {
        provider::Entity::delete_by_id(id).exec(&self.txn).await.map_err(classify)?;
        Ok(())
    }

    async fn provider_has_fruits(&mut self, provider_id: i64) -> Result<bool, StoreError> {
        let n = fruit::Entity::find()
            .filter(fruit::Column::ProviderId.eq(provider_id))
            .count(&self.txn)
            .await
            .map_err(classify)?;
        Ok(n > 0)
    }

    async fn find_fruit(&mut self, id: i64) -> Result<Option<FruitRecord>, StoreError> {
        let row = fruit::Entity::find_by_id(id)
            .find_also_related(provider::Entity)
            .one(&self.txn)
            .await
            .map_err(classify)?;
        row.map(fruit_record).transpose()
    }

    async fn list_fruits(&mut self) -> Result<Vec<FruitRecord>, StoreError> {
        let rows = fruit::Entity::find()
            .find_also_related(provider::Entity)
            .order_by_asc(fruit::Column::Id)
            .all(&self.txn)
            .await
            .map_err(classify)?;
        rows.into_iter().map(fruit_record).collect()
    }

    async fn list_fruits_by_provider(&mut self, provider_id: i64) -> Result<Vec<FruitRecord>, StoreError> {
        let rows = fruit::Entity::find()
            .filter(fruit::Column::ProviderId.eq(provider_id))
            .find_also_related(provider::Entity)
            .order_by_asc(fruit::Column::Id)
            .all(&self.txn)
            .await
            .map_err(classify)?;
        rows.into_iter().map(fruit_record).collect()
    }

    async fn insert_fruit(&mut self, new: NewFruit) -> Result<FruitRecord, StoreError> {
        let am = fruit::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            weight_in_kilos: Set(new.weight_in_kilos),
            provider_id: Set(new.provider.id),
        };
        let saved = am.insert(&self.txn).await.map_err(classify)?;
        Ok(FruitRecord { id: saved.id, name: saved.name, weight_in_kilos: saved.weight_in_kilos, provider: new.provider })
    }

    async fn update_fruit(&mut self, f: FruitRecord) -> Result<FruitRecord, StoreError> {
        let am = fruit::ActiveModel {
            id: Unchanged(f.id),
            name: Set(f.name),
            weight_in_kilos: Set(f.weight_in_kilos),
            provider_id: Set(f.provider.id),
        };
        let saved = am.update(&self.txn).await.map_err(classify)?;
        Ok(FruitRecord { id: saved.id, name: saved.name, weight_in_kilos: saved.weight_in_kilos, provider: f.provider })
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let SeaOrmTx { txn } = *self;
        txn.commit().await.map_err(classify)
    }
}
