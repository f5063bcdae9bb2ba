use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::{FruitInput, FruitResponse};
use crate::errors::ServiceError;
use crate::mapper;
use crate::store::{Store, StoreError};

/// Fruit lifecycle: a fruit always points at an existing provider.
pub struct FruitService {
    store: Arc<dyn Store>,
}

/// A foreign-key hit means the provider vanished after it was resolved.
fn provider_gone(provider_id: i64) -> impl FnOnce(StoreError) -> ServiceError {
    move |err| match err {
        StoreError::ForeignKeyViolation(_) => ServiceError::provider_not_found(provider_id),
        other => other.into(),
    }
}

impl FruitService {
    pub fn new(store: Arc<dyn Store>) -> Self { Self { store } }

    #[instrument(skip(self, input), fields(provider_id = input.provider_id, name = %input.name))]
    pub async fn create(&self, input: FruitInput) -> Result<FruitResponse, ServiceError> {
        let provider_id = input.provider_id;
        let mut tx = self.store.begin().await?;
        let provider = tx.find_provider(provider_id).await?.ok_or_else(|| {
            warn!("provider_missing");
            ServiceError::provider_not_found(provider_id)
        })?;
        let saved = tx
            .insert_fruit(mapper::new_fruit(input, provider))
            .await
            .map_err(provider_gone(provider_id))?;
        tx.commit().await.map_err(provider_gone(provider_id))?;
        info!(fruit_id = saved.id, "fruit_created");
        Ok(saved.into())
    }

    /// Fruits of one provider. An existing provider without fruits yields an empty list.
    pub async fn get_by_provider_id(&self, provider_id: i64) -> Result<Vec<FruitResponse>, ServiceError> {
        let mut tx = self.store.begin().await?;
        if !tx.provider_exists(provider_id).await? {
            return Err(ServiceError::provider_not_found(provider_id));
        }
        let rows = tx.list_fruits_by_provider(provider_id).await?;
        tx.commit().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get_all(&self) -> Result<Vec<FruitResponse>, ServiceError> {
        let mut tx = self.store.begin().await?;
        let rows = tx.list_fruits().await?;
        tx.commit().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<FruitResponse, ServiceError> {
        let mut tx = self.store.begin().await?;
        let found = tx.find_fruit(id).await?.ok_or_else(|| ServiceError::fruit_not_found(id))?;
        tx.commit().await?;
        Ok(found.into())
    }

    /// Overwrite name, weight and provider. The fruit is resolved before the provider.
    #[instrument(skip(self, input), fields(fruit_id = id, provider_id = input.provider_id))]
    pub async fn update(&self, id: i64, input: FruitInput) -> Result<FruitResponse, ServiceError> {
        let provider_id = input.provider_id;
        let mut tx = self.store.begin().await?;
        let mut fruit = tx.find_fruit(id).await?.ok_or_else(|| {
            warn!("fruit_missing");
            ServiceError::fruit_not_found(id)
        })?;
        let provider = tx.find_provider(provider_id).await?.ok_or_else(|| {
            warn!("provider_missing");
            ServiceError::provider_not_found(provider_id)
        })?;
        fruit.name = input.name;
        fruit.weight_in_kilos = input.weight_in_kilos;
        fruit.provider = provider;
        let lost_race = |err: StoreError| match err {
            StoreError::Missing(_) => ServiceError::fruit_not_found(id),
            other => provider_gone(provider_id)(other),
        };
        let saved = tx.update_fruit(fruit).await.map_err(lost_race)?;
        tx.commit().await.map_err(lost_race)?;
        info!("fruit_updated");
        Ok(saved.into())
    }
}
