use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::{ProviderInput, ProviderResponse};
use crate::errors::ServiceError;
use crate::store::{Store, StoreError};

/// Provider lifecycle: unique names, and no deletion while fruits reference the provider.
pub struct ProviderService {
    store: Arc<dyn Store>,
}

/// A unique-index hit means another request won the race for `name`.
fn name_clash(name: &str) -> impl FnOnce(StoreError) -> ServiceError + '_ {
    move |err| match err {
        StoreError::UniqueViolation(_) => ServiceError::duplicate_provider(name),
        other => other.into(),
    }
}

impl ProviderService {
    pub fn new(store: Arc<dyn Store>) -> Self { Self { store } }

    /// Create a provider with a name no other provider uses.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{ProviderService, domain::ProviderInput, store::MemoryStore};
    /// let svc = ProviderService::new(Arc::new(MemoryStore::new()));
    /// let input = ProviderInput { name: "Fruits Inc".into(), country: "Spain".into() };
    /// let created = tokio_test::block_on(svc.create(input.clone())).unwrap();
    /// assert_eq!(created.id, 1);
    /// let dup = tokio_test::block_on(svc.create(input));
    /// assert_eq!(dup.unwrap_err().to_string(), "Provider with name 'Fruits Inc' already exists");
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: ProviderInput) -> Result<ProviderResponse, ServiceError> {
        let mut tx = self.store.begin().await?;
        if tx.provider_name_exists(&input.name).await? {
            warn!("provider_name_taken");
            return Err(ServiceError::duplicate_provider(&input.name));
        }
        let name = input.name.clone();
        let saved = tx.insert_provider(input.into()).await.map_err(name_clash(&name))?;
        tx.commit().await.map_err(name_clash(&name))?;
        info!(provider_id = saved.id, "provider_created");
        Ok(saved.into())
    }

    pub async fn get_all(&self) -> Result<Vec<ProviderResponse>, ServiceError> {
        let mut tx = self.store.begin().await?;
        let rows = tx.list_providers().await?;
        tx.commit().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ProviderResponse, ServiceError> {
        let mut tx = self.store.begin().await?;
        let found = tx.find_provider(id).await?.ok_or_else(|| ServiceError::provider_not_found(id))?;
        tx.commit().await?;
        Ok(found.into())
    }

    /// Replace name and country. Keeping the current name never counts as a duplicate.
    #[instrument(skip(self, input), fields(provider_id = id, name = %input.name))]
    pub async fn update(&self, id: i64, input: ProviderInput) -> Result<ProviderResponse, ServiceError> {
        let mut tx = self.store.begin().await?;
        let mut provider = tx.find_provider(id).await?.ok_or_else(|| {
            warn!("provider_missing");
            ServiceError::provider_not_found(id)
        })?;
        if provider.name != input.name && tx.provider_name_exists(&input.name).await? {
            warn!("provider_name_taken");
            return Err(ServiceError::duplicate_provider(&input.name));
        }
        let name = input.name.clone();
        let lost_race = |err: StoreError| match err {
            StoreError::UniqueViolation(_) => ServiceError::duplicate_provider(&name),
            StoreError::Missing(_) => ServiceError::provider_not_found(id),
            other => other.into(),
        };
        provider.name = input.name;
        provider.country = input.country;
        let saved = tx.update_provider(provider).await.map_err(lost_race)?;
        tx.commit().await.map_err(lost_race)?;
        info!("provider_updated");
        Ok(saved.into())
    }

    /// Refused with `Conflict` while any fruit references the provider; fruits are never cascaded.
    #[instrument(skip(self), fields(provider_id = id))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let in_use = || ServiceError::provider_has_fruits(id);
        let mut tx = self.store.begin().await?;
        if !tx.provider_exists(id).await? {
            warn!("provider_missing");
            return Err(ServiceError::provider_not_found(id));
        }
        if tx.provider_has_fruits(id).await? {
            warn!("provider_in_use");
            return Err(in_use());
        }
        let fk = |err: StoreError| match err {
            StoreError::ForeignKeyViolation(_) => in_use(),
            other => ServiceError::from(other),
        };
        tx.delete_provider(id).await.map_err(fk)?;
        tx.commit().await.map_err(fk)?;
        info!("provider_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::test_support::{fruit_input, memory_services, provider_input, StaleReads};

    #[tokio::test]
    async fn create_assigns_id_and_returns_fields() {
        let (providers, _) = memory_services();
        let created = providers.create(provider_input("Fruits Inc", "Spain")).await.unwrap();
        assert_eq!(created, ProviderResponse { id: 1, name: "Fruits Inc".into(), country: "Spain".into() });
    }

    #[tokio::test]
    async fn duplicate_name_rejected_regardless_of_country() {
        let (providers, _) = memory_services();
        providers.create(provider_input("Fruits Inc", "Spain")).await.unwrap();
        for country in ["Spain", "France"] {
            let err = providers.create(provider_input("Fruits Inc", country)).await.unwrap_err();
            assert!(matches!(err, ServiceError::DuplicateName(_)));
            assert_eq!(err.to_string(), "Provider with name 'Fruits Inc' already exists");
        }
        assert_eq!(providers.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_all_empty_then_in_insertion_order() {
        let (providers, _) = memory_services();
        assert!(providers.get_all().await.unwrap().is_empty());
        providers.create(provider_input("Fruits Inc", "Spain")).await.unwrap();
        providers.create(provider_input("Veggies Ltd", "France")).await.unwrap();
        let names: Vec<_> = providers.get_all().await.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Fruits Inc", "Veggies Ltd"]);
    }

    #[tokio::test]
    async fn get_by_id_missing() {
        let (providers, _) = memory_services();
        let err = providers.get_by_id(999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Provider with id 999 not found");
    }

    #[tokio::test]
    async fn update_overwrites_fields() {
        let (providers, _) = memory_services();
        let p = providers.create(provider_input("Fruits Inc", "Spain")).await.unwrap();
        let updated = providers.update(p.id, provider_input("Updated Fruits Inc", "Italy")).await.unwrap();
        assert_eq!(updated, ProviderResponse { id: p.id, name: "Updated Fruits Inc".into(), country: "Italy".into() });
        assert_eq!(providers.get_by_id(p.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_to_own_name_allowed() {
        let (providers, _) = memory_services();
        let p = providers.create(provider_input("Fruits Inc", "Spain")).await.unwrap();
        let updated = providers.update(p.id, provider_input("Fruits Inc", "Portugal")).await.unwrap();
        assert_eq!(updated.country, "Portugal");
    }

    #[tokio::test]
    async fn update_to_other_providers_name_rejected() {
        let (providers, _) = memory_services();
        let a = providers.create(provider_input("Fruits Inc", "Spain")).await.unwrap();
        providers.create(provider_input("Veggies Ltd", "France")).await.unwrap();
        let err = providers.update(a.id, provider_input("Veggies Ltd", "Spain")).await.unwrap_err();
        assert_eq!(err.to_string(), "Provider with name 'Veggies Ltd' already exists");
        assert_eq!(providers.get_by_id(a.id).await.unwrap().name, "Fruits Inc");
    }

    #[tokio::test]
    async fn update_missing_checked_before_name() {
        let (providers, _) = memory_services();
        providers.create(provider_input("Fruits Inc", "Spain")).await.unwrap();
        let err = providers.update(999, provider_input("Fruits Inc", "Spain")).await.unwrap_err();
        assert_eq!(err.to_string(), "Provider with id 999 not found");
    }

    #[tokio::test]
    async fn delete_without_fruits_then_not_found() {
        let (providers, _) = memory_services();
        let p = providers.create(provider_input("Fruits Inc", "Spain")).await.unwrap();
        providers.delete(p.id).await.unwrap();
        assert!(matches!(providers.get_by_id(p.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(providers.delete(p.id).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_with_fruits_conflicts_and_keeps_provider() {
        let (providers, fruits) = memory_services();
        let p = providers.create(provider_input("Fruits Inc", "Spain")).await.unwrap();
        fruits.create(fruit_input("Apple", 10, p.id)).await.unwrap();

        let err = providers.delete(p.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(err.to_string(), "Cannot delete provider with id 1 because it has associated fruits");
        assert_eq!(providers.get_by_id(p.id).await.unwrap(), p);
        assert_eq!(fruits.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lost_race_on_unique_index_is_duplicate_name() {
        let mem = MemoryStore::new();
        ProviderService::new(Arc::new(mem.clone())).create(provider_input("Fruits Inc", "Spain")).await.unwrap();

        let racing = ProviderService::new(Arc::new(StaleReads(mem)));
        let err = racing.create(provider_input("Fruits Inc", "France")).await.unwrap_err();
        assert_eq!(err.to_string(), "Provider with name 'Fruits Inc' already exists");
    }

    #[tokio::test]
    async fn lost_race_on_rename_is_duplicate_name() {
        let mem = MemoryStore::new();
        let providers = ProviderService::new(Arc::new(mem.clone()));
        let a = providers.create(provider_input("Fruits Inc", "Spain")).await.unwrap();
        providers.create(provider_input("Veggies Ltd", "France")).await.unwrap();

        let racing = ProviderService::new(Arc::new(StaleReads(mem)));
        let err = racing.update(a.id, provider_input("Veggies Ltd", "Spain")).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateName(_)));
        assert_eq!(err.to_string(), "Provider with name 'Veggies Ltd' already exists");
        assert_eq!(providers.get_by_id(a.id).await.unwrap().name, "Fruits Inc");
    }

    #[tokio::test]
    async fn update_of_concurrently_deleted_provider_is_not_found() {
        let mem = MemoryStore::new();
        let racing = ProviderService::new(Arc::new(StaleReads(mem.clone())));
        let err = racing.update(5, provider_input("Fruits Inc", "Spain")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "Provider with id 5 not found");
        assert!(ProviderService::new(Arc::new(mem)).get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lost_race_on_foreign_key_is_conflict() {
        let mem = MemoryStore::new();
        let (providers, fruits) = (ProviderService::new(Arc::new(mem.clone())), crate::FruitService::new(Arc::new(mem.clone())));
        let p = providers.create(provider_input("Fruits Inc", "Spain")).await.unwrap();
        fruits.create(fruit_input("Apple", 10, p.id)).await.unwrap();

        let racing = ProviderService::new(Arc::new(StaleReads(mem)));
        let err = racing.delete(p.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert!(providers.get_by_id(p.id).await.is_ok());
    }
}
