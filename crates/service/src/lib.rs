//! Service layer enforcing provider/fruit business rules on top of the storage gateway.
//! - Request shapes are validated explicitly before any orchestrator call.
//! - Orchestrators run every operation inside one storage transaction.
//! - Failures are distinct `ServiceError` variants so the HTTP surface can map them to statuses.

pub mod errors;
pub mod domain;
pub mod validation;
pub mod mapper;
pub mod store;
pub mod provider_service;
pub mod fruit_service;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use fruit_service::FruitService;
pub use provider_service::ProviderService;
