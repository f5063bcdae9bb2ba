//! Pure translation between request/response shapes and storage records.

use crate::domain::{
    FruitInput, FruitRecord, FruitResponse, NewFruit, NewProvider, ProviderInput, ProviderRecord,
    ProviderResponse,
};

impl From<ProviderInput> for NewProvider {
    fn from(input: ProviderInput) -> Self {
        Self { name: input.name, country: input.country }
    }
}

impl From<ProviderRecord> for ProviderResponse {
    fn from(record: ProviderRecord) -> Self {
        Self { id: record.id, name: record.name, country: record.country }
    }
}

impl From<FruitRecord> for FruitResponse {
    fn from(record: FruitRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            weight_in_kilos: record.weight_in_kilos,
            provider: record.provider.into(),
        }
    }
}

/// Build an unsaved fruit from validated input and its already-resolved provider.
/// `input.provider_id` is not consulted; the record carries `provider` itself.
pub fn new_fruit(input: FruitInput, provider: ProviderRecord) -> NewFruit {
    NewFruit { name: input.name, weight_in_kilos: input.weight_in_kilos, provider }
}
