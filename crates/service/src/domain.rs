use serde::{Deserialize, Serialize};

/// Stored provider row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRecord {
    pub id: i64,
    pub name: String,
    pub country: String,
}

/// Provider row not yet persisted; storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProvider {
    pub name: String,
    pub country: String,
}

/// Stored fruit row with its provider resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FruitRecord {
    pub id: i64,
    pub name: String,
    pub weight_in_kilos: i32,
    pub provider: ProviderRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFruit {
    pub name: String,
    pub weight_in_kilos: i32,
    pub provider: ProviderRecord,
}

/// Provider create/update body as received on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Fruit create/update body as received on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weight_in_kilos: Option<i32>,
    #[serde(default)]
    pub provider_id: Option<i64>,
}

/// Validated provider fields, produced by `ProviderRequest::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInput {
    pub name: String,
    pub country: String,
}

/// Validated fruit fields, produced by `FruitRequest::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FruitInput {
    pub name: String,
    pub weight_in_kilos: i32,
    pub provider_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub id: i64,
    pub name: String,
    pub country: String,
}

/// Fruit as returned to clients; the provider is embedded in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitResponse {
    pub id: i64,
    pub name: String,
    pub weight_in_kilos: i32,
    pub provider: ProviderResponse,
}
