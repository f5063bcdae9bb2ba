use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

// Wire shapes for the generated document; handlers use the service types directly.

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ProviderRequestDoc { pub name: String, pub country: String }

#[derive(Serialize, ToSchema)]
pub struct ProviderDoc { pub id: i64, pub name: String, pub country: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FruitRequestDoc {
    pub name: String,
    pub weight_in_kilos: i32,
    pub provider_id: i64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FruitDoc {
    pub id: i64,
    pub name: String,
    pub weight_in_kilos: i32,
    pub provider: ProviderDoc,
}

#[derive(Serialize, ToSchema)]
pub struct FieldErrorDoc { pub field: String, pub message: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc {
    pub message: String,
    pub errors: Option<Vec<FieldErrorDoc>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::providers::create,
        crate::routes::providers::list,
        crate::routes::providers::get,
        crate::routes::providers::update,
        crate::routes::providers::delete,
        crate::routes::fruits::create,
        crate::routes::fruits::by_provider,
        crate::routes::fruits::list,
        crate::routes::fruits::get,
        crate::routes::fruits::update,
    ),
    components(
        schemas(
            HealthResponse,
            ProviderRequestDoc,
            ProviderDoc,
            FruitRequestDoc,
            FruitDoc,
            FieldErrorDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "providers"),
        (name = "fruits")
    )
)]
pub struct ApiDoc;
