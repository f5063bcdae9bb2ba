use axum::{extract::State, http::StatusCode, Json};
use service::domain::{ProviderRequest, ProviderResponse};

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::openapi::{ErrorDoc, ProviderDoc, ProviderRequestDoc};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/providers",
    request_body = ProviderRequestDoc,
    responses(
        (status = 201, description = "Created", body = ProviderDoc),
        (status = 400, description = "Validation Error", body = ErrorDoc),
        (status = 409, description = "name already taken", body = ErrorDoc)
    ),
    tag = "providers"
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ProviderRequest>,
) -> Result<(StatusCode, Json<ProviderResponse>), JsonApiError> {
    let input = body.validate()?;
    let created = state.providers.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/providers", responses((status = 200, description = "OK", body = [ProviderDoc])), tag = "providers")]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProviderResponse>>, JsonApiError> {
    Ok(Json(state.providers.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/providers/{id}",
    params(("id" = i64, Path, description = "provider id")),
    responses((status = 200, description = "OK", body = ProviderDoc), (status = 404, description = "Not Found", body = ErrorDoc)),
    tag = "providers"
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ProviderResponse>, JsonApiError> {
    Ok(Json(state.providers.get_by_id(id).await?))
}

#[utoipa::path(
    put,
    path = "/providers/{id}",
    params(("id" = i64, Path, description = "provider id")),
    request_body = ProviderRequestDoc,
    responses(
        (status = 200, description = "OK", body = ProviderDoc),
        (status = 400, description = "Validation Error", body = ErrorDoc),
        (status = 404, description = "Not Found", body = ErrorDoc),
        (status = 409, description = "name already taken", body = ErrorDoc)
    ),
    tag = "providers"
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<ProviderRequest>,
) -> Result<Json<ProviderResponse>, JsonApiError> {
    let input = body.validate()?;
    Ok(Json(state.providers.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/providers/{id}",
    params(("id" = i64, Path, description = "provider id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorDoc),
        (status = 409, description = "provider still has fruits", body = ErrorDoc)
    ),
    tag = "providers"
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, JsonApiError> {
    state.providers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
