use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use service::domain::{FruitRequest, FruitResponse};

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::openapi::{ErrorDoc, FruitDoc, FruitRequestDoc};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByProvider {
    pub provider_id: i64,
}

#[utoipa::path(
    post,
    path = "/fruits",
    request_body = FruitRequestDoc,
    responses(
        (status = 201, description = "Created", body = FruitDoc),
        (status = 400, description = "Validation Error", body = ErrorDoc),
        (status = 404, description = "provider not found", body = ErrorDoc)
    ),
    tag = "fruits"
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<FruitRequest>,
) -> Result<(StatusCode, Json<FruitResponse>), JsonApiError> {
    let input = body.validate()?;
    let created = state.fruits.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/fruits",
    params(("providerId" = i64, Query, description = "owning provider id")),
    responses((status = 200, description = "OK", body = [FruitDoc]), (status = 404, description = "Not Found", body = ErrorDoc)),
    tag = "fruits"
)]
pub async fn by_provider(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<ByProvider>,
) -> Result<Json<Vec<FruitResponse>>, JsonApiError> {
    Ok(Json(state.fruits.get_by_provider_id(q.provider_id).await?))
}

#[utoipa::path(get, path = "/fruits/all", responses((status = 200, description = "OK", body = [FruitDoc])), tag = "fruits")]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<FruitResponse>>, JsonApiError> {
    Ok(Json(state.fruits.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/fruits/{id}",
    params(("id" = i64, Path, description = "fruit id")),
    responses((status = 200, description = "OK", body = FruitDoc), (status = 404, description = "Not Found", body = ErrorDoc)),
    tag = "fruits"
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<FruitResponse>, JsonApiError> {
    Ok(Json(state.fruits.get_by_id(id).await?))
}

#[utoipa::path(
    put,
    path = "/fruits/{id}",
    params(("id" = i64, Path, description = "fruit id")),
    request_body = FruitRequestDoc,
    responses(
        (status = 200, description = "OK", body = FruitDoc),
        (status = 400, description = "Validation Error", body = ErrorDoc),
        (status = 404, description = "fruit or provider not found", body = ErrorDoc)
    ),
    tag = "fruits"
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<FruitRequest>,
) -> Result<Json<FruitResponse>, JsonApiError> {
    let input = body.validate()?;
    Ok(Json(state.fruits.update(id, input).await?))
}
