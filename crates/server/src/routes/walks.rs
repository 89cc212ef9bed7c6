use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use service::walk::WalkInput;
use tracing::info;
use uuid::Uuid;

use crate::dto::{AddWalkRequest, ListParams, UpdateWalkRequest, WalkDto};
use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::metrics::track;
use crate::state::ServerState;

const RESOURCE: &str = "walk";

#[utoipa::path(
    get, path = "/api/walks", tag = "walks",
    params(ListParams),
    responses(
        (status = 200, description = "List OK", body = [WalkDto]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<ServerState>, Query(params): Query<ListParams>) -> Result<Json<Vec<WalkDto>>, ApiError> {
    track(RESOURCE, "list", async {
        let walks = state.services.walks.list(&params.into()).await?;
        Ok(Json(walks.into_iter().map(WalkDto::from).collect()))
    })
    .await
}

#[utoipa::path(
    get, path = "/api/walks/{id}", tag = "walks",
    params(("id" = Uuid, Path, description = "Walk ID")),
    responses(
        (status = 200, description = "OK", body = WalkDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<WalkDto>, ApiError> {
    track(RESOURCE, "get", async {
        let walk = state.services.walks.get(id).await?.ok_or(ApiError::NotFound)?;
        Ok(Json(walk.into()))
    })
    .await
}

#[utoipa::path(
    post, path = "/api/walks", tag = "walks",
    request_body = AddWalkRequest,
    responses(
        (status = 201, description = "Created", body = WalkDto),
        (status = 400, description = "Validation Error", body = crate::errors::ValidationProblem)
    )
)]
pub async fn create(State(state): State<ServerState>, ApiJson(req): ApiJson<AddWalkRequest>) -> Result<Response, ApiError> {
    track(RESOURCE, "create", async {
        let input = WalkInput::try_from(req)?;
        let walk = state.services.walks.create(input).await?;
        info!(id = %walk.id, region = %walk.region.code, "walk created");
        let location = format!("/api/walks/{}", walk.id);
        Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(WalkDto::from(walk))).into_response())
    })
    .await
}

#[utoipa::path(
    put, path = "/api/walks/{id}", tag = "walks",
    params(("id" = Uuid, Path, description = "Walk ID")),
    request_body = UpdateWalkRequest,
    responses(
        (status = 200, description = "Updated", body = WalkDto),
        (status = 400, description = "Validation Error", body = crate::errors::ValidationProblem),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateWalkRequest>,
) -> Result<Json<WalkDto>, ApiError> {
    track(RESOURCE, "update", async {
        let input = WalkInput::try_from(req)?;
        let walk = state.services.walks.update(id, input).await?;
        Ok(Json(walk.into()))
    })
    .await
}

#[utoipa::path(
    delete, path = "/api/walks/{id}", tag = "walks",
    params(("id" = Uuid, Path, description = "Walk ID")),
    responses(
        (status = 200, description = "Deleted; body is the removed walk", body = WalkDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<WalkDto>, ApiError> {
    track(RESOURCE, "delete", async {
        let walk = state.services.walks.delete(id).await?;
        Ok(Json(walk.into()))
    })
    .await
}
