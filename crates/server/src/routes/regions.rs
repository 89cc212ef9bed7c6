use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use service::region::RegionInput;
use tracing::info;
use uuid::Uuid;

use crate::dto::{AddRegionRequest, ListParams, RegionDto, UpdateRegionRequest};
use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::metrics::track;
use crate::state::ServerState;

const RESOURCE: &str = "region";

#[utoipa::path(
    get, path = "/api/regions", tag = "regions",
    params(ListParams),
    responses(
        (status = 200, description = "List OK", body = [RegionDto]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<ServerState>, Query(params): Query<ListParams>) -> Result<Json<Vec<RegionDto>>, ApiError> {
    track(RESOURCE, "list", async {
        let regions = state.services.regions.list(&params.into()).await?;
        Ok(Json(regions.into_iter().map(RegionDto::from).collect()))
    })
    .await
}

#[utoipa::path(
    get, path = "/api/regions/{id}", tag = "regions",
    params(("id" = Uuid, Path, description = "Region ID")),
    responses(
        (status = 200, description = "OK", body = RegionDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<RegionDto>, ApiError> {
    track(RESOURCE, "get", async {
        let region = state.services.regions.get(id).await?.ok_or(ApiError::NotFound)?;
        Ok(Json(region.into()))
    })
    .await
}

#[utoipa::path(
    post, path = "/api/regions", tag = "regions",
    request_body = AddRegionRequest,
    responses(
        (status = 201, description = "Created", body = RegionDto),
        (status = 400, description = "Validation Error", body = crate::errors::ValidationProblem)
    )
)]
pub async fn create(State(state): State<ServerState>, ApiJson(req): ApiJson<AddRegionRequest>) -> Result<Response, ApiError> {
    track(RESOURCE, "create", async {
        let region = state.services.regions.create(RegionInput::from(req)).await?;
        info!(id = %region.id, code = %region.code, "region created");
        let location = format!("/api/regions/{}", region.id);
        Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(RegionDto::from(region))).into_response())
    })
    .await
}

#[utoipa::path(
    put, path = "/api/regions/{id}", tag = "regions",
    params(("id" = Uuid, Path, description = "Region ID")),
    request_body = UpdateRegionRequest,
    responses(
        (status = 200, description = "Updated", body = RegionDto),
        (status = 400, description = "Validation Error", body = crate::errors::ValidationProblem),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateRegionRequest>,
) -> Result<Json<RegionDto>, ApiError> {
    track(RESOURCE, "update", async {
        let region = state.services.regions.update(id, RegionInput::from(req)).await?;
        Ok(Json(region.into()))
    })
    .await
}

#[utoipa::path(
    delete, path = "/api/regions/{id}", tag = "regions",
    params(("id" = Uuid, Path, description = "Region ID")),
    responses(
        (status = 200, description = "Deleted; body is the removed region", body = RegionDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<RegionDto>, ApiError> {
    track(RESOURCE, "delete", async {
        let region = state.services.regions.delete(id).await?;
        Ok(Json(region.into()))
    })
    .await
}
