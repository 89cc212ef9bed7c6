use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::dto::DifficultyDto;
use crate::errors::ApiError;
use crate::metrics::track;
use crate::state::ServerState;

const RESOURCE: &str = "difficulty";

#[utoipa::path(
    get, path = "/api/difficulties", tag = "difficulties",
    responses((status = 200, description = "List OK", body = [DifficultyDto]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<DifficultyDto>>, ApiError> {
    track(RESOURCE, "list", async {
        let difficulties = state.services.difficulties.list().await?;
        Ok(Json(difficulties.into_iter().map(DifficultyDto::from).collect()))
    })
    .await
}

#[utoipa::path(
    get, path = "/api/difficulties/{id}", tag = "difficulties",
    params(("id" = Uuid, Path, description = "Difficulty ID")),
    responses(
        (status = 200, description = "OK", body = DifficultyDto),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<DifficultyDto>, ApiError> {
    track(RESOURCE, "get", async {
        let difficulty = state.services.difficulties.get(id).await?.ok_or(ApiError::NotFound)?;
        Ok(Json(difficulty.into()))
    })
    .await
}
