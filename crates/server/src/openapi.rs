use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::dto::{
    AddRegionRequest, AddWalkRequest, DifficultyDto, RegionDto, UpdateRegionRequest, UpdateWalkRequest, WalkDto,
};
use crate::errors::ValidationProblem;

#[derive(ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "NZ Walks API", description = "Regions, walks and difficulty lookups"),
    paths(
        crate::routes::health,
        crate::routes::regions::list,
        crate::routes::regions::get,
        crate::routes::regions::create,
        crate::routes::regions::update,
        crate::routes::regions::delete,
        crate::routes::walks::list,
        crate::routes::walks::get,
        crate::routes::walks::create,
        crate::routes::walks::update,
        crate::routes::walks::delete,
        crate::routes::difficulties::list,
        crate::routes::difficulties::get,
    ),
    components(
        schemas(
            HealthResponse,
            RegionDto,
            DifficultyDto,
            WalkDto,
            AddRegionRequest,
            UpdateRegionRequest,
            AddWalkRequest,
            UpdateWalkRequest,
            ValidationProblem,
        )
    ),
    tags(
        (name = "health"),
        (name = "regions"),
        (name = "walks"),
        (name = "difficulties")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_resource_path() {
        let doc = ApiDoc::openapi();
        for path in ["/api/regions", "/api/regions/{id}", "/api/walks", "/api/walks/{id}", "/api/difficulties/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "{path} undocumented");
        }
    }
}
