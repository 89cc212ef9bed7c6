//! Wire shapes. Field names are camelCase; walks embed their region and
//! difficulty instead of exposing the foreign-key ids.
//!
//! Request fields are all optional at the JSON level so a missing field is
//! reported per field instead of failing deserialization as a whole.

use models::errors::FieldErrors;
use serde::{Deserialize, Serialize};
use service::difficulty::Difficulty;
use service::listing::ListQuery;
use service::pagination::Pagination;
use service::region::{Region, RegionInput};
use service::walk::{Walk, WalkInput};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub region_image_url: Option<String>,
}

impl From<Region> for RegionDto {
    fn from(r: Region) -> Self { Self { id: r.id, code: r.code, name: r.name, region_image_url: r.region_image_url } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyDto {
    pub id: Uuid,
    pub name: String,
}

impl From<Difficulty> for DifficultyDto {
    fn from(d: Difficulty) -> Self { Self { id: d.id, name: d.name } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub region: RegionDto,
    pub difficulty: DifficultyDto,
}

impl From<Walk> for WalkDto {
    fn from(w: Walk) -> Self {
        Self {
            id: w.id,
            name: w.name,
            description: w.description,
            length_in_km: w.length_in_km,
            walk_image_url: w.walk_image_url,
            region: w.region.into(),
            difficulty: w.difficulty.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddRegionRequest {
    #[schema(example = "AKL")]
    pub code: Option<String>,
    #[schema(example = "Auckland")]
    pub name: Option<String>,
    pub region_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegionRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub region_image_url: Option<String>,
}

// Missing strings become empty ones; the model validators report them as required.
fn region_input(code: Option<String>, name: Option<String>, region_image_url: Option<String>) -> RegionInput {
    RegionInput { code: code.unwrap_or_default(), name: name.unwrap_or_default(), region_image_url }
}

impl From<AddRegionRequest> for RegionInput {
    fn from(r: AddRegionRequest) -> Self { region_input(r.code, r.name, r.region_image_url) }
}

impl From<UpdateRegionRequest> for RegionInput {
    fn from(r: UpdateRegionRequest) -> Self { region_input(r.code, r.name, r.region_image_url) }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWalkRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(example = 19.4)]
    pub length_in_km: Option<f64>,
    pub walk_image_url: Option<String>,
    pub region_id: Option<Uuid>,
    pub difficulty_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalkRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub length_in_km: Option<f64>,
    pub walk_image_url: Option<String>,
    pub region_id: Option<Uuid>,
    pub difficulty_id: Option<Uuid>,
}

struct WalkFields {
    name: Option<String>,
    description: Option<String>,
    length_in_km: Option<f64>,
    walk_image_url: Option<String>,
    region_id: Option<Uuid>,
    difficulty_id: Option<Uuid>,
}

impl WalkFields {
    fn into_input(self) -> Result<WalkInput, FieldErrors> {
        let name = self.name.unwrap_or_default();
        let description = self.description.unwrap_or_default();
        match (self.length_in_km, self.region_id, self.difficulty_id) {
            (Some(length_in_km), Some(region_id), Some(difficulty_id)) => Ok(WalkInput {
                name,
                description,
                length_in_km,
                walk_image_url: self.walk_image_url,
                region_id,
                difficulty_id,
            }),
            (length_in_km, region_id, difficulty_id) => {
                let mut errors = FieldErrors::new();
                models::walk::validate_name(&name, &mut errors);
                models::walk::validate_description(&description, &mut errors);
                match length_in_km {
                    Some(km) => models::walk::validate_length_in_km(km, &mut errors),
                    None => errors.add("lengthInKm", "lengthInKm is required"),
                }
                if region_id.is_none() {
                    errors.add("regionId", "regionId is required");
                }
                if difficulty_id.is_none() {
                    errors.add("difficultyId", "difficultyId is required");
                }
                Err(errors)
            }
        }
    }
}

impl TryFrom<AddWalkRequest> for WalkInput {
    type Error = FieldErrors;

    fn try_from(r: AddWalkRequest) -> Result<Self, Self::Error> {
        WalkFields {
            name: r.name,
            description: r.description,
            length_in_km: r.length_in_km,
            walk_image_url: r.walk_image_url,
            region_id: r.region_id,
            difficulty_id: r.difficulty_id,
        }
        .into_input()
    }
}

impl TryFrom<UpdateWalkRequest> for WalkInput {
    type Error = FieldErrors;

    fn try_from(r: UpdateWalkRequest) -> Result<Self, Self::Error> {
        WalkFields {
            name: r.name,
            description: r.description,
            length_in_km: r.length_in_km,
            walk_image_url: r.walk_image_url,
            region_id: r.region_id,
            difficulty_id: r.difficulty_id,
        }
        .into_input()
    }
}

/// Query string accepted by the list endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Field to filter on (`name`).
    pub filter_on: Option<String>,
    /// Case-insensitive substring to look for.
    pub filter_query: Option<String>,
    /// Field to sort by.
    pub sort_by: Option<String>,
    /// Defaults to true.
    pub is_ascending: Option<bool>,
    /// 1-based; 0 is treated as 1.
    pub page_number: Option<u32>,
    /// Capped at 1000.
    pub page_size: Option<u32>,
}

impl From<ListParams> for ListQuery {
    fn from(p: ListParams) -> Self {
        let defaults = Pagination::default();
        ListQuery {
            filter_on: p.filter_on,
            filter_query: p.filter_query,
            sort_by: p.sort_by,
            ascending: p.is_ascending.unwrap_or(true),
            pagination: Pagination::new(
                p.page_number.unwrap_or(defaults.page),
                p.page_size.unwrap_or(defaults.per_page),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_dto_serializes_camel_case() {
        let dto = RegionDto { id: Uuid::nil(), code: "AKL".into(), name: "Auckland".into(), region_image_url: None };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("regionImageUrl").is_some());
        assert!(json.get("region_image_url").is_none());
    }

    #[test]
    fn walk_request_reports_every_missing_field() {
        let req: AddWalkRequest = serde_json::from_str(r#"{"name":"Routeburn"}"#).unwrap();
        let errors = WalkInput::try_from(req).unwrap_err();
        for field in ["description", "lengthInKm", "regionId", "difficultyId"] {
            assert!(errors.contains(field), "missing {field}");
        }
        assert!(!errors.contains("name"));
    }

    #[test]
    fn complete_walk_request_converts() {
        let region = Uuid::new_v4();
        let difficulty = Uuid::new_v4();
        let req = UpdateWalkRequest {
            name: Some("Routeburn".into()),
            description: Some("Great walk".into()),
            length_in_km: Some(32.0),
            walk_image_url: None,
            region_id: Some(region),
            difficulty_id: Some(difficulty),
        };
        let input = WalkInput::try_from(req).unwrap();
        assert_eq!(input.region_id, region);
        assert_eq!(input.difficulty_id, difficulty);
        assert_eq!(input.length_in_km, 32.0);
    }

    #[test]
    fn list_params_default_to_first_full_page() {
        let q: ListQuery = ListParams::default().into();
        assert!(q.ascending);
        assert_eq!(q.pagination, Pagination::default());

        let p: ListParams = serde_json::from_str(r#"{"sortBy":"name","isAscending":false,"pageNumber":2,"pageSize":5}"#).unwrap();
        let q: ListQuery = p.into();
        assert_eq!(q.sort_by.as_deref(), Some("name"));
        assert!(!q.ascending);
        assert_eq!(q.pagination, Pagination::new(2, 5));
    }
}
