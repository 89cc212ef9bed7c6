use sea_orm::entity::prelude::*;

use crate::errors::{FieldErrors, ModelError};
use crate::{difficulty, region};

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 1000;
pub const MIN_LENGTH_KM: f64 = 0.0;
pub const MAX_LENGTH_KM: f64 = 50.0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "walk")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub walk_image_url: Option<String>,
    pub region_id: Uuid,
    pub difficulty_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Region, Difficulty }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Region => Entity::belongs_to(region::Entity)
                .from(Column::RegionId)
                .to(region::Column::Id)
                .into(),
            Relation::Difficulty => Entity::belongs_to(difficulty::Entity)
                .from(Column::DifficultyId)
                .to(difficulty::Column::Id)
                .into(),
        }
    }
}

impl Related<region::Entity> for Entity {
    fn to() -> RelationDef { Relation::Region.def() }
}

impl Related<difficulty::Entity> for Entity {
    fn to() -> RelationDef { Relation::Difficulty.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str, errors: &mut FieldErrors) {
    if name.trim().is_empty() {
        errors.add("name", "name is required");
    } else if name.chars().count() > NAME_MAX_LEN {
        errors.add("name", format!("name must be at most {NAME_MAX_LEN} characters"));
    }
}

pub fn validate_description(description: &str, errors: &mut FieldErrors) {
    if description.trim().is_empty() {
        errors.add("description", "description is required");
    } else if description.chars().count() > DESCRIPTION_MAX_LEN {
        errors.add("description", format!("description must be at most {DESCRIPTION_MAX_LEN} characters"));
    }
}

pub fn validate_length_in_km(length_in_km: f64, errors: &mut FieldErrors) {
    if !length_in_km.is_finite() || !(MIN_LENGTH_KM..=MAX_LENGTH_KM).contains(&length_in_km) {
        errors.add("lengthInKm", format!("lengthInKm must be between {MIN_LENGTH_KM} and {MAX_LENGTH_KM}"));
    }
}

/// Check the scalar columns of a walk. Region and difficulty existence is
/// checked against storage by the service layer.
pub fn validate(name: &str, description: &str, length_in_km: f64) -> Result<(), ModelError> {
    let mut errors = FieldErrors::new();
    validate_name(name, &mut errors);
    validate_description(description, &mut errors);
    validate_length_in_km(length_in_km, &mut errors);
    errors.into_result().map_err(ModelError::Validation)
}
