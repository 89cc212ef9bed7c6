use sea_orm::entity::prelude::*;

use crate::errors::{FieldErrors, ModelError};
use crate::walk;

pub const CODE_MIN_LEN: usize = 3;
pub const CODE_MAX_LEN: usize = 10;
pub const NAME_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "region")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub code: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub region_image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Walk }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Walk => Entity::has_many(walk::Entity).into(),
        }
    }
}

impl Related<walk::Entity> for Entity {
    fn to() -> RelationDef { Relation::Walk.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// The upper bound counts the code as stored, surrounding whitespace included.
pub fn validate_code(code: &str, errors: &mut FieldErrors) {
    let visible = code.trim().chars().count();
    if visible == 0 {
        errors.add("code", "code is required");
    } else if visible < CODE_MIN_LEN || code.chars().count() > CODE_MAX_LEN {
        errors.add("code", format!("code must be between {CODE_MIN_LEN} and {CODE_MAX_LEN} characters"));
    }
}

pub fn validate_name(name: &str, errors: &mut FieldErrors) {
    if name.trim().is_empty() {
        errors.add("name", "name is required");
    } else if name.chars().count() > NAME_MAX_LEN {
        errors.add("name", format!("name must be at most {NAME_MAX_LEN} characters"));
    }
}

/// Check every writable column of a region.
pub fn validate(code: &str, name: &str) -> Result<(), ModelError> {
    let mut errors = FieldErrors::new();
    validate_code(code, &mut errors);
    validate_name(name, &mut errors);
    errors.into_result().map_err(ModelError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_and_long_codes() {
        assert!(validate("AKL", "Auckland").is_ok());
        assert!(validate("NZ-AKL", "Auckland").is_ok());
    }

    #[test]
    fn rejects_bad_code_lengths() {
        let Err(ModelError::Validation(errors)) = validate("AK", "Auckland") else { panic!("expected validation error") };
        assert!(errors.contains("code"));
        assert!(validate("ABCDEFGHIJK", "Auckland").is_err());
    }

    #[test]
    fn padding_counts_against_column_width() {
        let Err(ModelError::Validation(errors)) = validate("ABCDEFGHIJ  ", "Auckland") else { panic!("padded code accepted") };
        assert!(errors.contains("code"));
        assert!(validate("ABCDEFGHIJ", "Auckland").is_ok());
        assert!(validate(" AB", "Auckland").is_err());
    }

    #[test]
    fn reports_every_field() {
        let Err(ModelError::Validation(errors)) = validate(" ", &"x".repeat(101)) else { panic!("expected validation error") };
        assert!(errors.contains("code"));
        assert!(errors.contains("name"));
    }
}
