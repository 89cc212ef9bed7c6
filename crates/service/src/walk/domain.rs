use std::cmp::Ordering;

use uuid::Uuid;

use crate::difficulty::Difficulty;
use crate::listing::{cmp_ignore_case, field_key, Comparator, Listable};
use crate::region::Region;

/// A walk together with the region and difficulty it references.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub region: Region,
    pub difficulty: Difficulty,
}

impl Walk {
    pub fn from_parts(m: models::walk::Model, region: Region, difficulty: Difficulty) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            length_in_km: m.length_in_km,
            walk_image_url: m.walk_image_url,
            region,
            difficulty,
        }
    }
}

/// Every writable field of a walk; used for create and for full-replace update.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkInput {
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub region_id: Uuid,
    pub difficulty_id: Uuid,
}

impl WalkInput {
    pub fn validate(&self) -> Result<(), models::errors::ModelError> {
        models::walk::validate(&self.name, &self.description, self.length_in_km)
    }
}

fn by_name(a: &Walk, b: &Walk) -> Ordering { cmp_ignore_case(&a.name, &b.name) }

fn by_length(a: &Walk, b: &Walk) -> Ordering { a.length_in_km.total_cmp(&b.length_in_km) }

impl Listable for Walk {
    fn filter_text(&self, field: &str) -> Option<&str> {
        match field_key(field).as_str() {
            "name" => Some(&self.name),
            _ => None,
        }
    }

    fn comparator(field: &str) -> Option<Comparator<Self>> {
        match field_key(field).as_str() {
            "name" => Some(by_name as Comparator<Self>),
            "lengthinkm" | "length" => Some(by_length as Comparator<Self>),
            _ => None,
        }
    }
}
