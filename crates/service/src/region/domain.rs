use uuid::Uuid;

use crate::listing::{cmp_ignore_case, field_key, Comparator, Listable};

/// Domain region (business view)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub region_image_url: Option<String>,
}

/// Every writable field of a region; used for create and for full-replace update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionInput {
    pub code: String,
    pub name: String,
    pub region_image_url: Option<String>,
}

impl RegionInput {
    pub fn validate(&self) -> Result<(), models::errors::ModelError> {
        models::region::validate(&self.code, &self.name)
    }
}

impl From<models::region::Model> for Region {
    fn from(m: models::region::Model) -> Self {
        Self { id: m.id, code: m.code, name: m.name, region_image_url: m.region_image_url }
    }
}

fn by_name(a: &Region, b: &Region) -> std::cmp::Ordering { cmp_ignore_case(&a.name, &b.name) }

fn by_code(a: &Region, b: &Region) -> std::cmp::Ordering { cmp_ignore_case(&a.code, &b.code) }

impl Listable for Region {
    fn filter_text(&self, field: &str) -> Option<&str> {
        match field_key(field).as_str() {
            "name" => Some(&self.name),
            _ => None,
        }
    }

    fn comparator(field: &str) -> Option<Comparator<Self>> {
        match field_key(field).as_str() {
            "name" => Some(by_name as Comparator<Self>),
            "code" => Some(by_code as Comparator<Self>),
            _ => None,
        }
    }
}
