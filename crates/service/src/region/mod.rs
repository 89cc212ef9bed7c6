//! Regions: domain model, repository abstraction and application service.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{Region, RegionInput};
pub use repository::{RegionRepository, SeaOrmRegionRepository};
pub use service::RegionService;
