//! Walks: domain model, repository abstraction and application service.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{Walk, WalkInput};
pub use repository::{SeaOrmWalkRepository, WalkRepository};
pub use service::WalkService;
