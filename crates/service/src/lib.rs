//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access through repository traits.
//! - Reuses validation and entity definitions in `models` crate.
//! - Listing (filter, sort, paginate) is shared by every resource.

pub mod app;
pub mod difficulty;
pub mod errors;
pub mod listing;
pub mod memory;
pub mod pagination;
pub mod region;
pub mod walk;
#[cfg(test)]
pub mod test_support;

pub use app::AppServices;
pub use errors::ServiceError;
pub use listing::ListQuery;
