use std::sync::Arc;

use service::memory::InMemoryStore;
use service::AppServices;

#[derive(Clone)]
pub struct ServerState {
    pub services: AppServices,
}

impl ServerState {
    pub fn new(services: AppServices) -> Self { Self { services } }

    /// State over a fresh in-memory store holding the seeded lookup rows.
    pub fn in_memory() -> Self { Self::new(AppServices::in_memory(Arc::new(InMemoryStore::seeded()))) }
}
