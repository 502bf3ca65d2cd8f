use tracing::info;

use crate::models::candidate::Candidate;
use crate::registry::SharedRegistry;

#[derive(Clone)]
pub struct ShortlistService {
    registry: SharedRegistry,
}

impl ShortlistService {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// Run the positional rule over one vacancy's candidates. Unknown ids do
    /// nothing and return an empty list, matching the silent no-op contract.
    pub fn process_vacancy(&self, id: u32) -> Vec<Candidate> {
        let mut registry = self.registry.write().expect("registry lock poisoned");
        let result = registry.shortlist_vacancy(id);
        info!(vacancy_id = id, processed = result.len(), "vacancy shortlist run");
        result
    }

    /// Run the positional rule over the staging pool.
    pub fn process_pool(&self) -> Vec<Candidate> {
        let mut registry = self.registry.write().expect("registry lock poisoned");
        let result = registry.shortlist_pool();
        info!(processed = result.len(), "pool shortlist run");
        result
    }
}
