pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod registry;
pub mod routes;
pub mod services;
pub mod shortlist;

use crate::registry::SharedRegistry;
use crate::services::{
    candidate_service::CandidateService, history_service::HistoryService,
    shortlist_service::ShortlistService, vacancy_service::VacancyService,
};

#[derive(Clone)]
pub struct AppState {
    pub registry: SharedRegistry,
    pub vacancy_service: VacancyService,
    pub candidate_service: CandidateService,
    pub shortlist_service: ShortlistService,
    pub history_service: HistoryService,
}

impl AppState {
    pub fn new() -> Self {
        let registry = registry::shared();

        let vacancy_service = VacancyService::new(registry.clone());
        let candidate_service = CandidateService::new(registry.clone());
        let shortlist_service = ShortlistService::new(registry.clone());
        let history_service = HistoryService::new(registry.clone());

        Self {
            registry,
            vacancy_service,
            candidate_service,
            shortlist_service,
            history_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
