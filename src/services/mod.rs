pub mod candidate_service;
pub mod history_service;
pub mod shortlist_service;
pub mod vacancy_service;
