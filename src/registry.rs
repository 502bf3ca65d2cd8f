//! In-memory store for vacancies and the staging pool of candidates not yet
//! tied to a vacancy. One registry per process; callers share it behind a
//! single lock.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use tracing::warn;

use crate::models::candidate::Candidate;
use crate::models::vacancy::Vacancy;
use crate::shortlist;

/// Handle the services share. Every operation takes the lock once and runs
/// to completion, so two callers can never interleave on the same vacancy.
pub type SharedRegistry = Arc<RwLock<VacancyRegistry>>;

pub fn shared() -> SharedRegistry {
    Arc::new(RwLock::new(VacancyRegistry::new()))
}

#[derive(Debug, Default)]
pub struct VacancyRegistry {
    vacancies: Vec<Vacancy>,
    pool: Vec<Candidate>,
}

impl VacancyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id and store a new open vacancy with no candidates.
    /// Empty strings are accepted as-is.
    pub fn create_vacancy(
        &mut self,
        title: String,
        description: String,
        closing_date: String,
        contact: String,
    ) -> Vacancy {
        let vacancy = Vacancy {
            id: self.vacancies.len() as u32 + 1,
            title,
            description,
            closing_date,
            contact,
            candidates: Vec::new(),
            is_closed: false,
            created_at: Utc::now(),
        };
        self.vacancies.push(vacancy.clone());
        vacancy
    }

    pub fn get(&self, id: u32) -> Option<Vacancy> {
        self.vacancies.iter().find(|v| v.id == id).cloned()
    }

    /// Open vacancies in creation order, the ones still eligible for new
    /// candidates.
    pub fn open(&self) -> Vec<Vacancy> {
        self.vacancies
            .iter()
            .filter(|v| !v.is_closed)
            .cloned()
            .collect()
    }

    /// Closed vacancies in creation order, for historical review.
    pub fn closed(&self) -> Vec<Vacancy> {
        self.vacancies
            .iter()
            .filter(|v| v.is_closed)
            .cloned()
            .collect()
    }

    /// Mark a vacancy closed. Unknown ids are ignored; closing an already
    /// closed vacancy changes nothing. Candidates are untouched.
    pub fn close(&mut self, id: u32) {
        match self.vacancies.iter_mut().find(|v| v.id == id) {
            Some(vacancy) => vacancy.is_closed = true,
            None => warn!(vacancy_id = id, "close requested for unknown vacancy"),
        }
    }

    /// Append candidates to a vacancy's list, preserving their order. With an
    /// unknown id the candidates are dropped; callers that need confirmation
    /// check membership through `open`/`closed` first.
    pub fn attach(&mut self, id: u32, candidates: Vec<Candidate>) {
        match self.vacancies.iter_mut().find(|v| v.id == id) {
            Some(vacancy) => vacancy.candidates.extend(candidates),
            None => warn!(
                vacancy_id = id,
                dropped = candidates.len(),
                "attach requested for unknown vacancy"
            ),
        }
    }

    /// Stage candidates in the undifferentiated pool.
    pub fn extend_pool(&mut self, candidates: Vec<Candidate>) {
        self.pool.extend(candidates);
    }

    pub fn pool(&self) -> Vec<Candidate> {
        self.pool.clone()
    }

    /// Run the shortlisting rule over one vacancy's candidate list and return
    /// the rewritten list. Unknown ids do nothing and yield an empty list.
    pub fn shortlist_vacancy(&mut self, id: u32) -> Vec<Candidate> {
        match self.vacancies.iter_mut().find(|v| v.id == id) {
            Some(vacancy) => {
                shortlist::apply_positional_quota(&mut vacancy.candidates);
                vacancy.candidates.clone()
            }
            None => {
                warn!(vacancy_id = id, "shortlist requested for unknown vacancy");
                Vec::new()
            }
        }
    }

    /// Same rule, scoped to the staging pool.
    pub fn shortlist_pool(&mut self) -> Vec<Candidate> {
        shortlist::apply_positional_quota(&mut self.pool);
        self.pool.clone()
    }
}
