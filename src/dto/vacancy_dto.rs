use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::candidate_dto::CandidateResponse;
use crate::models::vacancy::Vacancy;
use crate::services::history_service::VacancySummary;

/// Operator input for a new vacancy. Every field is accepted as-is (empty
/// strings included) and a missing field reads as empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CreateVacancyPayload {
    pub title: String,
    pub description: String,
    pub closing_date: String,
    pub contact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyResponse {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub closing_date: String,
    pub contact: String,
    pub candidates: Vec<CandidateResponse>,
    pub is_closed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyListResponse {
    pub items: Vec<VacancyResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancySummaryResponse {
    pub total_applicants: usize,
    pub accepted_count: usize,
    pub rejected_count: usize,
}

impl From<Vacancy> for VacancyResponse {
    fn from(value: Vacancy) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            closing_date: value.closing_date,
            contact: value.contact,
            candidates: value.candidates.into_iter().map(Into::into).collect(),
            is_closed: value.is_closed,
            created_at: value.created_at,
        }
    }
}

impl From<Vec<Vacancy>> for VacancyListResponse {
    fn from(value: Vec<Vacancy>) -> Self {
        Self {
            items: value.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<VacancySummary> for VacancySummaryResponse {
    fn from(value: VacancySummary) -> Self {
        Self {
            total_applicants: value.total_applicants,
            accepted_count: value.accepted_count,
            rejected_count: value.rejected_count,
        }
    }
}
