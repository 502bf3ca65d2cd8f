use serde::{Deserialize, Serialize};

use crate::models::candidate::{Candidate, CandidateStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResponse {
    pub name: String,
    pub experience: String,
    pub skills: String,
    pub qualifications: String,
    pub status: CandidateStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateListResponse {
    pub items: Vec<CandidateResponse>,
}

impl From<Candidate> for CandidateResponse {
    fn from(value: Candidate) -> Self {
        Self {
            name: value.name,
            experience: value.experience,
            skills: value.skills,
            qualifications: value.qualifications,
            status: value.status,
        }
    }
}

impl From<Vec<Candidate>> for CandidateListResponse {
    fn from(value: Vec<Candidate>) -> Self {
        Self {
            items: value.into_iter().map(Into::into).collect(),
        }
    }
}
