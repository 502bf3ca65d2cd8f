use serde::{Deserialize, Serialize};

/// Review outcome attached to a candidate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    #[serde(rename = "Pending Review")]
    PendingReview,
    Shortlisted,
    Rejected,
}

impl CandidateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PendingReview => "Pending Review",
            Self::Shortlisted => "Shortlisted",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub experience: String,
    pub skills: String,
    pub qualifications: String,
    pub status: CandidateStatus,
}
