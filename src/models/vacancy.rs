use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub closing_date: String,
    pub contact: String,
    pub candidates: Vec<Candidate>,
    pub is_closed: bool,
    pub created_at: DateTime<Utc>,
}
