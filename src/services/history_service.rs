use crate::models::candidate::CandidateStatus;
use crate::models::vacancy::Vacancy;
use crate::registry::SharedRegistry;

/// Read-only summary of a vacancy's outcome. Candidates still pending review
/// count toward the total but toward neither bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VacancySummary {
    pub total_applicants: usize,
    pub accepted_count: usize,
    pub rejected_count: usize,
}

pub fn summarize(vacancy: &Vacancy) -> VacancySummary {
    let accepted_count = vacancy
        .candidates
        .iter()
        .filter(|c| c.status == CandidateStatus::Shortlisted)
        .count();
    let rejected_count = vacancy
        .candidates
        .iter()
        .filter(|c| c.status == CandidateStatus::Rejected)
        .count();
    VacancySummary {
        total_applicants: vacancy.candidates.len(),
        accepted_count,
        rejected_count,
    }
}

#[derive(Clone)]
pub struct HistoryService {
    registry: SharedRegistry,
}

impl HistoryService {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// Summarize a vacancy by id. Works on open vacancies too; whether a
    /// vacancy belongs in a history view is the caller's call.
    pub fn summarize_vacancy(&self, id: u32) -> Option<VacancySummary> {
        self.registry
            .read()
            .expect("registry lock poisoned")
            .get(id)
            .map(|vacancy| summarize(&vacancy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::Candidate;
    use crate::registry;
    use chrono::Utc;

    fn candidate(status: CandidateStatus) -> Candidate {
        Candidate {
            name: "cv".to_string(),
            experience: "2 years".to_string(),
            skills: "Communication, Teamwork, Problem-Solving".to_string(),
            qualifications: "Bachelor's Degree".to_string(),
            status,
        }
    }

    fn vacancy_with(candidates: Vec<Candidate>) -> Vacancy {
        Vacancy {
            id: 1,
            title: "Role".to_string(),
            description: String::new(),
            closing_date: String::new(),
            contact: String::new(),
            candidates,
            is_closed: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn pending_counts_toward_total_only() {
        let vacancy = vacancy_with(vec![
            candidate(CandidateStatus::PendingReview),
            candidate(CandidateStatus::Shortlisted),
            candidate(CandidateStatus::Rejected),
        ]);
        let summary = summarize(&vacancy);
        assert_eq!(
            summary,
            VacancySummary {
                total_applicants: 3,
                accepted_count: 1,
                rejected_count: 1,
            }
        );
    }

    #[test]
    fn empty_vacancy_summarizes_to_zeros() {
        let summary = summarize(&vacancy_with(Vec::new()));
        assert_eq!(summary.total_applicants, 0);
        assert_eq!(summary.accepted_count, 0);
        assert_eq!(summary.rejected_count, 0);
    }

    #[test]
    fn open_vacancies_are_summarized_too() {
        let registry = registry::shared();
        let service = HistoryService::new(registry.clone());
        registry
            .write()
            .unwrap()
            .create_vacancy("Role".into(), String::new(), String::new(), String::new());

        // never closed, still summarizable
        let summary = service.summarize_vacancy(1).unwrap();
        assert_eq!(summary.total_applicants, 0);
    }

    #[test]
    fn unknown_vacancy_has_no_summary() {
        let service = HistoryService::new(registry::shared());
        assert!(service.summarize_vacancy(8).is_none());
    }
}
