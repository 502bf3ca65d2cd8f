//! Positional shortlisting: the first 20% of a batch (by floor) is
//! shortlisted, everyone else is rejected. The rule looks only at position,
//! never at candidate attributes.

use crate::models::candidate::{Candidate, CandidateStatus};

const SHORTLIST_RATIO: f64 = 0.2;

/// Number of slots a batch of `len` candidates gets.
///
/// `floor(len * 0.2)`: batches of four or fewer get zero slots, so every
/// candidate in them is rejected. That is the intended behavior, not a bug.
pub fn quota(len: usize) -> usize {
    (len as f64 * SHORTLIST_RATIO).floor() as usize
}

/// Rewrite the status of every candidate in the batch in place.
///
/// Order is never changed; re-running on an unchanged batch yields the same
/// result. An empty batch is a no-op.
pub fn apply_positional_quota(candidates: &mut [Candidate]) {
    let threshold = quota(candidates.len());
    for (index, candidate) in candidates.iter_mut().enumerate() {
        candidate.status = if index < threshold {
            CandidateStatus::Shortlisted
        } else {
            CandidateStatus::Rejected
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(n: usize) -> Vec<Candidate> {
        (0..n)
            .map(|i| Candidate {
                name: format!("candidate-{i}"),
                experience: "3 years".to_string(),
                skills: "Communication, Teamwork, Problem-Solving".to_string(),
                qualifications: "Bachelor's Degree".to_string(),
                status: CandidateStatus::PendingReview,
            })
            .collect()
    }

    fn shortlisted_positions(candidates: &[Candidate]) -> Vec<usize> {
        candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.status == CandidateStatus::Shortlisted)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn empty_batch_is_a_noop() {
        let mut candidates = batch(0);
        apply_positional_quota(&mut candidates);
        assert!(candidates.is_empty());
    }

    #[test]
    fn small_batches_reject_everyone() {
        for n in 1..=4 {
            let mut candidates = batch(n);
            apply_positional_quota(&mut candidates);
            assert!(
                candidates
                    .iter()
                    .all(|c| c.status == CandidateStatus::Rejected),
                "batch of {n} should reject all candidates"
            );
        }
    }

    #[test]
    fn five_candidates_shortlist_exactly_the_first() {
        let mut candidates = batch(5);
        apply_positional_quota(&mut candidates);
        assert_eq!(shortlisted_positions(&candidates), vec![0]);
    }

    #[test]
    fn ten_candidates_shortlist_the_first_two() {
        let mut candidates = batch(10);
        apply_positional_quota(&mut candidates);
        assert_eq!(shortlisted_positions(&candidates), vec![0, 1]);
    }

    #[test]
    fn quota_matches_floor_for_any_length() {
        for n in 0..200 {
            let mut candidates = batch(n);
            apply_positional_quota(&mut candidates);
            let shortlisted = shortlisted_positions(&candidates);
            assert_eq!(shortlisted.len(), quota(n));
            // the shortlisted entries are exactly the leading positions
            assert_eq!(shortlisted, (0..quota(n)).collect::<Vec<_>>());
        }
    }

    #[test]
    fn rerunning_is_idempotent() {
        let mut candidates = batch(7);
        apply_positional_quota(&mut candidates);
        let first_pass: Vec<_> = candidates.iter().map(|c| c.status).collect();
        apply_positional_quota(&mut candidates);
        let second_pass: Vec<_> = candidates.iter().map(|c| c.status).collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn order_and_attributes_are_preserved() {
        let mut candidates = batch(6);
        let names: Vec<_> = candidates.iter().map(|c| c.name.clone()).collect();
        apply_positional_quota(&mut candidates);
        let after: Vec<_> = candidates.iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, after);
        assert!(candidates.iter().all(|c| c.experience == "3 years"));
    }
}
