use rand::Rng;
use tracing::info;

use crate::models::candidate::{Candidate, CandidateStatus};
use crate::registry::SharedRegistry;

/// Placeholder attributes stamped onto every candidate. Uploaded documents
/// are never read, so these stand in for parsed content.
pub const PLACEHOLDER_SKILLS: &str = "Communication, Teamwork, Problem-Solving";
pub const PLACEHOLDER_QUALIFICATIONS: &str = "Bachelor's Degree";

/// Where an upload batch lands: a vacancy's candidate list, or the staging
/// pool when no vacancy was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTarget {
    Vacancy(u32),
    Pool,
}

/// Build a candidate record from an uploaded file's name.
///
/// The display name is the file name with its last extension removed. The
/// suffix after the final `.` only counts as an extension when it is
/// non-empty and free of path separators, so `"file."` and `"dir.v2/cv"`
/// pass through unchanged while `".gitignore"` strips to `""`. The random
/// source is supplied by the caller; tests seed it.
pub fn candidate_from_upload<R: Rng>(rng: &mut R, file_name: &str) -> Candidate {
    let years: u32 = rng.gen_range(1..=10);
    Candidate {
        name: strip_extension(file_name).to_string(),
        experience: format!("{} years", years),
        skills: PLACEHOLDER_SKILLS.to_string(),
        qualifications: PLACEHOLDER_QUALIFICATIONS.to_string(),
        status: CandidateStatus::PendingReview,
    }
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(index) => {
            let suffix = &file_name[index + 1..];
            if suffix.is_empty() || suffix.contains('/') {
                file_name
            } else {
                &file_name[..index]
            }
        }
        None => file_name,
    }
}

#[derive(Clone)]
pub struct CandidateService {
    registry: SharedRegistry,
}

impl CandidateService {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// Turn a batch of uploaded file names into candidate records and route
    /// them to the chosen target. Attaching to an unknown vacancy drops the
    /// batch without error.
    pub fn ingest_uploads(&self, file_names: &[String], target: UploadTarget) -> Vec<Candidate> {
        let mut rng = rand::thread_rng();
        let candidates: Vec<Candidate> = file_names
            .iter()
            .map(|name| candidate_from_upload(&mut rng, name))
            .collect();

        let mut registry = self.registry.write().expect("registry lock poisoned");
        match target {
            UploadTarget::Vacancy(id) => {
                info!(vacancy_id = id, count = candidates.len(), "candidates uploaded");
                registry.attach(id, candidates.clone());
            }
            UploadTarget::Pool => {
                info!(count = candidates.len(), "candidates staged in pool");
                registry.extend_pool(candidates.clone());
            }
        }
        candidates
    }

    pub fn list_pool(&self) -> Vec<Candidate> {
        self.registry
            .read()
            .expect("registry lock poisoned")
            .pool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn strips_only_the_last_extension() {
        let mut rng = StdRng::seed_from_u64(1);
        let candidate = candidate_from_upload(&mut rng, "resume.final.pdf");
        assert_eq!(candidate.name, "resume.final");
    }

    #[test]
    fn name_without_extension_is_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        let candidate = candidate_from_upload(&mut rng, "noext");
        assert_eq!(candidate.name, "noext");
    }

    #[test]
    fn trailing_dot_is_not_an_extension() {
        let mut rng = StdRng::seed_from_u64(1);
        let candidate = candidate_from_upload(&mut rng, "file.");
        assert_eq!(candidate.name, "file.");
    }

    #[test]
    fn dotfile_name_strips_to_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let candidate = candidate_from_upload(&mut rng, ".gitignore");
        assert_eq!(candidate.name, "");
    }

    #[test]
    fn separator_after_last_dot_blocks_stripping() {
        let mut rng = StdRng::seed_from_u64(1);
        let candidate = candidate_from_upload(&mut rng, "archive.v2/cv");
        assert_eq!(candidate.name, "archive.v2/cv");
    }

    #[test]
    fn empty_name_still_produces_a_candidate() {
        let mut rng = StdRng::seed_from_u64(1);
        let candidate = candidate_from_upload(&mut rng, "");
        assert_eq!(candidate.name, "");
        assert_eq!(candidate.status, CandidateStatus::PendingReview);
    }

    #[test]
    fn experience_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let candidate = candidate_from_upload(&mut rng, "cv.pdf");
            let years: u32 = candidate
                .experience
                .strip_suffix(" years")
                .expect("experience label ends in ' years'")
                .parse()
                .expect("experience label starts with a number");
            assert!((1..=10).contains(&years));
        }
    }

    #[test]
    fn placeholder_attributes_are_fixed() {
        let mut rng = StdRng::seed_from_u64(5);
        let candidate = candidate_from_upload(&mut rng, "cv.docx");
        assert_eq!(candidate.skills, PLACEHOLDER_SKILLS);
        assert_eq!(candidate.qualifications, PLACEHOLDER_QUALIFICATIONS);
        assert_eq!(candidate.status, CandidateStatus::PendingReview);
    }

    #[test]
    fn seeded_rng_makes_generation_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = candidate_from_upload(&mut a, "cv.pdf");
        let second = candidate_from_upload(&mut b, "cv.pdf");
        assert_eq!(first.experience, second.experience);
    }

    #[test]
    fn uploads_route_to_pool_or_vacancy() {
        let registry = registry::shared();
        let service = CandidateService::new(registry.clone());
        registry
            .write()
            .unwrap()
            .create_vacancy("Role".into(), String::new(), String::new(), String::new());

        let staged = service.ingest_uploads(
            &["a.pdf".to_string(), "b.pdf".to_string()],
            UploadTarget::Pool,
        );
        assert_eq!(staged.len(), 2);
        assert_eq!(service.list_pool().len(), 2);

        service.ingest_uploads(&["c.pdf".to_string()], UploadTarget::Vacancy(1));
        assert_eq!(registry.read().unwrap().get(1).unwrap().candidates.len(), 1);
        // pool untouched by the vacancy-scoped upload
        assert_eq!(service.list_pool().len(), 2);
    }

    #[test]
    fn upload_to_unknown_vacancy_is_dropped() {
        let service = CandidateService::new(registry::shared());
        let created = service.ingest_uploads(&["a.pdf".to_string()], UploadTarget::Vacancy(9));
        // records are still returned to the caller, but nothing was stored
        assert_eq!(created.len(), 1);
        assert!(service.list_pool().is_empty());
    }
}
