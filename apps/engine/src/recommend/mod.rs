//! Recommendation aggregator — blends TF-IDF similarity with rule-based
//! scoring into a bounded, ranked result list.

pub mod rule_scoring;
pub mod similarity;

use serde::Serialize;

use crate::models::{JobPosting, StudentProfile};
use crate::recommend::rule_scoring::score_rules;
use crate::recommend::similarity::similarity_scores;

/// Weight applied to the cosine similarity fraction (similarity × 70 points).
const SIMILARITY_WEIGHT: f64 = 70.0;

/// One ranked recommendation. Produced fresh per call; never persisted here.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResult<'a> {
    pub job: &'a JobPosting,
    /// Final score in [0,100], rounded to 1 decimal.
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Space-joins the non-empty free-text fields of the student profile.
fn build_student_document(profile: &StudentProfile) -> String {
    let fields = [
        profile.skills.as_str(),
        profile.interests.as_str(),
        profile.projects.as_str(),
        profile.certifications.as_str(),
    ];
    fields
        .iter()
        .filter(|f| !f.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Space-joins the non-empty free-text fields of a job posting.
fn build_job_document(job: &JobPosting) -> String {
    let fields = [
        job.description.as_str(),
        job.required_skills.as_str(),
        job.title.as_str(),
        job.company.as_str(),
    ];
    fields
        .iter()
        .filter(|f| !f.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Recommends jobs for a student profile, ranked by score descending.
///
/// Per job: `base = similarity × 70`, plus the rule-scoring delta, clamped to
/// [0,100] and rounded to 1 decimal. Ties keep the input job order (stable
/// sort). Callers may truncate the list (the portal UI shows the top 5).
///
/// Degraded paths, never errors:
/// - empty job list → empty vec
/// - fully empty corpus → score 0 with "Insufficient data for recommendation."
/// - degenerate vocabulary → similarity 0 for every job
pub fn recommend_jobs<'a>(
    profile: &StudentProfile,
    jobs: &'a [JobPosting],
) -> Vec<RecommendationResult<'a>> {
    if jobs.is_empty() {
        return Vec::new();
    }

    let student_document = build_student_document(profile);
    let job_documents: Vec<String> = jobs.iter().map(build_job_document).collect();

    if student_document.is_empty() && job_documents.iter().all(String::is_empty) {
        tracing::debug!("corpus is empty; returning zero-score results");
        return jobs
            .iter()
            .map(|job| RecommendationResult {
                job,
                score: 0.0,
                reasons: vec!["Insufficient data for recommendation.".to_string()],
            })
            .collect();
    }

    let similarities = match similarity_scores(&student_document, &job_documents) {
        Ok(values) => values,
        Err(e) => {
            tracing::debug!(error = %e, "vectorization failed; degrading to zero similarity");
            vec![0.0; jobs.len()]
        }
    };

    let mut results: Vec<RecommendationResult<'a>> = jobs
        .iter()
        .zip(similarities)
        .map(|(job, similarity)| {
            let base = similarity * SIMILARITY_WEIGHT;
            let (delta, mut reasons) = score_rules(profile, job);
            let score = round_to_tenth((base + delta).clamp(0.0, 100.0));

            if reasons.is_empty() {
                // The student document is the more specific signal: its
                // absence explains a reasonless result better than the match.
                if student_document.is_empty() {
                    reasons.push("Complete your profile to get better matches".to_string());
                } else {
                    reasons.push("Profile text matched job description".to_string());
                }
            }

            RecommendationResult { job, score, reasons }
        })
        .collect();

    // sort_by is stable: equal scores keep their input order.
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}
