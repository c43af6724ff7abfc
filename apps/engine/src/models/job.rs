use serde::{Deserialize, Serialize};

/// A job posting as supplied by the caller.
///
/// `required_skills` and `eligible_branches` are comma-delimited strings;
/// normalization happens at comparison time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub description: String,
    pub required_skills: String,
    pub min_cgpa: f64,
    pub eligible_branches: String,
    pub location: String,
}
