use serde::{Deserialize, Serialize};

/// A student profile as supplied by the caller.
///
/// Free-text fields (`skills`, `interests`, `projects`, `certifications`,
/// `preferred_locations`) are delimited strings and may be empty. `cgpa` is
/// absent when the student has not filled it in; the CGPA rule is skipped
/// entirely in that case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentProfile {
    pub skills: String,
    pub interests: String,
    pub projects: String,
    pub certifications: String,
    pub preferred_locations: String,
    pub branch: String,
    pub cgpa: Option<f64>,
}
