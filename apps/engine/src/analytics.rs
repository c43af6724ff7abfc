//! Cross-profile skill aggregation for recruiter-facing dashboards.

use std::collections::HashMap;

use crate::models::StudentProfile;
use crate::text::split_delimited;

/// Default number of skills reported by `top_skills_from_profiles`.
pub const DEFAULT_TOP_SKILLS_LIMIT: usize = 8;

/// Counts normalized skill tokens across profiles and returns the `limit` most
/// common as `(skill, count)` pairs.
///
/// Ordered by count descending, then skill ascending so equal counts are
/// deterministic.
pub fn top_skills_from_profiles(
    profiles: &[StudentProfile],
    limit: usize,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for profile in profiles {
        for skill in split_delimited(&profile.skills) {
            *counts.entry(skill).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}
