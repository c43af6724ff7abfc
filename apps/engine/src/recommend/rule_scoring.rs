//! Rule-based scoring — deterministic point deltas with human-readable reasons.
//!
//! Each rule compares normalized tokens from the profile against the job and
//! may append one reason. Rules run in a fixed order (skills, CGPA, branch,
//! location) so the reasons list is deterministic for a given input pair.

use std::collections::BTreeSet;

use crate::models::{JobPosting, StudentProfile};
use crate::text::{split_delimited, title_case};

/// Points per overlapping skill between profile and job.
const SKILL_OVERLAP_POINTS: f64 = 5.0;
/// Points when the profile CGPA meets the job minimum.
const CGPA_MET_POINTS: f64 = 10.0;
/// Penalty when the profile CGPA is below the job minimum.
const CGPA_BELOW_PENALTY: f64 = 50.0;
/// Points when the student's branch is among the eligible branches.
const BRANCH_MATCH_POINTS: f64 = 8.0;
/// Points when the job location is among the preferred locations.
const LOCATION_MATCH_POINTS: f64 = 5.0;

/// Computes the rule-based score delta and reasons for one (profile, job) pair.
///
/// Rules, in order:
/// 1. Skill overlap: +5 per overlapping skill; reason lists the overlap
///    title-cased, comma-joined, sorted ascending.
/// 2. CGPA (only when present): −50 below the job minimum, +10 otherwise.
/// 3. Branch: +8 when the normalized branch is eligible.
/// 4. Location: +5 when the job location is among the preferred locations.
pub fn score_rules(profile: &StudentProfile, job: &JobPosting) -> (f64, Vec<String>) {
    let mut delta = 0.0;
    let mut reasons = Vec::new();

    let student_skills: BTreeSet<String> = split_delimited(&profile.skills).into_iter().collect();
    let required_skills: BTreeSet<String> =
        split_delimited(&job.required_skills).into_iter().collect();

    // BTreeSet intersection iterates in ascending order, which keeps the
    // reason string stable across calls.
    let overlap: Vec<&String> = student_skills.intersection(&required_skills).collect();
    if !overlap.is_empty() {
        delta += SKILL_OVERLAP_POINTS * overlap.len() as f64;
        let listed: Vec<String> = overlap.iter().map(|s| title_case(s.as_str())).collect();
        reasons.push(format!("Matching skills: {}", listed.join(", ")));
    }

    if let Some(cgpa) = profile.cgpa {
        if cgpa < job.min_cgpa {
            delta -= CGPA_BELOW_PENALTY;
            reasons.push("CGPA below minimum requirement".to_string());
        } else {
            delta += CGPA_MET_POINTS;
            reasons.push("CGPA meets requirement".to_string());
        }
    }

    if !profile.branch.is_empty() {
        let branches: BTreeSet<String> =
            split_delimited(&job.eligible_branches).into_iter().collect();
        if branches.contains(&profile.branch.trim().to_lowercase()) {
            delta += BRANCH_MATCH_POINTS;
            reasons.push("Eligible branch match".to_string());
        }
    }

    if !profile.preferred_locations.is_empty() {
        let preferred: BTreeSet<String> =
            split_delimited(&profile.preferred_locations).into_iter().collect();
        if preferred.contains(&job.location.trim().to_lowercase()) {
            delta += LOCATION_MATCH_POINTS;
            reasons.push("Preferred location match".to_string());
        }
    }

    (delta, reasons)
}
