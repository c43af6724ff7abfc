//! Skill-gap generator — missing skills plus a per-skill learning roadmap.
//!
//! The roadmap table is fixed literal data keyed by normalized skill; skills
//! outside the table get a generic 3-step roadmap. Changing the step texts
//! changes what students see, so the table is a constant, not configuration.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::{JobPosting, StudentProfile};
use crate::text::{split_delimited, title_case};

/// Curated learning roadmaps for common skills, keyed by normalized token.
const SKILL_ROADMAP: &[(&str, [&str; 3])] = &[
    (
        "python",
        [
            "Revise Python fundamentals and data structures.",
            "Build a mini project using APIs and file handling.",
            "Practice coding challenges focused on Python.",
        ],
    ),
    (
        "django",
        [
            "Learn Django models, views, and templates basics.",
            "Build CRUD app with authentication.",
            "Deploy a demo project locally.",
        ],
    ),
    (
        "sql",
        [
            "Learn SELECT, JOIN, GROUP BY queries.",
            "Practice normalization and schema design.",
            "Solve SQL interview questions daily.",
        ],
    ),
    (
        "react",
        [
            "Understand components, state, and props.",
            "Build a small dashboard UI.",
            "Learn API integration with fetch/axios.",
        ],
    ),
    (
        "ml",
        [
            "Revise linear regression and classification basics.",
            "Practice with scikit-learn pipelines.",
            "Build a simple text similarity model.",
        ],
    ),
];

fn roadmap_steps(skill: &str) -> Option<&'static [&'static str; 3]> {
    SKILL_ROADMAP
        .iter()
        .find(|(key, _)| *key == skill)
        .map(|(_, steps)| steps)
}

/// One roadmap entry for a missing skill.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapEntry {
    /// Display-cased skill name ("django" → "Django").
    pub skill: String,
    pub steps: Vec<String>,
}

/// Missing skills (normalized, sorted ascending) and their roadmaps, in the
/// same order.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGapResult {
    pub missing_skills: Vec<String>,
    pub roadmap: Vec<RoadmapEntry>,
}

/// Computes which required skills the student lacks and how to close each gap.
pub fn generate_skill_gap(profile: &StudentProfile, job: &JobPosting) -> SkillGapResult {
    let student_skills: BTreeSet<String> = split_delimited(&profile.skills).into_iter().collect();
    let required_skills: BTreeSet<String> =
        split_delimited(&job.required_skills).into_iter().collect();

    // BTreeSet difference iterates in ascending order.
    let missing_skills: Vec<String> = required_skills
        .difference(&student_skills)
        .cloned()
        .collect();

    let roadmap = missing_skills
        .iter()
        .map(|skill| {
            let steps = match roadmap_steps(skill) {
                Some(steps) => steps.iter().map(|s| s.to_string()).collect(),
                None => vec![
                    format!("Learn {skill} fundamentals."),
                    format!("Build a mini project using {skill}."),
                    format!("Practice interview questions on {skill}."),
                ],
            };
            RoadmapEntry {
                skill: title_case(skill),
                steps,
            }
        })
        .collect();

    SkillGapResult {
        missing_skills,
        roadmap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pair(student_skills: &str, required_skills: &str) -> (StudentProfile, JobPosting) {
        let profile = StudentProfile {
            skills: student_skills.to_string(),
            ..Default::default()
        };
        let job = JobPosting {
            required_skills: required_skills.to_string(),
            ..Default::default()
        };
        (profile, job)
    }

    #[test]
    fn test_missing_skill_with_curated_roadmap() {
        let (profile, job) = make_pair("python, sql", "python, sql, django");
        let result = generate_skill_gap(&profile, &job);
        assert_eq!(result.missing_skills, vec!["django"]);
        assert_eq!(result.roadmap.len(), 1);
        assert_eq!(result.roadmap[0].skill, "Django");
        assert_eq!(
            result.roadmap[0].steps,
            vec![
                "Learn Django models, views, and templates basics.",
                "Build CRUD app with authentication.",
                "Deploy a demo project locally.",
            ]
        );
    }

    #[test]
    fn test_unknown_skill_gets_generic_roadmap() {
        let (profile, job) = make_pair("", "kubernetes");
        let result = generate_skill_gap(&profile, &job);
        assert_eq!(result.missing_skills, vec!["kubernetes"]);
        assert_eq!(result.roadmap[0].skill, "Kubernetes");
        assert_eq!(
            result.roadmap[0].steps,
            vec![
                "Learn kubernetes fundamentals.",
                "Build a mini project using kubernetes.",
                "Practice interview questions on kubernetes.",
            ]
        );
    }

    #[test]
    fn test_missing_sorted_ascending() {
        let (profile, job) = make_pair("", "sql, aws, python");
        let result = generate_skill_gap(&profile, &job);
        assert_eq!(result.missing_skills, vec!["aws", "python", "sql"]);
        let roadmap_skills: Vec<&str> =
            result.roadmap.iter().map(|e| e.skill.as_str()).collect();
        assert_eq!(roadmap_skills, vec!["Aws", "Python", "Sql"]);
    }

    #[test]
    fn test_no_gap_when_all_skills_covered() {
        let (profile, job) = make_pair("python, sql, django", "python, sql");
        let result = generate_skill_gap(&profile, &job);
        assert!(result.missing_skills.is_empty());
        assert!(result.roadmap.is_empty());
    }

    #[test]
    fn test_case_insensitive_matching() {
        let (profile, job) = make_pair("Python, SQL", "python, sql");
        let result = generate_skill_gap(&profile, &job);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_empty_required_skills_yields_empty_gap() {
        let (profile, job) = make_pair("python", "");
        let result = generate_skill_gap(&profile, &job);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_roadmap_table_covers_expected_skills() {
        for skill in ["python", "django", "sql", "react", "ml"] {
            assert!(roadmap_steps(skill).is_some(), "Missing roadmap for {skill}");
        }
        assert!(roadmap_steps("cobol").is_none());
    }
}
