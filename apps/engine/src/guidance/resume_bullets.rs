//! Resume-bullet generator — cycles projects and top job skills through fixed
//! sentence templates. Always produces exactly five bullets.

use crate::models::{JobPosting, StudentProfile};
use crate::text::{split_delimited, split_projects, title_case};

/// Sentence templates, in order. `{project}` and `{skill}` are filled per index.
const BULLET_TEMPLATES: [&str; 5] = [
    "Built {project} leveraging {skill} to deliver measurable results.",
    "Designed and implemented {project} focusing on {skill} and clean architecture.",
    "Collaborated on {project} to improve {skill} proficiency and delivery speed.",
    "Optimized {project} by applying {skill} for better performance.",
    "Documented {project} outcomes highlighting {skill} and impact.",
];

/// Used when the profile lists no projects.
const FALLBACK_PROJECT: &str = "Academic project";

/// Used when the job lists no required skills.
const FALLBACK_KEYWORDS: [&str; 2] = ["Problem Solving", "Collaboration"];

/// How many job-required skills to cycle through as keywords.
const KEYWORD_LIMIT: usize = 3;

/// Generates exactly five resume bullets tailored to the job's top skills.
///
/// Template index `i` picks `projects[i % len]` and `keywords[i % len]`, so
/// short project/keyword lists cycle instead of truncating the output.
pub fn generate_resume_bullets(profile: &StudentProfile, job: &JobPosting) -> Vec<String> {
    let projects = split_projects(&profile.projects);

    let mut keywords: Vec<String> = split_delimited(&job.required_skills)
        .iter()
        .take(KEYWORD_LIMIT)
        .map(|s| title_case(s))
        .collect();
    if keywords.is_empty() {
        keywords = FALLBACK_KEYWORDS.iter().map(|s| s.to_string()).collect();
    }

    BULLET_TEMPLATES
        .iter()
        .enumerate()
        .map(|(idx, template)| {
            let project = if projects.is_empty() {
                FALLBACK_PROJECT
            } else {
                &projects[idx % projects.len()]
            };
            let skill = &keywords[idx % keywords.len()];
            template
                .replace("{project}", project)
                .replace("{skill}", skill)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pair(projects: &str, required_skills: &str) -> (StudentProfile, JobPosting) {
        let profile = StudentProfile {
            projects: projects.to_string(),
            ..Default::default()
        };
        let job = JobPosting {
            required_skills: required_skills.to_string(),
            ..Default::default()
        };
        (profile, job)
    }

    #[test]
    fn test_always_five_bullets() {
        let (profile, job) = make_pair("Chat App; Portfolio Site", "python, sql, django, react");
        assert_eq!(generate_resume_bullets(&profile, &job).len(), 5);
    }

    #[test]
    fn test_empty_projects_use_fallback() {
        let (profile, job) = make_pair("", "python");
        let bullets = generate_resume_bullets(&profile, &job);
        assert_eq!(bullets.len(), 5);
        for bullet in &bullets {
            assert!(bullet.contains("Academic project"), "Bullet was: {bullet}");
        }
    }

    #[test]
    fn test_empty_skills_use_fallback_keywords() {
        let (profile, job) = make_pair("Chat App", "");
        let bullets = generate_resume_bullets(&profile, &job);
        assert_eq!(bullets.len(), 5);
        // Two fallback keywords alternate across five templates.
        assert!(bullets[0].contains("Problem Solving"));
        assert!(bullets[1].contains("Collaboration"));
        assert!(bullets[2].contains("Problem Solving"));
        assert!(bullets[3].contains("Collaboration"));
        assert!(bullets[4].contains("Problem Solving"));
    }

    #[test]
    fn test_projects_cycle_modulo() {
        let (profile, job) = make_pair("Alpha; Beta", "python");
        let bullets = generate_resume_bullets(&profile, &job);
        assert!(bullets[0].contains("Alpha"));
        assert!(bullets[1].contains("Beta"));
        assert!(bullets[2].contains("Alpha"));
        assert!(bullets[3].contains("Beta"));
        assert!(bullets[4].contains("Alpha"));
    }

    #[test]
    fn test_keywords_capped_at_three_and_title_cased() {
        let (profile, job) = make_pair("App", "python, sql, django, react, aws");
        let bullets = generate_resume_bullets(&profile, &job);
        assert!(bullets[0].contains("Python"));
        assert!(bullets[1].contains("Sql"));
        assert!(bullets[2].contains("Django"));
        // Fourth template cycles back to the first keyword.
        assert!(bullets[3].contains("Python"));
        let joined = bullets.join(" ");
        assert!(!joined.contains("React"));
        assert!(!joined.contains("Aws"));
    }

    #[test]
    fn test_templates_applied_in_order() {
        let (profile, job) = make_pair("App", "python");
        let bullets = generate_resume_bullets(&profile, &job);
        assert!(bullets[0].starts_with("Built"));
        assert!(bullets[1].starts_with("Designed and implemented"));
        assert!(bullets[2].starts_with("Collaborated on"));
        assert!(bullets[3].starts_with("Optimized"));
        assert!(bullets[4].starts_with("Documented"));
    }

    #[test]
    fn test_project_casing_preserved() {
        let (profile, job) = make_pair("ML Dashboard", "python");
        let bullets = generate_resume_bullets(&profile, &job);
        assert!(bullets[0].contains("ML Dashboard"));
    }
}
