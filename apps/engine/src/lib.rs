//! Placement recommendation engine.
//!
//! Transforms one student profile and a list of job postings into a ranked list
//! of `(job, score, reasons)` by blending a TF-IDF cosine-similarity signal with
//! deterministic rule-based scoring. The companion guidance routines derive a
//! skill-gap roadmap and resume-bullet suggestions from the same normalized
//! token sets.
//!
//! The engine is stateless and pure: it only reads its inputs, allocates local
//! structures, and produces identical output for identical input. Degenerate
//! inputs (empty job lists, empty corpora, stop-word-only vocabularies) degrade
//! to zero-similarity results instead of erroring.

pub mod analytics;
pub mod errors;
pub mod guidance;
pub mod models;
pub mod recommend;
pub mod text;

pub use analytics::top_skills_from_profiles;
pub use errors::EngineError;
pub use guidance::resume_bullets::generate_resume_bullets;
pub use guidance::skill_gap::{generate_skill_gap, RoadmapEntry, SkillGapResult};
pub use models::{JobPosting, StudentProfile};
pub use recommend::{recommend_jobs, RecommendationResult};
