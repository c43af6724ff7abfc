// Guidance generators: skill-gap roadmaps and resume-bullet suggestions.
// Both reuse only the text normalizer; neither touches the scoring path.

pub mod resume_bullets;
pub mod skill_gap;
