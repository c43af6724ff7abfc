use thiserror::Error;

/// Engine-internal error type.
///
/// The public recommendation API is infallible: the one fallible step (fitting
/// the TF-IDF vectorizer) is caught inside `recommend_jobs` and degraded to
/// zero similarity for every job, so callers never see this variant surface.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The corpus has no usable vocabulary after tokenization and stop-word
    /// removal (e.g., every document consists solely of stop words).
    #[error("empty vocabulary: corpus contains no non-stop-word tokens")]
    EmptyVocabulary,
}
