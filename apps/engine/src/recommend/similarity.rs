//! Similarity scoring — TF-IDF vector space with cosine similarity.
//!
//! The corpus is `[student_document] + job_documents`. Vectors use smoothed
//! IDF (`ln((1+N)/(1+df)) + 1`) and are L2-normalized, so cosine similarity of
//! non-negative vectors lands in [0,1]. Fitting fails only when the corpus has
//! no usable vocabulary after stop-word removal; callers degrade that case to
//! zero similarity for every job.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::errors::EngineError;

/// English stop words removed before vectorization.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "else",
    "every", "few", "for", "from", "had", "has", "have", "he", "her", "here", "him", "his", "how",
    "if", "in", "into", "is", "it", "its", "itself", "just", "me", "might", "more", "most",
    "must", "my", "myself", "no", "nor", "not", "now", "of", "on", "once", "only", "or", "other",
    "our", "out", "over", "own", "same", "shall", "should", "so", "some", "such", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "why", "will", "with", "would", "you", "your",
];

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

/// Tokenizes a document: lower-case, split on non-alphanumeric characters,
/// keep tokens of length ≥ 2, drop stop words.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.len() > 1)
        .filter(|s| !is_stop_word(s))
        .map(String::from)
        .collect()
}

/// TF-IDF vectorizer fitted over a fixed corpus.
///
/// The vocabulary is ordered (BTreeMap) so vector layout, and therefore every
/// similarity value, is deterministic for a given corpus.
struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fits vocabulary and IDF weights over tokenized documents.
    fn fit(documents: &[Vec<String>]) -> Result<Self, EngineError> {
        let mut vocabulary = BTreeMap::new();
        for doc in documents {
            for term in doc {
                let next_index = vocabulary.len();
                vocabulary.entry(term.clone()).or_insert(next_index);
            }
        }
        if vocabulary.is_empty() {
            return Err(EngineError::EmptyVocabulary);
        }

        // Re-index in sorted order so vector positions follow the BTreeMap.
        for (index, (_, slot)) in vocabulary.iter_mut().enumerate() {
            *slot = index;
        }

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for doc in documents {
            let unique: BTreeSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                document_frequency[vocabulary[term]] += 1;
            }
        }

        let total_docs = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + total_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Ok(Self { vocabulary, idf })
    }

    /// Transforms one tokenized document into an L2-normalized TF-IDF vector.
    fn transform(&self, tokens: &[String]) -> Vec<f64> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        let mut vector = vec![0.0; self.vocabulary.len()];
        for (term, count) in counts {
            if let Some(&index) = self.vocabulary.get(term) {
                vector[index] = count as f64 * self.idf[index];
            }
        }

        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

/// Cosine similarity between two vectors; 0.0 when either vector is all-zero.
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Computes the TF-IDF cosine similarity between the student document and each
/// job document, one value in [0,1] per job.
///
/// Errors only when the whole corpus has no vocabulary after stop-word
/// removal; `recommend_jobs` catches that and degrades to zero similarity.
pub fn similarity_scores(
    student_document: &str,
    job_documents: &[String],
) -> Result<Vec<f64>, EngineError> {
    let tokenized: Vec<Vec<String>> = std::iter::once(student_document)
        .chain(job_documents.iter().map(String::as_str))
        .map(tokenize)
        .collect();

    let vectorizer = TfidfVectorizer::fit(&tokenized)?;
    tracing::debug!(
        vocabulary = vectorizer.vocabulary.len(),
        documents = tokenized.len(),
        "fitted tf-idf vectorizer"
    );

    let student_vector = vectorizer.transform(&tokenized[0]);
    Ok(tokenized[1..]
        .iter()
        .map(|doc| cosine_similarity(&student_vector, &vectorizer.transform(doc)))
        .collect())
}
