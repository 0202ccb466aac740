use douane_core::tokens::{overlap_ratio, tokenize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimilarityError {
    #[error("similarity provider unavailable: {0}")]
    Unavailable(String),

    #[error("similarity provider failed: {0}")]
    Provider(String),
}

/// External semantic-similarity collaborator.
///
/// Implementations return a score in [0,1] that grows with semantic or
/// lexical overlap between the two texts. The scorer treats any `Err` as a
/// collaborator fault and degrades to [`token_overlap`]; classification
/// always completes.
pub trait SimilarityProvider: Send + Sync {
    fn score(&self, a: &str, b: &str) -> Result<f64, SimilarityError>;
}

/// Default provider: term-weighted lexical overlap.
///
/// Tokens are weighted by their length, so discriminative content words
/// count more than short function words, and the result is the cosine of
/// the two weighted token profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalSimilarity;

impl SimilarityProvider for LexicalSimilarity {
    fn score(&self, a: &str, b: &str) -> Result<f64, SimilarityError> {
        Ok(weighted_cosine(a, b))
    }
}

/// Plain token-overlap ratio, the degraded estimate used when the primary
/// provider errors.
pub fn token_overlap(a: &str, b: &str) -> f64 {
    overlap_ratio(a, b)
}

fn weighted_profile(text: &str) -> HashMap<String, f64> {
    let mut profile = HashMap::new();
    for token in tokenize(text) {
        let weight = token.chars().count() as f64;
        *profile.entry(token).or_insert(0.0) += weight;
    }
    profile
}

fn weighted_cosine(a: &str, b: &str) -> f64 {
    let profile_a = weighted_profile(a);
    let profile_b = weighted_profile(b);
    if profile_a.is_empty() || profile_b.is_empty() {
        return 0.0;
    }

    let dot: f64 = profile_a
        .iter()
        .filter_map(|(token, weight)| profile_b.get(token).map(|other| weight * other))
        .sum();
    let norm_a: f64 = profile_a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = profile_b.values().map(|w| w * w).sum::<f64>().sqrt();
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_score_one() {
        let provider = LexicalSimilarity;
        let score = provider
            .score("voiture de tourisme", "voiture de tourisme")
            .unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_texts_score_zero() {
        let provider = LexicalSimilarity;
        let score = provider.score("café arabica", "acier inoxydable").unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn more_overlap_scores_higher() {
        let provider = LexicalSimilarity;
        let close = provider
            .score("voiture automobile toyota", "voiture automobile")
            .unwrap();
        let far = provider
            .score("voiture automobile toyota", "automobile")
            .unwrap();
        assert!(close > far);
        assert!(far > 0.0);
    }

    #[test]
    fn empty_text_scores_zero() {
        let provider = LexicalSimilarity;
        assert_eq!(provider.score("", "voiture").unwrap(), 0.0);
    }

    #[test]
    fn token_overlap_matches_simple_ratio() {
        assert!((token_overlap("voiture rouge", "voiture bleue") - 0.5).abs() < f64::EPSILON);
    }
}
