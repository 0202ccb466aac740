use crate::quality::QualityAnalyzer;
use crate::similarity::{LexicalSimilarity, SimilarityProvider};
use crate::{ambiguity, candidates, explain, features, ranking, scoring, suggest};
use douane_core::config::Config;
use douane_core::constants;
use douane_core::types::{Candidate, ClassificationResult, Features};
use douane_knowledge::KnowledgeBase;
use douane_reference::ReferenceSet;
use std::sync::Arc;
use tracing::debug;

/// The classification engine.
///
/// Holds the startup-built structures (reference mappings, knowledge base)
/// behind shared handles and treats them as immutable; every per-query
/// value is stack-local, so concurrent `classify` calls need no locking.
pub struct Engine {
    reference: ReferenceSet,
    knowledge: Arc<KnowledgeBase>,
    similarity: Box<dyn SimilarityProvider>,
    quality: Option<Box<dyn QualityAnalyzer>>,
    config: Config,
}

impl Engine {
    /// Engine with the default lexical similarity provider, no quality
    /// analyzer, and default config.
    pub fn new(reference: ReferenceSet, knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            reference,
            knowledge,
            similarity: Box::new(LexicalSimilarity),
            quality: None,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Swap in an external semantic-similarity collaborator.
    pub fn with_similarity(mut self, provider: Box<dyn SimilarityProvider>) -> Self {
        self.similarity = provider;
        self
    }

    /// Attach the advisory language-quality collaborator.
    pub fn with_quality(mut self, analyzer: Box<dyn QualityAnalyzer>) -> Self {
        self.quality = Some(analyzer);
        self
    }

    pub fn reference(&self) -> &ReferenceSet {
        &self.reference
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Classify a free-text product description.
    ///
    /// Always returns a structured result: ambiguous input short-circuits
    /// with clarification prompts, an empty candidate pool yields the
    /// "no match" outcome with generic suggestions, and collaborator
    /// faults degrade internally. No I/O, no side effects.
    pub fn classify(&self, query: &str) -> ClassificationResult {
        let query = query.trim();

        let verdict = ambiguity::assess(query, &self.config.ambiguity);
        let quality = self.quality.as_deref().map(|q| q.analyze(query));
        if verdict.ambiguous {
            debug!(kind = %verdict.kind, "query rejected by ambiguity gate");
            return ClassificationResult {
                suggestions: verdict.clarifications.clone(),
                explanation: format!("Description ambiguë détectée : {}", verdict.message),
                verdict: Some(verdict),
                best_match: None,
                alternatives: Vec::new(),
                features: Features::default(),
                confidence: 0.0,
                quality,
            };
        }

        // Feature extraction and candidate generation are data-independent.
        let (features, mut pool) = rayon::join(
            || features::extract(query),
            || {
                candidates::generate(
                    query,
                    &self.knowledge,
                    &self.reference,
                    &self.config.scoring,
                )
            },
        );

        scoring::score_candidates(
            &mut pool,
            query,
            &features,
            self.similarity.as_ref(),
            &self.config.scoring,
        );
        let ranked = ranking::rank(pool, constants::DEFAULT_LIMIT);
        debug!(candidates = ranked.len(), "classification ranked");

        self.assemble(ranked, features, quality)
    }

    fn assemble(
        &self,
        ranked: Vec<Candidate>,
        features: Features,
        quality: Option<douane_core::types::QualityReport>,
    ) -> ClassificationResult {
        let mut ranked = ranked.into_iter();
        let best_match = ranked.next();
        let alternatives: Vec<Candidate> =
            ranked.take(constants::ALTERNATIVES_LIMIT).collect();

        match best_match {
            Some(best) => {
                let explanation = explain::explanation(&best, &features);
                let suggestions =
                    suggest::improvements(&best, &features, &self.config.scoring);
                ClassificationResult {
                    verdict: None,
                    confidence: best.score,
                    best_match: Some(best),
                    alternatives,
                    features,
                    explanation,
                    suggestions,
                    quality,
                }
            }
            None => ClassificationResult {
                verdict: None,
                best_match: None,
                alternatives,
                features,
                confidence: 0.0,
                explanation: explain::no_match_explanation(),
                suggestions: suggest::no_match_suggestions(),
                quality,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
