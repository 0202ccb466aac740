use crate::similarity::{SimilarityProvider, token_overlap};
use douane_core::config::ScoringConfig;
use douane_core::types::{Candidate, Features};
use douane_knowledge::vocabulary;
use tracing::debug;

/// One additive scoring signal: a name for audit, a weight drawn from
/// config, and a strength detector over the candidate's recorded trace.
/// Evaluated uniformly by a single loop so weights stay centrally tunable
/// and each signal is independently testable.
struct Signal {
    name: &'static str,
    weight: fn(&ScoringConfig) -> f64,
    strength: fn(&Candidate) -> f64,
}

const SIGNALS: &[Signal] = &[
    Signal {
        name: "keyword",
        weight: |c| c.keyword_weight,
        strength: |cand| if cand.signals.keyword_match { 1.0 } else { 0.0 },
    },
    Signal {
        name: "synonym",
        weight: |c| c.synonym_weight,
        strength: |cand| cand.signals.synonym_matches.len() as f64,
    },
    Signal {
        name: "brand",
        weight: |c| c.brand_weight,
        strength: |cand| cand.signals.brand_matches.len() as f64,
    },
    Signal {
        name: "material",
        weight: |c| c.material_weight,
        strength: |cand| cand.signals.material_matches.len() as f64,
    },
    Signal {
        name: "function",
        weight: |c| c.function_weight,
        strength: |cand| cand.signals.function_matches.len() as f64,
    },
    // RGI 4: classification by closest analogy.
    Signal {
        name: "semantic",
        weight: |c| c.semantic_weight,
        strength: |cand| cand.signals.semantic_score,
    },
    // RGI 2: incomplete goods classified as if complete.
    Signal {
        name: "rgi2_incomplete",
        weight: |c| c.rgi_incomplete_bonus,
        strength: |cand| if cand.signals.rgi_incomplete { 1.0 } else { 0.0 },
    },
    // RGI 3: mixtures classified by the predominant material.
    Signal {
        name: "rgi3_predominant",
        weight: |c| c.rgi_predominant_bonus,
        strength: |cand| if cand.signals.rgi_predominant_material.is_some() { 1.0 } else { 0.0 },
    },
    // RGI 5: packaging follows the goods.
    Signal {
        name: "rgi5_packaging",
        weight: |c| c.rgi_packaging_bonus,
        strength: |cand| if cand.signals.rgi_packaging { 1.0 } else { 0.0 },
    },
    // RGI 6: the most specific subheading wins among siblings.
    Signal {
        name: "rgi6_specificity",
        weight: |c| c.rgi_specificity_step,
        strength: |cand| cand.signals.rgi_specificity,
    },
];

/// Names of the scoring signals, in evaluation order.
pub fn signal_names() -> Vec<&'static str> {
    SIGNALS.iter().map(|s| s.name).collect()
}

/// Score every candidate in place.
///
/// Fills the remaining signal-trace fields (material/function overlap,
/// semantic similarity, legal-rule flags), then accumulates the weighted
/// signals and clamps the result to [0,1]. A similarity-provider fault
/// degrades that candidate to the token-overlap estimate; scoring never
/// fails.
pub fn score_candidates(
    candidates: &mut [Candidate],
    query: &str,
    features: &Features,
    provider: &dyn SimilarityProvider,
    config: &ScoringConfig,
) {
    let config = config.normalized();
    let query_lower = query.to_lowercase();

    let incomplete = vocabulary::INCOMPLETE_TERMS
        .iter()
        .any(|term| query_lower.contains(term));
    let packaging = vocabulary::PACKAGING_TERMS
        .iter()
        .any(|term| query_lower.contains(term));
    let predominant = predominant_material(&query_lower, &features.materials);

    for candidate in candidates.iter_mut() {
        candidate.signals.material_matches =
            intersect(&candidate.materials, &features.materials);
        candidate.signals.function_matches =
            intersect(&candidate.functions, &features.functions);

        let (semantic, fallback) = match provider.score(&query_lower, &candidate.description) {
            Ok(score) => (score.clamp(0.0, 1.0), false),
            Err(err) => {
                debug!(error = %err, code = %candidate.code, "similarity provider failed; using token overlap");
                (token_overlap(&query_lower, &candidate.description), true)
            }
        };
        candidate.signals.semantic_score = semantic;
        candidate.signals.semantic_fallback = fallback;

        candidate.signals.rgi_incomplete = incomplete;
        candidate.signals.rgi_packaging = packaging;
        candidate.signals.rgi_predominant_material = predominant
            .as_deref()
            .filter(|material| mentions_material(candidate, material))
            .map(String::from);
        candidate.signals.rgi_specificity =
            candidate.code_specificity().saturating_sub(1) as f64;

        let total: f64 = SIGNALS
            .iter()
            .map(|signal| (signal.weight)(&config) * (signal.strength)(candidate))
            .sum();
        candidate.score = total.clamp(0.0, 1.0);
    }
}

/// The predominant material among the detected ones, by raw substring
/// occurrence count in the query. Ties keep the first detected material.
///
/// Counting raw occurrences is sensitive to incidental repetition; this is
/// long-standing behavior that downstream users calibrate against, so it
/// is kept as-is.
fn predominant_material(query_lower: &str, materials: &[String]) -> Option<String> {
    if materials.len() < 2 {
        return None;
    }
    let mut best: Option<(&String, usize)> = None;
    for material in materials {
        let count = query_lower.matches(material.as_str()).count();
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((material, count));
        }
    }
    best.map(|(material, _)| material.clone())
}

fn mentions_material(candidate: &Candidate, material: &str) -> bool {
    candidate.materials.iter().any(|m| m == material)
        || candidate.description.to_lowercase().contains(material)
}

/// Distinct values of `own` that also appear in `detected`, keeping order.
fn intersect(own: &[String], detected: &[String]) -> Vec<String> {
    let mut matches: Vec<String> = own
        .iter()
        .filter(|value| detected.contains(value))
        .cloned()
        .collect();
    matches.dedup();
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::{LexicalSimilarity, SimilarityError};
    use douane_core::types::{CandidateOrigin, SignalTrace};

    struct FailingProvider;

    impl SimilarityProvider for FailingProvider {
        fn score(&self, _: &str, _: &str) -> Result<f64, SimilarityError> {
            Err(SimilarityError::Unavailable("offline".to_string()))
        }
    }

    fn candidate(code: &str, description: &str) -> Candidate {
        Candidate {
            origin: CandidateOrigin::Subheading,
            code: code.to_string(),
            description: description.to_string(),
            rate: "5%".to_string(),
            section: None,
            materials: Vec::new(),
            functions: Vec::new(),
            score: 0.0,
            signals: SignalTrace::default(),
        }
    }

    #[test]
    fn unit_weights_keep_signal_precedence() {
        let names = signal_names();
        assert_eq!(
            &names[..6],
            &["keyword", "synonym", "brand", "material", "function", "semantic"]
        );
        let config = ScoringConfig::default();
        assert!(config.keyword_weight > config.synonym_weight);
        assert!(config.material_weight > config.function_weight);
    }

    #[test]
    fn keyword_outweighs_single_synonym_and_brand() {
        let features = Features::default();
        let mut with_keyword = candidate("84.71", "Machines de traitement");
        with_keyword.signals.keyword_match = true;
        let mut with_brand = candidate("84.71", "Machines de traitement");
        with_brand.signals.brand_matches = vec!["dell".to_string()];

        let mut candidates = vec![with_keyword, with_brand];
        score_candidates(
            &mut candidates,
            "texte sans rapport",
            &features,
            &LexicalSimilarity,
            &ScoringConfig::default(),
        );
        assert!(candidates[0].score > candidates[1].score);
    }

    #[test]
    fn specificity_bonus_is_monotone_in_code_depth() {
        let features = Features::default();
        let mut candidates = vec![
            candidate("84", "Machines automatiques"),
            candidate("84.71", "Machines automatiques"),
            candidate("8471.30.00.00", "Machines automatiques"),
        ];
        score_candidates(
            &mut candidates,
            "machines automatiques",
            &features,
            &LexicalSimilarity,
            &ScoringConfig::default(),
        );
        assert!(candidates[2].score > candidates[1].score);
        assert!(candidates[1].score > candidates[0].score);
    }

    #[test]
    fn predominant_material_uses_raw_occurrence_counts() {
        let materials = vec!["cuir".to_string(), "plastique".to_string()];
        let query = "sac cuir et plastique, doublure cuir";
        assert_eq!(
            predominant_material(query, &materials),
            Some("cuir".to_string())
        );
        // A single detected material never triggers the rule.
        assert_eq!(predominant_material(query, &materials[..1].to_vec()), None);
    }

    #[test]
    fn predominant_bonus_requires_candidate_mention() {
        let features = Features {
            materials: vec!["cuir".to_string(), "caoutchouc".to_string()],
            ..Features::default()
        };
        let mut candidates = vec![
            candidate("42.02.21", "Sacs à main en cuir naturel"),
            candidate("48.02.10", "Papiers et cartons"),
        ];
        score_candidates(
            &mut candidates,
            "sac en cuir cuir et caoutchouc",
            &features,
            &LexicalSimilarity,
            &ScoringConfig::default(),
        );
        assert_eq!(
            candidates[0].signals.rgi_predominant_material.as_deref(),
            Some("cuir")
        );
        assert_eq!(candidates[1].signals.rgi_predominant_material, None);
    }

    #[test]
    fn provider_fault_degrades_to_token_overlap() {
        let features = Features::default();
        let mut candidates = vec![candidate("87.03", "voitures de tourisme")];
        score_candidates(
            &mut candidates,
            "voitures récentes",
            &features,
            &FailingProvider,
            &ScoringConfig::default(),
        );
        assert!(candidates[0].signals.semantic_fallback);
        assert!((candidates[0].signals.semantic_score - 0.5).abs() < f64::EPSILON);
        assert!(candidates[0].score > 0.0);
    }

    #[test]
    fn score_is_clamped_to_unit_interval() {
        let features = Features {
            materials: vec!["cuir".to_string(), "tissu".to_string(), "plastique".to_string()],
            ..Features::default()
        };
        let mut maxed = candidate("42.02.21.10", "Sacs à main en cuir tissu plastique");
        maxed.materials = features.materials.clone();
        maxed.signals.keyword_match = true;
        maxed.signals.synonym_matches = vec!["bag".into(), "handbag".into(), "sacoche".into()];
        maxed.signals.brand_matches = vec!["gucci".into(), "prada".into()];
        let mut candidates = vec![maxed];
        score_candidates(
            &mut candidates,
            "sac cuir tissu plastique emballage pièce",
            &features,
            &LexicalSimilarity,
            &ScoringConfig::default(),
        );
        assert!(candidates[0].score <= 1.0);
    }
}
