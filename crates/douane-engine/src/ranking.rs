use douane_core::types::Candidate;

/// Sort candidates by descending score and truncate to `limit`.
///
/// Exactly equal scores fall back to origin precedence (product over
/// subheading over chapter), then the lexicographically smaller code, so
/// ranking is deterministic and reproducible.
pub fn rank(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.origin.precedence().cmp(&b.origin.precedence()))
            .then_with(|| a.code.cmp(&b.code))
    });
    candidates.truncate(limit);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use douane_core::types::{CandidateOrigin, SignalTrace};

    fn candidate(origin: CandidateOrigin, code: &str, score: f64) -> Candidate {
        Candidate {
            origin,
            code: code.to_string(),
            description: String::new(),
            rate: String::new(),
            section: None,
            materials: Vec::new(),
            functions: Vec::new(),
            score,
            signals: SignalTrace::default(),
        }
    }

    #[test]
    fn sorts_by_score_descending() {
        let ranked = rank(
            vec![
                candidate(CandidateOrigin::Chapter, "84", 0.2),
                candidate(CandidateOrigin::Subheading, "84.71.30", 0.8),
            ],
            10,
        );
        assert_eq!(ranked[0].code, "84.71.30");
    }

    #[test]
    fn equal_scores_prefer_product_then_subheading_then_chapter() {
        let ranked = rank(
            vec![
                candidate(CandidateOrigin::Chapter, "87", 0.5),
                candidate(CandidateOrigin::Product, "87.03", 0.5),
                candidate(CandidateOrigin::Subheading, "87.03.21", 0.5),
            ],
            10,
        );
        assert_eq!(ranked[0].origin, CandidateOrigin::Product);
        assert_eq!(ranked[1].origin, CandidateOrigin::Subheading);
        assert_eq!(ranked[2].origin, CandidateOrigin::Chapter);
    }

    #[test]
    fn equal_scores_and_origins_prefer_smaller_code() {
        let ranked = rank(
            vec![
                candidate(CandidateOrigin::Subheading, "95.06.69", 0.5),
                candidate(CandidateOrigin::Subheading, "95.06.62", 0.5),
            ],
            10,
        );
        assert_eq!(ranked[0].code, "95.06.62");
    }

    #[test]
    fn truncates_to_limit() {
        let candidates: Vec<Candidate> = (0..20)
            .map(|i| candidate(CandidateOrigin::Subheading, &format!("84.71.{i:02}"), 0.5))
            .collect();
        assert_eq!(rank(candidates, 10).len(), 10);
    }

    #[test]
    fn ranking_is_idempotent() {
        let pool = vec![
            candidate(CandidateOrigin::Chapter, "87", 0.5),
            candidate(CandidateOrigin::Product, "87.03", 0.5),
            candidate(CandidateOrigin::Subheading, "87.12.00", 0.7),
        ];
        let first = rank(pool.clone(), 10);
        let second = rank(pool, 10);
        assert_eq!(first, second);
    }
}
