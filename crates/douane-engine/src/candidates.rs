use douane_core::config::ScoringConfig;
use douane_core::constants;
use douane_core::sections::section_for_chapter;
use douane_core::tokens::{overlap_ratio, tokenize};
use douane_core::types::{Candidate, CandidateOrigin, SignalTrace};
use douane_knowledge::KnowledgeBase;
use douane_knowledge::vocabulary;
use douane_reference::ReferenceSet;
use std::collections::HashSet;

/// Rate placeholder for chapter-level candidates, which carry no duty rate
/// of their own.
const CHAPTER_RATE: &str = "À déterminer selon sous-position";

/// Chapter bodies are long; candidates carry a bounded excerpt.
const CHAPTER_EXCERPT_CHARS: usize = 300;

/// Generate the candidate pool for one query: knowledge-base descriptors
/// whose keyword/synonym/brand appears in the query, plus reference
/// subheadings and chapters containing a query token.
///
/// Origin-type + code is the dedup key; the first occurrence wins. The
/// lexical matches found here are recorded on each candidate's signal
/// trace for the scorer.
pub fn generate(
    query: &str,
    knowledge: &KnowledgeBase,
    reference: &ReferenceSet,
    scoring: &ScoringConfig,
) -> Vec<Candidate> {
    let query_lower = query.to_lowercase();
    let match_tokens: Vec<String> = query_lower
        .split_whitespace()
        .map(str::to_string)
        .filter(|t| t.chars().count() >= constants::MIN_MATCH_TOKEN_LEN)
        .collect();

    let mut candidates = Vec::new();
    let mut seen = HashSet::<String>::new();

    for descriptor in knowledge.descriptors() {
        let keyword_match = query_lower.contains(&descriptor.keyword);
        let synonym_matches: Vec<String> = descriptor
            .synonyms
            .iter()
            .filter(|s| query_lower.contains(s.as_str()))
            .cloned()
            .collect();
        let brand_matches: Vec<String> = descriptor
            .brands
            .iter()
            .filter(|b| query_lower.contains(b.as_str()))
            .cloned()
            .collect();

        if !keyword_match && synonym_matches.is_empty() && brand_matches.is_empty() {
            continue;
        }
        if !seen.insert(dedup_key(CandidateOrigin::Product, &descriptor.code)) {
            continue;
        }

        candidates.push(Candidate {
            origin: CandidateOrigin::Product,
            code: descriptor.code.clone(),
            description: descriptor.description.clone(),
            rate: descriptor.rate.clone(),
            section: Some(descriptor.section.clone()),
            materials: descriptor.materials.clone(),
            functions: descriptor.functions.clone(),
            score: 0.0,
            signals: SignalTrace {
                keyword_match,
                synonym_matches,
                brand_matches,
                ..SignalTrace::default()
            },
        });
    }

    for (code, subheading) in &reference.subheadings {
        let description_lower = subheading.description.to_lowercase();
        if !contains_any_token(&description_lower, &match_tokens) {
            continue;
        }
        if scoring.subheading_floor > 0.0
            && overlap_ratio(&query_lower, &description_lower) < scoring.subheading_floor
        {
            continue;
        }
        if !seen.insert(dedup_key(CandidateOrigin::Subheading, code)) {
            continue;
        }

        candidates.push(Candidate {
            origin: CandidateOrigin::Subheading,
            code: code.clone(),
            description: subheading.description.clone(),
            rate: subheading.rate.clone(),
            section: chapter_of_code(code).and_then(section_for_chapter).map(String::from),
            materials: detected_terms(&description_lower, vocabulary::MATERIAL_TERMS),
            functions: detected_terms(&description_lower, vocabulary::FUNCTION_TERMS),
            score: 0.0,
            signals: SignalTrace::default(),
        });
    }

    for (id, chapter) in &reference.chapters {
        let body_lower = chapter.body.to_lowercase();
        if !contains_any_token(&body_lower, &match_tokens) {
            continue;
        }
        if overlap_ratio(&query_lower, &body_lower) < scoring.chapter_floor {
            continue;
        }
        if !seen.insert(dedup_key(CandidateOrigin::Chapter, id)) {
            continue;
        }

        candidates.push(Candidate {
            origin: CandidateOrigin::Chapter,
            code: id.clone(),
            description: excerpt(&chapter.body, CHAPTER_EXCERPT_CHARS),
            rate: CHAPTER_RATE.to_string(),
            section: section_for_chapter(id).map(String::from),
            materials: detected_terms(&body_lower, vocabulary::MATERIAL_TERMS),
            functions: detected_terms(&body_lower, vocabulary::FUNCTION_TERMS),
            score: 0.0,
            signals: SignalTrace::default(),
        });
    }

    candidates
}

fn dedup_key(origin: CandidateOrigin, code: &str) -> String {
    format!("{origin}:{code}")
}

fn contains_any_token(text_lower: &str, tokens: &[String]) -> bool {
    tokens.iter().any(|token| text_lower.contains(token.as_str()))
}

/// Vocabulary terms present in a reference text, token-level.
fn detected_terms(text_lower: &str, terms: &[&str]) -> Vec<String> {
    let tokens: HashSet<String> = tokenize(text_lower).into_iter().collect();
    terms
        .iter()
        .filter(|term| tokens.contains(**term))
        .map(|term| (*term).to_string())
        .collect()
}

/// Two-digit chapter prefix of a dotted code (`8703.23.00.00` → `87`).
fn chapter_of_code(code: &str) -> Option<&str> {
    let first = code.split('.').next()?;
    first.get(..2)
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}
