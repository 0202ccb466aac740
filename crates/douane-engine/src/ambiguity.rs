use douane_core::config::AmbiguityConfig;
use douane_core::tokens::whitespace_token_count;
use douane_core::types::{AmbiguityKind, AmbiguityVerdict};
use douane_knowledge::vocabulary;

const GENERIC_CLARIFICATIONS: &[&str] = &[
    "Décrivez la forme, la taille, la couleur",
    "Précisez l'usage",
    "Indiquez le matériau",
];

const TOO_SHORT_CLARIFICATIONS: &[&str] = &[
    "Ajoutez le type de produit",
    "Précisez le matériau",
    "Indiquez l'usage ou la fonction",
];

/// Judge whether a query is specific enough to classify.
///
/// Verdicts are evaluated in fixed priority order: very-generic terms
/// first, then curated ambiguous terms lacking context, then bare length.
/// This runs before any scoring work; an ambiguous verdict short-circuits
/// the whole pipeline.
pub fn assess(query: &str, config: &AmbiguityConfig) -> AmbiguityVerdict {
    let query_lower = query.to_lowercase();

    if let Some(term) = vocabulary::find_very_generic_term(&query_lower) {
        return AmbiguityVerdict {
            ambiguous: true,
            kind: AmbiguityKind::VeryGeneric,
            message: format!(
                "Le terme \"{term}\" est trop générique. Décrivez précisément le produit."
            ),
            clarifications: GENERIC_CLARIFICATIONS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        };
    }

    let token_count = whitespace_token_count(query);

    if token_count < config.context_tokens
        && let Some(entry) = vocabulary::find_ambiguous_term(&query_lower)
        && !entry
            .context_words
            .iter()
            .any(|context| query_lower.contains(context))
    {
        return AmbiguityVerdict {
            ambiguous: true,
            kind: AmbiguityKind::AmbiguousWord,
            message: entry.message.to_string(),
            clarifications: entry
                .clarifications
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        };
    }

    if token_count < config.min_tokens {
        return AmbiguityVerdict {
            ambiguous: true,
            kind: AmbiguityKind::TooShort,
            message: "La description est trop courte pour une classification précise.".to_string(),
            clarifications: TOO_SHORT_CLARIFICATIONS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        };
    }

    AmbiguityVerdict::clear()
}
