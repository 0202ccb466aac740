use douane_core::tokens::tokenize;
use douane_core::types::Features;
use douane_knowledge::vocabulary;
use regex::Regex;
use std::sync::OnceLock;

fn dimension_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Longest units first so `ghz` wins over `g` and `mm` over `m`.
        let mut units: Vec<&str> = vocabulary::DIMENSION_UNITS.to_vec();
        units.sort_by_key(|u| std::cmp::Reverse(u.len()));
        let pattern = format!(r"(?i)\b(\d+(?:[.,]\d+)?)\s*({})\b", units.join("|"));
        Regex::new(&pattern).expect("dimension pattern")
    })
}

fn brand_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Capitalized-word heuristic standing in for a named-entity annotator.
    RE.get_or_init(|| Regex::new(r"\b[A-ZÀ-Ö][a-zà-öø-ÿ]+\b").expect("brand pattern"))
}

/// Extract materials, functions, brand-like tokens, dimensions, and
/// technical specifications from a query.
///
/// Pure function of the query string plus static vocabularies; safe to run
/// concurrently with candidate generation.
pub fn extract(query: &str) -> Features {
    let tokens = tokenize(query);

    let mut features = Features {
        materials: vocabulary_hits(&tokens, vocabulary::MATERIAL_TERMS),
        functions: vocabulary_hits(&tokens, vocabulary::FUNCTION_TERMS),
        brands: Vec::new(),
        dimensions: Vec::new(),
        technical_specs: vocabulary_hits(&tokens, vocabulary::TECH_SPEC_TERMS),
    };

    for caps in brand_pattern().captures_iter(query) {
        if let Some(word) = caps.get(0) {
            push_distinct(&mut features.brands, word.as_str().to_string());
        }
    }

    for caps in dimension_pattern().captures_iter(query) {
        if let (Some(value), Some(unit)) = (caps.get(1), caps.get(2)) {
            push_distinct(
                &mut features.dimensions,
                format!("{} {}", value.as_str(), unit.as_str().to_lowercase()),
            );
        }
    }

    features
}

/// Vocabulary terms present among the query tokens, in vocabulary order.
fn vocabulary_hits(tokens: &[String], terms: &[&str]) -> Vec<String> {
    terms
        .iter()
        .filter(|term| tokens.iter().any(|token| token == *term))
        .map(|term| (*term).to_string())
        .collect()
}

fn push_distinct(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_materials_and_functions() {
        let features = extract("chaussures de sport en cuir et caoutchouc");
        assert_eq!(features.materials, vec!["cuir", "caoutchouc"]);
        assert!(features.functions.contains(&"sport".to_string()));
    }

    #[test]
    fn material_detection_is_token_level() {
        // "berline" must not surface "lin".
        let features = extract("berline familiale");
        assert!(features.materials.is_empty());
    }

    #[test]
    fn capitalized_words_are_brand_candidates() {
        let features = extract("Ballon de football en cuir Adidas");
        assert!(features.brands.contains(&"Adidas".to_string()));
        assert!(features.brands.contains(&"Ballon".to_string()));
        assert!(!features.brands.contains(&"cuir".to_string()));
    }

    #[test]
    fn dimensions_match_number_unit_pairs() {
        let features = extract("écran 15.6 pouces, poids 1,8 kg, disque 512 go");
        assert!(features.dimensions.contains(&"15.6 pouces".to_string()));
        assert!(features.dimensions.contains(&"1,8 kg".to_string()));
        assert!(features.dimensions.contains(&"512 go".to_string()));
    }

    #[test]
    fn frequency_units_win_over_mass_units() {
        let features = extract("processeur 2.8 GHz");
        assert_eq!(features.dimensions, vec!["2.8 ghz".to_string()]);
    }

    #[test]
    fn technical_specs_cover_connectivity_and_vendors() {
        let features = extract("ordinateur intel avec wifi et bluetooth, écran 4k");
        assert_eq!(features.technical_specs, vec!["intel", "wifi", "bluetooth", "4k"]);
    }

    #[test]
    fn empty_query_yields_empty_features() {
        assert!(extract("").is_empty());
    }
}
