use std::collections::HashSet;

/// Split text into lowercased alphanumeric tokens.
///
/// Each whitespace-delimited word is stripped of punctuation before
/// lowercasing, so `"t-shirt"` tokenizes to `"tshirt"`. Accented characters
/// are preserved: the vocabularies are diacritic-sensitive and `métal` must
/// not collide with `metal`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|word| {
            let token: String = word
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect();
            (!token.is_empty()).then_some(token)
        })
        .collect()
}

/// Number of whitespace-delimited tokens, before any normalization.
///
/// The ambiguity gate counts raw words; `"sac à main"` is three tokens even
/// though `à` would survive normalization unchanged.
pub fn whitespace_token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Share of `query` tokens that also appear in `text`, in [0,1].
pub fn overlap_ratio(query: &str, text: &str) -> f64 {
    let query_tokens: HashSet<String> = tokenize(query).into_iter().collect();
    if query_tokens.is_empty() {
        return 0.0;
    }
    let text_tokens: HashSet<String> = tokenize(text).into_iter().collect();
    let shared = query_tokens.intersection(&text_tokens).count();
    shared as f64 / query_tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_strips_punctuation_and_lowercases() {
        assert_eq!(
            tokenize("Ballon de football, en cuir!"),
            vec!["ballon", "de", "football", "en", "cuir"]
        );
        assert_eq!(tokenize("t-shirt Nike"), vec!["tshirt", "nike"]);
    }

    #[test]
    fn tokenize_preserves_diacritics() {
        assert_eq!(tokenize("Vélo en métal"), vec!["vélo", "en", "métal"]);
    }

    #[test]
    fn whitespace_token_count_counts_raw_words() {
        assert_eq!(whitespace_token_count("sac à main"), 3);
        assert_eq!(whitespace_token_count("   "), 0);
    }

    #[test]
    fn overlap_ratio_is_query_relative() {
        let ratio = overlap_ratio("voiture rouge", "voiture de tourisme");
        assert!((ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(overlap_ratio("", "voiture"), 0.0);
    }
}
