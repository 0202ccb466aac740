use douane_core::types::{Candidate, Features};

/// Human-readable account of why the top candidate won: the fired signals,
/// the legal-rule adjustments, and the features detected in the query.
pub fn explanation(candidate: &Candidate, features: &Features) -> String {
    let mut text = format!(
        "Le produit a été classé sous le code {} ({}) avec une confiance de {:.1} %.\n",
        candidate.code,
        candidate.description,
        candidate.score * 100.0
    );

    let signals = &candidate.signals;
    if signals.keyword_match {
        text.push_str("- Correspondance par mot-clé principal\n");
    }
    if !signals.synonym_matches.is_empty() {
        text.push_str(&format!(
            "- Correspondance par synonyme(s) : {}\n",
            signals.synonym_matches.join(", ")
        ));
    }
    if !signals.brand_matches.is_empty() {
        text.push_str(&format!(
            "- Correspondance par marque(s) : {}\n",
            signals.brand_matches.join(", ")
        ));
    }
    if !signals.material_matches.is_empty() {
        text.push_str(&format!(
            "- Correspondance par matériau(x) : {}\n",
            signals.material_matches.join(", ")
        ));
    }
    if !signals.function_matches.is_empty() {
        text.push_str(&format!(
            "- Correspondance par fonction(s) : {}\n",
            signals.function_matches.join(", ")
        ));
    }
    if signals.semantic_score > 0.0 {
        let suffix = if signals.semantic_fallback {
            " (estimation lexicale de repli)"
        } else {
            ""
        };
        text.push_str(&format!(
            "- Similarité sémantique : {:.2}{suffix}\n",
            signals.semantic_score
        ));
    }
    if signals.rgi_incomplete {
        text.push_str("- RGI 2 : article incomplet classé comme complet\n");
    }
    if let Some(material) = &signals.rgi_predominant_material {
        text.push_str(&format!("- RGI 3 : matière prépondérante \"{material}\"\n"));
    }
    if signals.rgi_packaging {
        text.push_str("- RGI 5 : l'emballage suit la marchandise\n");
    }
    if signals.rgi_specificity > 0.0 {
        text.push_str("- RGI 6 : position tarifaire spécifique privilégiée\n");
    }

    if !features.materials.is_empty() {
        text.push_str(&format!(
            "Matériaux détectés : {}\n",
            features.materials.join(", ")
        ));
    }
    if !features.functions.is_empty() {
        text.push_str(&format!(
            "Fonctions détectées : {}\n",
            features.functions.join(", ")
        ));
    }
    if !features.technical_specs.is_empty() {
        text.push_str(&format!(
            "Spécifications techniques : {}\n",
            features.technical_specs.join(", ")
        ));
    }

    text
}

/// Explanation for the defined "no match" outcome.
pub fn no_match_explanation() -> String {
    "Aucune correspondance trouvée dans la base de données.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use douane_core::types::{CandidateOrigin, SignalTrace};

    #[test]
    fn explanation_names_the_fired_signals() {
        let candidate = Candidate {
            origin: CandidateOrigin::Product,
            code: "64.03".to_string(),
            description: "Chaussures en cuir naturel".to_string(),
            rate: "20%".to_string(),
            section: Some("XII".to_string()),
            materials: vec!["cuir".to_string()],
            functions: Vec::new(),
            score: 0.85,
            signals: SignalTrace {
                keyword_match: true,
                brand_matches: vec!["nike".to_string()],
                material_matches: vec!["cuir".to_string()],
                semantic_score: 0.4,
                ..SignalTrace::default()
            },
        };
        let features = Features {
            materials: vec!["cuir".to_string()],
            ..Features::default()
        };

        let text = explanation(&candidate, &features);
        assert!(text.contains("64.03"));
        assert!(text.contains("mot-clé principal"));
        assert!(text.contains("marque(s) : nike"));
        assert!(text.contains("matériau(x) : cuir"));
        assert!(text.contains("85.0 %"));
        assert!(!text.contains("synonyme"));
    }

    #[test]
    fn fallback_similarity_is_flagged() {
        let mut candidate = Candidate {
            origin: CandidateOrigin::Subheading,
            code: "84.71.30".to_string(),
            description: "Machines portatives".to_string(),
            rate: "5%".to_string(),
            section: None,
            materials: Vec::new(),
            functions: Vec::new(),
            score: 0.2,
            signals: SignalTrace::default(),
        };
        candidate.signals.semantic_score = 0.33;
        candidate.signals.semantic_fallback = true;

        let text = explanation(&candidate, &Features::default());
        assert!(text.contains("estimation lexicale de repli"));
    }
}
