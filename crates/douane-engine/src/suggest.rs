use douane_core::config::ScoringConfig;
use douane_core::types::{Candidate, CandidateOrigin, Features};

/// Generic suggestions for the "no match" outcome.
pub fn no_match_suggestions() -> Vec<String> {
    vec![
        "Ajoutez des informations sur les matériaux (ex : coton, métal, plastique, bois, verre)"
            .to_string(),
        "Précisez la fonction principale du produit (ex : transport, traitement, protection, stockage)"
            .to_string(),
        "Indiquez la marque si applicable (ex : Nike, Apple, Toyota)".to_string(),
        "Fournissez une description plus détaillée du produit".to_string(),
    ]
}

/// Improvement suggestions for a classified query.
///
/// Attached when confidence sits below the threshold or when the best
/// match is only chapter-level; confident subheading-level matches get
/// none.
pub fn improvements(
    best: &Candidate,
    features: &Features,
    config: &ScoringConfig,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if best.score < config.confidence_threshold {
        suggestions.push(
            "Considérez une description plus détaillée pour améliorer la précision".to_string(),
        );
        if features.materials.is_empty() {
            suggestions.push("Précisez les matériaux utilisés".to_string());
        }
        if features.functions.is_empty() {
            suggestions.push("Décrivez la fonction principale du produit".to_string());
        }
        if features.brands.is_empty() {
            suggestions.push("Indiquez la marque si applicable".to_string());
        }
    }

    if best.origin == CandidateOrigin::Chapter {
        suggestions.push(format!(
            "Recherchez une sous-position plus spécifique que le chapitre {}",
            best.code
        ));
    }

    if features.materials.len() > 1 {
        suggestions.push("Vérifiez le matériau prépondérant selon la RGI 3".to_string());
    }

    suggestions
}
