use serde::{Deserialize, Serialize};

/// A top-level grouping of chapters in the harmonized scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Roman-numeral identifier ("I" through "XXI").
    pub id: String,
    pub title: String,
}

/// A chapter of the tariff schedule.
///
/// Section membership is resolved through the static table in
/// [`crate::sections`], not stored on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Two-digit numeric identifier ("01" through "99").
    pub id: String,
    /// Descriptive body text, possibly multi-paragraph.
    pub body: String,
}

/// A leaf tariff code carrying a duty rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subheading {
    /// Dotted numeric code, e.g. `84.71.30` or `8517.13.00.00`.
    pub code: String,
    pub description: String,
    pub rate: String,
    pub unit: Option<String>,
}

/// A curated knowledge-base entry mapping a product term to a target code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDescriptor {
    /// Head keyword this descriptor is looked up by.
    pub keyword: String,
    pub code: String,
    pub description: String,
    pub rate: String,
    /// Owning section (Roman numeral).
    pub section: String,
    pub materials: Vec<String>,
    pub functions: Vec<String>,
    pub brands: Vec<String>,
    pub synonyms: Vec<String>,
}

/// Where a classification candidate was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOrigin {
    Product,
    Subheading,
    Chapter,
}

impl CandidateOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Subheading => "subheading",
            Self::Chapter => "chapter",
        }
    }

    /// Tie-break rank: product beats subheading beats chapter.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Product => 0,
            Self::Subheading => 1,
            Self::Chapter => 2,
        }
    }
}

impl std::fmt::Display for CandidateOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which signals fired for a candidate and with what strength.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalTrace {
    pub keyword_match: bool,
    pub synonym_matches: Vec<String>,
    pub brand_matches: Vec<String>,
    pub material_matches: Vec<String>,
    pub function_matches: Vec<String>,
    pub semantic_score: f64,
    /// True when the primary similarity provider failed and the
    /// token-overlap fallback produced `semantic_score`.
    pub semantic_fallback: bool,
    pub rgi_incomplete: bool,
    pub rgi_predominant_material: Option<String>,
    pub rgi_packaging: bool,
    /// Dotted code segments beyond the first, driving the specificity bonus.
    pub rgi_specificity: f64,
}

/// A provisional classification under consideration for one query.
///
/// Generated fresh per query; never cached across queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub origin: CandidateOrigin,
    pub code: String,
    pub description: String,
    pub rate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Material terms associated with this candidate (descriptor list, or
    /// terms detected in the reference description).
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub materials: Vec<String>,
    /// Function terms associated with this candidate, same sourcing as
    /// `materials`.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub functions: Vec<String>,
    pub score: f64,
    pub signals: SignalTrace,
}

impl Candidate {
    /// Number of dotted segments in the code; deeper codes are more specific.
    pub fn code_specificity(&self) -> usize {
        self.code.split('.').filter(|s| !s.is_empty()).count()
    }
}

/// Features detected in a query. Ephemeral, owned by the classify call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub materials: Vec<String>,
    pub functions: Vec<String>,
    pub brands: Vec<String>,
    pub dimensions: Vec<String>,
    pub technical_specs: Vec<String>,
}

impl Features {
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
            && self.functions.is_empty()
            && self.brands.is_empty()
            && self.dimensions.is_empty()
            && self.technical_specs.is_empty()
    }
}

/// Terminal verdict kinds of the ambiguity gate, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityKind {
    VeryGeneric,
    AmbiguousWord,
    TooShort,
    Clear,
}

impl AmbiguityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryGeneric => "very_generic",
            Self::AmbiguousWord => "ambiguous_word",
            Self::TooShort => "too_short",
            Self::Clear => "clear",
        }
    }
}

impl std::fmt::Display for AmbiguityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-classification judgment on whether a query is specific enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbiguityVerdict {
    pub ambiguous: bool,
    pub kind: AmbiguityKind,
    pub message: String,
    /// Actionable clarification prompts for the caller.
    pub clarifications: Vec<String>,
}

impl AmbiguityVerdict {
    pub fn clear() -> Self {
        Self {
            ambiguous: false,
            kind: AmbiguityKind::Clear,
            message: "Description claire".to_string(),
            clarifications: Vec::new(),
        }
    }
}

/// An unrecognized token with nearest-vocabulary suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownWord {
    pub word: String,
    pub suggestions: Vec<String>,
}

/// Advisory language-quality report. Never gates or alters classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Recognized-vocabulary tokens over total tokens, in [0,1].
    pub recognized_ratio: f64,
    pub recognized: Vec<String>,
    pub unknown: Vec<UnknownWord>,
}

/// Structured outcome of one classify call. Always returned; never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Present when the ambiguity gate short-circuited the pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<AmbiguityVerdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_match: Option<Candidate>,
    /// Ranked alternatives after the best match.
    pub alternatives: Vec<Candidate>,
    pub features: Features,
    pub confidence: f64,
    pub explanation: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_precedence_orders_product_first() {
        assert!(CandidateOrigin::Product.precedence() < CandidateOrigin::Subheading.precedence());
        assert!(CandidateOrigin::Subheading.precedence() < CandidateOrigin::Chapter.precedence());
    }

    #[test]
    fn ambiguity_kind_strings_are_snake_case() {
        assert_eq!(AmbiguityKind::VeryGeneric.as_str(), "very_generic");
        assert_eq!(AmbiguityKind::AmbiguousWord.as_str(), "ambiguous_word");
        assert_eq!(AmbiguityKind::TooShort.as_str(), "too_short");
        assert_eq!(AmbiguityKind::Clear.as_str(), "clear");
    }

    #[test]
    fn code_specificity_counts_dotted_segments() {
        let candidate = Candidate {
            origin: CandidateOrigin::Subheading,
            code: "8517.13.00.00".to_string(),
            description: "Téléphones intelligents".to_string(),
            rate: "5%".to_string(),
            section: None,
            materials: Vec::new(),
            functions: Vec::new(),
            score: 0.0,
            signals: SignalTrace::default(),
        };
        assert_eq!(candidate.code_specificity(), 4);
    }
}
