use douane_core::types::QualityReport;
use douane_knowledge::Lexicon;

/// Optional language-quality collaborator.
///
/// Advisory only: the report is attached to the classification result for
/// feedback purposes and never gates or alters scoring.
pub trait QualityAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> QualityReport;
}

impl QualityAnalyzer for Lexicon {
    fn analyze(&self, text: &str) -> QualityReport {
        Lexicon::analyze(self, text)
    }
}
