pub mod parser;
pub mod strategy;

use douane_core::error::ReferenceError;
use douane_core::sections;
use douane_core::types::{Chapter, Section, Subheading};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Structured view of the reference document.
///
/// Built once at startup and treated as immutable afterwards; BTreeMaps
/// keep iteration order deterministic for reproducible candidate
/// generation.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    pub sections: BTreeMap<String, Section>,
    pub chapters: BTreeMap<String, Chapter>,
    pub subheadings: BTreeMap<String, Subheading>,
}

impl ReferenceSet {
    /// Parse reference text into structured mappings.
    ///
    /// Never fails: each extractor contributes what it can, and an empty
    /// section scan falls back to the static taxonomy.
    pub fn from_text(content: &str) -> Self {
        let mut parsed_sections = parser::parse_sections(content);
        if parsed_sections.is_empty() {
            parsed_sections = sections::fallback_sections();
        }

        Self {
            sections: parsed_sections
                .into_iter()
                .map(|s| (s.id.clone(), s))
                .collect(),
            chapters: parser::parse_chapters(content)
                .into_iter()
                .map(|c| (c.id.clone(), c))
                .collect(),
            subheadings: parser::parse_subheadings(content)
                .into_iter()
                .map(|s| (s.code.clone(), s))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty() && self.subheadings.is_empty()
    }
}

/// Result of loading the reference document: whatever could be extracted,
/// plus the load fault when the file could not be read at all.
#[derive(Debug)]
pub struct LoadOutcome {
    pub reference: ReferenceSet,
    pub fault: Option<ReferenceError>,
}

/// Load and parse the reference document.
///
/// A read failure is surfaced as a fault on the outcome, never an error:
/// the engine proceeds with empty mappings and classifies from the
/// knowledge base alone.
pub fn load(path: &Path) -> LoadOutcome {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let reference = ReferenceSet::from_text(&content);
            info!(
                sections = reference.sections.len(),
                chapters = reference.chapters.len(),
                subheadings = reference.subheadings.len(),
                "reference document loaded"
            );
            LoadOutcome {
                reference,
                fault: None,
            }
        }
        Err(err) => {
            let fault = ReferenceError::from_read(path, err);
            warn!(
                path = %path.display(),
                error = %fault,
                "reference document unavailable; continuing with empty mappings"
            );
            LoadOutcome {
                reference: ReferenceSet::default(),
                fault: Some(fault),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_text_falls_back_to_static_sections() {
        let reference = ReferenceSet::from_text("84 Machines et appareils mécaniques\n");
        assert_eq!(reference.sections.len(), 21);
        assert!(reference.sections.contains_key("XVI"));
        assert_eq!(reference.chapters.len(), 1);
    }

    #[test]
    fn load_missing_file_yields_empty_set_and_fault() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = load(&dir.path().join("absent.txt"));
        assert!(outcome.fault.is_some());
        assert!(outcome.reference.chapters.is_empty());
        assert!(outcome.reference.subheadings.is_empty());
    }

    #[test]
    fn load_reads_and_parses_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tec.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "SECTION XVII").unwrap();
        writeln!(file, "MATERIEL DE TRANSPORT").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "87 Voitures automobiles et autres véhicules terrestres").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "87.03.23 Voitures de tourisme 10%").unwrap();

        let outcome = load(&path);
        assert!(outcome.fault.is_none());
        // The title block runs until the next marker, so it starts with the
        // heading line and carries the rest of the section's text.
        assert!(
            outcome.reference.sections["XVII"]
                .title
                .starts_with("MATERIEL DE TRANSPORT")
        );
        assert!(outcome.reference.subheadings.contains_key("87.03.23"));
    }

    #[test]
    fn subheadings_are_keyed_uniquely_by_code() {
        let reference =
            ReferenceSet::from_text("84.71.30 Machines portatives 5%\n84.71.30 Doublon 7%\n");
        assert_eq!(reference.subheadings.len(), 1);
        assert_eq!(
            reference.subheadings["84.71.30"].description,
            "Machines portatives"
        );
    }
}
