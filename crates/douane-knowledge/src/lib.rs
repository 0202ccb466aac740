pub mod descriptors;
pub mod lexicon;
pub mod shared;
pub mod vocabulary;

pub use lexicon::Lexicon;
pub use shared::SharedKnowledge;

use douane_core::types::ProductDescriptor;

/// The curated product knowledge base.
///
/// Immutable once built; the only mutation path is rebuild-and-swap through
/// [`SharedKnowledge`].
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    descriptors: Vec<ProductDescriptor>,
}

impl KnowledgeBase {
    /// The built-in curated table.
    pub fn builtin() -> Self {
        Self::new(descriptors::builtin())
    }

    pub fn new(descriptors: Vec<ProductDescriptor>) -> Self {
        Self { descriptors }
    }

    /// An empty base: classification degrades to reference-only candidates.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn descriptors(&self) -> &[ProductDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Look up a descriptor by its head keyword.
    pub fn get(&self, keyword: &str) -> Option<&ProductDescriptor> {
        self.descriptors.iter().find(|d| d.keyword == keyword)
    }

    /// Build a copy with extra synonyms on one descriptor. Unknown keywords
    /// leave the table unchanged.
    pub fn with_synonyms(&self, keyword: &str, synonyms: Vec<String>) -> Self {
        let descriptors = self
            .descriptors
            .iter()
            .map(|d| {
                if d.keyword == keyword {
                    let mut enriched = d.clone();
                    for synonym in &synonyms {
                        if !enriched.synonyms.contains(synonym) {
                            enriched.synonyms.push(synonym.clone());
                        }
                    }
                    enriched
                } else {
                    d.clone()
                }
            })
            .collect();
        Self { descriptors }
    }
}
