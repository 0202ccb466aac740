use crate::KnowledgeBase;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Process-wide handle to the knowledge base.
///
/// Classification takes a cheap [`snapshot`](Self::snapshot); enrichment
/// builds a complete replacement table and swaps it in under the writer
/// lock. In-flight queries keep the snapshot they started with, so no
/// mutation is ever visible mid-query.
#[derive(Debug, Clone)]
pub struct SharedKnowledge {
    inner: Arc<RwLock<Arc<KnowledgeBase>>>,
}

impl SharedKnowledge {
    pub fn new(base: KnowledgeBase) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(base))),
        }
    }

    /// Current table; the returned handle stays valid across swaps.
    pub fn snapshot(&self) -> Arc<KnowledgeBase> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a replacement table. Single-writer path.
    pub fn replace(&self, base: KnowledgeBase) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        info!(descriptors = base.len(), "knowledge base replaced");
        *guard = Arc::new(base);
    }

    /// Rebuild-and-swap enrichment: extend one descriptor's synonym list.
    pub fn enrich_synonyms(&self, keyword: &str, synonyms: Vec<String>) {
        let current = self.snapshot();
        let enriched = current.with_synonyms(keyword, synonyms);
        self.replace(enriched);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors;

    #[test]
    fn snapshot_survives_replace() {
        let shared = SharedKnowledge::new(KnowledgeBase::new(descriptors::builtin()));
        let before = shared.snapshot();
        shared.replace(KnowledgeBase::empty());
        assert!(!before.is_empty());
        assert!(shared.snapshot().is_empty());
    }

    #[test]
    fn enrich_synonyms_is_visible_to_new_snapshots_only() {
        let shared = SharedKnowledge::new(KnowledgeBase::new(descriptors::builtin()));
        let before = shared.snapshot();
        shared.enrich_synonyms("voiture", vec!["tire-bouchon à moteur".to_string()]);

        let after = shared.snapshot();
        let enriched = after.get("voiture").unwrap();
        assert!(
            enriched
                .synonyms
                .contains(&"tire-bouchon à moteur".to_string())
        );
        let original = before.get("voiture").unwrap();
        assert!(
            !original
                .synonyms
                .contains(&"tire-bouchon à moteur".to_string())
        );
    }
}
