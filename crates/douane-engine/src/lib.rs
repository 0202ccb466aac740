pub mod ambiguity;
pub mod candidates;
pub mod classify;
pub mod explain;
pub mod features;
pub mod quality;
pub mod ranking;
pub mod scoring;
pub mod similarity;
pub mod suggest;

pub use classify::Engine;
pub use quality::QualityAnalyzer;
pub use similarity::{LexicalSimilarity, SimilarityError, SimilarityProvider};
