/// Default number of ranked matches kept after scoring.
pub const DEFAULT_LIMIT: usize = 10;

/// Number of alternatives surfaced after the best match.
pub const ALTERNATIVES_LIMIT: usize = 5;

/// Confidence below which improvement suggestions are attached.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Upper bound on the semantic signal's share of the final score.
pub const MAX_SEMANTIC_WEIGHT: f64 = 0.3;

/// Queries with fewer whitespace tokens than this are too short to classify.
pub const MIN_QUERY_TOKENS: usize = 2;

/// Ambiguous terms require disambiguating context below this token count.
pub const AMBIGUOUS_CONTEXT_TOKENS: usize = 4;

/// Minimum token length considered when matching reference descriptions.
pub const MIN_MATCH_TOKEN_LEN: usize = 3;

/// Default reference document file name.
pub const DEFAULT_DATA_FILE: &str = "tec-cedeao-sh2022.txt";

/// Default data directory name under home.
pub const DEFAULT_DATA_DIR: &str = ".douane";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "douane.toml";

/// Similarity floor for similar-word suggestions in the quality analyzer.
pub const SIMILAR_WORD_THRESHOLD: f64 = 0.8;
