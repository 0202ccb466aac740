use crate::constants;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub ambiguity: AmbiguityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Reference document path; relative paths resolve against the
    /// project root, then the home data directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

/// Signal weights and floors for the multi-signal scorer.
///
/// Defaults preserve the strict precedence keyword > synonym > brand >
/// material > function > semantic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_keyword_weight")]
    pub keyword_weight: f64,
    #[serde(default = "default_synonym_weight")]
    pub synonym_weight: f64,
    #[serde(default = "default_brand_weight")]
    pub brand_weight: f64,
    #[serde(default = "default_material_weight")]
    pub material_weight: f64,
    #[serde(default = "default_function_weight")]
    pub function_weight: f64,
    /// Scale applied to the semantic similarity signal; capped at 0.3.
    #[serde(default = "default_semantic_weight")]
    pub semantic_weight: f64,
    #[serde(default = "default_rgi_incomplete_bonus")]
    pub rgi_incomplete_bonus: f64,
    #[serde(default = "default_rgi_predominant_bonus")]
    pub rgi_predominant_bonus: f64,
    #[serde(default = "default_rgi_packaging_bonus")]
    pub rgi_packaging_bonus: f64,
    /// Bonus per dotted code segment beyond the first.
    #[serde(default = "default_rgi_specificity_step")]
    pub rgi_specificity_step: f64,
    /// Lexical overlap required to admit a subheading candidate.
    #[serde(default)]
    pub subheading_floor: f64,
    /// Lexical overlap required to admit a chapter candidate. Lower-value
    /// floors admit more of the long, noisy chapter bodies.
    #[serde(default = "default_chapter_floor")]
    pub chapter_floor: f64,
    /// Confidence below which improvement suggestions are attached.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
}

impl ScoringConfig {
    /// Clamp every weight into a sane range; the semantic weight is
    /// additionally capped so it never exceeds 30% of the final score.
    pub fn normalized(&self) -> Self {
        let clamp = |v: f64| v.clamp(0.0, 1.0);
        Self {
            keyword_weight: clamp(self.keyword_weight),
            synonym_weight: clamp(self.synonym_weight),
            brand_weight: clamp(self.brand_weight),
            material_weight: clamp(self.material_weight),
            function_weight: clamp(self.function_weight),
            semantic_weight: clamp(self.semantic_weight).min(constants::MAX_SEMANTIC_WEIGHT),
            rgi_incomplete_bonus: clamp(self.rgi_incomplete_bonus),
            rgi_predominant_bonus: clamp(self.rgi_predominant_bonus),
            rgi_packaging_bonus: clamp(self.rgi_packaging_bonus),
            rgi_specificity_step: clamp(self.rgi_specificity_step),
            subheading_floor: clamp(self.subheading_floor),
            chapter_floor: clamp(self.chapter_floor),
            confidence_threshold: clamp(self.confidence_threshold),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbiguityConfig {
    /// Queries with fewer whitespace tokens are rejected as too short.
    #[serde(default = "default_min_tokens")]
    pub min_tokens: usize,
    /// Ambiguous terms need disambiguating context below this token count.
    #[serde(default = "default_context_tokens")]
    pub context_tokens: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_data_file() -> String {
    constants::DEFAULT_DATA_FILE.to_string()
}

fn default_keyword_weight() -> f64 {
    0.40
}

fn default_synonym_weight() -> f64 {
    0.35
}

fn default_brand_weight() -> f64 {
    0.30
}

fn default_material_weight() -> f64 {
    0.25
}

fn default_function_weight() -> f64 {
    0.10
}

fn default_semantic_weight() -> f64 {
    constants::MAX_SEMANTIC_WEIGHT
}

fn default_rgi_incomplete_bonus() -> f64 {
    0.10
}

fn default_rgi_predominant_bonus() -> f64 {
    0.15
}

fn default_rgi_packaging_bonus() -> f64 {
    0.05
}

fn default_rgi_specificity_step() -> f64 {
    0.04
}

fn default_chapter_floor() -> f64 {
    0.05
}

fn default_confidence_threshold() -> f64 {
    constants::LOW_CONFIDENCE_THRESHOLD
}

fn default_min_tokens() -> usize {
    constants::MIN_QUERY_TOKENS
}

fn default_context_tokens() -> usize {
    constants::AMBIGUOUS_CONTEXT_TOKENS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keyword_weight: default_keyword_weight(),
            synonym_weight: default_synonym_weight(),
            brand_weight: default_brand_weight(),
            material_weight: default_material_weight(),
            function_weight: default_function_weight(),
            semantic_weight: default_semantic_weight(),
            rgi_incomplete_bonus: default_rgi_incomplete_bonus(),
            rgi_predominant_bonus: default_rgi_predominant_bonus(),
            rgi_packaging_bonus: default_rgi_packaging_bonus(),
            rgi_specificity_step: default_rgi_specificity_step(),
            subheading_floor: 0.0,
            chapter_floor: default_chapter_floor(),
            confidence_threshold: default_confidence_threshold(),
        }
    }
}

impl Default for AmbiguityConfig {
    fn default() -> Self {
        Self {
            min_tokens: default_min_tokens(),
            context_tokens: default_context_tokens(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from the project root, if a config file exists.
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_file(project_root, None)
    }

    /// Load configuration with an explicit config file path (highest priority).
    ///
    /// An explicit file must exist; a missing project-local file just means
    /// defaults.
    pub fn load_with_file(
        project_root: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ConfigError::NotFound {
                    path: path.display().to_string(),
                });
            }
            return Self::from_file(path);
        }

        if let Some(root) = project_root {
            let local = root.join(constants::PROJECT_CONFIG_FILE);
            if local.exists() {
                return Self::from_file(&local);
            }
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "config file loaded");
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Home-level data directory (`~/.douane`), when a home exists.
    pub fn data_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(constants::DEFAULT_DATA_DIR))
    }

    /// Resolve the reference document path.
    ///
    /// Absolute paths win; relative paths are tried against the project
    /// root, then the home data directory, falling back to the bare path.
    pub fn data_file_path(&self, project_root: Option<&Path>) -> PathBuf {
        let configured = Path::new(&self.reference.data_file);
        if configured.is_absolute() {
            return configured.to_path_buf();
        }
        if let Some(root) = project_root {
            let local = root.join(configured);
            if local.exists() {
                return local;
            }
        }
        if let Some(data_dir) = Self::data_dir() {
            let shared = data_dir.join(configured);
            if shared.exists() {
                return shared;
            }
        }
        configured.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_signal_precedence() {
        let scoring = ScoringConfig::default();
        assert!(scoring.keyword_weight > scoring.synonym_weight);
        assert!(scoring.synonym_weight > scoring.brand_weight);
        assert!(scoring.brand_weight > scoring.material_weight);
        assert!(scoring.material_weight > scoring.function_weight);
    }

    #[test]
    fn normalized_caps_semantic_weight() {
        let scoring = ScoringConfig {
            semantic_weight: 0.9,
            ..Default::default()
        };
        let normalized = scoring.normalized();
        assert!(normalized.semantic_weight <= constants::MAX_SEMANTIC_WEIGHT);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.reference.data_file, constants::DEFAULT_DATA_FILE);
        assert_eq!(config.ambiguity.min_tokens, 2);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: Config = toml::from_str(
            r#"
            [scoring]
            keyword_weight = 0.5

            [ambiguity]
            context_tokens = 6
            "#,
        )
        .unwrap();
        assert!((config.scoring.keyword_weight - 0.5).abs() < f64::EPSILON);
        assert!((config.scoring.synonym_weight - 0.35).abs() < f64::EPSILON);
        assert_eq!(config.ambiguity.context_tokens, 6);
        assert_eq!(config.ambiguity.min_tokens, 2);
    }

    #[test]
    fn explicit_config_file_must_exist() {
        let missing = Path::new("/nonexistent/douane.toml");
        let err = Config::load_with_file(None, Some(missing)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn load_with_file_reads_project_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::PROJECT_CONFIG_FILE),
            "[reference]\ndata_file = \"custom.txt\"\n",
        )
        .unwrap();
        let config = Config::load(Some(dir.path())).unwrap();
        assert_eq!(config.reference.data_file, "custom.txt");
    }
}
