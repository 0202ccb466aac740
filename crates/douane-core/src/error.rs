use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("reference document not found: {path}")]
    NotFound { path: String },

    #[error("reference document is not valid UTF-8: {path}")]
    Encoding { path: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReferenceError {
    /// Map a read failure to the most specific variant for `path`.
    pub fn from_read(path: &std::path::Path, err: std::io::Error) -> Self {
        let path_str = path.display().to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path: path_str },
            std::io::ErrorKind::InvalidData => Self::Encoding { path: path_str },
            _ => Self::Io(err),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("failed to parse config: {0}")]
    ParseError(String),

    #[error("invalid config value: {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
