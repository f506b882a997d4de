use thiserror::Error;

/// Startup error types for skq
#[derive(Debug, Error)]
pub enum SkqError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: String,
        source: toml::de::Error,
    },
}
