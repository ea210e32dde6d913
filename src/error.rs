use crate::league::source::MatchSourceError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    MatchSource(#[from] MatchSourceError),

    #[error("Failed to serialize standings: {0}")]
    Serialization(#[from] serde_json::Error),
}
