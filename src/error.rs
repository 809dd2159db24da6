use thiserror::Error;

/// Errors surfaced while setting the engine up
///
/// The scoring and distance functions themselves are total and never fail;
/// only configuration can go wrong, and it goes wrong at load time.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("similarity weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
