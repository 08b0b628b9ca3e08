//! Error types for the simulator binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup and serving.

/// Top-level error for the simulator binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: trapa_core::ConfigError,
    },

    /// The HTTP layer could not be initialized.
    #[error("observer error: {source}")]
    Observer {
        /// The underlying observer error.
        #[from]
        source: trapa_observer::error::ObserverError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: trapa_observer::ServerError,
    },
}
