//! Command-line error types.

use curconv_fx::FxError;
use thiserror::Error;

/// Errors surfaced by the `curconv` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required argument was not supplied by flag, position or environment.
    #[error("Must provide {0}")]
    MissingArgument(&'static str),

    /// An environment or flag value could not be understood.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The pairs file could not be opened.
    #[error("Cannot open pairs file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: FxError,
    },

    /// JSON rendering failed.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error(transparent)]
    Fx(#[from] FxError),
}
