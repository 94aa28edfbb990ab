//! Cross-cutting error types for HappyData.
//!
//! Domain-specific errors (`WorldBankError`, `ConfigError`) live in their own
//! crates. A unified error is deferred to `hd-cli` where all crate errors
//! converge into `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The secondary dataset could not be parsed.
    #[error("Invalid secondary dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    /// The secondary dataset file could not be read.
    #[error("Failed to read secondary dataset at {path}: {source}")]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A selection referenced a catalog entry that does not exist.
    #[error("Unknown {kind}: {id}")]
    UnknownSelection { kind: &'static str, id: String },
}
