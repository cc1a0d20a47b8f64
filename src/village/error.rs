//! Error types for building a village.

use thiserror::Error;

/// Errors that can occur while loading or registering shops.
#[derive(Debug, Error)]
pub enum VillageError {
    /// Two shops claim to sell the same item.
    #[error("Duplicate seller for {item}: already sold by {existing}, rejected {rejected}")]
    DuplicateSeller {
        item: String,
        existing: String,
        rejected: String,
    },

    /// A shop was registered without a name.
    #[error("Shop name must not be empty (address: {0})")]
    EmptyShopName(String),

    /// The village description could not be parsed.
    #[error("Invalid village config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// The village description could not be read.
    #[error("Cannot read village config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
