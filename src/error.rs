//! Error types for noval.
//!
//! Extraction itself never fails on bad markup; the only hard errors are
//! caller mistakes around URL resolution and configuration.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A relative href had to be resolved but no absolute base URL was available.
    #[error("base URL is not an absolute URL: {0:?}")]
    InvalidBaseUrl(String),

    /// The `url` crate rejected the join of `part` onto `base`.
    #[error("cannot resolve {part:?} against {base:?}: {source}")]
    UrlJoin {
        base: String,
        part: String,
        #[source]
        source: url::ParseError,
    },

    /// Options could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
