use std::io;
use std::path::PathBuf;

/// Failures while loading or validating a municipality dataset
///
/// Lookups themselves never fail; every error surfaces at load time.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to decompress embedded dataset: {0}")]
    Decompress(#[source] io::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("record {index}: `{field}` {reason}")]
    InvalidRecord {
        index: usize,
        field: &'static str,
        reason: &'static str,
    },
}
