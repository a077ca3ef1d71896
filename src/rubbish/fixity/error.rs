use super::Hash;

/// Errors from the fixity store and its index.
#[derive(Debug, thiserror::Error)]
pub enum FixityError {
    /// No version is stored under this hash.
    #[error("version not found: {0}")]
    NotFound(Hash),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The stored bytes no longer hash to the name they were stored under.
    #[error("corrupt version {hash}: {reason}")]
    Corrupt { hash: Hash, reason: String },

    #[error("backend error: {0}")]
    Backend(String),
}

pub type FixityResult<T> = Result<T, FixityError>;
