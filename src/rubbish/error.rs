use crate::fixity::FixityError;
use thiserror::Error;

/// Which call into the underlying fixity store failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendOp {
    Write,
    Query,
    Read,
}

impl std::fmt::Display for BackendOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendOp::Write => write!(f, "write"),
            BackendOp::Query => write!(f, "query"),
            BackendOp::Read => write!(f, "read"),
        }
    }
}

/// Coarse error category, for callers that branch on the kind of failure
/// rather than its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    AmbiguousIdentifier,
    Backend,
    Deserialization,
    Config,
    Io,
}

#[derive(Error, Debug)]
pub enum RubbishError {
    #[error("{0}")]
    Validation(String),

    #[error("name is too ambiguous: {name} already has {count} or more items")]
    AmbiguousName { name: String, count: usize },

    #[error("store {op} failed: {source}")]
    Backend {
        op: BackendOp,
        #[source]
        source: FixityError,
    },

    #[error("document (de)serialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RubbishError {
    pub fn backend(op: BackendOp) -> impl FnOnce(FixityError) -> Self {
        move |source| RubbishError::Backend { op, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RubbishError::Validation(_) => ErrorKind::Validation,
            RubbishError::AmbiguousName { .. } => ErrorKind::AmbiguousIdentifier,
            RubbishError::Backend { .. } => ErrorKind::Backend,
            RubbishError::Deserialization(_) => ErrorKind::Deserialization,
            RubbishError::Config(_) => ErrorKind::Config,
            RubbishError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, RubbishError>;
