//! Error types for the statistics repository.
//! Defines the closed set of failure kinds that can cross the storage
//! boundary, and their mapping to HTTP status codes.
use thiserror::Error;

/// Represents errors that can occur within the statistics repository.
///
/// Every failure surfaced by a `StatisticsRepository` backend is one of
/// these four kinds; raw store errors never cross the boundary.
#[derive(Debug, Error)]
pub enum StatisticsRepositoryError {
    /// The request is structurally valid but semantically disallowed,
    /// e.g. modifying an immutable field or changing an entity's
    /// component kind.
    #[error("{0}")]
    InvalidArgument(String),

    /// The referenced entity does not exist or is soft-deleted.
    #[error("{0}")]
    NotFound(String),

    /// The field mask names no field that can actually change anything.
    #[error("{0}")]
    NoUpdate(String),

    /// An underlying store failure. The source error is carried for
    /// diagnostics only and never influences the status mapping.
    #[error("{context}: {source}")]
    Internal {
        context: String,
        #[source]
        source: sqlx::Error,
    },
}

/// The four failure kinds of [`StatisticsRepositoryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    NoUpdate,
    Internal,
}

impl ErrorKind {
    /// Maps this kind to an HTTP status code. This is the only place
    /// status codes are derived from error kinds.
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidArgument | Self::NoUpdate => 400,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }
}

impl StatisticsRepositoryError {
    /// Wraps an underlying store failure as an `Internal` error.
    pub fn internal(context: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Internal {
            context: context.into(),
            source,
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::NoUpdate(_) => ErrorKind::NoUpdate,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub const fn http_status(&self) -> u16 {
        self.kind().http_status()
    }
}
