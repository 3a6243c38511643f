//! Error types for the stats keeper repository.
//! Consolidates and re-exports error types related to statistics storage operations.
mod statistics;

pub use statistics::{ErrorKind, StatisticsRepositoryError};
