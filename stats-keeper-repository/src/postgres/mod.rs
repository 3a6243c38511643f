//! PostgreSQL implementation of the stats keeper repository.
mod statistics_repository;

pub use statistics_repository::PostgresStatisticsRepository;

/// Embedded schema migrations for the `statistics` table. Run at service
/// startup and by the integration tests.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("src/postgres/migrations");
