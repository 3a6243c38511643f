//! PostgreSQL backend for the `StatisticsRepository` trait.
//!
//! Records live in the `statistics` table; the component payload
//! occupies one of two nullable columns (`counter`, `date`). Partial
//! updates are applied as a single `UPDATE ... RETURNING` touching only
//! the staged columns, which is this backend's rendering of
//! find-and-modify-with-post-image. Deletion flips the `deleted` flag
//! with a conditional write; rows are never removed.
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use stats_keeper_shared::types::StatisticEntity;
use uuid::Uuid;

use crate::errors::StatisticsRepositoryError;
use crate::interfaces::StatisticsRepository;
use crate::record::StatisticRecord;
use crate::update::build_update_set;

/// PostgreSQL implementation of [`StatisticsRepository`].
pub struct PostgresStatisticsRepository {
    pool: PgPool,
}

impl PostgresStatisticsRepository {
    /// Wraps an existing connection pool. The pool is expected to have
    /// the schema applied (see [`super::MIGRATOR`]).
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatisticsRepository for PostgresStatisticsRepository {
    async fn create_statistic(
        &self,
        entity: &StatisticEntity,
    ) -> Result<StatisticEntity, StatisticsRepositoryError> {
        let mut record = StatisticRecord::from_entity(entity);
        record.id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO statistics (id, name, user_id, counter, date, deleted) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.user_id)
        .bind(record.counter)
        .bind(&record.date)
        .bind(record.deleted)
        .execute(&self.pool)
        .await
        .map_err(|e| StatisticsRepositoryError::internal("error creating statistic", e))?;

        Ok(record.into_entity())
    }

    async fn get_statistic(
        &self,
        entity_id: Uuid,
    ) -> Result<StatisticEntity, StatisticsRepositoryError> {
        let record = sqlx::query_as::<_, StatisticRecord>(
            "SELECT id, name, user_id, counter, date, deleted FROM statistics WHERE id = $1",
        )
        .bind(entity_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            StatisticsRepositoryError::internal("error getting statistic from database", e)
        })?;

        match record {
            Some(record) if !record.deleted => Ok(record.into_entity()),
            _ => Err(StatisticsRepositoryError::NotFound(
                "statistic not found".to_string(),
            )),
        }
    }

    async fn update_statistic(
        &self,
        fields: &[String],
        values: &StatisticEntity,
    ) -> Result<StatisticEntity, StatisticsRepositoryError> {
        // Existence (and soft-delete visibility) first: NotFound
        // dominates the mask-level failures.
        let current = self.get_statistic(values.id).await?;
        let set = build_update_set(current.component_kind(), fields, values)?;

        let mut query_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE statistics SET ");
        {
            let mut assignments = query_builder.separated(", ");
            if let Some(name) = set.name {
                assignments.push("name = ").push_bind_unseparated(name);
            }
            if let Some(count) = set.counter {
                assignments.push("counter = ").push_bind_unseparated(count);
            }
            if let Some(timestamps) = set.date {
                assignments.push("date = ").push_bind_unseparated(timestamps);
            }
        }
        query_builder
            .push(" WHERE id = ")
            .push_bind(values.id)
            .push(" RETURNING id, name, user_id, counter, date, deleted");

        // Records are never physically removed, so a vanished row here is
        // an abnormal store state, not a NotFound.
        let record: StatisticRecord = query_builder
            .build_query_as()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StatisticsRepositoryError::internal("error updating statistic", e))?;

        Ok(record.into_entity())
    }

    async fn delete_statistic(&self, entity_id: Uuid) -> Result<(), StatisticsRepositoryError> {
        let result =
            sqlx::query("UPDATE statistics SET deleted = TRUE WHERE id = $1 AND deleted = FALSE")
                .bind(entity_id)
                .execute(&self.pool)
                .await
                .map_err(|e| StatisticsRepositoryError::internal("error deleting statistic", e))?;

        if result.rows_affected() == 0 {
            return Err(StatisticsRepositoryError::NotFound(
                "statistic not found".to_string(),
            ));
        }
        Ok(())
    }

    async fn list_user_statistics(
        &self,
        user_id: &str,
    ) -> Result<Vec<StatisticEntity>, StatisticsRepositoryError> {
        let records = sqlx::query_as::<_, StatisticRecord>(
            "SELECT id, name, user_id, counter, date, deleted FROM statistics \
             WHERE user_id = $1 AND deleted = FALSE",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StatisticsRepositoryError::internal("error listing statistics", e))?;

        Ok(records
            .into_iter()
            .map(StatisticRecord::into_entity)
            .collect())
    }
}
