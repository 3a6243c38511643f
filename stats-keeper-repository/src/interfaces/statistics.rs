//! This module defines the `StatisticsRepository` trait, which provides
//! an interface for interacting with the underlying data store for
//! per-user statistics. It abstracts the storage operations for
//! persistence and retrieval.
use stats_keeper_shared::types::StatisticEntity;
use uuid::Uuid;

use crate::errors::StatisticsRepositoryError;

/// A trait that defines the interface for interacting with the
/// statistics data store.
///
/// Implementors provide the five gateway operations: create, get,
/// field-mask update, soft delete and per-user listing. Every failure is
/// reported as a [`StatisticsRepositoryError`].
#[async_trait::async_trait]
pub trait StatisticsRepository: Send + Sync {
    /// Inserts a new statistic, assigning it a fresh id. Any
    /// caller-supplied id is overwritten, so creation never fails on an
    /// id collision.
    ///
    /// # Returns
    ///
    /// The stored entity with its generated id, or `Internal` on a store
    /// failure.
    async fn create_statistic(
        &self,
        entity: &StatisticEntity,
    ) -> Result<StatisticEntity, StatisticsRepositoryError>;

    /// Looks up one statistic by id.
    ///
    /// # Returns
    ///
    /// The entity, or `NotFound` when no record with that id exists or
    /// the record is soft-deleted.
    async fn get_statistic(
        &self,
        entity_id: Uuid,
    ) -> Result<StatisticEntity, StatisticsRepositoryError>;

    /// Applies a field-mask partial update to the statistic identified
    /// by `values.id` and returns the post-update entity.
    ///
    /// The existence check runs first, so `NotFound` dominates the
    /// mask-level failures (`InvalidArgument`, `NoUpdate`).
    async fn update_statistic(
        &self,
        fields: &[String],
        values: &StatisticEntity,
    ) -> Result<StatisticEntity, StatisticsRepositoryError>;

    /// Marks the statistic as deleted without removing its record.
    ///
    /// # Returns
    ///
    /// `NotFound` when there is no non-deleted record to mark; deleting
    /// the same id twice fails the second time.
    async fn delete_statistic(&self, entity_id: Uuid) -> Result<(), StatisticsRepositoryError>;

    /// Lists every non-deleted statistic belonging to `user_id`.
    ///
    /// # Returns
    ///
    /// The matching entities in no guaranteed order; an empty `Vec` when
    /// none match.
    async fn list_user_statistics(
        &self,
        user_id: &str,
    ) -> Result<Vec<StatisticEntity>, StatisticsRepositoryError>;
}
