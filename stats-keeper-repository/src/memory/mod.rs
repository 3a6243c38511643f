//! In-memory statistics backend.
//!
//! Keeps the persisted records in a `RwLock`-guarded map with the same
//! observable semantics as the PostgreSQL backend, including soft
//! deletion. Used for development and tests.
use std::collections::HashMap;
use std::sync::RwLock;

use stats_keeper_shared::types::StatisticEntity;
use uuid::Uuid;

use crate::errors::StatisticsRepositoryError;
use crate::interfaces::StatisticsRepository;
use crate::record::StatisticRecord;
use crate::update::build_update_set;

/// In-memory implementation of [`StatisticsRepository`].
pub struct InMemoryStatisticsRepository {
    records: RwLock<HashMap<Uuid, StatisticRecord>>,
}

impl InMemoryStatisticsRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStatisticsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl StatisticsRepository for InMemoryStatisticsRepository {
    async fn create_statistic(
        &self,
        entity: &StatisticEntity,
    ) -> Result<StatisticEntity, StatisticsRepositoryError> {
        let mut record = StatisticRecord::from_entity(entity);
        record.id = Uuid::new_v4();

        let mut records = self.records.write().unwrap();
        records.insert(record.id, record.clone());
        Ok(record.into_entity())
    }

    async fn get_statistic(
        &self,
        entity_id: Uuid,
    ) -> Result<StatisticEntity, StatisticsRepositoryError> {
        let records = self.records.read().unwrap();
        match records.get(&entity_id) {
            Some(record) if !record.deleted => Ok(record.clone().into_entity()),
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

        let mut records = self.records.write().unwrap();
        let record = records.get_mut(&values.id).ok_or_else(|| {
            StatisticsRepositoryError::NotFound("statistic not found".to_string())
        })?;
        if let Some(name) = set.name {
            record.name = name;
        }
        if let Some(count) = set.counter {
            record.counter = Some(count);
        }
        if let Some(timestamps) = set.date {
            record.date = Some(timestamps);
        }
        Ok(record.clone().into_entity())
    }

    async fn delete_statistic(&self, entity_id: Uuid) -> Result<(), StatisticsRepositoryError> {
        let mut records = self.records.write().unwrap();
        match records.get_mut(&entity_id) {
            Some(record) if !record.deleted => {
                record.deleted = true;
                Ok(())
            }
            _ => Err(StatisticsRepositoryError::NotFound(
                "statistic not found".to_string(),
            )),
        }
    }

    async fn list_user_statistics(
        &self,
        user_id: &str,
    ) -> Result<Vec<StatisticEntity>, StatisticsRepositoryError> {
        let records = self.records.read().unwrap();
        Ok(records
            .values()
            .filter(|record| record.user_id == user_id && !record.deleted)
            .map(|record| record.clone().into_entity())
            .collect())
    }
}
