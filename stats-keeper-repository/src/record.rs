//! Flat persisted form of a statistic.
//!
//! The backing stores cannot represent the component sum type directly,
//! so a record carries one optional payload slot per component kind; at
//! most one slot is ever populated. Which slot is set is inspected here
//! and nowhere else.
use chrono::{DateTime, Utc};
use stats_keeper_shared::types::{
    CounterComponent, DateComponent, StatisticComponent, StatisticEntity,
};
use uuid::Uuid;

/// Store-native projection of [`StatisticEntity`].
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StatisticRecord {
    pub id: Uuid,
    pub name: String,
    pub user_id: String,
    pub counter: Option<i64>,
    pub date: Option<Vec<DateTime<Utc>>>,
    /// Soft-delete marker. A deleted record stays in the store but is
    /// excluded from every read path.
    pub deleted: bool,
}

impl StatisticRecord {
    /// Projects a logical entity onto its flat persisted form, populating
    /// exactly the slot matching the active component.
    pub fn from_entity(entity: &StatisticEntity) -> Self {
        let mut record = Self {
            id: entity.id,
            name: entity.name.clone(),
            user_id: entity.user_id.clone(),
            counter: None,
            date: None,
            deleted: false,
        };
        match &entity.component {
            Some(StatisticComponent::Counter(counter)) => record.counter = Some(counter.count),
            Some(StatisticComponent::Date(date)) => record.date = Some(date.timestamps.clone()),
            None => {}
        }
        record
    }

    /// Rebuilds the logical entity from this record. A record with
    /// neither slot populated yields an entity without a component.
    pub fn into_entity(self) -> StatisticEntity {
        let component = if let Some(count) = self.counter {
            Some(StatisticComponent::Counter(CounterComponent { count }))
        } else if let Some(timestamps) = self.date {
            Some(StatisticComponent::Date(DateComponent { timestamps }))
        } else {
            None
        };
        StatisticEntity {
            id: self.id,
            name: self.name,
            user_id: self.user_id,
            component,
        }
    }
}
