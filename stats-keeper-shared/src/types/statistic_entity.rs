use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ComponentKind, StatisticComponent};

/// A named, per-user statistic.
///
/// `id` is assigned by the storage layer on creation and is immutable
/// afterwards, as is `user_id`. All fields default when absent from a
/// JSON body, so the same type carries both full entities and the
/// candidate values of a partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticEntity {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<StatisticComponent>,
}

impl StatisticEntity {
    /// Classifies the active component. Returns `ComponentKind::None`
    /// when no component is set.
    pub fn component_kind(&self) -> ComponentKind {
        self.component
            .as_ref()
            .map_or(ComponentKind::None, StatisticComponent::kind)
    }
}
