// Request/response types for the HTTP API
use serde::{Deserialize, Serialize};
use stats_keeper_shared::types::StatisticEntity;

/// Body of the update endpoint: a field mask plus the candidate values.
/// `values.id` identifies the target entity.
#[derive(Debug, Deserialize)]
pub struct UpdateStatisticRequest {
    #[serde(default)]
    pub fields: Vec<String>,
    pub values: Option<StatisticEntity>,
}

/// Response of the list endpoint. `entities` is always present, possibly
/// empty.
#[derive(Debug, Serialize)]
pub struct ListUserStatisticsResponse {
    pub entities: Vec<StatisticEntity>,
}
