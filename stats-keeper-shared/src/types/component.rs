use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single running counter payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterComponent {
    pub count: i64,
}

/// An append-style list of time points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateComponent {
    pub timestamps: Vec<DateTime<Utc>>,
}

/// The polymorphic payload of a statistic entity.
///
/// Exactly one shape is active for the life of an entity; once set, the
/// kind never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticComponent {
    Counter(CounterComponent),
    Date(DateComponent),
}

impl StatisticComponent {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Counter(_) => ComponentKind::Counter,
            Self::Date(_) => ComponentKind::Date,
        }
    }
}

/// Classification of a statistic's active component. `None` means no
/// component is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Counter,
    Date,
    None,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Counter => "COUNTER",
            Self::Date => "DATE",
            Self::None => "NONE",
        })
    }
}
