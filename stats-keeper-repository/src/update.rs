//! Field-mask update engine.
//!
//! Evaluates a field mask against candidate values and produces the
//! staged set of changes for a partial update, or rejects the mask.
//! Pure and store-independent; backends apply the staged set in a single
//! atomic write.
use chrono::{DateTime, Utc};
use stats_keeper_shared::types::{ComponentKind, StatisticComponent, StatisticEntity};

use crate::errors::StatisticsRepositoryError;

/// How the update engine treats a mask entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Identity field, can never be modified.
    Immutable,
    /// The scalar `name` field, staged unconditionally.
    Name,
    /// A component payload field, legal only on entities of this kind.
    Component(ComponentKind),
}

/// The table of legal mask entries. Unknown names map to `None` and are
/// ignored by the engine.
pub fn field_policy(field: &str) -> Option<FieldPolicy> {
    match field {
        "id" | "user_id" => Some(FieldPolicy::Immutable),
        "name" => Some(FieldPolicy::Name),
        "counter" => Some(FieldPolicy::Component(ComponentKind::Counter)),
        "date" => Some(FieldPolicy::Component(ComponentKind::Date)),
        _ => None,
    }
}

/// Fields staged for a partial update. `None` means "leave untouched".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSet {
    pub name: Option<String>,
    pub counter: Option<i64>,
    pub date: Option<Vec<DateTime<Utc>>>,
}

impl UpdateSet {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.counter.is_none() && self.date.is_none()
    }
}

/// Evaluates `fields` against `values` for an entity whose active
/// component is `current`.
///
/// Immutable fields are rejected before anything else is considered. A
/// mask entry naming the other kind's component field is rejected
/// regardless of payload content; one naming the active kind stages the
/// payload only when the candidate actually carries that shape. An
/// evaluation that stages nothing fails with `NoUpdate`.
pub fn build_update_set(
    current: ComponentKind,
    fields: &[String],
    values: &StatisticEntity,
) -> Result<UpdateSet, StatisticsRepositoryError> {
    if fields
        .iter()
        .any(|f| field_policy(f) == Some(FieldPolicy::Immutable))
    {
        return Err(StatisticsRepositoryError::InvalidArgument(
            "fields 'id', 'user_id' cannot be modified".to_string(),
        ));
    }

    let mut set = UpdateSet::default();
    for field in fields {
        match field_policy(field) {
            Some(FieldPolicy::Name) => set.name = Some(values.name.clone()),
            Some(FieldPolicy::Component(kind)) => {
                if current != kind {
                    return Err(StatisticsRepositoryError::InvalidArgument(format!(
                        "component cannot be changed from {current} to {kind}"
                    )));
                }
                match (kind, &values.component) {
                    (ComponentKind::Counter, Some(StatisticComponent::Counter(counter))) => {
                        set.counter = Some(counter.count);
                    }
                    (ComponentKind::Date, Some(StatisticComponent::Date(date))) => {
                        set.date = Some(date.timestamps.clone());
                    }
                    // The candidate carries no payload of the active kind.
                    _ => {}
                }
            }
            Some(FieldPolicy::Immutable) | None => {}
        }
    }

    if set.is_empty() {
        return Err(StatisticsRepositoryError::NoUpdate(
            "no update possible".to_string(),
        ));
    }
    Ok(set)
}
