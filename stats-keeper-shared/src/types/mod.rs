mod component;
mod statistic_entity;

pub use component::{ComponentKind, CounterComponent, DateComponent, StatisticComponent};
pub use statistic_entity::StatisticEntity;
