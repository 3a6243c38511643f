//! # Stats Keeper Shared
//! This crate defines the shared data structures used across the stats
//! keeper service: the statistic entity, its polymorphic component and
//! the component-kind classification.
pub mod types;
