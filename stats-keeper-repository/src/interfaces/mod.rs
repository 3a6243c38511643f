//! This module defines and re-exports the interfaces for the statistics
//! repository. It serves as a central point for accessing traits related
//! to statistics storage.
mod statistics;

pub use statistics::StatisticsRepository;
