// Library exports for the stats keeper service
pub mod config;
pub mod models;
pub mod server;
