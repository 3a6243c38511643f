// Configuration constants and environment helpers
use anyhow::Context;
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

// Server bind address
pub const SERVER_HOST: [u8; 4] = [127, 0, 0, 1];

const DEFAULT_HTTP_PORT: u16 = 8080;

/// Server configuration, read from the environment so the execution
/// environment can change without a new build.
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_url: String,
}

impl Config {
    /// Reads the configuration from the environment. `DATABASE_URL` is
    /// required; `HTTP_PORT` defaults to 8080.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let http_port = match std::env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("HTTP_PORT must be a valid port number")?,
            Err(_) => DEFAULT_HTTP_PORT,
        };
        Ok(Self {
            http_port,
            database_url,
        })
    }
}

/// Create the CORS layer for the stats endpoints
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}
