// App state for the Axum server
use std::sync::Arc;

use stats_keeper_repository::StatisticsRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn StatisticsRepository>,
}
