// HTTP request handlers
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use stats_keeper_repository::StatisticsRepositoryError;
use stats_keeper_shared::types::StatisticEntity;
use tracing::{error, info};
use uuid::Uuid;

use crate::models::{ListUserStatisticsResponse, UpdateStatisticRequest};
use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EntityIdParams {
    #[serde(default)]
    entity_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UserIdParams {
    #[serde(default)]
    user_id: String,
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Stats keeper server is running")
}

fn bad_request(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "message": message })))
}

/// Renders a storage failure. The status code comes from the error's
/// kind mapping; handlers never choose codes for taxonomy errors
/// themselves.
fn storage_error_response(err: &StatisticsRepositoryError) -> (StatusCode, Json<Value>) {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!("storage error: {:?}", err);
    }
    (status, Json(json!({ "message": err.to_string() })))
}

fn parse_entity_id(raw: &str) -> Result<Uuid, (StatusCode, Json<Value>)> {
    if raw.is_empty() {
        return Err(bad_request("entity_id cannot be empty"));
    }
    Uuid::parse_str(raw).map_err(|_| bad_request("entity_id is not a valid id"))
}

/// List endpoint - returns every non-deleted statistic of a user
pub async fn list_user_stats(
    State(state): State<AppState>,
    Query(params): Query<UserIdParams>,
) -> impl IntoResponse {
    if params.user_id.is_empty() {
        return bad_request("user_id cannot be empty");
    }

    match state.repository.list_user_statistics(&params.user_id).await {
        Ok(entities) => (
            StatusCode::OK,
            Json(json!(ListUserStatisticsResponse { entities })),
        ),
        Err(err) => storage_error_response(&err),
    }
}

/// Get endpoint - returns one statistic by id
pub async fn get_stat(
    State(state): State<AppState>,
    Query(params): Query<EntityIdParams>,
) -> impl IntoResponse {
    let entity_id = match parse_entity_id(&params.entity_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.repository.get_statistic(entity_id).await {
        Ok(entity) => (StatusCode::OK, Json(json!(entity))),
        Err(err) => storage_error_response(&err),
    }
}

/// Add endpoint - creates a new statistic
pub async fn add_stat(
    State(state): State<AppState>,
    Json(entity): Json<StatisticEntity>,
) -> impl IntoResponse {
    if entity.name.is_empty() || entity.user_id.is_empty() || entity.component.is_none() {
        return bad_request("name, user_id and component cannot be empty");
    }

    match state.repository.create_statistic(&entity).await {
        Ok(created) => {
            info!("Created statistic {} for user {}", created.id, created.user_id);
            (StatusCode::OK, Json(json!(created)))
        }
        Err(err) => storage_error_response(&err),
    }
}

/// Update endpoint - applies a field-mask partial update
pub async fn update_stat(
    State(state): State<AppState>,
    Json(request): Json<UpdateStatisticRequest>,
) -> impl IntoResponse {
    let UpdateStatisticRequest { fields, values } = request;
    let Some(values) = values else {
        return bad_request("fields and values must be non-empty or non-null");
    };
    if fields.is_empty() {
        return bad_request("fields and values must be non-empty or non-null");
    }

    match state.repository.update_statistic(&fields, &values).await {
        Ok(updated) => (StatusCode::OK, Json(json!(updated))),
        Err(err) => storage_error_response(&err),
    }
}

/// Delete endpoint - soft-deletes a statistic
pub async fn delete_stat(
    State(state): State<AppState>,
    Query(params): Query<EntityIdParams>,
) -> impl IntoResponse {
    let entity_id = match parse_entity_id(&params.entity_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.repository.delete_statistic(entity_id).await {
        Ok(()) => {
            info!("Deleted statistic {}", entity_id);
            (StatusCode::OK, Json(json!({})))
        }
        Err(err) => storage_error_response(&err),
    }
}
