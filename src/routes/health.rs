use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub database: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
        (status = 503, description = "Database unreachable", body = HealthData),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthData>) {
    match state.orm.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthData {
                status: "ok".to_string(),
                database: "ok".to_string(),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthData {
                    status: "degraded".to_string(),
                    database: "unavailable".to_string(),
                }),
            )
        }
    }
}
