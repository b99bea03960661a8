//! Health check endpoint

use axum::{extract::State, Json};
use bookrec_common::config::DATABASE_FILE;
use serde::Serialize;

use crate::api::ApiError;
use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
}

/// GET /api/health
///
/// Pings the store before reporting ok. Does not require authentication.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.db)
        .await
        .map_err(bookrec_common::Error::from)?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        database: DATABASE_FILE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
