//! Recommendation endpoint

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::ApiError;
use crate::service::recommend::{self, Recommendation};
use crate::AppState;

/// GET /api/recommendations/user/:user_id
///
/// Up to five genre-based suggestions; an empty list for users with no
/// 4-or-5-star reviews.
pub async fn get_user_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    let recs = recommend::recommend_for_user(&state.db, &user_id).await?;
    Ok(Json(recs))
}
