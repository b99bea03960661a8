//! Review submission endpoint

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use bookrec_common::db::ReviewRecord;
use bookrec_common::Error;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::auth::bearer_token;
use crate::api::ApiError;
use crate::service::aggregation::{self, BookDetail};
use crate::service::submission;
use crate::store;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub book_id: Option<String>,
    pub rating: Option<i64>,
    #[serde(default)]
    pub comment: String,
}

/// Response for a created review
///
/// Carries the refreshed book detail so the caller observes the updated
/// review list in the same exchange (read-your-writes).
#[derive(Debug, Serialize)]
pub struct CreateReviewResponse {
    pub message: String,
    pub review_id: String,
    pub review: ReviewRecord,
    pub book: BookDetail,
}

/// POST /api/reviews
///
/// Requires an established identity: the bearer session token resolves to
/// the submitting user. Missing or unknown token is `Unauthenticated`,
/// distinct from the validation errors.
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<CreateReviewResponse>), ApiError> {
    let token = bearer_token(&headers).ok_or(Error::Unauthenticated)?;
    let user = store::sessions::resolve(&state.db, token)
        .await?
        .ok_or(Error::Unauthenticated)?;

    let book_id = req
        .book_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(Error::MissingField("book_id"))?;

    let review =
        submission::submit_review(&state.db, &user.guid, &book_id, req.rating, &req.comment)
            .await?;

    info!("User {} reviewed book {}", user.guid, book_id);

    // Re-aggregate so the caller sees the review it just wrote
    let book = aggregation::get_book_with_reviews(&state.db, &book_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReviewResponse {
            message: "Review submitted successfully".to_string(),
            review_id: review.guid.clone(),
            review,
            book,
        }),
    ))
}
