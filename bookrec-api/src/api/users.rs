//! User profile and user-review endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use bookrec_common::{uuid_utils, Entity, Error};
use serde::Serialize;

use crate::api::ApiError;
use crate::service::display;
use crate::store;
use crate::AppState;

/// User profile response; the password hash is never serialized
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub user_id: String,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub username: Option<String>,
    pub email: String,
    pub created_at: String,
}

/// A user's review with an embedded book summary for profile display
#[derive(Debug, Serialize)]
pub struct UserReviewEntry {
    pub review_id: String,
    pub book_id: String,
    pub rating: i64,
    pub comment: String,
    pub created_at: String,
    pub book: BookSummary,
}

/// Book fields shown alongside a profile review
///
/// All fields are null when the book can no longer be resolved; the read
/// never fails for a missing book.
#[derive(Debug, Serialize)]
pub struct BookSummary {
    pub title: Option<String>,
    pub author: Option<String>,
    pub cover_url: Option<String>,
}

/// GET /api/users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    uuid_utils::parse_id(&user_id, Entity::User)?;

    let user = store::users::find_by_guid(&state.db, &user_id)
        .await?
        .ok_or(Error::NotFound(Entity::User))?;

    Ok(Json(UserProfile {
        user_id: user.guid,
        name: user.name,
        display_name: user.display_name,
        username: user.username,
        email: user.email,
        created_at: user.created_at,
    }))
}

/// GET /api/users/:user_id/reviews
///
/// The user's submitted reviews, oldest first - the same ordering
/// convention as book-detail aggregation.
pub async fn get_user_reviews(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<UserReviewEntry>>, ApiError> {
    uuid_utils::parse_id(&user_id, Entity::User)?;

    if store::users::find_by_guid(&state.db, &user_id).await?.is_none() {
        return Err(Error::NotFound(Entity::User).into());
    }

    let records = store::reviews::list_for_user(&state.db, &user_id).await?;

    let mut entries = Vec::with_capacity(records.len());
    for record in records {
        let book = store::books::find_by_guid(&state.db, &record.book_id).await?;
        entries.push(UserReviewEntry {
            review_id: record.guid,
            book_id: record.book_id,
            rating: record.rating,
            comment: display::display_comment(&record.comment),
            created_at: display::display_timestamp(record.created_at.as_deref()),
            book: BookSummary {
                title: book.as_ref().map(|b| b.title.clone()),
                author: book.as_ref().and_then(|b| b.author.clone()),
                cover_url: book.as_ref().and_then(|b| b.cover_url.clone()),
            },
        });
    }

    Ok(Json(entries))
}
