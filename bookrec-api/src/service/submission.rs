//! Review submission
//!
//! Validate-then-write: every check happens before the single INSERT, so a
//! failed request leaves the store untouched. Reviews are immutable once
//! created; resubmitting for the same book creates a new review.

use bookrec_common::db::ReviewRecord;
use bookrec_common::{time, uuid_utils, Entity, Error, Result};
use sqlx::SqlitePool;

use crate::store;

/// Validate a submitted rating
///
/// Absent or zero is `MissingRating`; out of [1,5] is `InvalidRating`. The
/// two cases are deliberately distinct so callers can tell them apart.
pub fn validate_rating(rating: Option<i64>) -> Result<i64> {
    match rating {
        None | Some(0) => Err(Error::MissingRating),
        Some(r) if (1..=5).contains(&r) => Ok(r),
        Some(_) => Err(Error::InvalidRating),
    }
}

/// Persist a new review after validating the rating and both references
///
/// The caller supplies an already-resolved `user_id` (identity is
/// established by the HTTP layer); the guid and creation timestamp are
/// server-assigned, so client-supplied timestamps never affect ordering.
pub async fn submit_review(
    db: &SqlitePool,
    user_id: &str,
    book_id: &str,
    rating: Option<i64>,
    comment: &str,
) -> Result<ReviewRecord> {
    let rating = validate_rating(rating)?;

    uuid_utils::parse_id(book_id, Entity::Book)?;
    uuid_utils::parse_id(user_id, Entity::User)?;

    if store::books::find_by_guid(db, book_id).await?.is_none() {
        return Err(Error::NotFound(Entity::Book));
    }
    if store::users::find_by_guid(db, user_id).await?.is_none() {
        return Err(Error::NotFound(Entity::User));
    }

    let review = ReviewRecord {
        guid: uuid_utils::generate().to_string(),
        user_id: user_id.to_string(),
        book_id: book_id.to_string(),
        rating,
        comment: comment.to_string(),
        created_at: Some(time::now_stored()),
    };

    store::reviews::insert(db, &review).await?;

    Ok(review)
}
