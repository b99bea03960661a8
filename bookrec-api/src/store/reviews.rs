//! Review store queries
//!
//! Reviews are ordered by creation timestamp ascending, with insertion
//! order (rowid) breaking ties so same-timestamp-bucket reviews keep their
//! submission order. The ordering is deterministic: two reads with no
//! intervening writes return identical lists.

use bookrec_common::db::ReviewRecord;
use bookrec_common::Result;
use sqlx::SqlitePool;

const COLUMNS: &str = "guid, user_id, book_id, rating, comment, created_at";

/// List a book's reviews, oldest first
pub async fn list_for_book(db: &SqlitePool, book_id: &str) -> Result<Vec<ReviewRecord>> {
    let reviews = sqlx::query_as::<_, ReviewRecord>(&format!(
        "SELECT {} FROM reviews WHERE book_id = ? ORDER BY created_at ASC, rowid ASC",
        COLUMNS
    ))
    .bind(book_id)
    .fetch_all(db)
    .await?;

    Ok(reviews)
}

/// List a user's reviews, oldest first (same convention as book reviews)
pub async fn list_for_user(db: &SqlitePool, user_id: &str) -> Result<Vec<ReviewRecord>> {
    let reviews = sqlx::query_as::<_, ReviewRecord>(&format!(
        "SELECT {} FROM reviews WHERE user_id = ? ORDER BY created_at ASC, rowid ASC",
        COLUMNS
    ))
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(reviews)
}

/// List a user's reviews rated at or above a threshold
pub async fn list_for_user_min_rating(
    db: &SqlitePool,
    user_id: &str,
    min_rating: i64,
) -> Result<Vec<ReviewRecord>> {
    let reviews = sqlx::query_as::<_, ReviewRecord>(&format!(
        "SELECT {} FROM reviews WHERE user_id = ? AND rating >= ? ORDER BY created_at ASC, rowid ASC",
        COLUMNS
    ))
    .bind(user_id)
    .bind(min_rating)
    .fetch_all(db)
    .await?;

    Ok(reviews)
}

/// Total number of stored reviews
pub async fn count(db: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(db)
        .await?;
    Ok(count)
}

/// Insert a new review record
///
/// Callers must have validated both references; the store's foreign keys
/// reject a dangling insert regardless.
pub async fn insert(db: &SqlitePool, review: &ReviewRecord) -> Result<()> {
    sqlx::query(
        "INSERT INTO reviews (guid, user_id, book_id, rating, comment, created_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&review.guid)
    .bind(&review.user_id)
    .bind(&review.book_id)
    .bind(review.rating)
    .bind(&review.comment)
    .bind(&review.created_at)
    .execute(db)
    .await?;

    Ok(())
}
