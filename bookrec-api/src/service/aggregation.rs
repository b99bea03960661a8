//! Book-detail aggregation
//!
//! Merges a book with its resolved, display-ready review list. Pure read:
//! no side effects, and two consecutive calls with no intervening writes
//! return identical ordered lists.

use bookrec_common::db::{BookRecord, ReviewRecord};
use bookrec_common::{uuid_utils, Entity, Error, Result};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::service::display;
use crate::store;

/// A display-ready review entry in an aggregated book detail
#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    pub review_id: String,
    pub user_id: String,
    pub rating: i64,
    pub comment: String,
    pub user_name: String,
    pub created_at: String,
}

/// A book merged with its ordered review list
#[derive(Debug, Clone, Serialize)]
pub struct BookDetail {
    pub book_id: String,
    pub title: String,
    pub author: Option<String>,
    pub genre: Vec<String>,
    pub publication_year: Option<i64>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    /// Mean rating rounded to one decimal; absent when there are no reviews
    pub avg_rating: Option<f64>,
    pub review_count: i64,
    pub reviews: Vec<ReviewView>,
}

/// Aggregate a book with its reviews, oldest first
///
/// A malformed id fails with `InvalidIdentifier` before any store access;
/// an unknown id fails with `NotFound`.
pub async fn get_book_with_reviews(db: &SqlitePool, book_id: &str) -> Result<BookDetail> {
    uuid_utils::parse_id(book_id, Entity::Book)?;

    let book = store::books::find_by_guid(db, book_id)
        .await?
        .ok_or(Error::NotFound(Entity::Book))?;

    let records = store::reviews::list_for_book(db, book_id).await?;
    let reviews = resolve_reviews(db, &records).await?;

    Ok(build_detail(book, reviews))
}

/// Resolve stored reviews into display-ready entries
///
/// Owner lookups happen per review; a dangling owner renders as
/// "Anonymous" rather than failing the read.
pub async fn resolve_reviews(
    db: &SqlitePool,
    records: &[ReviewRecord],
) -> Result<Vec<ReviewView>> {
    let mut views = Vec::with_capacity(records.len());

    for record in records {
        let owner = store::users::find_by_guid(db, &record.user_id).await?;
        views.push(ReviewView {
            review_id: record.guid.clone(),
            user_id: record.user_id.clone(),
            rating: record.rating,
            comment: display::display_comment(&record.comment),
            user_name: display::display_name(owner.as_ref()),
            created_at: display::display_timestamp(record.created_at.as_deref()),
        });
    }

    Ok(views)
}

fn build_detail(book: BookRecord, reviews: Vec<ReviewView>) -> BookDetail {
    let review_count = reviews.len() as i64;
    let avg_rating = average_rating(&reviews);

    BookDetail {
        book_id: book.guid.clone(),
        title: book.title.clone(),
        author: book.author.clone(),
        genre: book.genre_tags(),
        publication_year: book.publication_year,
        description: book.description.clone(),
        cover_url: book.cover_url.clone(),
        avg_rating,
        review_count,
        reviews,
    }
}

/// Mean rating rounded to one decimal place, computed at read time
fn average_rating(reviews: &[ReviewView]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: i64 = reviews.iter().map(|r| r.rating).sum();
    let avg = sum as f64 / reviews.len() as f64;
    Some((avg * 10.0).round() / 10.0)
}
