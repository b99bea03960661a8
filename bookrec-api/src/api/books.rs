//! Catalog endpoints: listing, search, and aggregated book detail

use axum::{
    extract::{Path, Query, State},
    Json,
};
use bookrec_common::db::BookRecord;
use bookrec_common::{uuid_utils, Entity, Error};
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::service::aggregation::{self, BookDetail, ReviewView};
use crate::store;
use crate::AppState;

/// Query parameters for catalog listing
#[derive(Debug, Deserialize)]
pub struct BookListQuery {
    /// Restrict to books carrying this genre tag
    pub genre: Option<String>,
    /// Case-insensitive substring match over title and author
    pub search: Option<String>,
}

/// A catalog listing entry (no reviews attached)
#[derive(Debug, Serialize)]
pub struct BookListEntry {
    pub book_id: String,
    pub title: String,
    pub author: Option<String>,
    pub genre: Vec<String>,
    pub publication_year: Option<i64>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}

impl From<&BookRecord> for BookListEntry {
    fn from(book: &BookRecord) -> Self {
        BookListEntry {
            book_id: book.guid.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre_tags(),
            publication_year: book.publication_year,
            description: book.description.clone(),
            cover_url: book.cover_url.clone(),
        }
    }
}

/// GET /api/books
///
/// Catalog listing with optional genre filter and title/author search.
pub async fn get_books(
    State(state): State<AppState>,
    Query(query): Query<BookListQuery>,
) -> Result<Json<Vec<BookListEntry>>, ApiError> {
    let books = store::books::list(
        &state.db,
        query.genre.as_deref().filter(|g| !g.is_empty()),
        query.search.as_deref().filter(|s| !s.is_empty()),
    )
    .await?;

    Ok(Json(books.iter().map(BookListEntry::from).collect()))
}

/// GET /api/books/:book_id
///
/// Aggregated book detail: the book merged with its ordered, display-ready
/// review list.
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<BookDetail>, ApiError> {
    let detail = aggregation::get_book_with_reviews(&state.db, &book_id).await?;
    Ok(Json(detail))
}

/// GET /api/books/:book_id/reviews
///
/// Flat review list for a book, same ordering and display policy as the
/// aggregated detail.
pub async fn get_book_reviews(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<Vec<ReviewView>>, ApiError> {
    uuid_utils::parse_id(&book_id, Entity::Book)?;

    if store::books::find_by_guid(&state.db, &book_id).await?.is_none() {
        return Err(Error::NotFound(Entity::Book).into());
    }

    let records = store::reviews::list_for_book(&state.db, &book_id).await?;
    let reviews = aggregation::resolve_reviews(&state.db, &records).await?;

    Ok(Json(reviews))
}
