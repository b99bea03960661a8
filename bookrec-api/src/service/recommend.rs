//! Genre-based recommendations
//!
//! Finds the user's favourite genres from their 4-and-5-star reviews and
//! suggests unreviewed books from those genres, best-loved genre first.

use bookrec_common::db::BookRecord;
use bookrec_common::{uuid_utils, Entity, Result};
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::{HashMap, HashSet};

use crate::store;

/// Maximum number of recommendations returned
const MAX_RECOMMENDATIONS: usize = 5;

/// Ratings at or above this count toward genre preference
const PREFERENCE_THRESHOLD: i64 = 4;

/// A recommended book
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub book_id: String,
    pub title: String,
    pub author: Option<String>,
    pub genre: Vec<String>,
    pub publication_year: Option<i64>,
    pub cover_url: Option<String>,
}

/// Recommend up to five books for a user
///
/// Mirrors the catalog-read behavior of the rest of the API: a malformed or
/// unknown user yields an empty list rather than an error, since an empty
/// recommendation set is a normal outcome.
pub async fn recommend_for_user(db: &SqlitePool, user_id: &str) -> Result<Vec<Recommendation>> {
    if uuid_utils::parse_id(user_id, Entity::User).is_err() {
        return Ok(Vec::new());
    }

    let liked = store::reviews::list_for_user_min_rating(db, user_id, PREFERENCE_THRESHOLD).await?;
    if liked.is_empty() {
        return Ok(Vec::new());
    }

    // Count genre occurrences across the liked books
    let mut genre_count: HashMap<String, usize> = HashMap::new();
    let mut reviewed_ids: HashSet<String> = HashSet::new();
    for review in &liked {
        reviewed_ids.insert(review.book_id.clone());
        if let Some(book) = store::books::find_by_guid(db, &review.book_id).await? {
            for tag in book.genre_tags() {
                *genre_count.entry(tag).or_insert(0) += 1;
            }
        }
    }
    if genre_count.is_empty() {
        return Ok(Vec::new());
    }

    // Sort genres by preference; name breaks ties so output is deterministic
    let mut top_genres: Vec<(String, usize)> = genre_count.into_iter().collect();
    top_genres.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut recs: Vec<Recommendation> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for (genre, _) in top_genres {
        if recs.len() >= MAX_RECOMMENDATIONS {
            break;
        }
        for book in store::books::list_by_genre(db, &genre).await? {
            if reviewed_ids.contains(&book.guid) || !seen.insert(book.guid.clone()) {
                continue;
            }
            recs.push(to_recommendation(&book));
            if recs.len() >= MAX_RECOMMENDATIONS {
                break;
            }
        }
    }

    Ok(recs)
}

fn to_recommendation(book: &BookRecord) -> Recommendation {
    Recommendation {
        book_id: book.guid.clone(),
        title: book.title.clone(),
        author: book.author.clone(),
        genre: book.genre_tags(),
        publication_year: book.publication_year,
        cover_url: book.cover_url.clone(),
    }
}
