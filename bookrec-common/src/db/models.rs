//! Database record models
//!
//! These mirror the stored rows one-to-one. Display policy (name fallback,
//! comment placeholder, timestamp fallback) is applied by the aggregation
//! layer, not here.

use serde::{Deserialize, Serialize};

/// Stored user row. `password` is the salted hash, never plaintext.
///
/// `name`, `display_name` and `username` are three distinct canonical
/// columns consulted in order by the display-name policy; legacy seed
/// records may populate any subset of them.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    pub guid: String,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub username: Option<String>,
    pub email: String,
    pub password: String,
    pub created_at: String,
}

/// Stored book row. `genre` holds a JSON array of tags in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BookRecord {
    pub guid: String,
    pub title: String,
    pub author: Option<String>,
    pub genre: String,
    pub publication_year: Option<i64>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}

impl BookRecord {
    /// Decode the genre column into an ordered tag list
    ///
    /// A malformed column decodes to an empty list rather than failing the
    /// read; seeding is responsible for writing well-formed arrays.
    pub fn genre_tags(&self) -> Vec<String> {
        serde_json::from_str(&self.genre).unwrap_or_default()
    }

    /// Encode an ordered tag list for storage
    pub fn encode_genre(tags: &[String]) -> String {
        serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Stored review row. Immutable once created; no edit or delete path.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ReviewRecord {
    pub guid: String,
    pub user_id: String,
    pub book_id: String,
    pub rating: i64,
    pub comment: String,
    pub created_at: Option<String>,
}

/// Stored session row backing bearer-token identity lookup
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SessionRecord {
    pub token: String,
    pub user_id: String,
    pub created_at: String,
}
