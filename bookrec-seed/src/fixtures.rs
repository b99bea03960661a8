//! Fixture file types
//!
//! Legacy fixture exports spell the same logical attribute several ways
//! (`registration_date` vs `created_at`, `year` vs `publication_year`, and
//! so on). Normalization happens here, once, through serde aliases - the
//! rest of the system only ever sees the canonical schema.

use bookrec_common::time;
use serde::Deserialize;

/// A user as it appears in `users.json`
#[derive(Debug, Clone, Deserialize)]
pub struct UserFixture {
    #[serde(default, alias = "full_name", alias = "user_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    /// Plaintext in the fixture; hashed before it reaches the store
    pub password: String,
    #[serde(default, alias = "registration_date")]
    pub created_at: Option<String>,
}

/// A book as it appears in `books.json`
#[derive(Debug, Clone, Deserialize)]
pub struct BookFixture {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, alias = "genres")]
    pub genre: Vec<String>,
    #[serde(default, alias = "year")]
    pub publication_year: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

/// A review as it appears in `reviews.json`
///
/// Fixture reviews reference their user by email and book by title; the
/// loader resolves both to guids and refuses to insert a dangling review.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewFixture {
    pub user_email: String,
    pub book_title: String,
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
    #[serde(default, alias = "review_date")]
    pub created_at: Option<String>,
}

/// Normalize a fixture date into the stored timestamp form
///
/// Accepts RFC 3339 and bare `YYYY-MM-DD`; anything else is dropped rather
/// than stored malformed (reads fall back to display policy for it).
pub fn normalize_date(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(ts) = time::from_stored(raw) {
        return Some(time::to_stored(ts));
    }

    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
        return Some(time::to_stored(midnight));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_legacy_field_aliases() {
        let user: UserFixture = serde_json::from_str(
            r#"{"full_name": "Ann", "email": "a@b.c", "password": "pw",
                "registration_date": "2024-01-02"}"#,
        )
        .unwrap();
        assert_eq!(user.name.as_deref(), Some("Ann"));
        assert_eq!(user.created_at.as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn test_book_legacy_field_aliases() {
        let book: BookFixture = serde_json::from_str(
            r#"{"title": "1984", "genres": ["Dystopian"], "year": 1949}"#,
        )
        .unwrap();
        assert_eq!(book.genre, vec!["Dystopian"]);
        assert_eq!(book.publication_year, Some(1949));
    }

    #[test]
    fn test_review_alias_and_defaults() {
        let review: ReviewFixture = serde_json::from_str(
            r#"{"user_email": "a@b.c", "book_title": "1984", "rating": 4,
                "review_date": "2024-05-06"}"#,
        )
        .unwrap();
        assert_eq!(review.comment, "");
        assert_eq!(review.created_at.as_deref(), Some("2024-05-06"));
    }

    #[test]
    fn test_normalize_date_formats() {
        assert_eq!(
            normalize_date(Some("2024-05-06")).as_deref(),
            Some("2024-05-06T00:00:00.000Z")
        );
        assert_eq!(
            normalize_date(Some("2024-05-06T07:08:09Z")).as_deref(),
            Some("2024-05-06T07:08:09.000Z")
        );
    }

    #[test]
    fn test_normalize_date_drops_garbage() {
        assert_eq!(normalize_date(Some("last Tuesday")), None);
        assert_eq!(normalize_date(Some("")), None);
        assert_eq!(normalize_date(None), None);
    }
}
