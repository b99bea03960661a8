//! bookrec-seed library - one-shot fixture loader
//!
//! Loads `users.json`, `books.json`, and `reviews.json` into the store.
//! Each collection is only initialized when empty, so re-running the seeder
//! is safe. Passwords are hashed on the way in, legacy field spellings are
//! normalized by the fixture types, and a review whose user or book cannot
//! be resolved is skipped, never inserted with a dangling reference.

use anyhow::{Context, Result};
use bookrec_common::db::BookRecord;
use bookrec_common::{auth, time, uuid_utils};
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

pub mod fixtures;

use fixtures::{normalize_date, BookFixture, ReviewFixture, UserFixture};

/// At most this many records are taken from each fixture file
pub const FIXTURE_CAP: usize = 20;

/// Seed all three collections from a fixtures directory
pub async fn run_seed(db: &SqlitePool, fixtures_dir: &Path) -> Result<()> {
    seed_users(db, &fixtures_dir.join("users.json")).await?;
    seed_books(db, &fixtures_dir.join("books.json")).await?;
    seed_reviews(db, &fixtures_dir.join("reviews.json")).await?;

    info!("Database initialization check complete");
    Ok(())
}

async fn seed_users(db: &SqlitePool, path: &Path) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(db)
        .await?;
    if count > 0 {
        info!("Users collection already contains data. Skipping initialization.");
        return Ok(());
    }

    let users: Vec<UserFixture> = read_fixture_file(path)?;
    let mut inserted = 0;

    for user in users.into_iter().take(FIXTURE_CAP) {
        let created_at =
            normalize_date(user.created_at.as_deref()).unwrap_or_else(time::now_stored);

        sqlx::query(
            "INSERT INTO users (guid, name, display_name, username, email, password, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(uuid_utils::generate().to_string())
        .bind(&user.name)
        .bind(&user.display_name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(auth::hash_password(&user.password))
        .bind(created_at)
        .execute(db)
        .await
        .with_context(|| format!("Failed to insert user {}", user.email))?;

        inserted += 1;
    }

    info!("Inserted {} users", inserted);
    Ok(())
}

async fn seed_books(db: &SqlitePool, path: &Path) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(db)
        .await?;
    if count > 0 {
        info!("Books collection already contains data. Skipping initialization.");
        return Ok(());
    }

    let books: Vec<BookFixture> = read_fixture_file(path)?;
    let mut inserted = 0;

    for book in books.into_iter().take(FIXTURE_CAP) {
        sqlx::query(
            "INSERT INTO books (guid, title, author, genre, publication_year, description, cover_url) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(uuid_utils::generate().to_string())
        .bind(&book.title)
        .bind(&book.author)
        .bind(BookRecord::encode_genre(&book.genre))
        .bind(book.publication_year)
        .bind(&book.description)
        .bind(&book.cover_url)
        .execute(db)
        .await
        .with_context(|| format!("Failed to insert book {}", book.title))?;

        inserted += 1;
    }

    info!("Inserted {} books", inserted);
    Ok(())
}

async fn seed_reviews(db: &SqlitePool, path: &Path) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(db)
        .await?;
    if count > 0 {
        info!("Reviews collection already contains data. Skipping initialization.");
        return Ok(());
    }

    let reviews: Vec<ReviewFixture> = read_fixture_file(path)?;

    // Fixture reviews reference users by email and books by title
    let email_to_guid = load_map(db, "SELECT email, guid FROM users").await?;
    let title_to_guid = load_map(db, "SELECT title, guid FROM books").await?;

    let mut inserted = 0;
    for review in reviews.into_iter().take(FIXTURE_CAP) {
        let (Some(user_id), Some(book_id)) = (
            email_to_guid.get(&review.user_email),
            title_to_guid.get(&review.book_title),
        ) else {
            warn!(
                "Skipping review for book \"{}\" by user \"{}\" due to missing user or book reference",
                review.book_title, review.user_email
            );
            continue;
        };

        if !(1..=5).contains(&review.rating) {
            warn!(
                "Skipping review for book \"{}\" by user \"{}\": rating {} out of range",
                review.book_title, review.user_email, review.rating
            );
            continue;
        }

        sqlx::query(
            "INSERT INTO reviews (guid, user_id, book_id, rating, comment, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(uuid_utils::generate().to_string())
        .bind(user_id)
        .bind(book_id)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(normalize_date(review.created_at.as_deref()))
        .execute(db)
        .await
        .context("Failed to insert review")?;

        inserted += 1;
    }

    if inserted > 0 {
        info!("Inserted {} reviews", inserted);
    } else {
        info!("No valid reviews found to insert (check user/book references)");
    }
    Ok(())
}

fn read_fixture_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading fixture file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Error parsing fixture file {}", path.display()))
}

async fn load_map(db: &SqlitePool, sql: &str) -> Result<HashMap<String, String>> {
    let rows: Vec<(String, String)> = sqlx::query_as(sql).fetch_all(db).await?;
    Ok(rows.into_iter().collect())
}
