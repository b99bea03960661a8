//! Catalog store queries
//!
//! Books are created by seeding only and read-only thereafter.

use bookrec_common::db::BookRecord;
use bookrec_common::Result;
use sqlx::SqlitePool;

const COLUMNS: &str = "guid, title, author, genre, publication_year, description, cover_url";

/// Look up a book by guid
pub async fn find_by_guid(db: &SqlitePool, guid: &str) -> Result<Option<BookRecord>> {
    let book = sqlx::query_as::<_, BookRecord>(&format!(
        "SELECT {} FROM books WHERE guid = ?",
        COLUMNS
    ))
    .bind(guid)
    .fetch_optional(db)
    .await?;

    Ok(book)
}

/// List books, optionally filtered by genre tag and/or title/author search
///
/// Search is case-insensitive substring match over title and author. The
/// genre filter matches any element of the stored tag array.
pub async fn list(
    db: &SqlitePool,
    genre: Option<&str>,
    search: Option<&str>,
) -> Result<Vec<BookRecord>> {
    let mut sql = format!("SELECT {} FROM books WHERE 1=1", COLUMNS);

    if genre.is_some() {
        sql.push_str(" AND EXISTS (SELECT 1 FROM json_each(books.genre) WHERE json_each.value = ?)");
    }
    if search.is_some() {
        sql.push_str(" AND (title LIKE '%' || ? || '%' OR author LIKE '%' || ? || '%')");
    }
    sql.push_str(" ORDER BY rowid ASC");

    let mut query = sqlx::query_as::<_, BookRecord>(&sql);
    if let Some(genre) = genre {
        query = query.bind(genre.to_string());
    }
    if let Some(search) = search {
        query = query.bind(search.to_string()).bind(search.to_string());
    }

    let books = query.fetch_all(db).await?;
    Ok(books)
}

/// List books carrying a genre tag, in catalog order
pub async fn list_by_genre(db: &SqlitePool, genre: &str) -> Result<Vec<BookRecord>> {
    list(db, Some(genre), None).await
}

/// Insert a new book record
pub async fn insert(db: &SqlitePool, book: &BookRecord) -> Result<()> {
    sqlx::query(
        "INSERT INTO books (guid, title, author, genre, publication_year, description, cover_url) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&book.guid)
    .bind(&book.title)
    .bind(&book.author)
    .bind(&book.genre)
    .bind(book.publication_year)
    .bind(&book.description)
    .bind(&book.cover_url)
    .execute(db)
    .await?;

    Ok(())
}
