//! Identity store queries

use bookrec_common::db::UserRecord;
use bookrec_common::Result;
use sqlx::SqlitePool;

const COLUMNS: &str = "guid, name, display_name, username, email, password, created_at";

/// Look up a user by guid
pub async fn find_by_guid(db: &SqlitePool, guid: &str) -> Result<Option<UserRecord>> {
    let user = sqlx::query_as::<_, UserRecord>(&format!(
        "SELECT {} FROM users WHERE guid = ?",
        COLUMNS
    ))
    .bind(guid)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

/// Look up a user by email (the login key)
pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<UserRecord>> {
    let user = sqlx::query_as::<_, UserRecord>(&format!(
        "SELECT {} FROM users WHERE email = ?",
        COLUMNS
    ))
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

/// Look up a user by username (login also accepts one)
pub async fn find_by_username(db: &SqlitePool, username: &str) -> Result<Option<UserRecord>> {
    let user = sqlx::query_as::<_, UserRecord>(&format!(
        "SELECT {} FROM users WHERE username = ?",
        COLUMNS
    ))
    .bind(username)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

/// Insert a new user record
pub async fn insert(db: &SqlitePool, user: &UserRecord) -> Result<()> {
    sqlx::query(
        "INSERT INTO users (guid, name, display_name, username, email, password, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&user.guid)
    .bind(&user.name)
    .bind(&user.display_name)
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password)
    .bind(&user.created_at)
    .execute(db)
    .await?;

    Ok(())
}
