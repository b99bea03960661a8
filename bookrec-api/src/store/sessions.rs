//! Session store backing bearer-token identity lookup
//!
//! The token is threaded explicitly through each request; there is no
//! ambient logged-in-user state anywhere in the services.

use bookrec_common::db::{SessionRecord, UserRecord};
use bookrec_common::{time, uuid_utils, Result};
use sqlx::SqlitePool;

/// Create a session for a user and return its token
pub async fn create(db: &SqlitePool, user_id: &str) -> Result<SessionRecord> {
    let session = SessionRecord {
        token: uuid_utils::generate().to_string(),
        user_id: user_id.to_string(),
        created_at: time::now_stored(),
    };

    sqlx::query("INSERT INTO sessions (token, user_id, created_at) VALUES (?, ?, ?)")
        .bind(&session.token)
        .bind(&session.user_id)
        .bind(&session.created_at)
        .execute(db)
        .await?;

    Ok(session)
}

/// Resolve a session token to its user, if the session exists
pub async fn resolve(db: &SqlitePool, token: &str) -> Result<Option<UserRecord>> {
    let user = sqlx::query_as::<_, UserRecord>(
        "SELECT u.guid, u.name, u.display_name, u.username, u.email, u.password, u.created_at \
         FROM sessions s JOIN users u ON u.guid = s.user_id WHERE s.token = ?",
    )
    .bind(token)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

/// Delete a session; a no-op when the token is unknown
pub async fn delete(db: &SqlitePool, token: &str) -> Result<()> {
    sqlx::query("DELETE FROM sessions WHERE token = ?")
        .bind(token)
        .execute(db)
        .await?;

    Ok(())
}
