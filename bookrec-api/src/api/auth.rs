//! Registration, login, and logout handlers
//!
//! Identity is carried as an explicit bearer token; nothing here stashes a
//! logged-in user in shared state.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use bookrec_common::db::UserRecord;
use bookrec_common::{auth, time, uuid_utils, Error};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::ApiError;
use crate::store;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login accepts either a username or an email as the identifier
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: String,
    pub name: Option<String>,
    pub email: String,
    pub token: String,
}

/// Extract the bearer token from an Authorization header, if present
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// POST /api/auth/register
///
/// Creates a user with a salted password hash. Email uniqueness is checked
/// before the write for a clean 409; the store's UNIQUE constraint backs it.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let name = required(req.name, "name")?;
    let email = required(req.email, "email")?;
    let password = required(req.password, "password")?;

    if store::users::find_by_email(&state.db, &email).await?.is_some() {
        return Err(Error::DuplicateEmail(email).into());
    }

    let user = UserRecord {
        guid: uuid_utils::generate().to_string(),
        name: Some(name),
        display_name: None,
        username: None,
        email,
        password: auth::hash_password(&password),
        created_at: time::now_stored(),
    };
    store::users::insert(&state.db, &user).await?;

    info!("Registered user {}", user.guid);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id: user.guid,
        }),
    ))
}

/// POST /api/auth/login
///
/// Verifies credentials and opens a session; the response token is what
/// review submission later presents as identity.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let not_blank = |s: &String| !s.trim().is_empty();
    let identifier = req
        .username
        .filter(not_blank)
        .or(req.email.filter(not_blank))
        .ok_or(Error::MissingField("email"))?;
    let password = required(req.password, "password")?;

    // The identifier may be either login key; email is tried first
    let user = match store::users::find_by_email(&state.db, &identifier).await? {
        Some(user) => Some(user),
        None => store::users::find_by_username(&state.db, &identifier).await?,
    };

    let user = user.ok_or(Error::InvalidCredentials)?;
    if !auth::verify_password(&password, &user.password) {
        return Err(Error::InvalidCredentials.into());
    }

    let session = store::sessions::create(&state.db, &user.guid).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user_id: user.guid,
        name: user.name,
        email: user.email,
        token: session.token,
    }))
}

/// POST /api/auth/logout
///
/// Deletes the presented session. Logging out without a session succeeds;
/// there is nothing to tear down.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    if let Some(token) = bearer_token(&headers) {
        store::sessions::delete(&state.db, token).await?;
    }

    Ok(Json(serde_json::json!({ "message": "Logout successful" })))
}

fn required(field: Option<String>, name: &'static str) -> Result<String, ApiError> {
    field
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| Error::MissingField(name).into())
}
