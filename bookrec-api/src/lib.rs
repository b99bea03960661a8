//! bookrec-api library - REST API over the book/review store
//!
//! The router exposes the catalog, review submission, aggregation, auth,
//! and recommendation endpoints consumed by the single-page front end.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod service;
pub mod store;

/// Application state shared across HTTP handlers
///
/// The pool is the sole shared mutable resource; handlers hold no other
/// cross-request state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/health", get(api::health_check))
        .route("/api/auth/register", post(api::register))
        .route("/api/auth/login", post(api::login))
        .route("/api/auth/logout", post(api::logout))
        .route("/api/users/:user_id", get(api::get_user))
        .route("/api/users/:user_id/reviews", get(api::get_user_reviews))
        .route("/api/books", get(api::get_books))
        .route("/api/books/:book_id", get(api::get_book))
        .route("/api/books/:book_id/reviews", get(api::get_book_reviews))
        .route("/api/reviews", post(api::create_review))
        .route(
            "/api/recommendations/user/:user_id",
            get(api::get_user_recommendations),
        )
        // The browser front end is served from a different origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
