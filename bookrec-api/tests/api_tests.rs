//! Integration tests for bookrec-api endpoints
//!
//! Each test builds the router over a fresh tempfile-backed database, seeds
//! what it needs through the store layer or the auth endpoints, and drives
//! requests with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use bookrec_api::{build_router, service, store, AppState};
use bookrec_common::db::{init_database, BookRecord, ReviewRecord, UserRecord};
use bookrec_common::{auth, time, uuid_utils, Entity, Error};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: fresh database in a tempdir (guard keeps the dir alive)
async fn setup_test_db() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("Should create tempdir");
    let pool = init_database(&dir.path().join("bookrec.db"))
        .await
        .expect("Should initialize test database");
    (dir, pool)
}

fn setup_app(db: SqlitePool) -> axum::Router {
    build_router(AppState::new(db))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Seed a user directly through the store layer
async fn seed_user(db: &SqlitePool, name: Option<&str>, email: &str, password: &str) -> String {
    let user = UserRecord {
        guid: uuid_utils::generate().to_string(),
        name: name.map(String::from),
        display_name: None,
        username: None,
        email: email.to_string(),
        password: auth::hash_password(password),
        created_at: time::now_stored(),
    };
    store::users::insert(db, &user).await.unwrap();
    user.guid
}

async fn seed_book(db: &SqlitePool, title: &str, author: &str, genres: &[&str]) -> String {
    let tags: Vec<String> = genres.iter().map(|g| g.to_string()).collect();
    let book = BookRecord {
        guid: uuid_utils::generate().to_string(),
        title: title.to_string(),
        author: Some(author.to_string()),
        genre: BookRecord::encode_genre(&tags),
        publication_year: Some(1949),
        description: None,
        cover_url: None,
    };
    store::books::insert(db, &book).await.unwrap();
    book.guid
}

async fn seed_review(db: &SqlitePool, user_id: &str, book_id: &str, rating: i64) -> String {
    let review = ReviewRecord {
        guid: uuid_utils::generate().to_string(),
        user_id: user_id.to_string(),
        book_id: book_id.to_string(),
        rating,
        comment: String::new(),
        created_at: Some(time::now_stored()),
    };
    store::reviews::insert(db, &review).await.unwrap();
    review.guid
}

/// Log in through the API and return the session token
async fn login(app: &axum::Router, email: &str, password: &str) -> String {
    let request = post_json(
        "/api/auth/login",
        &json!({ "email": email, "password": password }),
        None,
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    body["token"].as_str().unwrap().to_string()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, db) = setup_test_db().await;
    let app = setup_app(db);

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "bookrec.db");
}

// =============================================================================
// Registration and login
// =============================================================================

#[tokio::test]
async fn test_register_then_login() {
    let (_dir, db) = setup_test_db().await;
    let app = setup_app(db);

    let request = post_json(
        "/api/auth/register",
        &json!({ "name": "Ann", "email": "ann@example.com", "password": "sekrit" }),
        None,
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["message"], "User registered successfully");
    let user_id = body["user_id"].as_str().unwrap().to_string();

    let request = post_json(
        "/api/auth/login",
        &json!({ "email": "ann@example.com", "password": "sekrit" }),
        None,
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["user_id"], user_id.as_str());
    assert_eq!(body["name"], "Ann");
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn test_register_duplicate_email_conflict() {
    let (_dir, db) = setup_test_db().await;
    let app = setup_app(db);

    let payload = json!({ "name": "Ann", "email": "ann@example.com", "password": "pw" });
    let response = app
        .clone()
        .oneshot(post_json("/api/auth/register", &payload, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(post_json("/api/auth/register", &payload, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_register_missing_field() {
    let (_dir, db) = setup_test_db().await;
    let app = setup_app(db);

    let request = post_json(
        "/api/auth/register",
        &json!({ "email": "ann@example.com", "password": "pw" }),
        None,
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let (_dir, db) = setup_test_db().await;
    seed_user(&db, Some("Ann"), "ann@example.com", "right").await;
    let app = setup_app(db);

    let request = post_json(
        "/api/auth/login",
        &json!({ "email": "ann@example.com", "password": "wrong" }),
        None,
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_blank_username_falls_back_to_email() {
    let (_dir, db) = setup_test_db().await;
    seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let app = setup_app(db);

    let request = post_json(
        "/api/auth/login",
        &json!({ "username": "", "email": "ann@example.com", "password": "pw" }),
        None,
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["token"].is_string());
}

// =============================================================================
// Review submission validation
// =============================================================================

#[tokio::test]
async fn test_submit_review_requires_identity() {
    let (_dir, db) = setup_test_db().await;
    let book_id = seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;
    let app = setup_app(db);

    // No token at all
    let request = post_json(
        "/api/reviews",
        &json!({ "book_id": book_id, "rating": 5, "comment": "great" }),
        None,
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Unknown token is just as unauthenticated
    let request = post_json(
        "/api/reviews",
        &json!({ "book_id": book_id, "rating": 5, "comment": "great" }),
        Some("not-a-session"),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Authentication required");
}

#[tokio::test]
async fn test_submit_review_rating_cases_distinct() {
    let (_dir, db) = setup_test_db().await;
    seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let book_id = seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;
    let app = setup_app(db.clone());
    let token = login(&app, "ann@example.com", "pw").await;

    // Missing rating
    let request = post_json("/api/reviews", &json!({ "book_id": book_id }), Some(&token));
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let missing_msg = extract_json(response.into_body()).await["error"]
        .as_str()
        .unwrap()
        .to_string();

    // Zero rating is also "missing", not "invalid"
    let request = post_json(
        "/api/reviews",
        &json!({ "book_id": book_id, "rating": 0 }),
        Some(&token),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let zero_msg = extract_json(response.into_body()).await["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(missing_msg, zero_msg);

    // Out-of-range ratings get the range message
    for rating in [-1_i64, 6] {
        let request = post_json(
            "/api/reviews",
            &json!({ "book_id": book_id, "rating": rating }),
            Some(&token),
        );
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = extract_json(response.into_body()).await;
        let invalid_msg = body["error"].as_str().unwrap();
        assert!(invalid_msg.contains("between 1 and 5"));
        assert_ne!(invalid_msg, missing_msg);
    }

    // Nothing was written
    assert_eq!(store::reviews::count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_submit_review_unknown_book_not_found() {
    let (_dir, db) = setup_test_db().await;
    seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let app = setup_app(db.clone());
    let token = login(&app, "ann@example.com", "pw").await;

    let phantom = uuid_utils::generate().to_string();
    let request = post_json(
        "/api/reviews",
        &json!({ "book_id": phantom, "rating": 4, "comment": "" }),
        Some(&token),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Book not found");
    assert_eq!(store::reviews::count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_submit_review_unknown_user_not_found() {
    // Sessions guarantee a real user over HTTP, so the phantom-user branch
    // is exercised at the service layer.
    let (_dir, db) = setup_test_db().await;
    let book_id = seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;

    let phantom = uuid_utils::generate().to_string();
    let result =
        service::submission::submit_review(&db, &phantom, &book_id, Some(4), "fine").await;
    assert!(matches!(result, Err(Error::NotFound(Entity::User))));
    assert_eq!(store::reviews::count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_submit_review_malformed_book_id() {
    let (_dir, db) = setup_test_db().await;
    seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let app = setup_app(db.clone());
    let token = login(&app, "ann@example.com", "pw").await;

    let request = post_json(
        "/api/reviews",
        &json!({ "book_id": "definitely-not-a-uuid", "rating": 4 }),
        Some(&token),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Invalid book ID format");
    assert_eq!(store::reviews::count(&db).await.unwrap(), 0);
}

// =============================================================================
// Read-your-writes and aggregation
// =============================================================================

#[tokio::test]
async fn test_read_your_writes() {
    let (_dir, db) = setup_test_db().await;
    let user_id = seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let other = seed_user(&db, Some("Bob"), "bob@example.com", "pw").await;
    let book_id = seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;
    seed_review(&db, &other, &book_id, 3).await;
    let app = setup_app(db);
    let token = login(&app, "ann@example.com", "pw").await;

    let request = post_json(
        "/api/reviews",
        &json!({ "book_id": book_id, "rating": 5, "comment": "great" }),
        Some(&token),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // The 201 body already carries the refreshed aggregate
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["message"], "Review submitted successfully");
    assert_eq!(body["book"]["review_count"], 2);

    // The very next read includes the new review, ordered last
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/books/{}", book_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    let last = &reviews[1];
    assert_eq!(last["rating"], 5);
    assert_eq!(last["comment"], "great");
    assert_eq!(last["user_name"], "Ann");
    assert_eq!(last["user_id"], user_id.as_str());
    assert_eq!(body["avg_rating"], 4.0);
}

#[tokio::test]
async fn test_aggregation_ordering_idempotent() {
    let (_dir, db) = setup_test_db().await;
    let user_id = seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let book_id = seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;
    for rating in [2, 3, 4, 5] {
        seed_review(&db, &user_id, &book_id, rating).await;
    }
    let app = setup_app(db);

    let first = extract_json(
        app.clone()
            .oneshot(get_request(&format!("/api/books/{}", book_id)))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let second = extract_json(
        app.clone()
            .oneshot(get_request(&format!("/api/books/{}", book_id)))
            .await
            .unwrap()
            .into_body(),
    )
    .await;

    assert_eq!(first["reviews"], second["reviews"]);

    // Oldest first: ratings appear in insertion order
    let ratings: Vec<i64> = first["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["rating"].as_i64().unwrap())
        .collect();
    assert_eq!(ratings, vec![2, 3, 4, 5]);
}

#[tokio::test]
async fn test_same_timestamp_reviews_keep_submission_order() {
    let (_dir, db) = setup_test_db().await;
    let user_id = seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let book_id = seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;

    // All three share one creation timestamp; only insertion order can
    // distinguish them.
    let stamp = time::now_stored();
    for rating in [4_i64, 2, 5] {
        let review = ReviewRecord {
            guid: uuid_utils::generate().to_string(),
            user_id: user_id.clone(),
            book_id: book_id.clone(),
            rating,
            comment: String::new(),
            created_at: Some(stamp.clone()),
        };
        store::reviews::insert(&db, &review).await.unwrap();
    }
    let app = setup_app(db);

    let body = extract_json(
        app.oneshot(get_request(&format!("/api/books/{}", book_id)))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let ratings: Vec<i64> = body["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["rating"].as_i64().unwrap())
        .collect();
    assert_eq!(ratings, vec![4, 2, 5]);
}

#[tokio::test]
async fn test_get_book_malformed_and_unknown_ids() {
    let (_dir, db) = setup_test_db().await;
    let app = setup_app(db);

    let response = app
        .clone()
        .oneshot(get_request("/api/books/not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let phantom = uuid_utils::generate().to_string();
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/books/{}", phantom)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_end_to_end_empty_comment_placeholder() {
    // Seed one book and one user, submit a rating-4 review with an empty
    // comment, and check the aggregated display output.
    let (_dir, db) = setup_test_db().await;
    seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let book_id = seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;
    let app = setup_app(db);
    let token = login(&app, "ann@example.com", "pw").await;

    let request = post_json(
        "/api/reviews",
        &json!({ "book_id": book_id, "rating": 4, "comment": "" }),
        Some(&token),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["review"]["rating"], 4);
    assert_eq!(body["review"]["comment"], "");

    let body = extract_json(
        app.clone()
            .oneshot(get_request(&format!("/api/books/{}", book_id)))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["comment"], "No comment provided");
    assert_eq!(reviews[0]["user_name"], "Ann");
}

#[tokio::test]
async fn test_display_name_anonymous_when_all_fields_blank() {
    let (_dir, db) = setup_test_db().await;
    let user_id = seed_user(&db, None, "ghost@example.com", "pw").await;
    let book_id = seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;
    seed_review(&db, &user_id, &book_id, 3).await;
    let app = setup_app(db);

    let body = extract_json(
        app.oneshot(get_request(&format!("/api/books/{}", book_id)))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(body["reviews"][0]["user_name"], "Anonymous");
}

// =============================================================================
// Catalog listing and search
// =============================================================================

#[tokio::test]
async fn test_book_listing_and_search() {
    let (_dir, db) = setup_test_db().await;
    seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;
    seed_book(&db, "Animal Farm", "George Orwell", &["Satire"]).await;
    seed_book(&db, "Dune", "Frank Herbert", &["Science Fiction"]).await;
    let app = setup_app(db);

    let body = extract_json(
        app.clone()
            .oneshot(get_request("/api/books"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    // Case-insensitive author search
    let body = extract_json(
        app.clone()
            .oneshot(get_request("/api/books?search=orwell"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Genre filter matches a tag of the stored array
    let body = extract_json(
        app.clone()
            .oneshot(get_request("/api/books?genre=Dystopian"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let books = body.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "1984");
}

// =============================================================================
// User profile and user reviews
// =============================================================================

#[tokio::test]
async fn test_user_profile_excludes_password() {
    let (_dir, db) = setup_test_db().await;
    let user_id = seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let app = setup_app(db);

    let response = app
        .oneshot(get_request(&format!("/api/users/{}", user_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["name"], "Ann");
    assert_eq!(body["email"], "ann@example.com");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_user_reviews_with_book_summary() {
    let (_dir, db) = setup_test_db().await;
    let user_id = seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let book_id = seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;
    seed_review(&db, &user_id, &book_id, 5).await;
    let app = setup_app(db);

    let response = app
        .oneshot(get_request(&format!("/api/users/{}/reviews", user_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["rating"], 5);
    assert_eq!(entries[0]["book"]["title"], "1984");
    assert_eq!(entries[0]["book"]["author"], "George Orwell");
}

#[tokio::test]
async fn test_user_reviews_unknown_user_not_found() {
    let (_dir, db) = setup_test_db().await;
    let app = setup_app(db);

    let phantom = uuid_utils::generate().to_string();
    let response = app
        .oneshot(get_request(&format!("/api/users/{}/reviews", phantom)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "User not found");
}

// =============================================================================
// Recommendations
// =============================================================================

#[tokio::test]
async fn test_recommendations_from_liked_genres() {
    let (_dir, db) = setup_test_db().await;
    let user_id = seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let liked = seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;
    seed_book(&db, "Brave New World", "Aldous Huxley", &["Dystopian"]).await;
    seed_book(&db, "Emma", "Jane Austen", &["Romance"]).await;
    seed_review(&db, &user_id, &liked, 5).await;
    let app = setup_app(db);

    let body = extract_json(
        app.oneshot(get_request(&format!("/api/recommendations/user/{}", user_id)))
            .await
            .unwrap()
            .into_body(),
    )
    .await;

    let recs = body.as_array().unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["title"], "Brave New World");
}

#[tokio::test]
async fn test_recommendations_empty_without_liked_reviews() {
    let (_dir, db) = setup_test_db().await;
    let user_id = seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let book_id = seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;
    // Only a low rating: nothing counts toward preference
    seed_review(&db, &user_id, &book_id, 2).await;
    let app = setup_app(db);

    let body = extract_json(
        app.oneshot(get_request(&format!("/api/recommendations/user/{}", user_id)))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn test_logout_invalidates_session() {
    let (_dir, db) = setup_test_db().await;
    seed_user(&db, Some("Ann"), "ann@example.com", "pw").await;
    let book_id = seed_book(&db, "1984", "George Orwell", &["Dystopian"]).await;
    let app = setup_app(db);
    let token = login(&app, "ann@example.com", "pw").await;

    let response = app
        .clone()
        .oneshot(post_json("/api/auth/logout", &json!({}), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The token no longer establishes identity
    let request = post_json(
        "/api/reviews",
        &json!({ "book_id": book_id, "rating": 5 }),
        Some(&token),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
