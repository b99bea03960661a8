//! HTTP API handlers for bookrec-api

pub mod auth;
pub mod books;
pub mod error;
pub mod health;
pub mod recommendations;
pub mod reviews;
pub mod users;

pub use auth::{login, logout, register};
pub use books::{get_book, get_book_reviews, get_books};
pub use error::ApiError;
pub use health::health_check;
pub use recommendations::get_user_recommendations;
pub use reviews::create_review;
pub use users::{get_user, get_user_reviews};
