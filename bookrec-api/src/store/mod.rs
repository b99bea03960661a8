//! Store access layer
//!
//! Three independent collections (users, books, reviews) plus sessions.
//! Reviews carry foreign keys into users and books; no back-pointers are
//! embedded in either.

pub mod books;
pub mod reviews;
pub mod sessions;
pub mod users;
