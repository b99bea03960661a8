//! Common error types for BookRec

use thiserror::Error;

/// Common result type for BookRec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Entity kinds referenced by not-found errors
///
/// Not-found errors must name the missing entity so callers can tell a
/// missing book apart from a missing user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Book,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::User => write!(f, "user"),
            Entity::Book => write!(f, "book"),
        }
    }
}

/// Common error types across BookRec services
///
/// Validation and not-found errors are terminal for a request and reported
/// with enough detail to distinguish the rating/identity cases. Store errors
/// are an infrastructure class and safe for the caller to retry.
#[derive(Error, Debug)]
pub enum Error {
    /// Identifier does not parse as a UUID (rejected before any store access)
    #[error("Invalid {0} ID format")]
    InvalidIdentifier(Entity),

    /// Identifier is well-formed but no record exists
    #[error("{} not found", capitalize(.0))]
    NotFound(Entity),

    /// No resolvable caller identity (missing or unknown session token)
    #[error("Authentication required")]
    Unauthenticated,

    /// Login identifier/password pair does not match a stored user
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Rating absent or zero
    #[error("Book ID and rating are required")]
    MissingRating,

    /// Rating present but outside [1,5]
    #[error("Rating must be an integer between 1 and 5")]
    InvalidRating,

    /// Required request field absent or empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Registration attempted with an email that already has an account
    #[error("Email \"{0}\" already exists. Please log in instead.")]
    DuplicateEmail(String),

    /// Data store failure (wraps sqlx::Error); retryable by the caller
    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

fn capitalize(entity: &Entity) -> String {
    let s = entity.to_string();
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => s,
    }
}
