//! # BookRec Common Library
//!
//! Shared code for the BookRec backend services including:
//! - Database schema and record models
//! - Error taxonomy shared across services
//! - Password hashing and session token helpers
//! - Configuration and root folder resolution
//! - Utility functions

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod time;
pub mod uuid_utils;

pub use error::{Entity, Error, Result};
