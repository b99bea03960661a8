//! Core services: book-detail aggregation, review submission, display
//! policy, and genre-based recommendations

pub mod aggregation;
pub mod display;
pub mod recommend;
pub mod submission;
