//! Display policy for aggregated reviews
//!
//! These fallback chains are documented policy, not error suppression: each
//! is bounded, ordered, and exercised by tests. No read ever fails because
//! a display attribute is missing.

use bookrec_common::db::UserRecord;
use bookrec_common::time;

/// Name shown for a review whose owner cannot be resolved at all
pub const ANONYMOUS: &str = "Anonymous";

/// Placeholder shown in place of an empty comment
pub const NO_COMMENT: &str = "No comment provided";

/// Resolve the display name for a review's owner
///
/// Precedence: stored display name, then username, then the user's name,
/// then "Anonymous". An unresolvable owner also renders "Anonymous".
/// Blank values are not usable and fall through to the next candidate.
pub fn display_name(owner: Option<&UserRecord>) -> String {
    let Some(user) = owner else {
        return ANONYMOUS.to_string();
    };

    [&user.display_name, &user.username, &user.name]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(ANONYMOUS)
        .to_string()
}

/// Resolve a display-ready comment: empty text renders the placeholder
pub fn display_comment(comment: &str) -> String {
    let trimmed = comment.trim();
    if trimmed.is_empty() {
        NO_COMMENT.to_string()
    } else {
        comment.to_string()
    }
}

/// Resolve a display timestamp for a review
///
/// The stored creation timestamp when present, otherwise "now" at read
/// time; a missing date never fails the read.
pub fn display_timestamp(created_at: Option<&str>) -> String {
    match created_at {
        Some(ts) if !ts.trim().is_empty() => ts.to_string(),
        _ => time::now_stored(),
    }
}
