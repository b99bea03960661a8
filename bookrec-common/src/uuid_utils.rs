//! UUID utilities

use crate::{Entity, Error};
use uuid::Uuid;

/// Generate a new UUIDv4
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Parse an entity identifier, failing fast before any store access
///
/// A malformed identifier yields `InvalidIdentifier` naming the entity the
/// caller was trying to address.
pub fn parse_id(s: &str, entity: Entity) -> Result<Uuid, Error> {
    Uuid::parse_str(s).map_err(|_| Error::InvalidIdentifier(entity))
}
