//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

/// A strongly-typed wrapper for FAQ IDs.
///
/// Opaque to callers; assigned by the store when an entry is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema), schema(value_type = String, format = Uuid))]
#[serde(transparent)]
pub struct FaqId(pub Uuid);

impl FaqId {
    /// Creates a new time-ordered FAQ ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a FAQ ID from a UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a FAQ ID from a string.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for FaqId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for FaqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for FaqId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<FaqId> for Uuid {
    fn from(id: FaqId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_id_creation() {
        let id1 = FaqId::new();
        let id2 = FaqId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_faq_id_parsing() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = FaqId::parse(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn test_faq_id_rejects_garbage() {
        assert!(FaqId::parse("not-an-id").is_err());
    }
}
