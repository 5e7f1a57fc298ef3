//! Store error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::id::ItemId;

/// Result type returned by every keyed store operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Keep this to the three deterministic failure modes of a keyed store. None of
/// them is transient, so callers never retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insertion attempted with an id that is already tracked.
    #[error("item with id {id} already exists")]
    DuplicateKey { id: ItemId },

    /// Lookup, removal or update referenced an id that is not tracked.
    #[error("item with id {id} not found")]
    NotFound { id: ItemId },

    /// A proposed quantity is negative or does not fit a stock level.
    #[error("invalid quantity {quantity}: must be between 0 and {}", u32::MAX)]
    InvalidQuantity { quantity: i64 },
}

/// Fieldless discriminant of [`StoreError`], for branching without matching on
/// payloads or message text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreErrorKind {
    DuplicateKey,
    NotFound,
    InvalidQuantity,
}

impl StoreErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreErrorKind::DuplicateKey => "duplicate_key",
            StoreErrorKind::NotFound => "not_found",
            StoreErrorKind::InvalidQuantity => "invalid_quantity",
        }
    }
}

impl core::fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StoreError {
    pub fn duplicate_key(id: ItemId) -> Self {
        Self::DuplicateKey { id }
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound { id }
    }

    pub fn invalid_quantity(quantity: i64) -> Self {
        Self::InvalidQuantity { quantity }
    }

    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::DuplicateKey { .. } => StoreErrorKind::DuplicateKey,
            StoreError::NotFound { .. } => StoreErrorKind::NotFound,
            StoreError::InvalidQuantity { .. } => StoreErrorKind::InvalidQuantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let id = ItemId::new(7);
        assert_eq!(StoreError::duplicate_key(id).kind(), StoreErrorKind::DuplicateKey);
        assert_eq!(StoreError::not_found(id).kind(), StoreErrorKind::NotFound);
        assert_eq!(
            StoreError::invalid_quantity(-1).kind(),
            StoreErrorKind::InvalidQuantity
        );
    }

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            StoreError::not_found(ItemId::new(99)).to_string(),
            "item with id 99 not found"
        );
        assert_eq!(
            StoreError::duplicate_key(ItemId::new(1)).to_string(),
            "item with id 1 already exists"
        );
        assert!(StoreError::invalid_quantity(-5)
            .to_string()
            .starts_with("invalid quantity -5"));
    }

    #[test]
    fn kind_labels_are_snake_case() {
        assert_eq!(StoreErrorKind::InvalidQuantity.to_string(), "invalid_quantity");
        assert_eq!(StoreErrorKind::NotFound.as_str(), "not_found");
    }

    #[test]
    fn kind_serializes_as_its_label() {
        for kind in [
            StoreErrorKind::DuplicateKey,
            StoreErrorKind::NotFound,
            StoreErrorKind::InvalidQuantity,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(serde_json::from_str::<StoreErrorKind>(&json).unwrap(), kind);
        }
    }
}
