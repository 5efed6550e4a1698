//! Error types for model editing
//!
//! The generators themselves are total and never fail; errors only arise
//! from edit operations that address an entity by a stale id.

use thiserror::Error;

use super::model::EntityId;

/// Errors returned by `Project` edit operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown class id: {id}")]
    UnknownClass { id: EntityId },

    #[error("unknown field id: {id}")]
    UnknownField { id: EntityId },

    #[error("unknown method id: {id}")]
    UnknownMethod { id: EntityId },

    #[error("unknown parameter id: {id}")]
    UnknownParam { id: EntityId },

    #[error("unknown relationship id: {id}")]
    UnknownRelationship { id: EntityId },
}

impl ModelError {
    pub fn unknown_class(id: impl Into<EntityId>) -> Self {
        Self::UnknownClass { id: id.into() }
    }

    pub fn unknown_field(id: impl Into<EntityId>) -> Self {
        Self::UnknownField { id: id.into() }
    }

    pub fn unknown_method(id: impl Into<EntityId>) -> Self {
        Self::UnknownMethod { id: id.into() }
    }

    pub fn unknown_param(id: impl Into<EntityId>) -> Self {
        Self::UnknownParam { id: id.into() }
    }

    pub fn unknown_relationship(id: impl Into<EntityId>) -> Self {
        Self::UnknownRelationship { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_id() {
        let err = ModelError::unknown_class("e42");
        assert_eq!(err.to_string(), "unknown class id: e42");

        let err = ModelError::unknown_relationship("r7");
        assert!(err.to_string().contains("r7"));
    }
}
