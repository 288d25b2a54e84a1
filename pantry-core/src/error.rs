//! Error types for ingredient resolution and owned-set synchronization.

use std::fmt;
use thiserror::Error;

/// External system a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    /// The read-only ingredient catalog
    Catalog,
    /// The store holding users' owned-ingredient sets
    Persistence,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collaborator::Catalog => write!(f, "Ingredient catalog"),
            Collaborator::Persistence => write!(f, "Persistence layer"),
        }
    }
}

/// Errors surfaced by resolution and synchronization.
///
/// An item that matches nothing is not an error; it is left out of the
/// resolved set.
#[derive(Error, Debug)]
pub enum PantryError {
    #[error("{collaborator} unavailable: {message}")]
    CollaboratorUnavailable {
        collaborator: Collaborator,
        message: String,
    },

    #[error("Transaction failed for user '{user_id}', changes rolled back: {message}")]
    TransactionFailure { user_id: String, message: String },

    #[error("User id cannot be empty")]
    InvalidUserId,
}

impl PantryError {
    pub fn catalog_unavailable(err: impl fmt::Display) -> Self {
        PantryError::CollaboratorUnavailable {
            collaborator: Collaborator::Catalog,
            message: err.to_string(),
        }
    }

    pub fn persistence_unavailable(err: impl fmt::Display) -> Self {
        PantryError::CollaboratorUnavailable {
            collaborator: Collaborator::Persistence,
            message: err.to_string(),
        }
    }

    pub fn transaction_failure(user_id: &str, err: impl fmt::Display) -> Self {
        PantryError::TransactionFailure {
            user_id: user_id.to_string(),
            message: err.to_string(),
        }
    }
}
