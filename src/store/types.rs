//! Record Types
//!
//! Defines the persisted todo record, the inputs the store accepts for
//! creation and partial updates, and the store's error taxonomy.
//!
//! These structures are serialized as JSON both on the wire and in the
//! storage file, so the record shape doubles as the on-disk schema.

use serde::{Deserialize, Serialize};

/// A single todo item as persisted in the storage file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by the store on creation.
    pub id: u64,
    /// Free-form text, the only required field.
    pub title: String,
    /// Completion flag, defaults to false on creation.
    pub completed: bool,
}

/// Fields accepted when creating a record.
///
/// The store assigns the `id`; a missing `completed` flag defaults to false.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub completed: Option<bool>,
}

/// Partial update merged over an existing record.
///
/// The schema is closed: only these two fields can change. Present fields
/// overwrite, absent fields are retained.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Failure modes of the store.
///
/// `NotFound` is a distinct outcome so the HTTP boundary can map it to its
/// own status code instead of a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(u64),
    #[error("failed to write storage file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode storage file: {0}")]
    Encode(#[from] serde_json::Error),
}
