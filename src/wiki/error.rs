use thiserror::Error;
use uuid::Uuid;

use crate::database::manager::DatabaseError;

#[derive(Debug, Error)]
pub enum WikiSearchError {
    /// Blank queries are rejected before any store access
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// A parent-reference cycle or self-reference was hit while walking
    /// ancestors. The parent graph is supposed to be a forest, so this is
    /// a data-integrity violation in the store.
    #[error("Parent-reference cycle detected while walking ancestors of node {node_id}")]
    CorruptHierarchy { node_id: Uuid },

    #[error(transparent)]
    Database(#[from] DatabaseError),
}
