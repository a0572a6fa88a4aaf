//! Engine error type.

use cms_storage::StorageError;

/// Error returned by menu computation and resolution.
///
/// "Nothing matched" is never an error: it is
/// [`Resolution::NotFound`](crate::Resolution::NotFound). Only
/// infrastructure failures and corrupt menu data end up here.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// A collaborator lookup failed.
    #[error("Lookup failed: {0}")]
    Lookup(#[from] StorageError),
    /// The parent chain of an entry loops back on itself.
    #[error("Menu entry {entry_id} is part of a parent cycle")]
    Cycle {
        /// Entry at which the loop was detected.
        entry_id: String,
    },
}
