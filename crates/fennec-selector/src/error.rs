//! Selector builder errors.

use thiserror::Error;

use crate::kind::FragmentKind;

/// Why a fragment could not be appended, or a snapshot could not be restored.
#[derive(Debug, Error)]
pub enum SelectorError {
    /// A kind limited to one occurrence (element, id, pseudo-element) was
    /// appended a second time.
    #[error("duplicate {kind}: a compound selector allows only one")]
    Duplicate {
        /// The repeated kind.
        kind: FragmentKind,
    },

    /// A fragment was appended after a fragment of a later-ranked kind.
    #[error("{kind} cannot follow {after}")]
    Order {
        /// The kind that was rejected.
        kind: FragmentKind,
        /// The kind of the most recent fragment.
        after: FragmentKind,
    },

    /// A JSON snapshot could not be written or parsed.
    #[error("selector snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON snapshot parsed but describes a state no builder can reach.
    #[error("inconsistent selector snapshot: {0}")]
    Snapshot(String),
}
