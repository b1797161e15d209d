use crate::backend::BackendError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level search error. Backend failures pass through unchanged; the
/// executor adds no retry, backoff, or partial-result suppression.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Rejected eagerly, before any backend call. A zero limit cannot
    /// describe a page; offsets are unsigned by construction. Values are
    /// never silently clamped.
    #[error("invalid page request: limit must be positive (offset {offset}, limit {limit})")]
    InvalidPageRequest { offset: u64, limit: u32 },
}
