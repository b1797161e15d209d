//! Execution seam between the search core and the backing store.
//!
//! The core composes filters and decides when a count is needed; a
//! [`SearchBackend`] is the collaborator that actually reads rows.
//! Both calls are blocking from the core's perspective and are never
//! retried here.

pub mod memory;

pub use memory::{GroupRecord, MemberRecord, MemoryBackend};

use crate::{order::OrderSpec, predicate::Predicate, row::MemberGroupRow};
use thiserror::Error as ThisError;

///
/// BackendError
///
/// Store-side failure, surfaced to the caller unchanged.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BackendError {
    #[error("backend unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("unknown field `{field}`")]
    UnknownField { field: String },
}

///
/// Window
///
/// Fetch window: rows to skip plus an optional row cap. `limit: None`
/// means unbounded, used by the list-style search.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Window {
    pub offset: u64,
    pub limit: Option<u32>,
}

impl Window {
    #[must_use]
    pub const fn new(offset: u64, limit: Option<u32>) -> Self {
        Self { offset, limit }
    }

    /// The whole result set, from the first row.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            offset: 0,
            limit: None,
        }
    }
}

///
/// SearchBackend
///
/// Query-execution capability over the member/group projection.
///
/// Contract for implementors:
/// - `fetch_window` applies filter, then ordering, then the window.
/// - Within one sort key, rows whose key value is absent order after
///   every row with a present value.
/// - `count_matches` counts all filtered rows, ignoring any window.
///

pub trait SearchBackend {
    fn fetch_window(
        &self,
        filter: &Predicate,
        order: &OrderSpec,
        window: Window,
    ) -> Result<Vec<MemberGroupRow>, BackendError>;

    fn count_matches(&self, filter: &Predicate) -> Result<u64, BackendError>;
}
