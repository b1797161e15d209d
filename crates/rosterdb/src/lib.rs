//! Typed roster search: composes optional member criteria into a single
//! conjunctive predicate and pages projected rows over a pluggable backend,
//! skipping the total-count query whenever the fetched page proves it
//! unnecessary.

pub mod backend;
pub mod criteria;
pub mod error;
pub mod executor;
pub mod order;
pub mod page;
pub mod predicate;
pub mod row;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains the search vocabulary and entry points.
/// Backend implementations and evaluation internals stay out.
///

pub mod prelude {
    pub use crate::{
        criteria::MemberSearchCriteria,
        executor::SearchExecutor,
        order::{OrderDirection, OrderSpec},
        page::{CountPolicy, PageRequest, PageResult, RowSet},
        row::MemberGroupRow,
    };
}
