//! Search execution: compose criteria, fetch the window, and produce the
//! total-match count, eliding the count round-trip when the page shape
//! already proves it.


use crate::{
    backend::{SearchBackend, Window},
    criteria::MemberSearchCriteria,
    error::Error,
    order::OrderSpec,
    page::{CountPolicy, PageRequest, PageResult, RowSet},
};
use tracing::debug;

///
/// SearchExecutor
///
/// Stateless entry point over one backend. Holds no per-call state and
/// no connection or cursor between requests; a shared reference serves
/// concurrent callers.
///

#[derive(Clone, Debug)]
pub struct SearchExecutor<B> {
    backend: B,
}

impl<B: SearchBackend> SearchExecutor<B> {
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Unpaginated search: every matching row, canonically ordered.
    pub fn search(&self, criteria: &MemberSearchCriteria) -> Result<RowSet, Error> {
        let filter = criteria.to_predicate();

        let rows =
            self.backend
                .fetch_window(&filter, &OrderSpec::canonical(), Window::unbounded())?;

        debug!(rows = rows.len(), "search complete");

        Ok(RowSet::from_vec(rows))
    }

    /// Paged search with a caller-selected counting strategy.
    ///
    /// Rejects `limit == 0` eagerly, before any backend call. Either both
    /// needed backend calls succeed and a complete [`PageResult`] is
    /// returned, or the first failure propagates and nothing partial
    /// escapes.
    ///
    /// Under [`CountPolicy::SkipOnLastPage`], a page shorter than the
    /// limit proves no further rows exist, so the count query is skipped
    /// and the total is `offset + returned rows`. An offset past the end
    /// of the result set therefore reports the offset itself as the
    /// total; see [`CountPolicy`] for the exactness trade-off.
    pub fn search_page(
        &self,
        criteria: &MemberSearchCriteria,
        order: &OrderSpec,
        page: PageRequest,
        policy: CountPolicy,
    ) -> Result<PageResult, Error> {
        if page.limit == 0 {
            return Err(Error::InvalidPageRequest {
                offset: page.offset,
                limit: page.limit,
            });
        }

        let filter = criteria.to_predicate();

        let rows = self.backend.fetch_window(
            &filter,
            order,
            Window::new(page.offset, Some(page.limit)),
        )?;
        let fetched = rows.len() as u64;

        let total = match policy {
            CountPolicy::Always => self.backend.count_matches(&filter)?,
            CountPolicy::SkipOnLastPage => {
                if fetched < u64::from(page.limit) {
                    let total = page.offset + fetched;
                    debug!(total, fetched, "count query elided: page proven last");
                    total
                } else {
                    self.backend.count_matches(&filter)?
                }
            }
        };

        debug!(
            offset = page.offset,
            limit = page.limit,
            fetched,
            total,
            "page complete"
        );

        Ok(PageResult::new(RowSet::from_vec(rows), total))
    }
}
