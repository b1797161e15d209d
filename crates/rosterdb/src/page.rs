use crate::row::MemberGroupRow;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};

///
/// PageRequest
///
/// One page window: rows to skip plus the maximum rows to return.
/// A zero limit is rejected by the executor before any backend call.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u32,
}

impl PageRequest {
    #[must_use]
    pub const fn new(offset: u64, limit: u32) -> Self {
        Self { offset, limit }
    }
}

///
/// CountPolicy
///
/// Caller-selected strategy for producing the total-match count of a
/// paged search.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountPolicy {
    /// Always issue the count query; the total is exact unconditionally.
    Always,

    /// Skip the count query when the fetched page is shorter than the
    /// requested limit: a short page proves it is the last one and the
    /// total is `offset + returned rows`. When the offset overshoots the
    /// data set this inferred total equals the offset, which can exceed
    /// the true count; callers that need an exact total on overshooting
    /// requests use [`CountPolicy::Always`].
    SkipOnLastPage,
}

///
/// RowSet
///
/// Ordered projected rows, as returned by one query. Serializes
/// identically to `Vec<MemberGroupRow>`. Read-only; no `DerefMut`.
///

#[repr(transparent)]
#[derive(
    Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
#[serde(transparent)]
pub struct RowSet(Vec<MemberGroupRow>);

impl RowSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub const fn from_vec(rows: Vec<MemberGroupRow>) -> Self {
        Self(rows)
    }

    /// Number of rows in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no rows were returned.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MemberGroupRow> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<MemberGroupRow> {
        self.0
    }
}

impl From<Vec<MemberGroupRow>> for RowSet {
    fn from(rows: Vec<MemberGroupRow>) -> Self {
        Self(rows)
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a MemberGroupRow;
    type IntoIter = std::slice::Iter<'a, MemberGroupRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

///
/// PageResult
///
/// One page of projected rows plus the total-match count across the
/// whole data set. Constructed once per query, immutable afterwards.
/// Whether `total` is exact or inferred is decided by the
/// [`CountPolicy`] the caller selected.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub rows: RowSet,
    pub total: u64,
}

impl PageResult {
    #[must_use]
    pub const fn new(rows: RowSet, total: u64) -> Self {
        Self { rows, total }
    }

    /// Rows returned in this window, not the total match count.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
