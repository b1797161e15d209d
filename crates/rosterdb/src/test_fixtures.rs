use crate::{
    backend::{BackendError, GroupRecord, MemberRecord, MemoryBackend, SearchBackend, Window},
    order::OrderSpec,
    predicate::Predicate,
    row::MemberGroupRow,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Standard four-member roster: two groups, ages 10/20/30/40.
pub(crate) fn roster() -> MemoryBackend {
    let mut backend = MemoryBackend::new();

    backend.insert_group(GroupRecord {
        id: 1,
        name: "alpha".to_string(),
    });
    backend.insert_group(GroupRecord {
        id: 2,
        name: "bravo".to_string(),
    });

    for (id, name, age, group_id) in [
        (1, "member1", 10, 1),
        (2, "member2", 20, 1),
        (3, "member3", 30, 2),
        (4, "member4", 40, 2),
    ] {
        backend.insert_member(MemberRecord {
            id,
            name: Some(name.to_string()),
            age,
            group_id: Some(group_id),
        });
    }

    backend
}

/// The standard roster plus one unnamed, groupless member (id 5, age 50).
pub(crate) fn roster_with_unnamed() -> MemoryBackend {
    let mut backend = roster();

    backend.insert_member(MemberRecord {
        id: 5,
        name: None,
        age: 50,
        group_id: None,
    });

    backend
}

///
/// CountingBackend
///
/// Probe wrapper that records how often each backend call was issued.
/// Used to prove the count query was (or was not) sent.
///

pub(crate) struct CountingBackend<B> {
    inner: B,
    fetches: AtomicUsize,
    counts: AtomicUsize,
}

impl<B> CountingBackend<B> {
    pub(crate) const fn new(inner: B) -> Self {
        Self {
            inner,
            fetches: AtomicUsize::new(0),
            counts: AtomicUsize::new(0),
        }
    }

    pub(crate) fn fetches(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    pub(crate) fn counts(&self) -> usize {
        self.counts.load(Ordering::Relaxed)
    }
}

impl<B: SearchBackend> SearchBackend for CountingBackend<B> {
    fn fetch_window(
        &self,
        filter: &Predicate,
        order: &OrderSpec,
        window: Window,
    ) -> Result<Vec<MemberGroupRow>, BackendError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.inner.fetch_window(filter, order, window)
    }

    fn count_matches(&self, filter: &Predicate) -> Result<u64, BackendError> {
        self.counts.fetch_add(1, Ordering::Relaxed);
        self.inner.count_matches(filter)
    }
}

///
/// FailingBackend
///
/// Backend whose every call fails, for propagation tests.
///

pub(crate) struct FailingBackend;

impl FailingBackend {
    pub(crate) fn error() -> BackendError {
        BackendError::Unavailable {
            reason: "store offline".to_string(),
        }
    }
}

impl SearchBackend for FailingBackend {
    fn fetch_window(
        &self,
        _filter: &Predicate,
        _order: &OrderSpec,
        _window: Window,
    ) -> Result<Vec<MemberGroupRow>, BackendError> {
        Err(Self::error())
    }

    fn count_matches(&self, _filter: &Predicate) -> Result<u64, BackendError> {
        Err(Self::error())
    }
}
