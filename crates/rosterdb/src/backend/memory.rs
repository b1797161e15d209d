use crate::{
    backend::{BackendError, SearchBackend, Window},
    order::{OrderDirection, OrderSpec},
    predicate::{FieldPresence, Predicate, Row, eval},
    row::{MemberGroupRow, columns},
    value::{Value, strict_order_cmp},
};
use std::{cmp::Ordering, collections::BTreeMap};

///
/// GroupRecord
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupRecord {
    pub id: u64,
    pub name: String,
}

///
/// MemberRecord
///
/// Source-table shape of one member. `group_id` is a to-one reference
/// into the group table; dangling references project as groupless.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberRecord {
    pub id: u64,
    pub name: Option<String>,
    pub age: u32,
    pub group_id: Option<u64>,
}

///
/// MemoryBackend
///
/// In-process reference backend over member and group tables. Projection
/// joins each member with its group, filtering and ordering run over the
/// flattened rows. Insertion order is the unordered baseline.
///

#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    members: Vec<MemberRecord>,
    groups: BTreeMap<u64, GroupRecord>,
}

impl MemoryBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
            groups: BTreeMap::new(),
        }
    }

    pub fn insert_group(&mut self, group: GroupRecord) {
        self.groups.insert(group.id, group);
    }

    pub fn insert_member(&mut self, member: MemberRecord) {
        self.members.push(member);
    }

    /// Flatten every member with its to-one group.
    fn project(&self) -> Vec<MemberGroupRow> {
        self.members
            .iter()
            .map(|member| {
                let group = member.group_id.and_then(|id| self.groups.get(&id));

                MemberGroupRow {
                    member_id: member.id,
                    member_name: member.name.clone(),
                    age: member.age,
                    group_id: group.map(|g| g.id),
                    group_name: group.map(|g| g.name.clone()),
                }
            })
            .collect()
    }

    fn matching(&self, filter: &Predicate) -> Result<Vec<MemberGroupRow>, BackendError> {
        validate_fields(filter.fields())?;

        Ok(self
            .project()
            .into_iter()
            .filter(|row| eval(filter, row))
            .collect())
    }
}

impl SearchBackend for MemoryBackend {
    fn fetch_window(
        &self,
        filter: &Predicate,
        order: &OrderSpec,
        window: Window,
    ) -> Result<Vec<MemberGroupRow>, BackendError> {
        validate_fields(order.field_names())?;

        let mut rows = self.matching(filter)?;
        sort_rows(&mut rows, order);

        let offset = usize::try_from(window.offset).unwrap_or(usize::MAX);
        let limit = window.limit.map_or(usize::MAX, |limit| limit as usize);

        Ok(rows.into_iter().skip(offset).take(limit).collect())
    }

    fn count_matches(&self, filter: &Predicate) -> Result<u64, BackendError> {
        Ok(self.matching(filter)?.len() as u64)
    }
}

fn validate_fields<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<(), BackendError> {
    for name in names {
        if !columns::ALL.contains(&name) {
            return Err(BackendError::UnknownField {
                field: name.to_string(),
            });
        }
    }

    Ok(())
}

/// Stable multi-key sort. Absent key values order after present ones in
/// both directions; direction only reverses present-to-present pairs.
fn sort_rows(rows: &mut [MemberGroupRow], order: &OrderSpec) {
    rows.sort_by(|a, b| {
        for key in order.keys() {
            let ordering = cmp_by_key(a, b, &key.field, key.direction);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    });
}

fn cmp_by_key(
    a: &MemberGroupRow,
    b: &MemberGroupRow,
    field: &str,
    direction: OrderDirection,
) -> Ordering {
    let left = present_value(a, field);
    let right = present_value(b, field);

    match (left, right) {
        (Some(left), Some(right)) => {
            let ordering = strict_order_cmp(&left, &right).unwrap_or(Ordering::Equal);

            match direction {
                OrderDirection::Asc => ordering,
                OrderDirection::Desc => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn present_value(row: &MemberGroupRow, field: &str) -> Option<Value> {
    match row.field(field) {
        FieldPresence::Present(value) => Some(value),
        FieldPresence::Missing => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{predicate::ComparePredicate, test_fixtures};

    #[test]
    fn projection_joins_to_one_group() {
        let backend = test_fixtures::roster();
        let rows = backend
            .fetch_window(&Predicate::True, &OrderSpec::canonical(), Window::unbounded())
            .unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].member_name.as_deref(), Some("member1"));
        assert_eq!(rows[0].group_name.as_deref(), Some("alpha"));
        assert_eq!(rows[3].group_name.as_deref(), Some("bravo"));
    }

    #[test]
    fn groupless_member_projects_absent_group_columns() {
        let backend = test_fixtures::roster_with_unnamed();
        let rows = backend
            .fetch_window(&Predicate::True, &OrderSpec::canonical(), Window::unbounded())
            .unwrap();

        let loner = rows.iter().find(|row| row.member_id == 5).unwrap();
        assert_eq!(loner.member_name, None);
        assert_eq!(loner.group_id, None);
        assert_eq!(loner.group_name, None);
    }

    #[test]
    fn filter_runs_over_joined_columns() {
        let backend = test_fixtures::roster();
        let filter = Predicate::Compare(ComparePredicate::eq(columns::GROUP_NAME, "bravo"));

        let rows = backend
            .fetch_window(&filter, &OrderSpec::canonical(), Window::unbounded())
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.group_name.as_deref() == Some("bravo")));
        assert_eq!(backend.count_matches(&filter).unwrap(), 2);
    }

    #[test]
    fn unknown_filter_field_is_rejected() {
        let backend = test_fixtures::roster();
        let filter = Predicate::Compare(ComparePredicate::eq("salary", 1u64));

        let err = backend
            .fetch_window(&filter, &OrderSpec::canonical(), Window::unbounded())
            .unwrap_err();

        assert_eq!(
            err,
            BackendError::UnknownField {
                field: "salary".to_string()
            }
        );
        assert!(backend.count_matches(&filter).is_err());
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let backend = test_fixtures::roster();
        let order = OrderSpec::new().asc("salary");

        let err = backend
            .fetch_window(&Predicate::True, &order, Window::unbounded())
            .unwrap_err();

        assert_eq!(
            err,
            BackendError::UnknownField {
                field: "salary".to_string()
            }
        );
    }

    #[test]
    fn window_skips_and_caps() {
        let backend = test_fixtures::roster();
        let order = OrderSpec::canonical();

        let rows = backend
            .fetch_window(&Predicate::True, &order, Window::new(1, Some(2)))
            .unwrap();

        let ids: Vec<u64> = rows.iter().map(|row| row.member_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn window_past_the_end_is_empty() {
        let backend = test_fixtures::roster();

        let rows = backend
            .fetch_window(&Predicate::True, &OrderSpec::canonical(), Window::new(10, Some(3)))
            .unwrap();

        assert!(rows.is_empty());
    }

    #[test]
    fn absent_sort_values_order_last_in_both_directions() {
        let backend = test_fixtures::roster_with_unnamed();

        let asc = backend
            .fetch_window(
                &Predicate::True,
                &OrderSpec::new().asc(columns::MEMBER_NAME),
                Window::unbounded(),
            )
            .unwrap();
        assert_eq!(asc.last().unwrap().member_id, 5);

        let desc = backend
            .fetch_window(
                &Predicate::True,
                &OrderSpec::new().desc(columns::MEMBER_NAME),
                Window::unbounded(),
            )
            .unwrap();
        assert_eq!(desc.last().unwrap().member_id, 5);
        assert_eq!(desc[0].member_name.as_deref(), Some("member4"));
    }

    #[test]
    fn multi_key_sort_is_stable() {
        let mut backend = test_fixtures::roster();
        // Same age as member2; insertion order breaks the tie.
        backend.insert_member(MemberRecord {
            id: 6,
            name: Some("member6".to_string()),
            age: 20,
            group_id: None,
        });

        let rows = backend
            .fetch_window(
                &Predicate::True,
                &OrderSpec::new().asc(columns::AGE),
                Window::unbounded(),
            )
            .unwrap();

        let ids: Vec<u64> = rows.iter().map(|row| row.member_id).collect();
        assert_eq!(ids, vec![1, 2, 6, 3, 4]);
    }
}
