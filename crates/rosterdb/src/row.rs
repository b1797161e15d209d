use crate::{
    predicate::{FieldPresence, Row},
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// columns
///
/// Canonical column names of the member/group projection. Filters and
/// orderings reference columns by these names; backends reject anything
/// else.
///

pub mod columns {
    pub const MEMBER_ID: &str = "member_id";
    pub const MEMBER_NAME: &str = "member_name";
    pub const AGE: &str = "age";
    pub const GROUP_ID: &str = "group_id";
    pub const GROUP_NAME: &str = "group_name";

    pub const ALL: [&str; 5] = [MEMBER_ID, MEMBER_NAME, AGE, GROUP_ID, GROUP_NAME];
}

///
/// MemberGroupRow
///
/// Read-only flattened projection combining a member with its to-one
/// group. Produced per query, never persisted; a member without a group
/// carries absent group columns.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MemberGroupRow {
    pub member_id: u64,
    pub member_name: Option<String>,
    pub age: u32,
    pub group_id: Option<u64>,
    pub group_name: Option<String>,
}

impl Row for MemberGroupRow {
    fn field(&self, name: &str) -> FieldPresence {
        let value = match name {
            columns::MEMBER_ID => Some(Value::Uint(self.member_id)),
            columns::MEMBER_NAME => self.member_name.clone().map(Value::Text),
            columns::AGE => Some(Value::Uint(u64::from(self.age))),
            columns::GROUP_ID => self.group_id.map(Value::Uint),
            columns::GROUP_NAME => self.group_name.clone().map(Value::Text),
            _ => None,
        };

        match value {
            Some(value) => FieldPresence::Present(value),
            None => FieldPresence::Missing,
        }
    }
}
