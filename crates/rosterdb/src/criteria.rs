use crate::{
    predicate::{ComparePredicate, Predicate},
    row::columns,
};
use serde::{Deserialize, Serialize};

///
/// MemberSearchCriteria
///
/// Immutable set of independently optional filter dimensions. Absence
/// means "no constraint on this dimension", never "match empty/zero";
/// all-absent criteria compose to the universal match-all predicate.
///
/// Cross-field checks are out of scope here: `age_min > age_max`
/// composes successfully and selects the empty set at execution.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberSearchCriteria {
    pub member_name: Option<String>,
    pub group_name: Option<String>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
}

impl MemberSearchCriteria {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            member_name: None,
            group_name: None,
            age_min: None,
            age_max: None,
        }
    }

    #[must_use]
    pub fn member_name(mut self, name: impl Into<String>) -> Self {
        self.member_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn age_min(mut self, age: u32) -> Self {
        self.age_min = Some(age);
        self
    }

    #[must_use]
    pub const fn age_max(mut self, age: u32) -> Self {
        self.age_max = Some(age);
        self
    }

    /// Compose the present dimensions into one conjunctive predicate.
    ///
    /// Pure; never fails. Each dimension contributes at most one atomic
    /// comparison, in declaration order. Extending the criteria means
    /// one new field plus one new push below.
    #[must_use]
    pub fn to_predicate(&self) -> Predicate {
        let mut parts = Vec::new();

        if let Some(name) = &self.member_name {
            parts.push(Predicate::Compare(ComparePredicate::eq(
                columns::MEMBER_NAME,
                name.as_str(),
            )));
        }
        if let Some(name) = &self.group_name {
            parts.push(Predicate::Compare(ComparePredicate::eq(
                columns::GROUP_NAME,
                name.as_str(),
            )));
        }
        if let Some(age) = self.age_min {
            parts.push(Predicate::Compare(ComparePredicate::gte(columns::AGE, age)));
        }
        if let Some(age) = self.age_max {
            parts.push(Predicate::Compare(ComparePredicate::lte(columns::AGE, age)));
        }

        Predicate::all(parts)
    }
}
