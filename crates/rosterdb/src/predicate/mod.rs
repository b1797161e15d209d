//! Pure representation of filter expressions.
//!
//! This layer contains no schema validation, sorting, or execution
//! semantics. Field names are accepted as strings; whether a field exists
//! is the backend's concern. All interpretation occurs in later passes:
//!
//! - field validation (backend-side)
//! - row evaluation ([`eval`])

mod eval;


pub use eval::{FieldPresence, Row, eval};

use crate::value::Value;

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

///
/// ComparePredicate
///
/// One atomic comparison between a named column and a scalar value.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    fn new(field: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Ne, value)
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Lte, value)
    }

    #[must_use]
    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Gte, value)
    }
}

///
/// Predicate
///
/// Conjunctive filter expression. `True` is the universal match-all;
/// an empty `And` is equivalent to `True`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    True,
    And(Vec<Self>),
    Compare(ComparePredicate),
}

impl Predicate {
    /// Fold a list of predicate parts into one conjunction.
    ///
    /// Zero parts yield `True`; one part is returned bare; more keep
    /// their insertion order under a single `And`.
    #[must_use]
    pub fn all(mut parts: Vec<Self>) -> Self {
        match parts.len() {
            0 => Self::True,
            1 => parts.remove(0),
            _ => Self::And(parts),
        }
    }

    /// True when this predicate matches every row.
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        match self {
            Self::True => true,
            Self::And(parts) => parts.iter().all(Self::is_match_all),
            Self::Compare(_) => false,
        }
    }

    /// Return all unique field names referenced by this predicate.
    ///
    /// Contract:
    /// - sorted ascending
    /// - deduplicated
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out.sort_unstable();
        out.dedup();
        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::True => {}
            Self::And(parts) => {
                for part in parts {
                    part.collect_fields(out);
                }
            }
            Self::Compare(cmp) => out.push(cmp.field.as_str()),
        }
    }
}
