use crate::{
    predicate::{CompareOp, ComparePredicate, Predicate},
    value::{Value, strict_order_cmp},
};
use std::cmp::Ordering;

///
/// FieldPresence
///
/// Result of reading a field from a row during predicate evaluation.
/// Absence means the row carries no value for the column, which is
/// distinct from any concrete value.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    Present(Value),
    Missing,
}

///
/// Row
///
/// Abstraction over a row-like value that exposes fields by name.
/// Decouples predicate evaluation from concrete projection types.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

/// Evaluate a predicate against one row.
///
/// A comparison against an absent field matches nothing; so does a
/// comparison between mismatched value variants.
#[must_use]
pub fn eval<R: Row>(predicate: &Predicate, row: &R) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::And(parts) => parts.iter().all(|part| eval(part, row)),
        Predicate::Compare(cmp) => eval_compare(cmp, row),
    }
}

fn eval_compare<R: Row>(cmp: &ComparePredicate, row: &R) -> bool {
    let FieldPresence::Present(value) = row.field(&cmp.field) else {
        return false;
    };

    let Some(ordering) = strict_order_cmp(&value, &cmp.value) else {
        return false;
    };

    match cmp.op {
        CompareOp::Eq => ordering == Ordering::Equal,
        CompareOp::Ne => ordering != Ordering::Equal,
        CompareOp::Lt => ordering == Ordering::Less,
        CompareOp::Lte => ordering != Ordering::Greater,
        CompareOp::Gt => ordering == Ordering::Greater,
        CompareOp::Gte => ordering != Ordering::Less,
    }
}
