use std::cmp::Ordering;

///
/// Value
///
/// Scalar operand for filter comparisons and sort keys. Only the value
/// families carried by the member/group projection are represented;
/// adding a family means one new variant plus one comparator arm.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Uint(u64),
    Text(String),
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Strict comparator for identical orderable variants.
///
/// Returns `None` for mismatched variants; a mismatched comparison never
/// matches and never orders.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
