use crate::row::columns;

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

///
/// OrderKey
///
/// One sort key: a column name plus a direction. Rows whose key value is
/// absent order after all rows with a present value; that placement is a
/// backend contract, not executor logic.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderKey {
    pub field: String,
    pub direction: OrderDirection,
}

///
/// OrderSpec
///
/// Ordered list of sort keys, applied left to right. Field-name legality
/// is not checked here; backends reject unknown columns.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderSpec {
    keys: Vec<OrderKey>,
}

impl OrderSpec {
    /// Create an empty ordering.
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// The canonical ordering: member id ascending.
    #[must_use]
    pub fn canonical() -> Self {
        Self::new().asc(columns::MEMBER_ID)
    }

    /// Append an ascending sort key.
    #[must_use]
    pub fn asc(mut self, field: impl Into<String>) -> Self {
        self.keys.push(OrderKey {
            field: field.into(),
            direction: OrderDirection::Asc,
        });
        self
    }

    /// Append a descending sort key.
    #[must_use]
    pub fn desc(mut self, field: impl Into<String>) -> Self {
        self.keys.push(OrderKey {
            field: field.into(),
            direction: OrderDirection::Desc,
        });
        self
    }

    /// Sort keys in application order.
    #[must_use]
    pub fn keys(&self) -> &[OrderKey] {
        &self.keys
    }

    /// Field names referenced by this ordering.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|key| key.field.as_str())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for OrderSpec {
    /// Defaults to [`OrderSpec::canonical`], not an empty ordering, so
    /// that every default-ordered fetch is deterministic.
    fn default() -> Self {
        Self::canonical()
    }
}
