//! A single atomic test `attr OP value`.

use std::fmt;

use crate::value::AttributeValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Le,
    Ge,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Eq => "==",
            Operator::Le => "<=",
            Operator::Ge => ">=",
        };
        write!(f, "{symbol}")
    }
}

/// `attr_name OP attr_value`. `Eq` is only ever constructed against discrete
/// attributes; `Le`/`Ge` only against continuous ones (enforced by
/// [`crate::rule::Rule::grow`]'s candidate generation, not by this type).
#[derive(Debug, Clone)]
pub struct Condition {
    pub operator: Operator,
    pub attr_name: String,
    pub attr_value: AttributeValue,
}

impl Condition {
    pub fn new(operator: Operator, attr_name: impl Into<String>, attr_value: AttributeValue) -> Self {
        Condition { operator, attr_name: attr_name.into(), attr_value }
    }

    /// Evaluate this condition against an instance's value for `attr_name`.
    ///
    /// Tag mismatches between `value` and `self.attr_value` are a caller
    /// bug (the catalog guarantees tag agreement by construction) and are
    /// treated as a non-match rather than panicking.
    pub fn apply(&self, value: &AttributeValue) -> bool {
        match self.operator {
            Operator::Eq => value == &self.attr_value,
            Operator::Le => match (value.as_continuous(), self.attr_value.as_continuous()) {
                (Some(v), Some(stored)) => v <= stored,
                _ => false,
            },
            Operator::Ge => match (value.as_continuous(), self.attr_value.as_continuous()) {
                (Some(v), Some(stored)) => v >= stored,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attr_name, self.operator, self.attr_value)
    }
}
