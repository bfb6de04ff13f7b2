//! Tagged attribute values and the type each attribute name is bound to.

use std::cmp::Ordering;
use std::fmt;

/// Discrete vs. continuous attribute, inferred once per name from the first
/// non-empty observation (see [`crate::catalog::AttributeCatalog`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Discrete,
    Continuous,
}

/// A single attribute value: either a discrete string or a continuous real
/// number.
///
/// Equality and ordering are only ever compared between same-tag values —
/// the catalog guarantees every use site agrees on an attribute's type, so a
/// cross-tag comparison never occurs. `Continuous` values are ordered with
/// [`f64::total_cmp`], which gives a full, deterministic order without
/// requiring a float-ordering crate; the training pipeline never produces
/// `NaN` (every continuous value originates from a CSV cell that already
/// parsed as a finite `f64`), so only `total_cmp`'s determinism is relied
/// on, not its `NaN` ordering.
#[derive(Debug, Clone)]
pub enum AttributeValue {
    Discrete(String),
    Continuous(f64),
}

impl AttributeValue {
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            AttributeValue::Discrete(_) => AttributeType::Discrete,
            AttributeValue::Continuous(_) => AttributeType::Continuous,
        }
    }

    pub fn as_continuous(&self) -> Option<f64> {
        match self {
            AttributeValue::Continuous(v) => Some(*v),
            AttributeValue::Discrete(_) => None,
        }
    }

    pub fn as_discrete(&self) -> Option<&str> {
        match self {
            AttributeValue::Discrete(s) => Some(s.as_str()),
            AttributeValue::Continuous(_) => None,
        }
    }
}

impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttributeValue::Discrete(a), AttributeValue::Discrete(b)) => a == b,
            (AttributeValue::Continuous(a), AttributeValue::Continuous(b)) => a.total_cmp(b) == Ordering::Equal,
            _ => false,
        }
    }
}

impl Eq for AttributeValue {}

impl PartialOrd for AttributeValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AttributeValue {
    /// Orders `Discrete` before `Continuous` so that, if the catalog's type
    /// inference is ever violated by a caller, enumeration still stays
    /// total and deterministic rather than panicking.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (AttributeValue::Discrete(a), AttributeValue::Discrete(b)) => a.cmp(b),
            (AttributeValue::Continuous(a), AttributeValue::Continuous(b)) => a.total_cmp(b),
            (AttributeValue::Discrete(_), AttributeValue::Continuous(_)) => Ordering::Less,
            (AttributeValue::Continuous(_), AttributeValue::Discrete(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Discrete(s) => write!(f, "{s}"),
            AttributeValue::Continuous(v) => {
                if v.is_finite() && v.fract() == 0.0 {
                    write!(f, "{}", *v as i64)
                } else {
                    write!(f, "{v}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_equality_uses_total_cmp() {
        assert_eq!(AttributeValue::Continuous(1.0), AttributeValue::Continuous(1.0));
        assert!(AttributeValue::Continuous(1.0) < AttributeValue::Continuous(2.0));
    }

    #[test]
    fn discrete_and_continuous_never_compare_equal() {
        assert_ne!(AttributeValue::Discrete("1".to_string()), AttributeValue::Continuous(1.0));
    }

    #[test]
    fn integral_continuous_renders_without_decimals() {
        assert_eq!(AttributeValue::Continuous(3.0).to_string(), "3");
        assert_eq!(AttributeValue::Continuous(3.5).to_string(), "3.5");
    }
}
