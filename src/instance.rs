//! Training/inference instances: a class label plus named, typed values.

use crate::value::{AttributeType, AttributeValue};

/// A single attribute observation on an instance.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub attr_type: AttributeType,
    pub value: AttributeValue,
}

/// A labeled training/inference example.
///
/// Attribute order is not semantically significant, but names must be
/// unique within an instance. Empty CSV cells are omitted entirely rather
/// than represented as some null value — a missing attribute and a
/// falsifying attribute are different things to [`crate::rule::Rule::covers`].
#[derive(Debug, Clone)]
pub struct Instance {
    pub class: String,
    pub attributes: Vec<Attribute>,
}

impl Instance {
    pub fn new(class: impl Into<String>) -> Self {
        Instance { class: class.into(), attributes: Vec::new() }
    }

    /// The value bound to `name` on this instance, or `None` if the
    /// instance carries no attribute with that name.
    pub fn value_of(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.iter().find(|a| a.name == name).map(|a| &a.value)
    }
}
