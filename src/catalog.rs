//! Attribute catalog: the immutable, shared-read map from attribute name to
//! its type and the set of values observed for it during training.
//!
//! Built once from the training set and never mutated afterwards. Every
//! [`crate::rule::Rule`] carries a shared reference to one catalog rather
//! than a private copy — mutation ends before any rule is grown, so shared
//! read access is sufficient and no synchronization is needed (see
//! `spec.md` §9, "Shared catalog").

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, RipperError};
use crate::instance::Instance;
use crate::value::{AttributeType, AttributeValue};

/// Maps attribute name to `(type, observed values)`.
///
/// Backed by `BTreeMap`/`BTreeSet` so that [`names`](Self::names) and
/// [`values`](Self::values) enumerate in a deterministic order without a
/// manual sort at every call site — required by `spec.md` §9 for
/// reproducible tie-breaks during rule growth.
#[derive(Debug, Clone, Default)]
pub struct AttributeCatalog {
    entries: BTreeMap<String, (AttributeType, BTreeSet<AttributeValue>)>,
}

impl AttributeCatalog {
    /// Build a catalog from a full training dataset in one pass.
    ///
    /// On conflicting types for the same name, first-seen wins — the
    /// producer (CSV ingestion) guarantees uniformity per `spec.md` §3, so
    /// this only matters for hand-built `Instance`s in tests.
    pub fn from_dataset(dataset: &[Instance]) -> Self {
        let mut entries: BTreeMap<String, (AttributeType, BTreeSet<AttributeValue>)> = BTreeMap::new();

        for instance in dataset {
            for attr in &instance.attributes {
                let entry = entries.entry(attr.name.clone()).or_insert_with(|| (attr.attr_type, BTreeSet::new()));
                entry.1.insert(attr.value.clone());
            }
        }

        AttributeCatalog { entries }
    }

    /// Total (name, value) pair count across every attribute — the `n` term
    /// in `Rule::dl`.
    pub fn total_value_count(&self) -> usize {
        self.entries.values().map(|(_, values)| values.len()).sum()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn attribute_type(&self, name: &str) -> Result<AttributeType> {
        self.entries.get(name).map(|(t, _)| *t).ok_or_else(|| RipperError::UnknownAttribute(name.to_string()))
    }

    pub fn values(&self, name: &str) -> Result<impl Iterator<Item = &AttributeValue>> {
        self.entries
            .get(name)
            .map(|(_, values)| values.iter())
            .ok_or_else(|| RipperError::UnknownAttribute(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Attribute;

    fn instance(class: &str, color: &str, size: f64) -> Instance {
        Instance {
            class: class.to_string(),
            attributes: vec![
                Attribute {
                    name: "color".to_string(),
                    attr_type: AttributeType::Discrete,
                    value: AttributeValue::Discrete(color.to_string()),
                },
                Attribute {
                    name: "size".to_string(),
                    attr_type: AttributeType::Continuous,
                    value: AttributeValue::Continuous(size),
                },
            ],
        }
    }

    #[test]
    fn builds_from_dataset_and_dedups_values() {
        let dataset = vec![instance("a", "red", 1.0), instance("b", "red", 2.0), instance("a", "blue", 1.0)];
        let catalog = AttributeCatalog::from_dataset(&dataset);

        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["color", "size"]);
        assert_eq!(catalog.attribute_type("color").unwrap(), AttributeType::Discrete);
        assert_eq!(catalog.values("color").unwrap().count(), 2);
        assert_eq!(catalog.values("size").unwrap().count(), 2);
        assert_eq!(catalog.total_value_count(), 4);
    }

    #[test]
    fn unknown_attribute_fails() {
        let catalog = AttributeCatalog::from_dataset(&[]);
        assert!(matches!(catalog.attribute_type("nope"), Err(RipperError::UnknownAttribute(_))));
    }
}
