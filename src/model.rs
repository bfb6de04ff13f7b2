//! A learned model: one [`Ruleset`] per non-default class, an explicit
//! class evaluation order, and a default class.

use std::collections::BTreeMap;
use std::io::{self, Read, Write};
use std::rc::Rc;

use crate::catalog::AttributeCatalog;
use crate::error::Result;
use crate::error::RipperError;
use crate::instance::Instance;
use crate::ruleset::Ruleset;

#[derive(Debug)]
pub struct Model {
    /// Per-class rulesets, keyed by class name. The default class has no
    /// entry here.
    rulesets: BTreeMap<String, Ruleset>,
    /// Classes in the order they are tried during classification, most
    /// specific (least prevalent at training time) first. Does not include
    /// the default class.
    order: Vec<String>,
    default_class: String,
}

impl Model {
    pub fn new(rulesets: BTreeMap<String, Ruleset>, order: Vec<String>, default_class: String) -> Self {
        Model { rulesets, order, default_class }
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn default_class(&self) -> &str {
        &self.default_class
    }

    pub fn ruleset_for(&self, class: &str) -> Option<&Ruleset> {
        self.rulesets.get(class)
    }

    /// Classify `instance` by trying each class's ruleset in order and
    /// falling back to the default class if none cover it.
    pub fn classify(&self, instance: &Instance) -> &str {
        for class in &self.order {
            if let Some(ruleset) = self.rulesets.get(class) {
                if ruleset.cover_any(instance) {
                    return class;
                }
            }
        }
        &self.default_class
    }

    /// Fraction of `dataset` this model classifies correctly.
    pub fn evaluate(&self, dataset: &[Instance]) -> f64 {
        if dataset.is_empty() {
            return 0.0;
        }
        let correct = dataset.iter().filter(|i| self.classify(i) == i.class).count();
        correct as f64 / dataset.len() as f64
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, class) in self.order.iter().enumerate() {
            let ruleset = self.rulesets.get(class).expect("order and rulesets agree by construction");
            let else_class = self.order.get(i + 1).unwrap_or(&self.default_class);
            out.push_str(&ruleset.to_string());
            out.push_str("\nTHEN ");
            out.push_str(class);
            out.push_str("\nELSE ");
            out.push_str(else_class);
            out.push('\n');
        }
        out
    }

    /// Serialize this model in the binary format to `w`. Used by
    /// [`crate::io::binary`], which owns path/file handling and the
    /// atomic-write guarantee.
    pub(crate) fn encode_binary<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&(self.order.len() as u64).to_le_bytes())?;
        for class in &self.order {
            write_string(w, class)?;
            self.rulesets.get(class).expect("order and rulesets agree by construction").write_binary(w)?;
        }
        write_string(w, &self.default_class)?;
        Ok(())
    }

    /// Deserialize a model previously written by [`Self::encode_binary`].
    /// The catalog must describe the same attribute types used at training
    /// time — the CLI rebuilds it from whatever dataset accompanies the
    /// `evaluate`/`classify` invocation.
    pub(crate) fn decode_binary<R: Read>(r: &mut R, catalog: &Rc<AttributeCatalog>) -> Result<Self> {
        let mut len_buf = [0u8; 8];
        r.read_exact(&mut len_buf).map_err(|e| RipperError::MalformedModel(e.to_string()))?;
        let num_classes = u64::from_le_bytes(len_buf);

        let mut order = Vec::with_capacity(num_classes as usize);
        let mut rulesets = BTreeMap::new();
        for _ in 0..num_classes {
            let class = read_string(r)?;
            let ruleset = Ruleset::read_binary(r, catalog.clone())?;
            order.push(class.clone());
            rulesets.insert(class, ruleset);
        }
        let default_class = read_string(r)?;

        Ok(Model { rulesets, order, default_class })
    }
}

fn write_string<W: Write>(w: &mut W, s: &str) -> io::Result<()> {
    let bytes = s.as_bytes();
    w.write_all(&(bytes.len() as u64).to_le_bytes())?;
    w.write_all(bytes)
}

fn read_string<R: Read>(r: &mut R) -> Result<String> {
    let mut len_buf = [0u8; 8];
    r.read_exact(&mut len_buf).map_err(|e| RipperError::MalformedModel(e.to_string()))?;
    let len = u64::from_le_bytes(len_buf) as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf).map_err(|e| RipperError::MalformedModel(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| RipperError::MalformedModel(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{Condition, Operator};
    use crate::instance::Attribute;
    use crate::rule::Rule;
    use crate::value::{AttributeType, AttributeValue};

    fn instance(class: &str, color: &str) -> Instance {
        Instance {
            class: class.to_string(),
            attributes: vec![Attribute {
                name: "color".to_string(),
                attr_type: AttributeType::Discrete,
                value: AttributeValue::Discrete(color.to_string()),
            }],
        }
    }

    fn sample_model() -> (Model, Rc<AttributeCatalog>) {
        let dataset = vec![instance("a", "red"), instance("b", "blue")];
        let catalog = Rc::new(AttributeCatalog::from_dataset(&dataset));

        let mut rule = Rule::new(catalog.clone());
        rule.push_condition(Condition::new(Operator::Eq, "color", AttributeValue::Discrete("red".to_string())));
        let mut ruleset = Ruleset::new();
        ruleset.add_rule(rule);

        let mut rulesets = BTreeMap::new();
        rulesets.insert("a".to_string(), ruleset);

        (Model::new(rulesets, vec!["a".to_string()], "b".to_string()), catalog)
    }

    #[test]
    fn classify_falls_back_to_default() {
        let (model, _) = sample_model();
        assert_eq!(model.classify(&instance("?", "red")), "a");
        assert_eq!(model.classify(&instance("?", "blue")), "b");
    }

    #[test]
    fn evaluate_computes_accuracy() {
        let (model, _) = sample_model();
        let dataset = vec![instance("a", "red"), instance("b", "blue")];
        assert_eq!(model.evaluate(&dataset), 1.0);
    }

    #[test]
    fn encode_decode_round_trip_preserves_classification() {
        let (model, catalog) = sample_model();
        let mut buf = Vec::new();
        model.encode_binary(&mut buf).unwrap();

        let read_back = Model::decode_binary(&mut buf.as_slice(), &catalog).unwrap();
        assert_eq!(read_back.classify(&instance("?", "red")), "a");
        assert_eq!(read_back.default_class(), "b");
    }
}
