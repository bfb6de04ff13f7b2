//! Human-readable text dump writer (`spec.md` §6, write-only).

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::Model;

/// Write `model` to `path` as the text dump format:
/// `IF <cond> AND <cond> OR\n...THEN <class>\nELSE <next or default>\n`
/// for each class in order.
pub fn write(model: &Model, path: &Path) -> Result<()> {
    fs::write(path, model.to_text())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{Condition, Operator};
    use crate::instance::Instance;
    use crate::rule::Rule;
    use crate::ruleset::Ruleset;
    use crate::value::AttributeValue;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    #[test]
    fn dumps_rule_then_class_then_default() {
        let dataset = vec![Instance::new("a"), Instance::new("b")];
        let catalog = Rc::new(crate::catalog::AttributeCatalog::from_dataset(&dataset));

        let mut rule = Rule::new(catalog);
        rule.push_condition(Condition::new(Operator::Eq, "color", AttributeValue::Discrete("red".to_string())));
        let mut ruleset = Ruleset::new();
        ruleset.add_rule(rule);

        let mut rulesets = BTreeMap::new();
        rulesets.insert("a".to_string(), ruleset);
        let model = Model::new(rulesets, vec!["a".to_string()], "b".to_string());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.txt");
        write(&model, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "IF color == red\nTHEN a\nELSE b\n");
    }

    #[test]
    fn each_non_last_class_else_names_the_next_class() {
        let dataset = vec![Instance::new("a"), Instance::new("b"), Instance::new("c")];
        let catalog = Rc::new(crate::catalog::AttributeCatalog::from_dataset(&dataset));

        let mut rule_a = Rule::new(catalog.clone());
        rule_a.push_condition(Condition::new(Operator::Eq, "color", AttributeValue::Discrete("red".to_string())));
        let mut ruleset_a = Ruleset::new();
        ruleset_a.add_rule(rule_a);

        let mut rule_b = Rule::new(catalog);
        rule_b.push_condition(Condition::new(Operator::Eq, "color", AttributeValue::Discrete("green".to_string())));
        let mut ruleset_b = Ruleset::new();
        ruleset_b.add_rule(rule_b);

        let mut rulesets = BTreeMap::new();
        rulesets.insert("a".to_string(), ruleset_a);
        rulesets.insert("b".to_string(), ruleset_b);
        let model = Model::new(rulesets, vec!["a".to_string(), "b".to_string()], "c".to_string());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.txt");
        write(&model, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "IF color == red\nTHEN a\nELSE b\nIF color == green\nTHEN b\nELSE c\n");
    }
}
