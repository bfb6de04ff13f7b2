//! Orchestrates `IREP*`, k-pass optimization, and per-class ordering into
//! a single `fit` entry point that trains a [`Model`].

mod irep;
mod optimize;
mod ordering;

use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use crate::catalog::AttributeCatalog;
use crate::error::{Result, RipperError};
use crate::instance::Instance;
use crate::model::Model;

fn debug_enabled() -> bool {
    std::env::var_os("RIPPERK_DEBUG").is_some()
}

/// Train a [`Model`] from `dataset`.
///
/// Classes are ranked by ascending prevalence and learned in that order
/// (least-prevalent first); the most prevalent class becomes the default
/// and receives no induced ruleset. `pruning_ratio` controls the
/// grow/prune split (`spec.md` default `2/3`); `k` is the number of
/// global optimization passes run per class after `IREP*`.
pub fn fit(dataset: &[Instance], pruning_ratio: f64, k: usize) -> Result<Model> {
    if dataset.is_empty() {
        return Err(RipperError::MalformedDataset { line: 0, reason: "dataset has no instances".to_string() });
    }

    let catalog = Rc::new(AttributeCatalog::from_dataset(dataset));
    let (order, default_class) = ordering::class_order(dataset);
    let baseline = irep::baseline_dl(dataset, &default_class);

    if debug_enabled() {
        eprintln!("[learner] learning order: {order:?}, default: {default_class}, baseline_dl={baseline:.2}");
    }

    let mut rulesets = BTreeMap::new();
    for (i, class) in order.iter().enumerate() {
        let pos: Vec<Instance> = dataset.iter().filter(|inst| &inst.class == class).cloned().collect();

        let not_yet_learned: HashSet<&str> = order[i + 1..].iter().map(|s| s.as_str()).collect();
        let neg: Vec<Instance> = dataset.iter().filter(|inst| not_yet_learned.contains(inst.class.as_str())).cloned().collect();

        if debug_enabled() {
            eprintln!("[learner] class {class}: |P|={} |N|={}", pos.len(), neg.len());
        }

        let mut ruleset = irep::irep_star(&catalog, pos.clone(), neg.clone(), pruning_ratio, baseline);
        for pass in 0..k {
            optimize::optimize_pass(&mut ruleset, &catalog, &pos, &neg, pruning_ratio);
            if debug_enabled() {
                eprintln!("[learner] class {class}: optimization pass {pass} -> dl={:.2}", ruleset.dl(&pos, &neg));
            }
        }

        rulesets.insert(class.clone(), ruleset);
    }

    Ok(Model::new(rulesets, order, default_class))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Attribute;
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

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(fit(&[], 2.0 / 3.0, 2), Err(RipperError::MalformedDataset { .. })));
    }

    #[test]
    fn fits_a_perfectly_separable_two_class_dataset() {
        let dataset = vec![
            instance("+", "red"),
            instance("+", "red"),
            instance("-", "blue"),
            instance("-", "blue"),
        ];
        let model = fit(&dataset, 2.0 / 3.0, 2).unwrap();

        assert_eq!(model.default_class(), "-");
        assert_eq!(model.order(), &["+".to_string()]);
        assert_eq!(model.evaluate(&dataset), 1.0);
    }
}
