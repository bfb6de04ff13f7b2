//! Incremental Reduced Error Pruning (`IREP*`): the grow/prune/add loop
//! that builds one class's initial ruleset, stopped by an MDL threshold.

use std::rc::Rc;

use crate::catalog::AttributeCatalog;
use crate::instance::Instance;
use crate::mathutils::log2_combination;
use crate::rule::Rule;
use crate::ruleset::Ruleset;

fn debug_enabled() -> bool {
    std::env::var_os("RIPPERK_DEBUG").is_some()
}

/// `max(log2C(|D|, m), 0)` where `m` counts instances whose class differs
/// from `default_class`.
///
/// The reference implementation uses the class of the dataset's last row
/// as the reference class here, which makes the baseline depend on row
/// order — almost certainly unintended. This uses the prevalence-based
/// default class instead, per the corrected behavior.
pub fn baseline_dl(dataset: &[Instance], default_class: &str) -> f64 {
    let total = dataset.len() as i64;
    let m = dataset.iter().filter(|i| i.class != default_class).count() as i64;
    log2_combination(total, m).max(0.0)
}

/// Split `instances` into `(grow_set, prune_set)` where the grow set holds
/// the first `floor(len * ratio) + 1` instances and the prune set holds
/// the remainder.
pub fn split_grow_prune(instances: &[Instance], ratio: f64) -> (&[Instance], &[Instance]) {
    let s = (instances.len() as f64 * ratio).floor() as usize;
    let grow_len = (s + 1).min(instances.len());
    instances.split_at(grow_len)
}

/// Run `IREP*` for a single class and return its ruleset.
///
/// `pos`/`neg` are consumed: each accepted rule's covered instances are
/// removed before the next grow/prune round, but `ruleset.dl` is always
/// measured against the original, pre-removal snapshot taken here.
pub fn irep_star(
    catalog: &Rc<AttributeCatalog>,
    mut pos: Vec<Instance>,
    mut neg: Vec<Instance>,
    ratio: f64,
    baseline: f64,
) -> Ruleset {
    let original_pos = pos.clone();
    let original_neg = neg.clone();

    let mut ruleset = Ruleset::new();
    let mut min_dl = baseline;

    while !pos.is_empty() {
        let (grow_p, prune_p) = split_grow_prune(&pos, ratio);
        let (grow_n, prune_n) = split_grow_prune(&neg, ratio);

        let mut rule = Rule::new(catalog.clone());
        rule.grow(grow_p, grow_n);
        rule.prune(prune_p, prune_n);

        if rule.empty() {
            if debug_enabled() {
                eprintln!("[irep] grown rule is empty, stopping with {} rules", ruleset.len());
            }
            break;
        }

        ruleset.add_rule(rule.clone());
        pos.retain(|i| !rule.covers(i));
        neg.retain(|i| !rule.covers(i));

        let dl = ruleset.dl(&original_pos, &original_neg);
        if debug_enabled() {
            eprintln!("[irep] added {rule} (dl={dl:.2}, min_dl={min_dl:.2})");
        }
        if dl > min_dl + 64.0 {
            break;
        }
        min_dl = min_dl.min(dl);
    }

    ruleset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AttributeCatalog;
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
    fn splits_grow_and_prune_sets_by_ratio() {
        let instances = vec![instance("+", "a"), instance("+", "b"), instance("+", "c")];
        let (grow, prune) = split_grow_prune(&instances, 2.0 / 3.0);
        assert_eq!(grow.len(), 3);
        assert_eq!(prune.len(), 0);
    }

    #[test]
    fn learns_a_perfectly_separating_rule() {
        let dataset = vec![
            instance("+", "red"),
            instance("+", "red"),
            instance("+", "red"),
            instance("-", "blue"),
            instance("-", "blue"),
            instance("-", "blue"),
        ];
        let catalog = Rc::new(AttributeCatalog::from_dataset(&dataset));
        let pos: Vec<_> = dataset.iter().filter(|i| i.class == "+").cloned().collect();
        let neg: Vec<_> = dataset.iter().filter(|i| i.class == "-").cloned().collect();
        let baseline = baseline_dl(&dataset, "-");

        let ruleset = irep_star(&catalog, pos.clone(), neg.clone(), 2.0 / 3.0, baseline);

        assert!(ruleset.len() >= 1);
        assert_eq!(pos.iter().filter(|i| ruleset.cover_any(i)).count(), pos.len());
        assert_eq!(neg.iter().filter(|i| ruleset.cover_any(i)).count(), 0);
    }

    /// An adversarially low starting `min_dl` forces the very first
    /// accepted rule to blow the `+64` bit budget, so `IREP*` must stop
    /// with exactly one rule even though positives remain uncovered.
    #[test]
    fn mdl_stop_halts_after_one_rule_with_positives_remaining() {
        let dataset = vec![
            instance("+", "red"),
            instance("+", "green"),
            instance("+", "yellow"),
            instance("-", "blue"),
            instance("-", "blue"),
        ];
        let catalog = Rc::new(AttributeCatalog::from_dataset(&dataset));
        let pos: Vec<_> = dataset.iter().filter(|i| i.class == "+").cloned().collect();
        let neg: Vec<_> = dataset.iter().filter(|i| i.class == "-").cloned().collect();

        let ruleset = irep_star(&catalog, pos.clone(), neg.clone(), 2.0 / 3.0, -1_000.0);

        assert_eq!(ruleset.len(), 1);
        assert!(pos.iter().any(|i| !ruleset.cover_any(i)), "at least one positive must remain uncovered");
    }
}
