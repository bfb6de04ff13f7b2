//! The k-pass global optimization stage: for every existing rule, try an
//! original/replacement/revision variant and keep whichever gives the
//! ruleset the smallest description length.

use std::rc::Rc;

use crate::catalog::AttributeCatalog;
use crate::instance::Instance;
use crate::learner::irep::split_grow_prune;
use crate::rule::Rule;
use crate::ruleset::Ruleset;

fn debug_enabled() -> bool {
    std::env::var_os("RIPPERK_DEBUG").is_some()
}

/// Run one optimization pass over every rule handle currently in
/// `ruleset`, mutating it in place.
pub fn optimize_pass(ruleset: &mut Ruleset, catalog: &Rc<AttributeCatalog>, pos: &[Instance], neg: &[Instance], ratio: f64) {
    let (grow_p, prune_p) = split_grow_prune(pos, ratio);
    let (grow_n, prune_n) = split_grow_prune(neg, ratio);

    for handle in ruleset.handles().collect::<Vec<_>>() {
        let original = ruleset.get_rule(handle).clone();
        let original_dl = ruleset.dl(pos, neg);

        let mut replacement = Rule::new(catalog.clone());
        replacement.grow(grow_p, grow_n);
        ruleset.replace_rule(handle, replacement);
        ruleset.prune_rule_in_context(handle, prune_p, prune_n);
        let replacement_rule = ruleset.get_rule(handle).clone();
        let replacement_dl = ruleset.dl(pos, neg);

        let mut revision = original.clone();
        revision.grow(grow_p, grow_n);
        revision.prune(prune_p, prune_n);
        ruleset.replace_rule(handle, revision.clone());
        let revision_dl = ruleset.dl(pos, neg);

        let (best_dl, best_rule) = [(original_dl, &original), (replacement_dl, &replacement_rule), (revision_dl, &revision)]
            .into_iter()
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(dl, rule)| (dl, rule.clone()))
            .expect("three candidates were just constructed");

        if debug_enabled() {
            eprintln!(
                "[optimize] handle={:?} original={original_dl:.2} replacement={replacement_dl:.2} revision={revision_dl:.2} chose={best_dl:.2}",
                handle
            );
        }

        ruleset.replace_rule(handle, best_rule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AttributeCatalog;
    use crate::instance::Attribute;
    use crate::learner::irep::{baseline_dl, irep_star};
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
    fn optimization_pass_never_worsens_dl() {
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

        let mut ruleset = irep_star(&catalog, pos.clone(), neg.clone(), 2.0 / 3.0, baseline);
        let dl_before = ruleset.dl(&pos, &neg);

        optimize_pass(&mut ruleset, &catalog, &pos, &neg, 2.0 / 3.0);
        let dl_after = ruleset.dl(&pos, &neg);

        assert!(dl_after <= dl_before + 1e-9);
    }
}
