//! A ruleset: an ordered sequence of rules for a single class, tested
//! top-to-bottom, each one only against the instances the rules above it
//! did not already cover.

use std::fmt;
use std::io::{self, Read, Write};
use std::rc::Rc;

use crate::catalog::AttributeCatalog;
use crate::error::Result;
use crate::instance::Instance;
use crate::rule::Rule;

/// A stable index into a [`Ruleset`]'s backing `Vec<Rule>`.
///
/// Optimization passes replace a rule's conditions in place; a plain
/// `usize` would be just as functional, but the newtype keeps a ruleset
/// index from being passed somewhere a dataset index was meant (`spec.md`
/// §9, "Rule handles").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleHandle(pub usize);

#[derive(Debug, Clone, Default)]
pub struct Ruleset {
    rules: Vec<Rule>,
}

impl Ruleset {
    pub fn new() -> Self {
        Ruleset { rules: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn add_rule(&mut self, rule: Rule) -> RuleHandle {
        self.rules.push(rule);
        RuleHandle(self.rules.len() - 1)
    }

    pub fn get_rule(&self, handle: RuleHandle) -> &Rule {
        &self.rules[handle.0]
    }

    pub fn get_rule_mut(&mut self, handle: RuleHandle) -> &mut Rule {
        &mut self.rules[handle.0]
    }

    pub fn replace_rule(&mut self, handle: RuleHandle, rule: Rule) {
        self.rules[handle.0] = rule;
    }

    pub fn handles(&self) -> impl Iterator<Item = RuleHandle> {
        (0..self.rules.len()).map(RuleHandle)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether any rule in the set covers `instance`.
    pub fn cover_any(&self, instance: &Instance) -> bool {
        self.rules.iter().any(|r| r.covers(instance))
    }

    /// Aggregate ruleset description length: each rule's own theory cost
    /// plus its error cost against the instances still live when it is
    /// reached, with covered instances removed from the pool before the
    /// next rule is scored (`spec.md` §4.4).
    pub fn dl(&self, pos: &[Instance], neg: &[Instance]) -> f64 {
        let mut remaining_pos = pos.to_vec();
        let mut remaining_neg = neg.to_vec();
        let mut total = 0.0;

        for rule in &self.rules {
            total += rule.dl() + rule.dl_err(&remaining_pos, &remaining_neg);
            remaining_pos.retain(|i| !rule.covers(i));
            remaining_neg.retain(|i| !rule.covers(i));
        }

        total
    }

    /// Decide the best prefix length for the rule at `handle`, evaluated
    /// in the context of the whole ruleset: for every prefix length from
    /// the rule's full length down to zero conditions, sum `dl_err` over
    /// every rule in the set (with the nominated rule temporarily
    /// truncated to that length), and keep the prefix minimizing that sum.
    ///
    /// Measurement is done on a scratch copy of the nominated rule so nothing
    /// is mutated until the best length is known — the reference
    /// implementation prunes destructively while still accumulating the
    /// metric, which conflates measuring and mutating the same rule
    /// (`spec.md` §9, "Ruleset::pruneRule conflation").
    pub fn prune_rule_in_context(&mut self, handle: RuleHandle, pos: &[Instance], neg: &[Instance]) {
        let original = self.get_rule(handle).clone();
        let full_len = original.conditions().len();

        let mut best_len = full_len;
        let mut best_metric = f64::INFINITY;

        for len in (0..=full_len).rev() {
            let mut candidate = original.clone();
            candidate.truncate(len);

            let mut remaining_pos = pos.to_vec();
            let mut remaining_neg = neg.to_vec();
            let mut metric = 0.0;
            for (i, rule) in self.rules.iter().enumerate() {
                let rule = if i == handle.0 { &candidate } else { rule };
                metric += rule.dl_err(&remaining_pos, &remaining_neg);
                remaining_pos.retain(|inst| !rule.covers(inst));
                remaining_neg.retain(|inst| !rule.covers(inst));
            }

            if metric < best_metric {
                best_metric = metric;
                best_len = len;
            }
        }

        let mut pruned = original;
        pruned.truncate(best_len);
        self.replace_rule(handle, pruned);
    }

    pub fn write_binary<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&(self.rules.len() as u64).to_le_bytes())?;
        for rule in &self.rules {
            rule.write_binary(w)?;
        }
        Ok(())
    }

    pub fn read_binary<R: Read>(r: &mut R, catalog: Rc<AttributeCatalog>) -> Result<Self> {
        let mut len_buf = [0u8; 8];
        r.read_exact(&mut len_buf)?;
        let num_rules = u64::from_le_bytes(len_buf);

        let mut rules = Vec::with_capacity(num_rules as usize);
        for _ in 0..num_rules {
            rules.push(Rule::read_binary(r, catalog.clone())?);
        }
        Ok(Ruleset { rules })
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                writeln!(f, " OR")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}
