//! Bonus stacking - Reduces applicable modifiers to a single total
//!
//! Rules:
//! - Only modifiers whose `should_apply` holds take part.
//! - Untyped bonuses all stack.
//! - Each typed kind (status, circumstance, item) contributes only its
//!   highest bonus, once. Every bonus tied at that maximum is reported as
//!   applied.
//! - Penalties always stack, whatever their kind.

use crate::modifier::Modifier;
use crate::types::ModifierKind;
use std::collections::{BTreeMap, BTreeSet};

/// How a single bonus fared during stacking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusOutcome<'a> {
    /// Untyped, always counted
    Stacks,
    /// Holds the maximum of its typed group
    Highest,
    /// Beaten by a higher bonus of the same kind; carries that bonus' source
    SuppressedBy(&'a str),
}

impl BonusOutcome<'_> {
    pub fn is_applied(&self) -> bool {
        !matches!(self, BonusOutcome::SuppressedBy(_))
    }
}

/// Result of stacking one statistic's modifiers
#[derive(Debug, Clone)]
pub struct Stacking<'a> {
    /// Every modifier that passed the condition filter, insertion order
    pub applicable: Vec<&'a Modifier>,
    /// Bonuses with their outcome, insertion order
    pub bonuses: Vec<(&'a Modifier, BonusOutcome<'a>)>,
    /// Penalties, insertion order
    pub penalties: Vec<&'a Modifier>,
    pub bonus_total: f64,
    pub penalty_total: f64,
}

impl Stacking<'_> {
    /// Combined contribution of bonuses and penalties
    pub fn total(&self) -> f64 {
        self.bonus_total + self.penalty_total
    }
}

/// Stack the given modifiers against a set of active conditions
pub fn stack<'a, I>(modifiers: I, active_conditions: &BTreeSet<String>) -> Stacking<'a>
where
    I: IntoIterator<Item = &'a Modifier>,
{
    let applicable: Vec<&'a Modifier> = modifiers
        .into_iter()
        .filter(|m| m.should_apply(active_conditions))
        .collect();

    // First bonus (insertion order) reaching each typed group's maximum
    let mut leaders: BTreeMap<ModifierKind, &'a Modifier> = BTreeMap::new();
    for &m in applicable.iter().filter(|m| m.is_bonus() && m.kind.is_typed()) {
        leaders
            .entry(m.kind)
            .and_modify(|leader| {
                if m.value > leader.value {
                    *leader = m;
                }
            })
            .or_insert(m);
    }

    let mut bonuses = Vec::new();
    let mut penalties = Vec::new();
    let mut untyped_total = 0.0;
    let mut penalty_total = 0.0;

    for &m in &applicable {
        if m.is_penalty() {
            penalty_total += m.value;
            penalties.push(m);
        } else if m.is_bonus() {
            let outcome = match leaders.get(&m.kind) {
                None => {
                    untyped_total += m.value;
                    BonusOutcome::Stacks
                }
                Some(leader) if m.value >= leader.value => BonusOutcome::Highest,
                Some(leader) => BonusOutcome::SuppressedBy(leader.source.as_str()),
            };
            bonuses.push((m, outcome));
        }
    }

    let typed_total: f64 = leaders.values().map(|m| m.value).sum();

    Stacking {
        applicable,
        bonuses,
        penalties,
        bonus_total: untyped_total + typed_total,
        penalty_total,
    }
}
