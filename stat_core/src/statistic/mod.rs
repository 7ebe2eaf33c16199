//! Statistic - One derived character number and the modifiers feeding it

mod breakdown;
pub mod stacking;

pub use breakdown::{BonusEntry, Breakdown};

use crate::modifier::Modifier;
use crate::types::ModifierId;
use std::collections::BTreeSet;

/// A base value, a bag of modifiers, and the conditions that gate them
///
/// Final value is `base + stacked bonuses + all penalties`, recomputed on
/// every call. A statistic never references another statistic.
#[derive(Debug, Clone, Default)]
pub struct Statistic {
    name: String,
    base_value: f64,
    /// Insertion order only matters for breakdown display
    modifiers: Vec<(ModifierId, Modifier)>,
    conditions: BTreeSet<String>,
    next_id: u64,
}

impl Statistic {
    /// Create a statistic with no modifiers and no active conditions
    pub fn new(name: impl Into<String>, base_value: f64) -> Self {
        Statistic {
            name: name.into(),
            base_value,
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    pub fn set_base_value(&mut self, value: f64) {
        self.base_value = value;
    }

    // === Modifier Methods ===

    /// Append a modifier, returning a handle for removing this exact instance
    pub fn add_modifier(&mut self, modifier: Modifier) -> ModifierId {
        let id = ModifierId(self.next_id);
        self.next_id += 1;
        self.modifiers.push((id, modifier));
        id
    }

    /// Remove one modifier instance by handle
    pub fn remove_modifier(&mut self, id: ModifierId) -> Option<Modifier> {
        let index = self.modifiers.iter().position(|(mid, _)| *mid == id)?;
        Some(self.modifiers.remove(index).1)
    }

    /// Remove every modifier contributed by a source, returning how many went
    pub fn remove_modifiers_by_source(&mut self, source: &str) -> usize {
        let before = self.modifiers.len();
        self.modifiers.retain(|(_, m)| m.source != source);
        let removed = before - self.modifiers.len();
        if removed > 0 {
            log::debug!("{}: removed {} modifier(s) from {:?}", self.name, removed, source);
        }
        removed
    }

    /// Drop all modifiers; base value and conditions are kept
    pub fn clear_modifiers(&mut self) {
        self.modifiers.clear();
    }

    pub fn get_modifier(&self, id: ModifierId) -> Option<&Modifier> {
        self.modifiers.iter().find(|(mid, _)| *mid == id).map(|(_, m)| m)
    }

    /// All modifiers in insertion order
    pub fn modifiers(&self) -> impl Iterator<Item = (ModifierId, &Modifier)> {
        self.modifiers.iter().map(|(id, m)| (*id, m))
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    // === Condition Methods ===

    /// Replace the whole active-condition set
    pub fn set_active_conditions<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conditions = tags.into_iter().map(Into::into).collect();
    }

    pub fn add_condition(&mut self, tag: impl Into<String>) {
        self.conditions.insert(tag.into());
    }

    pub fn remove_condition(&mut self, tag: &str) {
        self.conditions.remove(tag);
    }

    pub fn has_condition(&self, tag: &str) -> bool {
        self.conditions.contains(tag)
    }

    pub fn active_conditions(&self) -> &BTreeSet<String> {
        &self.conditions
    }

    // === Computation ===

    fn stacking(&self) -> stacking::Stacking<'_> {
        stacking::stack(self.modifiers.iter().map(|(_, m)| m), &self.conditions)
    }

    /// Combined contribution of all applicable modifiers
    pub fn total_modifier(&self) -> f64 {
        self.stacking().total()
    }

    /// Final value: base plus stacked bonuses plus all penalties
    pub fn value(&self) -> f64 {
        let stacked = self.stacking();
        let value = self.base_value + stacked.total();
        log::trace!(
            "{}: base {} bonuses {:+} penalties {:+} = {}",
            self.name,
            self.base_value,
            stacked.bonus_total,
            stacked.penalty_total,
            value
        );
        value
    }

    /// Explain the current value; always agrees with [`Statistic::value`]
    pub fn breakdown(&self) -> Breakdown {
        Breakdown::from_stacking(&self.name, self.base_value, &self.stacking())
    }
}
