//! StatSheet - Routes modifiers from sources to statistics by selector

use crate::source::ModifierSource;
use crate::statistic::{Breakdown, Statistic};
use std::collections::{BTreeMap, BTreeSet};

/// A source currently contributing to the sheet
#[derive(Debug, Clone)]
struct AppliedSource {
    name: String,
    roll_options: Vec<String>,
}

/// Every derived number of one character, keyed by selector
///
/// Statistics stay independent; the sheet only routes modifiers and keeps
/// each statistic's condition set in sync. The effective condition set is
/// the manual conditions plus the roll options of applied sources.
#[derive(Debug, Clone, Default)]
pub struct StatSheet {
    /// Character name
    pub name: String,
    statistics: BTreeMap<String, Statistic>,
    applied: Vec<AppliedSource>,
    conditions: BTreeSet<String>,
}

impl StatSheet {
    pub fn new(name: impl Into<String>) -> Self {
        StatSheet {
            name: name.into(),
            ..Default::default()
        }
    }

    // === Statistic Methods ===

    /// Register a statistic under a selector, replacing any previous one
    ///
    /// Sources applied earlier are not re-routed to the new statistic.
    pub fn add_statistic(&mut self, selector: impl Into<String>, name: impl Into<String>, base: f64) -> &mut Statistic {
        let mut stat = Statistic::new(name, base);
        stat.set_active_conditions(self.effective_conditions());
        let slot = self.statistics.entry(selector.into()).or_default();
        *slot = stat;
        slot
    }

    pub fn statistic(&self, selector: &str) -> Option<&Statistic> {
        self.statistics.get(selector)
    }

    pub fn statistic_mut(&mut self, selector: &str) -> Option<&mut Statistic> {
        self.statistics.get_mut(selector)
    }

    /// Selectors in sorted order
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.statistics.keys().map(String::as_str)
    }

    // === Source Methods ===

    /// Route a source's modifiers to their statistics, returning how many landed
    ///
    /// Applying a source that is already applied replaces its contribution.
    pub fn apply_source(&mut self, source: &dyn ModifierSource) -> usize {
        let name = source.name().to_string();
        if self.is_applied(&name) {
            self.retract_source(&name);
        }

        let mut routed = 0;
        for modifier in source.modifiers() {
            match self.statistics.get_mut(&modifier.selector) {
                Some(stat) => {
                    stat.add_modifier(modifier);
                    routed += 1;
                }
                None => {
                    log::warn!("{}: no statistic for selector {:?}, dropping {}", name, modifier.selector, modifier);
                }
            }
        }

        let roll_options = source.roll_options();
        let changes_conditions = !roll_options.is_empty();
        self.applied.push(AppliedSource { name, roll_options });
        if changes_conditions {
            self.sync_conditions();
        }

        log::debug!("applied {} ({} modifier(s))", source.name(), routed);
        routed
    }

    /// Remove everything a source contributed, returning the modifier count
    pub fn retract_source(&mut self, name: &str) -> usize {
        let removed: usize = self
            .statistics
            .values_mut()
            .map(|stat| stat.remove_modifiers_by_source(name))
            .sum();

        let before = self.applied.len();
        self.applied.retain(|s| s.name != name);
        if self.applied.len() != before {
            self.sync_conditions();
        }

        log::debug!("retracted {} ({} modifier(s))", name, removed);
        removed
    }

    pub fn is_applied(&self, name: &str) -> bool {
        self.applied.iter().any(|s| s.name == name)
    }

    /// Names of applied sources in application order
    pub fn applied_sources(&self) -> impl Iterator<Item = &str> {
        self.applied.iter().map(|s| s.name.as_str())
    }

    // === Condition Methods ===

    /// Replace the manual conditions
    pub fn set_conditions<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conditions = tags.into_iter().map(Into::into).collect();
        self.sync_conditions();
    }

    pub fn add_condition(&mut self, tag: impl Into<String>) {
        if self.conditions.insert(tag.into()) {
            self.sync_conditions();
        }
    }

    pub fn remove_condition(&mut self, tag: &str) {
        if self.conditions.remove(tag) {
            self.sync_conditions();
        }
    }

    /// Manual conditions only
    pub fn conditions(&self) -> &BTreeSet<String> {
        &self.conditions
    }

    /// Manual conditions plus roll options of applied sources
    pub fn effective_conditions(&self) -> BTreeSet<String> {
        let mut tags = self.conditions.clone();
        for source in &self.applied {
            tags.extend(source.roll_options.iter().cloned());
        }
        tags
    }

    fn sync_conditions(&mut self) {
        let tags = self.effective_conditions();
        for stat in self.statistics.values_mut() {
            stat.set_active_conditions(tags.iter().cloned());
        }
    }

    // === Queries ===

    pub fn value(&self, selector: &str) -> Option<f64> {
        self.statistics.get(selector).map(Statistic::value)
    }

    pub fn breakdown(&self, selector: &str) -> Option<Breakdown> {
        self.statistics.get(selector).map(Statistic::breakdown)
    }

    /// Breakdowns of every statistic in selector order
    pub fn breakdowns(&self) -> Vec<Breakdown> {
        self.statistics.values().map(Statistic::breakdown).collect()
    }
}
