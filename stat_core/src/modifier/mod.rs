//! Modifier - A labeled, sourced, typed numeric bonus or penalty

mod predicate;

pub use predicate::Predicate;

use crate::types::ModifierKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A single bonus or penalty targeting one statistic
///
/// The sign of `value` decides whether it is a bonus or a penalty; a zero
/// value is legal and contributes nothing. Modifiers are treated as
/// immutable: the `with_*` builders return a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    /// Display name
    pub label: String,
    /// Feat, spell or item that produced this modifier
    pub source: String,
    /// Signed amount
    pub value: f64,
    /// Stacking category
    pub kind: ModifierKind,
    /// Statistic this targets (e.g. "ac", "land-speed")
    pub selector: String,
    /// Condition tags that must all be active
    #[serde(default, skip_serializing_if = "Predicate::is_empty")]
    pub predicate: Predicate,
    /// Manual override, independent of the predicate
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl Modifier {
    /// Create an enabled, always-active modifier
    pub fn new(
        label: impl Into<String>,
        source: impl Into<String>,
        value: f64,
        kind: ModifierKind,
        selector: impl Into<String>,
    ) -> Self {
        Modifier {
            label: label.into(),
            source: source.into(),
            value,
            kind,
            selector: selector.into(),
            predicate: Predicate::always(),
            enabled: true,
            description: None,
        }
    }

    /// Shorthand constructors use the source name as the label
    fn labeled_by_source(source: String, value: f64, kind: ModifierKind, selector: impl Into<String>) -> Self {
        Modifier::new(source.clone(), source, value, kind, selector)
    }

    pub fn untyped(source: impl Into<String>, value: f64, selector: impl Into<String>) -> Self {
        Modifier::labeled_by_source(source.into(), value, ModifierKind::Untyped, selector)
    }

    pub fn status(source: impl Into<String>, value: f64, selector: impl Into<String>) -> Self {
        Modifier::labeled_by_source(source.into(), value, ModifierKind::Status, selector)
    }

    pub fn circumstance(source: impl Into<String>, value: f64, selector: impl Into<String>) -> Self {
        Modifier::labeled_by_source(source.into(), value, ModifierKind::Circumstance, selector)
    }

    pub fn item(source: impl Into<String>, value: f64, selector: impl Into<String>) -> Self {
        Modifier::labeled_by_source(source.into(), value, ModifierKind::Item, selector)
    }

    /// Gate this modifier on a set of condition tags
    pub fn with_predicate<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicate = tags.into_iter().collect();
        self
    }

    /// Set the manual enable toggle
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Turn this modifier off regardless of its predicate
    pub fn disabled(self) -> Self {
        self.with_enabled(false)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_bonus(&self) -> bool {
        self.value > 0.0
    }

    pub fn is_penalty(&self) -> bool {
        self.value < 0.0
    }

    /// Check whether this modifier is active against the given conditions
    pub fn should_apply(&self, active_conditions: &BTreeSet<String>) -> bool {
        if !self.enabled {
            return false;
        }
        self.predicate.is_satisfied_by(active_conditions)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+} {} ({})", self.value, self.kind, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_bonus_and_penalty() {
        assert!(Modifier::status("Bless", 1.0, "attack").is_bonus());
        assert!(Modifier::status("Frightened", -1.0, "attack").is_penalty());

        let zero = Modifier::untyped("Nothing", 0.0, "attack");
        assert!(!zero.is_bonus());
        assert!(!zero.is_penalty());
    }

    #[test]
    fn test_should_apply_without_predicate() {
        let m = Modifier::item("Armor Potency", 1.0, "ac");
        assert!(m.should_apply(&BTreeSet::new()));
    }

    #[test]
    fn test_disabled_never_applies() {
        let m = Modifier::untyped("Rage", 2.0, "damage")
            .with_predicate(["raging"])
            .disabled();
        assert!(!m.should_apply(&conditions(&["raging"])));

        let unconditional = Modifier::untyped("Toggle", 1.0, "ac").disabled();
        assert!(!unconditional.should_apply(&BTreeSet::new()));
    }

    #[test]
    fn test_predicate_gating() {
        let m = Modifier::circumstance("Raise a Shield", 2.0, "ac").with_predicate(["shield-raised"]);
        assert!(!m.should_apply(&BTreeSet::new()));
        assert!(m.should_apply(&conditions(&["shield-raised"])));
    }

    #[test]
    fn test_shorthand_accepts_owned_names() {
        let source = String::from("Heroism");
        let m = Modifier::status(source, 2.0, String::from("will"));
        assert_eq!(m.label, "Heroism");
        assert_eq!(m.source, "Heroism");
        assert_eq!(m.selector, "will");
        assert_eq!(m.kind, ModifierKind::Status);

        let m = Modifier::item(format!("+{} Armor Potency", 1), 1.0, "ac");
        assert_eq!(m.label, m.source);
    }

    #[test]
    fn test_display() {
        assert_eq!(Modifier::status("Heroism", 2.0, "attack").to_string(), "+2 status (Heroism)");
        assert_eq!(Modifier::status("Frightened", -1.0, "attack").to_string(), "-1 status (Frightened)");
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{
            "label": "Fleet",
            "source": "Fleet",
            "value": 5,
            "kind": "untyped",
            "selector": "land-speed"
        }"#;
        let m: Modifier = serde_json::from_str(json).unwrap();
        assert!(m.enabled);
        assert!(m.predicate.is_empty());
        assert!(m.description.is_none());
        assert!((m.value - 5.0).abs() < f64::EPSILON);
    }
}
