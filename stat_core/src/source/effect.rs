//! EffectSource - Feats, spells, items and conditions built from rule elements

use crate::modifier::Modifier;
use crate::rule_element::RuleElement;
use crate::source::ModifierSource;
use crate::types::ModifierKind;

/// A named effect carrying declarative rules
#[derive(Debug, Clone)]
pub struct EffectSource {
    /// Display name, also the `source` of emitted modifiers
    pub name: String,
    /// Toggled off effects contribute nothing
    pub active: bool,
    rules: Vec<RuleElement>,
}

impl EffectSource {
    /// Create an active effect with no rules
    pub fn new(name: impl Into<String>) -> Self {
        EffectSource {
            name: name.into(),
            active: true,
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: RuleElement) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = RuleElement>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Add a flat modifier rule
    pub fn with_flat_modifier(self, selector: &str, value: f64, kind: ModifierKind) -> Self {
        self.with_rule(RuleElement::flat(selector, value, kind))
    }

    /// Add a rule setting a condition tag
    pub fn with_roll_option(self, option: &str) -> Self {
        self.with_rule(RuleElement::roll_option(option))
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn rules(&self) -> &[RuleElement] {
        &self.rules
    }
}

impl ModifierSource for EffectSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn modifiers(&self) -> Vec<Modifier> {
        if !self.active {
            return Vec::new();
        }
        self.rules
            .iter()
            .filter_map(|rule| rule.to_modifier(&self.name))
            .collect()
    }

    fn roll_options(&self) -> Vec<String> {
        if !self.active {
            return Vec::new();
        }
        self.rules
            .iter()
            .filter_map(|rule| rule.option().map(str::to_string))
            .collect()
    }
}

/// Common effect presets
pub struct EffectPresets;

impl EffectPresets {
    /// Status bonus to attack rolls
    pub fn bless() -> EffectSource {
        EffectSource::new("Bless").with_flat_modifier("attack", 1.0, ModifierKind::Status)
    }

    /// Status penalty to every check and DC listed in `selectors`
    pub fn frightened(value: u32, selectors: &[&str]) -> EffectSource {
        let penalty = -(value as f64);
        selectors.iter().fold(
            EffectSource::new(format!("Frightened {}", value)).with_roll_option("frightened"),
            |effect, selector| effect.with_flat_modifier(selector, penalty, ModifierKind::Status),
        )
    }

    /// Circumstance bonus to AC while the shield is raised
    pub fn raise_a_shield(bonus: f64) -> EffectSource {
        EffectSource::new("Raise a Shield").with_rule(RuleElement::FlatModifier {
            selector: "ac".to_string(),
            value: bonus,
            kind: ModifierKind::Circumstance,
            label: None,
            predicate: ["shield-raised"].into_iter().collect(),
            enabled: true,
            description: None,
        })
    }

    /// Sets "raging" and grants conditional damage
    pub fn rage(damage: f64) -> EffectSource {
        EffectSource::new("Rage")
            .with_roll_option("raging")
            .with_rule(RuleElement::FlatModifier {
                selector: "damage".to_string(),
                value: damage,
                kind: ModifierKind::Untyped,
                label: Some("Rage Damage".to_string()),
                predicate: ["raging"].into_iter().collect(),
                enabled: true,
                description: None,
            })
            .with_flat_modifier("ac", -1.0, ModifierKind::Untyped)
    }
}
