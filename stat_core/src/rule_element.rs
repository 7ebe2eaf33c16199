//! RuleElement - Declarative rule records parsed at the data boundary
//!
//! Raw game data is loosely typed. Each known record kind becomes a variant
//! here so the engine only ever receives well-formed [`Modifier`] values.

use crate::modifier::{Modifier, Predicate};
use crate::types::ModifierKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key")]
pub enum RuleElement {
    /// Grant a fixed bonus or penalty to one selector
    FlatModifier {
        selector: String,
        value: f64,
        #[serde(default, rename = "type")]
        kind: ModifierKind,
        /// Defaults to the owning source's name
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        predicate: Predicate,
        #[serde(default = "default_enabled")]
        enabled: bool,
        #[serde(default)]
        description: Option<String>,
    },
    /// Set a condition tag while the owning source is applied
    RollOption { option: String },
}

fn default_enabled() -> bool {
    true
}

impl RuleElement {
    /// Build a flat modifier rule with default label and no predicate
    pub fn flat(selector: &str, value: f64, kind: ModifierKind) -> Self {
        RuleElement::FlatModifier {
            selector: selector.to_string(),
            value,
            kind,
            label: None,
            predicate: Predicate::always(),
            enabled: true,
            description: None,
        }
    }

    pub fn roll_option(option: &str) -> Self {
        RuleElement::RollOption {
            option: option.to_string(),
        }
    }

    /// Emit the modifier this rule grants, if any
    pub fn to_modifier(&self, source: &str) -> Option<Modifier> {
        match self {
            RuleElement::FlatModifier {
                selector,
                value,
                kind,
                label,
                predicate,
                enabled,
                description,
            } => Some(Modifier {
                label: label.clone().unwrap_or_else(|| source.to_string()),
                source: source.to_string(),
                value: *value,
                kind: *kind,
                selector: selector.clone(),
                predicate: predicate.clone(),
                enabled: *enabled,
                description: description.clone(),
            }),
            RuleElement::RollOption { .. } => None,
        }
    }

    /// Condition tag this rule sets, if any
    pub fn option(&self) -> Option<&str> {
        match self {
            RuleElement::RollOption { option } => Some(option.as_str()),
            RuleElement::FlatModifier { .. } => None,
        }
    }
}
