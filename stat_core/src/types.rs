//! Core types shared by modifiers and statistics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stacking category of a modifier
///
/// Bonuses of the same typed kind do not stack with each other; only the
/// highest one counts. Untyped bonuses always stack. Penalties stack
/// regardless of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    Status,
    Circumstance,
    Item,
    #[default]
    Untyped,
}

impl ModifierKind {
    /// Get all modifier kinds
    pub fn all() -> &'static [ModifierKind] {
        &[
            ModifierKind::Status,
            ModifierKind::Circumstance,
            ModifierKind::Item,
            ModifierKind::Untyped,
        ]
    }

    /// Whether bonuses of this kind suppress each other
    pub fn is_typed(self) -> bool {
        !matches!(self, ModifierKind::Untyped)
    }

    /// Lowercase label used in breakdown reasons
    pub fn label(self) -> &'static str {
        match self {
            ModifierKind::Status => "status",
            ModifierKind::Circumstance => "circumstance",
            ModifierKind::Item => "item",
            ModifierKind::Untyped => "untyped",
        }
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Handle to one modifier instance inside a [`Statistic`](crate::Statistic)
///
/// Handles are unique per statistic, so two modifiers with identical fields
/// can still be removed individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModifierId(pub u64);

impl fmt::Display for ModifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
