//! stat_core - Modifier stacking engine for tabletop character statistics
//!
//! This library provides:
//! - Modifier: A typed, sourced, optionally conditional bonus or penalty
//! - Statistic: Base value plus modifiers, reduced by the stacking rules
//! - Breakdown: Auditable explanation of a statistic's value
//! - StatSheet: Routes modifiers from feats, spells and items by selector

pub mod config;
pub mod modifier;
pub mod prelude;
pub mod rule_element;
pub mod sheet;
pub mod source;
pub mod statistic;
pub mod types;

// Re-export core types for convenience
pub use config::{load_sheet, ConfigError, SheetConfig};
pub use modifier::{Modifier, Predicate};
pub use rule_element::RuleElement;
pub use sheet::StatSheet;
pub use source::{EffectPresets, EffectSource, ModifierSource};
pub use statistic::{BonusEntry, Breakdown, Statistic};
pub use types::{ModifierId, ModifierKind};
