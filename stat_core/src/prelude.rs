//! Prelude module for convenient imports
//!
//! ```rust
//! use stat_core::prelude::*;
//! ```

// Core types
pub use crate::modifier::{Modifier, Predicate};
pub use crate::statistic::{BonusEntry, Breakdown, Statistic};
pub use crate::types::{ModifierId, ModifierKind};

// Sources
pub use crate::rule_element::RuleElement;
pub use crate::sheet::StatSheet;
pub use crate::source::{EffectPresets, EffectSource, ModifierSource};

// Config
pub use crate::config::{load_sheet, ConfigError, SheetConfig};
