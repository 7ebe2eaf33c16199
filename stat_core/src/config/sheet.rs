//! Character sheet configuration

use super::ConfigError;
use crate::rule_element::RuleElement;
use crate::sheet::StatSheet;
use crate::source::EffectSource;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A character's statistics, contributing sources and manual conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    pub name: String,
    #[serde(default)]
    pub statistics: Vec<StatisticConfig>,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticConfig {
    pub selector: String,
    /// Display name, defaults to the selector
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub base: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub rules: Vec<RuleElement>,
}

fn default_active() -> bool {
    true
}

impl SourceConfig {
    pub fn to_effect(&self) -> EffectSource {
        let mut effect = EffectSource::new(self.name.clone()).with_rules(self.rules.iter().cloned());
        effect.set_active(self.active);
        effect
    }
}

impl SheetConfig {
    /// Reject data the engine would silently turn into wrong numbers
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut selectors = HashSet::new();
        for stat in &self.statistics {
            if stat.selector.is_empty() {
                return Err(ConfigError::ValidationError("statistic with empty selector".to_string()));
            }
            if !selectors.insert(stat.selector.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate statistic selector {:?}",
                    stat.selector
                )));
            }
            if !stat.base.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "statistic {:?} has non-finite base value",
                    stat.selector
                )));
            }
        }

        let mut source_names = HashSet::new();
        for source in &self.sources {
            if source.name.is_empty() {
                return Err(ConfigError::ValidationError("source with empty name".to_string()));
            }
            // Sources are retracted by name, so a repeat would replace the earlier one
            if !source_names.insert(source.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate source name {:?}",
                    source.name
                )));
            }
            for rule in &source.rules {
                match rule {
                    RuleElement::FlatModifier { selector, value, .. } => {
                        if selector.is_empty() {
                            return Err(ConfigError::ValidationError(format!(
                                "{}: modifier with empty selector",
                                source.name
                            )));
                        }
                        if !value.is_finite() {
                            return Err(ConfigError::ValidationError(format!(
                                "{}: non-finite modifier value for {:?}",
                                source.name, selector
                            )));
                        }
                    }
                    RuleElement::RollOption { option } => {
                        if option.is_empty() {
                            return Err(ConfigError::ValidationError(format!(
                                "{}: empty roll option",
                                source.name
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Validate and build a populated sheet; inactive sources are skipped
    pub fn build(&self) -> Result<StatSheet, ConfigError> {
        self.validate()?;

        let mut sheet = StatSheet::new(self.name.clone());
        for stat in &self.statistics {
            let name = stat.name.clone().unwrap_or_else(|| stat.selector.clone());
            sheet.add_statistic(stat.selector.clone(), name, stat.base);
        }
        sheet.set_conditions(self.conditions.iter().cloned());

        for source in self.sources.iter().filter(|s| s.active) {
            sheet.apply_source(&source.to_effect());
        }

        log::debug!(
            "built sheet {} with {} statistic(s) and {} source(s)",
            self.name,
            self.statistics.len(),
            sheet.applied_sources().count()
        );
        Ok(sheet)
    }
}
