//! Breakdown - Auditable explanation of a statistic's value

use super::stacking::{BonusOutcome, Stacking};
use crate::modifier::Modifier;
use serde::Serialize;
use std::fmt;

/// One bonus and whether it counted toward the total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonusEntry {
    pub modifier: Modifier,
    pub applied: bool,
    /// Human-readable explanation, e.g. "Highest status bonus"
    pub reason: String,
}

/// Structured report of how a statistic's final value was derived
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub name: String,
    pub base_value: f64,
    pub total_modifier: f64,
    pub final_value: f64,
    /// Every modifier that passed the condition filter
    pub applicable: Vec<Modifier>,
    pub bonuses: Vec<BonusEntry>,
    /// All applicable penalties; penalties always apply
    pub penalties: Vec<Modifier>,
}

impl Breakdown {
    pub(crate) fn from_stacking(name: &str, base_value: f64, stacking: &Stacking<'_>) -> Self {
        let total_modifier = stacking.total();

        let bonuses = stacking
            .bonuses
            .iter()
            .map(|(m, outcome)| BonusEntry {
                modifier: (*m).clone(),
                applied: outcome.is_applied(),
                reason: reason(m, outcome),
            })
            .collect();

        Breakdown {
            name: name.to_string(),
            base_value,
            total_modifier,
            final_value: base_value + total_modifier,
            applicable: stacking.applicable.iter().map(|m| (*m).clone()).collect(),
            bonuses,
            penalties: stacking.penalties.iter().map(|m| (*m).clone()).collect(),
        }
    }

    pub fn applied_bonuses(&self) -> impl Iterator<Item = &BonusEntry> {
        self.bonuses.iter().filter(|b| b.applied)
    }

    pub fn suppressed_bonuses(&self) -> impl Iterator<Item = &BonusEntry> {
        self.bonuses.iter().filter(|b| !b.applied)
    }

    /// Sum of penalties
    pub fn penalty_total(&self) -> f64 {
        self.penalties.iter().map(|m| m.value).sum()
    }

    /// Bonus contribution (total minus penalties)
    pub fn bonus_total(&self) -> f64 {
        self.total_modifier - self.penalty_total()
    }
}

fn reason(modifier: &Modifier, outcome: &BonusOutcome<'_>) -> String {
    match outcome {
        BonusOutcome::Stacks => "Untyped bonuses stack".to_string(),
        BonusOutcome::Highest => format!("Highest {} bonus", modifier.kind),
        BonusOutcome::SuppressedBy(source) => {
            format!("Suppressed by higher {} bonus from {}", modifier.kind, source)
        }
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.name, self.final_value)?;
        writeln!(f, "  base {}", self.base_value)?;
        for bonus in &self.bonuses {
            let mark = if bonus.applied { ' ' } else { 'x' };
            writeln!(f, "  {} {} [{}] - {}", mark, bonus.modifier, bonus.modifier.source, bonus.reason)?;
        }
        for penalty in &self.penalties {
            writeln!(f, "    {} [{}]", penalty, penalty.source)?;
        }
        write!(f, "  total modifier {:+}", self.total_modifier)
    }
}
