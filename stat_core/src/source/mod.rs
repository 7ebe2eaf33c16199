//! ModifierSource - Trait and implementations for modifier providers

mod effect;

pub use effect::{EffectPresets, EffectSource};

use crate::modifier::Modifier;

/// Anything that contributes modifiers to a character's statistics
///
/// Feats, spells, equipment and conditions all implement this. Every
/// modifier a source emits carries the source's name, which is what
/// retraction keys on.
pub trait ModifierSource {
    /// Name used as the `source` of every emitted modifier
    fn name(&self) -> &str;

    /// Modifiers this source currently grants
    fn modifiers(&self) -> Vec<Modifier>;

    /// Condition tags this source sets while applied
    fn roll_options(&self) -> Vec<String> {
        Vec::new()
    }
}
