//! Property tests for the stacking rules

use proptest::prelude::*;
use stat_core::prelude::*;
use std::collections::BTreeSet;

const SOURCES: &[&str] = &["Bless", "Heroism", "Armor", "Feat"];
const TAGS: &[&str] = &["raging", "flanked", "shield-raised"];

fn kind() -> impl Strategy<Value = ModifierKind> {
    prop_oneof![
        Just(ModifierKind::Status),
        Just(ModifierKind::Circumstance),
        Just(ModifierKind::Item),
        Just(ModifierKind::Untyped),
    ]
}

fn typed_kind() -> impl Strategy<Value = ModifierKind> {
    prop_oneof![
        Just(ModifierKind::Status),
        Just(ModifierKind::Circumstance),
        Just(ModifierKind::Item),
    ]
}

// Whole-number values keep every sum exact
fn modifier() -> impl Strategy<Value = Modifier> {
    (
        0..SOURCES.len(),
        -10i32..=10,
        kind(),
        prop::collection::vec(0..TAGS.len(), 0..3),
        prop::bool::weighted(0.9),
    )
        .prop_map(|(source, value, kind, tags, enabled)| {
            Modifier::new(SOURCES[source], SOURCES[source], value as f64, kind, "stat")
                .with_predicate(tags.into_iter().map(|i| TAGS[i]))
                .with_enabled(enabled)
        })
}

fn conditions() -> impl Strategy<Value = BTreeSet<String>> {
    prop::sample::subsequence(TAGS.to_vec(), 0..=TAGS.len())
        .prop_map(|tags| tags.into_iter().map(str::to_string).collect())
}

fn statistic(base: i32, modifiers: &[Modifier], active: &BTreeSet<String>) -> Statistic {
    let mut stat = Statistic::new("Stat", base as f64);
    for m in modifiers {
        stat.add_modifier(m.clone());
    }
    stat.set_active_conditions(active.iter().cloned());
    stat
}

/// Straightforward restatement of the stacking rules
fn expected_total(modifiers: &[Modifier], active: &BTreeSet<String>) -> f64 {
    let applicable: Vec<_> = modifiers.iter().filter(|m| m.should_apply(active)).collect();
    let untyped: f64 = applicable
        .iter()
        .filter(|m| m.is_bonus() && m.kind == ModifierKind::Untyped)
        .map(|m| m.value)
        .sum();
    let typed: f64 = ModifierKind::all()
        .iter()
        .filter(|k| k.is_typed())
        .filter_map(|k| {
            applicable
                .iter()
                .filter(|m| m.is_bonus() && m.kind == *k)
                .map(|m| m.value)
                .fold(None, |max: Option<f64>, v| Some(max.map_or(v, |x| x.max(v))))
        })
        .sum();
    let penalties: f64 = applicable.iter().filter(|m| m.is_penalty()).map(|m| m.value).sum();
    untyped + typed + penalties
}

proptest! {
    #[test]
    fn value_matches_reference(
        base in -20i32..40,
        mods in prop::collection::vec(modifier(), 0..30),
        active in conditions(),
    ) {
        let stat = statistic(base, &mods, &active);
        prop_assert_eq!(stat.value(), base as f64 + expected_total(&mods, &active));
    }

    #[test]
    fn repeated_queries_are_identical(
        base in -20i32..40,
        mods in prop::collection::vec(modifier(), 0..30),
        active in conditions(),
    ) {
        let stat = statistic(base, &mods, &active);
        prop_assert_eq!(stat.value(), stat.value());
        prop_assert_eq!(stat.breakdown(), stat.breakdown());
    }

    #[test]
    fn breakdown_agrees_with_value(
        base in -20i32..40,
        mods in prop::collection::vec(modifier(), 0..30),
        active in conditions(),
    ) {
        let stat = statistic(base, &mods, &active);
        let breakdown = stat.breakdown();
        prop_assert_eq!(breakdown.final_value, stat.value());
        prop_assert_eq!(breakdown.base_value + breakdown.total_modifier, breakdown.final_value);
        prop_assert!(breakdown.penalties.iter().all(|m| m.is_penalty()));
        prop_assert!(breakdown.bonuses.iter().all(|b| b.modifier.is_bonus()));
        prop_assert!(breakdown.applicable.iter().all(|m| m.should_apply(&active)));
    }

    #[test]
    fn untyped_bonuses_sum(values in prop::collection::vec(1i32..=10, 1..12)) {
        let mut stat = Statistic::new("Speed", 0.0);
        for v in &values {
            stat.add_modifier(Modifier::untyped("Feat", *v as f64, "speed"));
        }
        let sum: i32 = values.iter().sum();
        prop_assert_eq!(stat.value(), sum as f64);
        prop_assert!(stat.breakdown().bonuses.iter().all(|b| b.applied));
    }

    #[test]
    fn typed_bonuses_take_max(kind in typed_kind(), values in prop::collection::vec(1i32..=5, 1..12)) {
        let mut stat = Statistic::new("AC", 10.0);
        for (i, v) in values.iter().enumerate() {
            stat.add_modifier(Modifier::new(format!("m{}", i), format!("s{}", i), *v as f64, kind, "ac"));
        }
        let max = *values.iter().max().unwrap();
        prop_assert_eq!(stat.value(), 10.0 + max as f64);

        let breakdown = stat.breakdown();
        let tied = values.iter().filter(|v| **v == max).count();
        prop_assert_eq!(breakdown.applied_bonuses().count(), tied);
        prop_assert!(breakdown.applied_bonuses().all(|b| b.modifier.value == max as f64));
        prop_assert_eq!(breakdown.suppressed_bonuses().count(), values.len() - tied);
    }

    #[test]
    fn penalties_always_add(penalties in prop::collection::vec((-5i32..=-1, kind()), 1..12)) {
        let mut stat = Statistic::new("Attack", 0.0);
        for (v, kind) in &penalties {
            stat.add_modifier(Modifier::new("Penalty", "Condition", *v as f64, *kind, "attack"));
        }
        let sum: i32 = penalties.iter().map(|(v, _)| v).sum();
        prop_assert_eq!(stat.value(), sum as f64);
        prop_assert_eq!(stat.breakdown().penalties.len(), penalties.len());
    }

    #[test]
    fn predicate_requires_every_tag(value in 1i32..=5, has_first: bool, has_second: bool) {
        let mut stat = Statistic::new("Damage", 0.0);
        stat.add_modifier(Modifier::untyped("Rage", value as f64, "damage").with_predicate(["p1", "p2"]));
        if has_first {
            stat.add_condition("p1");
        }
        if has_second {
            stat.add_condition("p2");
        }
        let expected = if has_first && has_second { value as f64 } else { 0.0 };
        prop_assert_eq!(stat.value(), expected);

        stat.remove_condition("p1");
        prop_assert_eq!(stat.value(), 0.0);
    }

    #[test]
    fn removing_a_source_leaves_none_behind(
        mods in prop::collection::vec(modifier(), 0..30),
        target in prop::sample::select(SOURCES),
    ) {
        let active: BTreeSet<String> = TAGS.iter().map(|t| t.to_string()).collect();
        let mut stat = statistic(0, &mods, &active);
        let expected_removed = mods.iter().filter(|m| m.source == target).count();

        prop_assert_eq!(stat.remove_modifiers_by_source(target), expected_removed);
        prop_assert!(stat.modifiers().all(|(_, m)| m.source != target));

        let remaining: Vec<Modifier> = mods.into_iter().filter(|m| m.source != target).collect();
        prop_assert_eq!(stat.value(), expected_total(&remaining, &active));
    }
}
