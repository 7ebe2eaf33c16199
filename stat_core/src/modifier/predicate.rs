//! Predicate - Condition tags gating a modifier

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordered list of condition tags that must all be active
///
/// Evaluation is a plain conjunction: every tag must be present in the
/// active-condition set. There is no OR or NOT. An empty predicate is
/// always satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Predicate(Vec<String>);

impl Predicate {
    /// Create an always-satisfied predicate
    pub fn always() -> Self {
        Predicate(Vec::new())
    }

    /// Whether this predicate has no tags
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tags in declaration order
    pub fn tags(&self) -> &[String] {
        &self.0
    }

    /// Check every tag against the active-condition set
    pub fn is_satisfied_by(&self, active: &BTreeSet<String>) -> bool {
        self.0.iter().all(|tag| active.contains(tag))
    }
}

impl<S: Into<String>> FromIterator<S> for Predicate {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Predicate(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for Predicate {
    fn from(tags: Vec<String>) -> Self {
        Predicate(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_predicate_always_satisfied() {
        assert!(Predicate::always().is_satisfied_by(&BTreeSet::new()));
        assert!(Predicate::always().is_satisfied_by(&active(&["raging"])));
    }

    #[test]
    fn test_all_tags_required() {
        let predicate: Predicate = ["raging", "flanked"].into_iter().collect();
        assert!(!predicate.is_satisfied_by(&active(&["raging"])));
        assert!(!predicate.is_satisfied_by(&active(&["flanked"])));
        assert!(predicate.is_satisfied_by(&active(&["flanked", "raging"])));
        assert!(predicate.is_satisfied_by(&active(&["flanked", "raging", "hasted"])));
    }

    #[test]
    fn test_transparent_serde() {
        let predicate: Predicate = serde_json::from_str(r#"["shield-raised"]"#).unwrap();
        assert_eq!(predicate.tags(), &["shield-raised".to_string()]);
        assert_eq!(serde_json::to_string(&predicate).unwrap(), r#"["shield-raised"]"#);
    }
}
