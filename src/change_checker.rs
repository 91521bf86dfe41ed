//! Cheap change detection over lists of version keys.
//!
//! A [`ChangeChecker`] holds a baseline key list and answers whether a new key
//! list differs from it. Comparison policy is chosen with [`KeyCheckerKind`].

use std::collections::HashSet;

/// Comparison policy used to build a [`KeyChecker`] from a baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyCheckerKind {
    /// Set membership plus a length check; insensitive to ordering.
    #[default]
    Unordered,
    /// Position-by-position equality; sensitive to ordering.
    Ordered,
}

impl KeyCheckerKind {
    /// Build a checker whose baseline is `baseline`.
    pub fn checker(self, baseline: Vec<String>) -> KeyChecker {
        match self {
            KeyCheckerKind::Unordered => KeyChecker::Unordered {
                len: baseline.len(),
                keys: baseline.into_iter().collect(),
            },
            KeyCheckerKind::Ordered => KeyChecker::Ordered { keys: baseline },
        }
    }
}

/// A baseline key list together with the policy used to compare against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyChecker {
    Unordered { len: usize, keys: HashSet<String> },
    Ordered { keys: Vec<String> },
}

impl KeyChecker {
    /// Whether `candidate` is equal to the baseline under this policy.
    pub fn matches(&self, candidate: &[String]) -> bool {
        match self {
            KeyChecker::Unordered { len, keys } => {
                candidate.len() == *len && candidate.iter().all(|key| keys.contains(key))
            }
            KeyChecker::Ordered { keys } => keys.as_slice() == candidate,
        }
    }
}

/// Stateful detector: the baseline only advances when a change is seen.
#[derive(Debug, Clone)]
pub struct ChangeChecker {
    kind: KeyCheckerKind,
    checker: KeyChecker,
}

impl ChangeChecker {
    /// `None` selects [`KeyCheckerKind::Unordered`].
    pub fn new(initial_keys: Vec<String>, kind: Option<KeyCheckerKind>) -> Self {
        let kind = kind.unwrap_or_default();
        Self {
            kind,
            checker: kind.checker(initial_keys),
        }
    }

    /// Compare `keys` against the baseline. On a mismatch the baseline is
    /// replaced by `keys` and `true` is returned; otherwise it is untouched.
    pub fn has_changed(&mut self, keys: Vec<String>) -> bool {
        if self.checker.matches(&keys) {
            return false;
        }

        self.checker = self.kind.checker(keys);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_policy_is_unordered() {
        let checker = ChangeChecker::new(Vec::new(), None);
        assert_eq!(checker.kind, KeyCheckerKind::Unordered);
    }

    #[test]
    fn empty_against_empty_is_unchanged() {
        for kind in [KeyCheckerKind::Unordered, KeyCheckerKind::Ordered] {
            let mut checker = ChangeChecker::new(Vec::new(), Some(kind));
            assert!(!checker.has_changed(Vec::new()));
        }
    }

    #[test]
    fn unordered_ignores_reordering() {
        let mut checker = ChangeChecker::new(keys(&["a", "b", "c"]), None);
        assert!(!checker.has_changed(keys(&["c", "a", "b"])));
    }

    #[test]
    fn ordered_detects_reordering() {
        let mut checker = ChangeChecker::new(keys(&["a", "b", "c"]), Some(KeyCheckerKind::Ordered));
        assert!(checker.has_changed(keys(&["c", "a", "b"])));
        assert!(!checker.has_changed(keys(&["c", "a", "b"])));
    }

    #[test]
    fn length_mismatch_is_a_change() {
        for kind in [KeyCheckerKind::Unordered, KeyCheckerKind::Ordered] {
            let mut checker = ChangeChecker::new(keys(&["a", "b"]), Some(kind));
            assert!(checker.has_changed(keys(&["a"])));
            assert!(checker.has_changed(Vec::new()));
            assert!(!checker.has_changed(Vec::new()));
        }
    }

    #[test]
    fn unordered_uses_set_membership_for_duplicates() {
        // Same length, every key present in the baseline set.
        let mut checker = ChangeChecker::new(keys(&["a", "b"]), None);
        assert!(!checker.has_changed(keys(&["a", "a"])));
    }

    #[test]
    fn baseline_untouched_when_unchanged() {
        let mut checker = ChangeChecker::new(keys(&["a"]), None);
        assert!(!checker.has_changed(keys(&["a"])));
        assert_eq!(checker.checker, KeyCheckerKind::Unordered.checker(keys(&["a"])));
    }

    #[test]
    fn baseline_advances_on_change() {
        let mut checker = ChangeChecker::new(keys(&["repo:1:open:N"]), None);
        assert!(checker.has_changed(keys(&["repo:1:merged:N"])));
        assert!(!checker.has_changed(keys(&["repo:1:merged:N"])));
        assert!(checker.has_changed(keys(&["repo:1:open:N"])));
    }

    #[test]
    fn regenerated_checker_keeps_policy() {
        let mut checker = ChangeChecker::new(keys(&["a", "b"]), Some(KeyCheckerKind::Ordered));
        assert!(checker.has_changed(keys(&["b", "c"])));
        assert!(matches!(checker.checker, KeyChecker::Ordered { .. }));
    }
}
