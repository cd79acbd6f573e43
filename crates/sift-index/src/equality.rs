//! Key equality policies.
//!
//! Indexes decide when two keys are the same, which may differ from the key
//! type's own `Eq` (e.g. case-insensitive document names). The translator
//! groups, excludes and filters keys through the policy of its indexes.

use std::hash::{Hash, Hasher};

/// Decides whether two keys refer to the same match.
///
/// Implementations must keep `hash_key` consistent with `equals`: keys that
/// compare equal must hash identically.
pub trait KeyEquality<K> {
    /// Returns true if `a` and `b` are the same key.
    fn equals(&self, a: &K, b: &K) -> bool;

    /// Feeds the key into `state`.
    fn hash_key<H: Hasher>(&self, key: &K, state: &mut H);
}

/// Equality through the key type's own `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquality;

impl<K: Eq + Hash> KeyEquality<K> for DefaultEquality {
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }

    fn hash_key<H: Hasher>(&self, key: &K, state: &mut H) {
        key.hash(state);
    }
}

/// Equality of string keys ignoring ASCII case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiCaseInsensitive;

impl<K: AsRef<str>> KeyEquality<K> for AsciiCaseInsensitive {
    fn equals(&self, a: &K, b: &K) -> bool {
        a.as_ref().eq_ignore_ascii_case(b.as_ref())
    }

    fn hash_key<H: Hasher>(&self, key: &K, state: &mut H) {
        for byte in key.as_ref().bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

/// A key that hashes and compares through an equality policy.
///
/// Lets standard hash collections group keys by the policy instead of the
/// key type's own `Eq`.
pub struct PolicyKey<'e, K, E> {
    /// The wrapped key.
    key: K,
    /// Policy used for hashing and comparison.
    equality: &'e E,
}

impl<'e, K, E> PolicyKey<'e, K, E> {
    /// Wraps `key` under `equality`.
    pub fn new(key: K, equality: &'e E) -> Self {
        Self { key, equality }
    }
}

impl<K, E: KeyEquality<K>> PartialEq for PolicyKey<'_, K, E> {
    fn eq(&self, other: &Self) -> bool {
        self.equality.equals(&self.key, &other.key)
    }
}

impl<K, E: KeyEquality<K>> Eq for PolicyKey<'_, K, E> {}

impl<K, E: KeyEquality<K>> Hash for PolicyKey<'_, K, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.equality.hash_key(&self.key, state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn default_equality_uses_eq() {
        assert!(DefaultEquality.equals(&1, &1));
        assert!(!DefaultEquality.equals(&1, &2));
    }

    #[test]
    fn case_insensitive_equality() {
        let policy = AsciiCaseInsensitive;
        assert!(policy.equals(&"Guide", &"gUIDE"));
        assert!(!policy.equals(&"guide", &"guides"));
    }

    #[test]
    fn policy_keys_group_by_policy() {
        let policy = AsciiCaseInsensitive;
        let keys: HashSet<PolicyKey<'_, String, _>> = ["Doc", "doc", "DOC", "other"]
            .into_iter()
            .map(|k| PolicyKey::new(k.to_string(), &policy))
            .collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&PolicyKey::new("dOc".to_string(), &policy)));
    }
}
