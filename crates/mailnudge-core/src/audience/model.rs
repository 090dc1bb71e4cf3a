//! Audience set model.

/// A set of email addresses for one reminder.
///
/// Deduplicated case-insensitively, order-preserving on first occurrence,
/// with the first-seen casing retained per address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Audience {
    addresses: Vec<String>,
}

impl Audience {
    /// Create an empty audience.
    #[must_use]
    pub const fn new() -> Self {
        Self { addresses: Vec::new() }
    }

    /// Add an address. Returns `false` if an equivalent address (ignoring
    /// case) is already present.
    pub fn insert(&mut self, address: &str) -> bool {
        if self.contains(address) {
            return false;
        }
        self.addresses.push(address.to_string());
        true
    }

    /// Remove an address, ignoring case.
    pub fn remove(&mut self, address: &str) {
        self.addresses.retain(|a| !a.eq_ignore_ascii_case(address));
    }

    /// Whether an equivalent address is present, ignoring case.
    #[must_use]
    pub fn contains(&self, address: &str) -> bool {
        self.addresses.iter().any(|a| a.eq_ignore_ascii_case(address))
    }

    /// Whether the audience is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Number of addresses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// The addresses in insertion order.
    #[must_use]
    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    /// Iterate over the addresses in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.addresses.iter()
    }
}

impl<'a> IntoIterator for &'a Audience {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}

impl<A: AsRef<str>> FromIterator<A> for Audience {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        let mut audience = Self::new();
        for address in iter {
            audience.insert(address.as_ref());
        }
        audience
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.addresses.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_dedups_case_insensitively() {
        let mut audience = Audience::new();
        assert!(audience.insert("Alice@X.com"));
        assert!(!audience.insert("alice@x.com"));
        assert_eq!(audience.addresses(), ["Alice@X.com"]);
    }

    #[test]
    fn test_first_seen_casing_is_kept() {
        let audience: Audience = ["Bob@x.com", "BOB@X.COM", "a@x.com"].into_iter().collect();
        assert_eq!(audience.addresses(), ["Bob@x.com", "a@x.com"]);
    }

    #[test]
    fn test_remove_ignores_case() {
        let mut audience: Audience = ["A@x.com", "b@x.com"].into_iter().collect();
        audience.remove("a@X.COM");
        assert_eq!(audience.addresses(), ["b@x.com"]);
    }

    #[test]
    fn test_display_joins_with_semicolons() {
        let audience: Audience = ["a@x.com", "b@x.com"].into_iter().collect();
        assert_eq!(audience.to_string(), "a@x.com; b@x.com");
    }

    proptest! {
        #[test]
        fn prop_no_duplicate_lowercased_addresses(
            input in proptest::collection::vec("[a-zA-Z]{1,6}@[a-z]{1,5}\\.com", 0..12)
        ) {
            let audience: Audience = input.iter().collect();
            let mut seen: Vec<String> = audience.iter().map(|a| a.to_lowercase()).collect();
            seen.sort();
            let before = seen.len();
            seen.dedup();
            prop_assert_eq!(before, seen.len());
        }
    }
}
