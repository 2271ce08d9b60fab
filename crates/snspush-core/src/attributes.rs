//! Attribute map sent with create and update calls.

use std::collections::BTreeMap;

/// Attribute key carrying the platform credential (APNS private key or FCM
/// server key).
pub const PLATFORM_CREDENTIAL: &str = "PlatformCredential";

/// Attribute key carrying the platform principal (APNS certificate).
pub const PLATFORM_PRINCIPAL: &str = "PlatformPrincipal";

/// SNS platform application attributes.
///
/// A thin wrapper over an ordered map, built fresh for every invocation from
/// derived credential material plus caller overrides. Ordering is stable so
/// logs and serialized request bodies are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformAttributes {
    entries: BTreeMap<String, String>,
}

impl PlatformAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Merges `overrides` into the map. Later entries win, so callers can
    /// replace derived keys such as [`PLATFORM_CREDENTIAL`].
    pub fn merge(&mut self, overrides: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in overrides {
            self.entries.insert(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for PlatformAttributes {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_existing_values() {
        let mut attributes = PlatformAttributes::new();
        attributes.insert(PLATFORM_CREDENTIAL, "first");
        attributes.insert(PLATFORM_CREDENTIAL, "second");
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes.get(PLATFORM_CREDENTIAL), Some("second"));
    }

    #[test]
    fn merge_overwrites_derived_entries() {
        let mut attributes = PlatformAttributes::new();
        attributes.insert(PLATFORM_CREDENTIAL, "derived-key");
        attributes.insert(PLATFORM_PRINCIPAL, "derived-cert");

        attributes.merge([
            (PLATFORM_CREDENTIAL.to_string(), "override-key".to_string()),
            ("Enabled".to_string(), "true".to_string()),
        ]);

        assert_eq!(attributes.len(), 3);
        assert_eq!(attributes.get(PLATFORM_CREDENTIAL), Some("override-key"));
        assert_eq!(attributes.get(PLATFORM_PRINCIPAL), Some("derived-cert"));
        assert_eq!(attributes.get("Enabled"), Some("true"));
    }

    #[test]
    fn iteration_order_is_stable() {
        let attributes: PlatformAttributes = [
            ("Zeta".to_string(), "1".to_string()),
            ("Alpha".to_string(), "2".to_string()),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = attributes.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["Alpha", "Zeta"]);
    }
}
