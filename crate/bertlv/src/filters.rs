//! Masking filters for sensitive values, consulted by the pretty-printer.

use std::collections::HashMap;

/// A pure value-to-display-string transform.
pub type ValueFilter = fn(&[u8]) -> String;

/// A registry of tag-keyed [`ValueFilter`]s.
///
/// [`FilterRegistry::default`] masks the primary account number (tag `5A`)
/// and track 2 equivalent data (tag `57`). The registry only affects how
/// values are displayed, never the tree itself.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    filters: HashMap<String, ValueFilter>,
}

impl Default for FilterRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("5A", mask_pan);
        registry.register("57", mask_track2);
        registry
    }
}

impl FilterRegistry {
    /// A registry with no filters: every value prints as hex.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// Register `filter` for `tag`, replacing any previous one.
    pub fn register<T: Into<String>>(&mut self, tag: T, filter: ValueFilter) {
        self.filters.insert(tag.into(), filter);
    }

    /// Apply the filter registered for `tag`, if any.
    #[must_use]
    pub fn apply(&self, tag: &str, value: &[u8]) -> Option<String> {
        self.filters.get(tag).map(|filter| filter(value))
    }
}

/// Mask a primary account number, keeping the first 6 and last 4 digits.
#[must_use]
pub fn mask_pan(value: &[u8]) -> String {
    let pan = hex::encode_upper(value);
    if pan.len() < 10 {
        return pan;
    }

    format!("{}****{}", &pan[..6], &pan[pan.len() - 4..])
}

/// Mask track 2 equivalent data, keeping the first 6 digits and the
/// trailing discretionary data.
#[must_use]
pub fn mask_track2(value: &[u8]) -> String {
    let track2 = hex::encode_upper(value);
    if track2.len() < 12 {
        return track2;
    }

    format!("{}****{}", &track2[..6], &track2[12..])
}
