// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Hard cap applied to value text at presentation time. Records keep the
/// full rendering; see [`truncate_label`].
pub const VALUE_DISPLAY_LIMIT: usize = 2000;

pub const ELLIPSIS: &str = "...";

/// Summary row for one named value in the session namespace.
///
/// Immutable once produced for a given snapshot. `value_label` holds the
/// full (container-capped) rendering; display-time truncation is the
/// consumer's job. `flag_colors` has one entry per ancestor in the value's
/// type ancestry, most-derived first, and is empty when the ancestry could
/// not be determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub key: String,
    pub type_label: String,
    pub size_label: String,
    pub value_label: String,
    pub flag_colors: Vec<String>,
}

/// Expanded metadata for one row, fetched on demand from the host.
///
/// Two field names are reserved: `value` overrides the summary value text
/// and `html` is an optional rich supplement appended to the detail view.
/// Never cached across requests; the host is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord(pub BTreeMap<String, String>);

impl MetadataRecord {
    pub fn insert(&mut self, field: &str, text: &str) {
        self.0.insert(field.to_owned(), text.to_owned());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(field, text)| (field.as_str(), text.as_str()))
    }
}

/// Deterministic 24-bit color for a type name: the first three bytes of
/// the SHA-256 digest of the UTF-8 name, rendered as `#rrggbb`.
pub fn name_color(name: &str) -> String {
    let digest = Sha256::digest(name.as_bytes());
    format!("#{:02x}{:02x}{:02x}", digest[0], digest[1], digest[2])
}

/// One color per ancestor, in ancestry order.
pub fn flag_colors(ancestry: &[String]) -> Vec<String> {
    ancestry.iter().map(|name| name_color(name)).collect()
}

/// Presentation-time cap: text longer than [`VALUE_DISPLAY_LIMIT`]
/// characters is cut there, trailing whitespace trimmed, and an ellipsis
/// appended. Text at or under the limit is returned untouched.
pub fn truncate_label(text: &str) -> String {
    let mut chars = text.char_indices();
    match chars.nth(VALUE_DISPLAY_LIMIT) {
        None => text.to_owned(),
        Some((cut, _)) => {
            let mut out = text[..cut].trim_end().to_owned();
            out.push_str(ELLIPSIS);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MetadataRecord, VALUE_DISPLAY_LIMIT, flag_colors, name_color, truncate_label};

    #[test]
    fn name_color_is_deterministic() {
        assert_eq!(name_color("int"), name_color("int"));
        assert_ne!(name_color("int"), name_color("float"));
    }

    #[test]
    fn name_color_is_a_six_digit_hex_code() {
        let color = name_color("ndarray");
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn flag_colors_match_ancestry_length() {
        let ancestry = vec!["bool".to_owned(), "int".to_owned(), "object".to_owned()];
        let colors = flag_colors(&ancestry);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1], name_color("int"));
    }

    #[test]
    fn flag_colors_empty_for_unknown_ancestry() {
        assert!(flag_colors(&[]).is_empty());
    }

    #[test]
    fn truncate_leaves_text_at_the_limit_untouched() {
        let text = "a".repeat(VALUE_DISPLAY_LIMIT);
        assert_eq!(truncate_label(&text), text);
    }

    #[test]
    fn truncate_cuts_one_past_the_limit() {
        let text = "a".repeat(VALUE_DISPLAY_LIMIT + 1);
        let truncated = truncate_label(&text);
        assert_eq!(truncated.len(), VALUE_DISPLAY_LIMIT + 3);
        assert!(truncated.ends_with("a..."));
    }

    #[test]
    fn truncate_trims_trailing_whitespace_before_the_ellipsis() {
        let mut text = "b".repeat(VALUE_DISPLAY_LIMIT - 5);
        text.push_str("      x");
        let truncated = truncate_label(&text);
        assert!(truncated.ends_with("b..."));
        assert!(!truncated.contains(' '));
    }

    #[test]
    fn truncate_respects_multibyte_boundaries() {
        let text = "\u{6771}".repeat(VALUE_DISPLAY_LIMIT + 10);
        let truncated = truncate_label(&text);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), VALUE_DISPLAY_LIMIT + 3);
    }

    #[test]
    fn metadata_record_reserved_field_access() {
        let mut record = MetadataRecord::default();
        record.insert("value", "override");
        record.insert("dtype", "float64");
        assert_eq!(record.remove("value").as_deref(), Some("override"));
        assert_eq!(record.get("dtype"), Some("float64"));
        assert!(record.remove("html").is_none());
    }
}
