// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use regex::Regex;
use std::collections::BTreeSet;
use varscope_props::PropertyRecord;

/// Predicate shape of a filter rule.
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Key is a member of a fixed name set.
    KeyExact(BTreeSet<String>),
    /// Any pattern matches anywhere in the key.
    KeyRegex(Vec<Regex>),
    /// Type label is a member of a fixed set.
    TypeExact(BTreeSet<String>),
    /// Unconditionally true.
    MatchAll,
}

/// A named, immutable filter. The name carries no `+`/`-` prefix; signs
/// belong to expression tokens.
#[derive(Debug, Clone)]
pub struct FilterRule {
    name: String,
    kind: RuleKind,
}

impl FilterRule {
    pub fn key_exact<I, S>(name: &str, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_owned(),
            kind: RuleKind::KeyExact(keys.into_iter().map(Into::into).collect()),
        }
    }

    pub fn key_regex(name: &str, patterns: &[&str]) -> Result<Self, regex::Error> {
        let compiled = patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: name.to_owned(),
            kind: RuleKind::KeyRegex(compiled),
        })
    }

    pub fn type_exact<I, S>(name: &str, type_labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_owned(),
            kind: RuleKind::TypeExact(type_labels.into_iter().map(Into::into).collect()),
        }
    }

    pub fn match_all(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            kind: RuleKind::MatchAll,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// One boolean per input record, in input order.
    pub fn matches<'a, I>(&self, records: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a PropertyRecord>,
    {
        records
            .into_iter()
            .map(|record| self.matches_record(record))
            .collect()
    }

    pub fn matches_record(&self, record: &PropertyRecord) -> bool {
        match &self.kind {
            RuleKind::KeyExact(keys) => keys.contains(&record.key),
            RuleKind::KeyRegex(patterns) => {
                patterns.iter().any(|pattern| pattern.is_match(&record.key))
            }
            RuleKind::TypeExact(type_labels) => type_labels.contains(&record.type_label),
            RuleKind::MatchAll => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterRule;
    use varscope_props::PropertyRecord;

    fn record(key: &str, type_label: &str) -> PropertyRecord {
        PropertyRecord {
            key: key.to_owned(),
            type_label: type_label.to_owned(),
            size_label: "1".to_owned(),
            value_label: String::new(),
            flag_colors: Vec::new(),
        }
    }

    #[test]
    fn key_exact_matches_membership() {
        let rule = FilterRule::key_exact("history", ["In", "Out"]);
        let records = [record("In", "list"), record("x", "int")];
        assert_eq!(rule.matches(&records), vec![true, false]);
    }

    #[test]
    fn key_regex_matches_any_pattern() {
        let rule = FilterRule::key_regex("privates", &["^_"]).expect("pattern compiles");
        let records = [record("_hidden", "int"), record("visible", "int")];
        assert_eq!(rule.matches(&records), vec![true, false]);
    }

    #[test]
    fn type_exact_matches_on_type_label() {
        let rule = FilterRule::type_exact("ints", ["int"]);
        let records = [record("a", "int"), record("b", "str")];
        assert_eq!(rule.matches(&records), vec![true, false]);
    }

    #[test]
    fn match_all_is_unconditional() {
        let rule = FilterRule::match_all("all");
        let records = [record("a", "int"), record("b", "str")];
        assert_eq!(rule.matches(&records), vec![true, true]);
    }

    #[test]
    fn invalid_regex_is_rejected() {
        assert!(FilterRule::key_regex("broken", &["["]).is_err());
    }
}
