// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::rule::FilterRule;
use std::collections::BTreeMap;

/// Canonical default expression applied to a fresh session.
pub const DEFAULT_EXPRESSION: &str =
    "-all +simples +iterables -ipython_history -caps -special_floats -privates -misc_rubbish";

/// Explicit, read-only registry of filter rules, passed into the engine at
/// call time. Built once at startup; the panel never mutates it.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: BTreeMap<String, FilterRule>,
}

impl RuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed stock catalog consumed by [`DEFAULT_EXPRESSION`].
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.insert(FilterRule::type_exact(
            "simples",
            [
                "int", "float", "complex", "long", "bool", "str", "unicode", "buffer", "int8",
                "uint8", "int16", "uint16", "int32", "uint32", "int64", "uint64", "float16",
                "float32", "float64", "complex64", "complex128", "datetime64", "timedelta64",
            ],
        ));
        catalog.insert(FilterRule::key_exact(
            "special_floats",
            [
                "e",
                "euler_gamma",
                "inf",
                "Inf",
                "Infinity",
                "infty",
                "NaN",
                "nan",
                "pi",
            ],
        ));
        catalog.insert(FilterRule::type_exact(
            "functions",
            [
                "function",
                "ufunc",
                "builtin_function_or_method",
                "instancemethod",
            ],
        ));
        catalog.insert(FilterRule::type_exact("types_etc", ["type", "module"]));
        catalog.insert(
            FilterRule::key_regex("privates", &["^_"]).expect("built-in pattern compiles"),
        );
        catalog.insert(
            FilterRule::key_regex("caps", &["^[A-Z0-9_]+$"]).expect("built-in pattern compiles"),
        );
        catalog.insert(FilterRule::match_all("all"));
        catalog.insert(FilterRule::type_exact(
            "iterables",
            ["dict", "list", "set", "tuple"],
        ));
        catalog.insert(FilterRule::key_exact("ipython_history", ["In", "Out"]));
        catalog.insert(FilterRule::key_exact(
            "misc_rubbish",
            [
                "little_endian",
                "ScalarType",
                "sctypeDict",
                "sctypeNA",
                "sctypes",
                "typecodes",
                "typeDict",
                "typeNA",
                "using_mklfft",
            ],
        ));
        catalog
    }

    pub fn insert(&mut self, rule: FilterRule) {
        self.rules.insert(rule.name().to_owned(), rule);
    }

    pub fn get(&self, name: &str) -> Option<&FilterRule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_EXPRESSION, RuleCatalog};

    #[test]
    fn standard_catalog_defines_the_stock_rules() {
        let catalog = RuleCatalog::standard();
        for name in [
            "all",
            "simples",
            "iterables",
            "privates",
            "caps",
            "special_floats",
            "functions",
            "types_etc",
            "ipython_history",
            "misc_rubbish",
        ] {
            assert!(catalog.contains(name), "missing rule {name}");
        }
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn default_expression_references_only_registered_rules() {
        let catalog = RuleCatalog::standard();
        for token in DEFAULT_EXPRESSION.split_whitespace() {
            let name = &token[1..];
            assert!(catalog.contains(name), "unregistered rule {name}");
        }
    }
}
