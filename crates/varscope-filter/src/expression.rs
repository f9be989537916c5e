// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::catalog::RuleCatalog;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Include,
    Exclude,
}

impl Sign {
    pub const fn marker(self) -> char {
        match self {
            Self::Include => '+',
            Self::Exclude => '-',
        }
    }
}

/// One signed rule reference, e.g. `-privates` or `+simples`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterToken {
    pub sign: Sign,
    pub rule_name: String,
}

/// Ordered list of signed rule references parsed from free text.
///
/// Parsing is forgiving by contract: whitespace-separated tokens that are
/// not a `+`/`-` marker followed by a registered rule name are silently
/// dropped, never an error. Order is significant: later tokens override
/// earlier ones for the records they touch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterExpression {
    tokens: Vec<FilterToken>,
}

impl FilterExpression {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn parse(text: &str, rules: &RuleCatalog) -> Self {
        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            let Some(marker) = word.chars().next() else {
                continue;
            };
            let sign = match marker {
                '+' => Sign::Include,
                '-' => Sign::Exclude,
                _ => continue,
            };
            let name = &word[1..];
            if name.is_empty() || !rules.contains(name) {
                continue;
            }
            tokens.push(FilterToken {
                sign,
                rule_name: name.to_owned(),
            });
        }
        Self { tokens }
    }

    pub fn tokens(&self) -> &[FilterToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", token.sign.marker(), token.rule_name)?;
        }
        Ok(())
    }
}
