// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::catalog::RuleCatalog;
use crate::expression::{FilterExpression, Sign};
use thiserror::Error;
use varscope_props::PropertyRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The expression parser guarantees every token names a registered
    /// rule, so hitting this means the expression and the catalog have
    /// desynchronized. Propagated, never swallowed.
    #[error("unknown filter rule {0:?}")]
    UnknownRule(String),
}

/// Replays a filter expression over the full record catalog.
///
/// The mask starts all-visible. An exclude token tests only the records
/// still visible at that point (an exclude cannot un-exclude); an include
/// token tests the full original catalog and resurrects every match. That
/// asymmetry is what lets `-all +simples` mean "hide everything, then
/// reveal the scalars". Survivors are sorted by key, case-insensitively,
/// with ties keeping catalog order.
pub fn apply(
    catalog: &[PropertyRecord],
    expression: &FilterExpression,
    rules: &RuleCatalog,
) -> Result<Vec<PropertyRecord>, FilterError> {
    let mut mask = vec![true; catalog.len()];

    for token in expression.tokens() {
        let rule = rules
            .get(&token.rule_name)
            .ok_or_else(|| FilterError::UnknownRule(token.rule_name.clone()))?;

        match token.sign {
            Sign::Exclude => {
                let visible: Vec<usize> = mask
                    .iter()
                    .enumerate()
                    .filter_map(|(index, keep)| keep.then_some(index))
                    .collect();
                let hits = rule.matches(visible.iter().map(|&index| &catalog[index]));
                for (&index, hit) in visible.iter().zip(hits) {
                    if hit {
                        mask[index] = false;
                    }
                }
            }
            Sign::Include => {
                for (keep, hit) in mask.iter_mut().zip(rule.matches(catalog)) {
                    *keep = *keep || hit;
                }
            }
        }
    }

    let mut result: Vec<PropertyRecord> = catalog
        .iter()
        .zip(&mask)
        .filter(|&(_, &keep)| keep)
        .map(|(record, _)| record.clone())
        .collect();
    result.sort_by(|a, b| a.key.to_lowercase().cmp(&b.key.to_lowercase()));
    Ok(result)
}
