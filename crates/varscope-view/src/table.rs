// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::column::Column;
use varscope_filter::{FilterError, FilterExpression, RuleCatalog, apply};
use varscope_props::{PropertyRecord, truncate_label};

/// Table view-model: owns the full property catalog, the active filter
/// expression and the derived visible row set.
///
/// Both `replace_catalog` and `set_expression` are full invalidations;
/// consumers re-read every cell, there is no partial row diffing.
#[derive(Debug, Clone)]
pub struct TableModel {
    catalog: Vec<PropertyRecord>,
    expression: FilterExpression,
    rules: RuleCatalog,
    visible: Vec<PropertyRecord>,
}

impl TableModel {
    pub fn new(rules: RuleCatalog) -> Self {
        Self {
            catalog: Vec::new(),
            expression: FilterExpression::empty(),
            rules,
            visible: Vec::new(),
        }
    }

    pub fn replace_catalog(&mut self, records: Vec<PropertyRecord>) -> Result<(), FilterError> {
        self.catalog = records;
        self.recompute()
    }

    pub fn set_expression(&mut self, expression: FilterExpression) -> Result<(), FilterError> {
        self.expression = expression;
        self.recompute()
    }

    fn recompute(&mut self) -> Result<(), FilterError> {
        self.visible = apply(&self.catalog, &self.expression, &self.rules)?;
        Ok(())
    }

    pub fn expression(&self) -> &FilterExpression {
        &self.expression
    }

    pub fn row_count(&self) -> usize {
        self.visible.len()
    }

    /// Positional cell query. The value column is truncated here, at
    /// presentation time; the record underneath keeps the full label.
    /// An out-of-range row is a caller error and panics.
    pub fn cell(&self, row: usize, column: Column) -> String {
        let record = &self.visible[row];
        match column {
            Column::Key => record.key.clone(),
            Column::Type => record.type_label.clone(),
            Column::Size => record.size_label.clone(),
            Column::Value => truncate_label(&record.value_label),
        }
    }

    pub fn record(&self, row: usize) -> &PropertyRecord {
        &self.visible[row]
    }

    pub fn visible(&self) -> &[PropertyRecord] {
        &self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::{Column, TableModel};
    use varscope_filter::{FilterExpression, RuleCatalog};
    use varscope_props::{PropertyRecord, VALUE_DISPLAY_LIMIT};

    fn record(key: &str, type_label: &str, value_label: &str) -> PropertyRecord {
        PropertyRecord {
            key: key.to_owned(),
            type_label: type_label.to_owned(),
            size_label: "1".to_owned(),
            value_label: value_label.to_owned(),
            flag_colors: Vec::new(),
        }
    }

    fn model_with(records: Vec<PropertyRecord>) -> TableModel {
        let mut model = TableModel::new(RuleCatalog::standard());
        model.replace_catalog(records).expect("catalog replace");
        model
    }

    #[test]
    fn cells_project_the_four_columns() {
        let model = model_with(vec![record("x", "int", "3")]);
        assert_eq!(model.row_count(), 1);
        assert_eq!(model.cell(0, Column::Key), "x");
        assert_eq!(model.cell(0, Column::Type), "int");
        assert_eq!(model.cell(0, Column::Size), "1");
        assert_eq!(model.cell(0, Column::Value), "3");
    }

    #[test]
    fn value_cell_is_truncated_but_the_record_is_not() {
        let long = "x".repeat(VALUE_DISPLAY_LIMIT + 10);
        let model = model_with(vec![record("s", "str", &long)]);
        let cell = model.cell(0, Column::Value);
        assert!(cell.ends_with("..."));
        assert!(cell.len() < long.len());
        assert_eq!(model.record(0).value_label, long);
    }

    #[test]
    fn set_expression_is_a_full_invalidation() {
        let mut model = model_with(vec![
            record("x", "int", "3"),
            record("name", "str", "'ada'"),
        ]);
        assert_eq!(model.row_count(), 2);

        let rules = RuleCatalog::standard();
        let expression = FilterExpression::parse("-all +iterables", &rules);
        model.set_expression(expression).expect("expression set");
        assert_eq!(model.row_count(), 0);
    }

    #[test]
    fn replace_catalog_reapplies_the_current_expression() {
        let rules = RuleCatalog::standard();
        let mut model = TableModel::new(RuleCatalog::standard());
        model
            .set_expression(FilterExpression::parse("-all +simples", &rules))
            .expect("expression set");

        model
            .replace_catalog(vec![
                record("x", "int", "3"),
                record("values", "list", "[1]"),
            ])
            .expect("catalog replace");
        assert_eq!(model.row_count(), 1);
        assert_eq!(model.cell(0, Column::Key), "x");
    }

    #[test]
    #[should_panic]
    fn out_of_range_row_panics() {
        let model = model_with(vec![record("x", "int", "3")]);
        let _ = model.cell(1, Column::Key);
    }
}
