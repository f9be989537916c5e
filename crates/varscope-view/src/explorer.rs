// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::column::Column;
use crate::detail::DetailView;
use crate::extension::MetadataExtension;
use crate::table::TableModel;
use anyhow::Result;
use varscope_filter::{FilterExpression, RuleCatalog};
use varscope_host::HostClient;
use varscope_props::{Extractor, MetadataRecord, PropertyRecord};

struct Session {
    client: HostClient,
    model: TableModel,
}

/// The variable explorer: at most one live host binding at a time, one
/// table model per binding, plus the process-wide rule catalog, the
/// active filter expression and the optional metadata extension.
pub struct Explorer {
    rules: RuleCatalog,
    expression: FilterExpression,
    extractor: Extractor,
    extension: Option<Box<dyn MetadataExtension>>,
    session: Option<Session>,
}

impl Explorer {
    pub fn new(rules: RuleCatalog, extractor: Extractor, expression: FilterExpression) -> Self {
        Self {
            rules,
            expression,
            extractor,
            extension: None,
            session: None,
        }
    }

    pub fn register_extension(&mut self, extension: Box<dyn MetadataExtension>) {
        self.extension = Some(extension);
    }

    pub fn expression(&self) -> &FilterExpression {
        &self.expression
    }

    pub fn rules(&self) -> &RuleCatalog {
        &self.rules
    }

    pub fn is_attached(&self) -> bool {
        self.session.is_some()
    }

    /// Binds a new host channel, discarding any previous session, and
    /// pulls the initial catalog.
    pub fn attach(&mut self, client: HostClient) -> Result<()> {
        self.detach();
        let mut model = TableModel::new(self.rules.clone());
        model.set_expression(self.expression.clone())?;
        self.session = Some(Session { client, model });
        self.refresh()
    }

    /// Drops the current session. Anything still in flight is discarded,
    /// never applied to a later session.
    pub fn detach(&mut self) {
        self.session = None;
    }

    /// Pulls a fresh catalog from the host, exactly one host request per
    /// call. Rebuilds cannot overlap: the exclusive borrow serializes
    /// them, so stale data can never race a newer catalog. Host failures
    /// degrade to an empty catalog.
    pub fn refresh(&mut self) -> Result<()> {
        let fetched = match self.session.as_mut() {
            Some(session) => session.client.list_properties(),
            None => return Ok(()),
        };
        let values = match fetched {
            Ok(Some(values)) => values,
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!("catalog refresh failed, clearing table: {error:#}");
                Vec::new()
            }
        };
        let records: Vec<PropertyRecord> = values
            .iter()
            .map(|named| self.extractor.extract(&named.name, &named.value))
            .collect();

        // Detached while the request was in flight: drop the response.
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        session.model.replace_catalog(records)?;
        Ok(())
    }

    /// Host-side change notification: pull the catalog once per signal.
    /// Signals arriving while a rebuild runs queue behind the exclusive
    /// borrow and each trigger their own single pull.
    pub fn notify_changed(&mut self) -> Result<()> {
        self.refresh()
    }

    /// Re-parses the expression text and re-filters. Returns whether the
    /// effective token list actually changed.
    pub fn set_expression_text(&mut self, text: &str) -> Result<bool> {
        let parsed = FilterExpression::parse(text, &self.rules);
        let changed = parsed != self.expression;
        self.expression = parsed;
        if let Some(session) = self.session.as_mut() {
            session.model.set_expression(self.expression.clone())?;
        }
        Ok(changed)
    }

    pub fn row_count(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, |session| session.model.row_count())
    }

    pub fn cell(&self, row: usize, column: Column) -> String {
        self.model().cell(row, column)
    }

    pub fn record(&self, row: usize) -> &PropertyRecord {
        self.model().record(row)
    }

    pub fn visible(&self) -> &[PropertyRecord] {
        self.session
            .as_ref()
            .map_or(&[], |session| session.model.visible())
    }

    /// Fetches the expanded metadata for one visible row and assembles
    /// the detail view. Channel failure and extension failure both
    /// degrade to an empty metadata record.
    pub fn fetch_detail(&mut self, row: usize) -> DetailView {
        let Some(session) = self.session.as_mut() else {
            panic!("row {row} out of range: no session attached");
        };
        let record = session.model.record(row).clone();

        let path = [record.key.clone()];
        let meta = match session.client.metadata(&path) {
            Ok(meta) => meta,
            Err(error) => {
                tracing::warn!("metadata fetch for {:?} failed: {error:#}", record.key);
                MetadataRecord::default()
            }
        };

        let meta = match &self.extension {
            None => meta,
            Some(extension) => match extension.augment(&record.key, &meta) {
                Ok(augmented) => augmented,
                Err(error) => {
                    tracing::warn!(
                        "metadata extension failed for {:?}, substituting empty record: {error:#}",
                        record.key
                    );
                    MetadataRecord::default()
                }
            },
        };

        DetailView::assemble(&record, meta)
    }

    fn model(&self) -> &TableModel {
        match self.session.as_ref() {
            Some(session) => &session.model,
            None => panic!("row query requires an attached session"),
        }
    }
}
