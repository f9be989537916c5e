// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use varscope_props::{MetadataRecord, PropertyRecord, truncate_label};

/// Expanded per-row view assembled from the summary record plus the
/// lazily fetched metadata. The `value` and `html` metadata fields are
/// reserved: `value` overrides the summary value, `html` is a rich
/// supplement appended as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub type_label: String,
    pub size_label: String,
    pub fields: Vec<(String, String)>,
    pub value: Option<String>,
    pub html: Option<String>,
}

impl DetailView {
    pub fn assemble(record: &PropertyRecord, mut meta: MetadataRecord) -> Self {
        let value = meta
            .remove("value")
            .or_else(|| (!record.value_label.is_empty()).then(|| record.value_label.clone()));
        let html = meta.remove("html");
        let fields = meta
            .iter()
            .map(|(field, text)| (field.to_owned(), text.to_owned()))
            .collect();

        Self {
            title: record.key.clone(),
            type_label: record.type_label.clone(),
            size_label: record.size_label.clone(),
            fields,
            value,
            html,
        }
    }

    /// Rich rendering for hover/tooltip surfaces. All user data is
    /// escaped; only the `html` supplement passes through verbatim.
    pub fn to_html(&self) -> String {
        let mut sections = vec![format!(
            "<h2>{}</h2><b>type:</b> {} | <b>size:</b> {}",
            escape(&self.title),
            escape(&self.type_label),
            escape(&self.size_label),
        )];

        if !self.fields.is_empty() {
            let rendered: Vec<String> = self
                .fields
                .iter()
                .map(|(field, text)| format!("<b>{}:</b>&nbsp;{}", escape(field), escape(text)))
                .collect();
            sections.push(rendered.join(" | "));
        }

        if let Some(html) = &self.html {
            sections.push(html.clone());
        }

        if let Some(value) = &self.value {
            sections.push(escape(&truncate_label(value)).replace('\n', "<br>"));
        }

        sections.join("<br><br>")
    }

    /// Plain-text rendering for line-oriented surfaces.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{}\ntype: {}    size: {}\n",
            self.title, self.type_label, self.size_label
        );
        for (field, text) in &self.fields {
            out.push_str(&format!("{field}: {text}\n"));
        }
        if let Some(value) = &self.value {
            out.push_str(&truncate_label(value));
            out.push('\n');
        }
        out
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}
