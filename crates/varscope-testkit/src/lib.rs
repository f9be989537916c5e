// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use serde_json::json;
use std::collections::VecDeque;
use varscope_host::Transport;
use varscope_props::{NamedValue, RawValue};

/// Transport that replays canned response bodies in order and records
/// every command it was asked to send. Errors once the script runs dry.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: VecDeque<String>,
    pub sent: Vec<String>,
}

impl ScriptedTransport {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            sent: Vec::new(),
        }
    }

    pub fn push_response(&mut self, body: &str) {
        self.responses.push_back(body.to_owned());
    }
}

impl Transport for ScriptedTransport {
    fn send(&mut self, command: &str) -> Result<String> {
        self.sent.push(command.to_owned());
        match self.responses.pop_front() {
            Some(body) => Ok(body),
            None => bail!("scripted transport exhausted after {} sends", self.sent.len()),
        }
    }
}

/// Transport that fails every send, for exercising degradation paths.
#[derive(Debug, Default)]
pub struct FailingTransport;

impl Transport for FailingTransport {
    fn send(&mut self, _command: &str) -> Result<String> {
        bail!("host unreachable")
    }
}

/// A small mixed namespace covering the value shapes the extraction and
/// filter layers care about: scalars, containers, privates, caps, a
/// module-like opaque and an array summary.
pub fn sample_namespace() -> Vec<NamedValue> {
    vec![
        NamedValue::new("count", RawValue::Int { value: 42 }),
        NamedValue::new(
            "ratio",
            RawValue::Float {
                value: 0.6180339887,
            },
        ),
        NamedValue::new(
            "greeting",
            RawValue::Str {
                value: "hello".to_owned(),
            },
        ),
        NamedValue::new(
            "names",
            RawValue::List {
                items: vec![
                    RawValue::Str {
                        value: "ada".to_owned(),
                    },
                    RawValue::Str {
                        value: "grace".to_owned(),
                    },
                ],
            },
        ),
        NamedValue::new(
            "_hidden",
            RawValue::Str {
                value: "secret".to_owned(),
            },
        ),
        NamedValue::new("MAX_RETRIES", RawValue::Int { value: 3 }),
        NamedValue::new(
            "grid",
            RawValue::Array {
                dtype: "float64".to_owned(),
                shape: vec![3, 4],
            },
        ),
        NamedValue::new(
            "np",
            RawValue::Opaque {
                class_path: "module".to_owned(),
                ancestry: vec!["module".to_owned(), "object".to_owned()],
                len: None,
                repr: "<module 'numpy'>".to_owned(),
            },
        ),
    ]
}

/// JSON body the host sends for [`sample_namespace`].
pub fn props_response(catalog: &[NamedValue]) -> String {
    let pairs: Vec<serde_json::Value> = catalog
        .iter()
        .map(|named| {
            json!([
                named.name,
                serde_json::to_value(&named.value).expect("value serializes"),
            ])
        })
        .collect();
    serde_json::Value::Array(pairs).to_string()
}

/// The host's "no session attached" sentinel body.
pub fn no_session_response() -> String {
    "null".to_owned()
}

/// JSON body for a metadata reply built from field pairs.
pub fn meta_response(fields: &[(&str, &str)]) -> String {
    let map: serde_json::Map<String, serde_json::Value> = fields
        .iter()
        .map(|(field, text)| ((*field).to_owned(), json!(text)))
        .collect();
    serde_json::Value::Object(map).to_string()
}
