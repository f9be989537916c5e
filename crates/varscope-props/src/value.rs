// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

/// Summary of one value living in the interpreter session.
///
/// The host never ships whole object graphs; large or foreign values arrive
/// as capability-tagged summaries (`Array`, `Table`, `Image`) or as an
/// `Opaque` record carrying the class path, the ancestry chain of the
/// runtime type (most-derived first) and a pre-rendered repr.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawValue {
    Int {
        value: i64,
    },
    Float {
        value: f64,
    },
    Bool {
        value: bool,
    },
    Str {
        value: String,
    },
    Bytes {
        value: Vec<u8>,
    },
    List {
        items: Vec<RawValue>,
    },
    Tuple {
        items: Vec<RawValue>,
    },
    Set {
        items: Vec<RawValue>,
    },
    Dict {
        entries: Vec<(RawValue, RawValue)>,
    },
    Array {
        dtype: String,
        shape: Vec<usize>,
    },
    Table {
        #[serde(rename = "table_kind")]
        kind: String,
        columns: Vec<String>,
        shape: Vec<usize>,
    },
    Image {
        class_name: String,
        mode: String,
        width: usize,
        height: usize,
        address: u64,
    },
    Opaque {
        class_path: String,
        ancestry: Vec<String>,
        len: Option<usize>,
        repr: String,
    },
}

impl RawValue {
    /// Last path component of the runtime class name, or `"unknown"` when
    /// the host could not determine one.
    pub fn class_name(&self) -> &str {
        match self {
            Self::Int { .. } => "int",
            Self::Float { .. } => "float",
            Self::Bool { .. } => "bool",
            Self::Str { .. } => "str",
            Self::Bytes { .. } => "bytes",
            Self::List { .. } => "list",
            Self::Tuple { .. } => "tuple",
            Self::Set { .. } => "set",
            Self::Dict { .. } => "dict",
            Self::Array { .. } => "ndarray",
            Self::Table { kind, .. } => kind,
            Self::Image { class_name, .. } => class_name,
            Self::Opaque { class_path, .. } => {
                let name = class_path.rsplit('.').next().unwrap_or("");
                if name.is_empty() { "unknown" } else { name }
            }
        }
    }

    /// Ancestry chain of the runtime type, most-derived first.
    ///
    /// Built-in variants carry a fixed canonical chain; `Opaque` values use
    /// whatever the host reported, which may be empty.
    pub fn ancestry(&self) -> Vec<String> {
        fn owned(names: &[&str]) -> Vec<String> {
            names.iter().map(|name| (*name).to_owned()).collect()
        }

        match self {
            Self::Int { .. } => owned(&["int", "object"]),
            Self::Float { .. } => owned(&["float", "object"]),
            Self::Bool { .. } => owned(&["bool", "int", "object"]),
            Self::Str { .. } => owned(&["str", "object"]),
            Self::Bytes { .. } => owned(&["bytes", "object"]),
            Self::List { .. } => owned(&["list", "object"]),
            Self::Tuple { .. } => owned(&["tuple", "object"]),
            Self::Set { .. } => owned(&["set", "object"]),
            Self::Dict { .. } => owned(&["dict", "object"]),
            Self::Array { .. } => owned(&["ndarray", "object"]),
            Self::Table { kind, .. } => vec![kind.clone(), "object".to_owned()],
            Self::Image { class_name, .. } => vec![class_name.clone(), "object".to_owned()],
            Self::Opaque { ancestry, .. } => ancestry.clone(),
        }
    }

    /// Element count for sized values; `None` for unsized ones.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Str { value } => Some(value.chars().count()),
            Self::Bytes { value } => Some(value.len()),
            Self::List { items } | Self::Tuple { items } | Self::Set { items } => Some(items.len()),
            Self::Dict { entries } => Some(entries.len()),
            Self::Opaque { len, .. } => *len,
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

/// One `(name, value)` pair as reported by the host's namespace listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: RawValue,
}

impl NamedValue {
    pub fn new(name: &str, value: RawValue) -> Self {
        Self {
            name: name.to_owned(),
            value,
        }
    }
}
