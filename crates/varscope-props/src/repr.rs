// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::value::RawValue;

/// Per-level element cap when rendering list/dict/tuple/set contents.
pub const COLLECTION_REPR_LIMIT: usize = 1000;

/// Interpreter-style repr of a value, used wherever the display text is
/// not taken verbatim from the value itself. Containers are capped at
/// [`COLLECTION_REPR_LIMIT`] elements per nesting level.
pub fn value_repr(value: &RawValue) -> String {
    match value {
        RawValue::Int { value } => value.to_string(),
        RawValue::Float { value } => float_repr(*value),
        RawValue::Bool { value } => if *value { "True" } else { "False" }.to_owned(),
        RawValue::Str { value } => str_repr(value),
        RawValue::Bytes { value } => bytes_repr(value),
        RawValue::List { items } => sequence_repr("[", "]", items, false),
        RawValue::Tuple { items } => sequence_repr("(", ")", items, true),
        RawValue::Set { items } => {
            if items.is_empty() {
                "set()".to_owned()
            } else {
                sequence_repr("{", "}", items, false)
            }
        }
        RawValue::Dict { entries } => dict_repr(entries),
        RawValue::Array { dtype, shape } => {
            format!("<array dtype={dtype} shape={}>", shape_repr(shape))
        }
        RawValue::Table { kind, shape, .. } => {
            format!("<{kind} shape={}>", shape_repr(shape))
        }
        RawValue::Image {
            class_name, mode, ..
        } => format!("<{class_name} mode={mode}>"),
        RawValue::Opaque { repr, .. } => repr.clone(),
    }
}

/// Best-effort text for a byte string: UTF-8 when it decodes cleanly,
/// otherwise a byte-literal rendering.
pub fn bytes_label(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(text) => text.to_owned(),
        Err(_) => bytes_repr(raw),
    }
}

pub fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == value.trunc() && value.abs() < 1e16 {
        return format!("{value:.1}");
    }
    format!("{value}")
}

fn sequence_repr(open: &str, close: &str, items: &[RawValue], tuple: bool) -> String {
    let mut out = String::from(open);
    let shown = items.len().min(COLLECTION_REPR_LIMIT);
    for (index, item) in items[..shown].iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&value_repr(item));
    }
    if items.len() > COLLECTION_REPR_LIMIT {
        out.push_str(", ...");
    } else if tuple && items.len() == 1 {
        out.push(',');
    }
    out.push_str(close);
    out
}

fn dict_repr(entries: &[(RawValue, RawValue)]) -> String {
    let mut out = String::from("{");
    let shown = entries.len().min(COLLECTION_REPR_LIMIT);
    for (index, (key, value)) in entries[..shown].iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&value_repr(key));
        out.push_str(": ");
        out.push_str(&value_repr(value));
    }
    if entries.len() > COLLECTION_REPR_LIMIT {
        out.push_str(", ...");
    }
    out.push('}');
    out
}

fn str_repr(text: &str) -> String {
    let double = text.contains('\'') && !text.contains('"');
    let quote = if double { '"' } else { '\'' };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn bytes_repr(raw: &[u8]) -> String {
    let mut out = String::from("b'");
    for byte in raw {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            b'\n' => out.push_str("\\n"),
            b'\t' => out.push_str("\\t"),
            b'\r' => out.push_str("\\r"),
            0x20..=0x7e => out.push(*byte as char),
            other => out.push_str(&format!("\\x{other:02x}")),
        }
    }
    out.push('\'');
    out
}

pub fn shape_repr(shape: &[usize]) -> String {
    shape
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" x ")
}
