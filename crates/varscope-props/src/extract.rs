// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::record::{PropertyRecord, flag_colors};
use crate::repr::{bytes_label, shape_repr, value_repr};
use crate::value::RawValue;

/// One optional value capability (array-like, image-like, table-like, ...).
///
/// Probes are registered on a [`ProbeRegistry`] and consulted in priority
/// order; the first probe whose `matches` returns true supplies all three
/// display labels for that value. A registry built without a probe simply
/// lets the corresponding values fall through to the built-in handling, so
/// numeric/table/image support stays an add-on rather than a hard
/// dependency.
pub trait CapabilityProbe {
    fn capability(&self) -> &'static str;
    fn matches(&self, value: &RawValue) -> bool;
    fn type_label(&self, value: &RawValue) -> String;
    fn size_label(&self, value: &RawValue) -> String;
    fn value_label(&self, value: &RawValue) -> String;
}

pub struct ArrayProbe;

impl CapabilityProbe for ArrayProbe {
    fn capability(&self) -> &'static str {
        "array"
    }

    fn matches(&self, value: &RawValue) -> bool {
        matches!(value, RawValue::Array { .. })
    }

    fn type_label(&self, value: &RawValue) -> String {
        match value {
            RawValue::Array { dtype, .. } => dtype.clone(),
            _ => "unknown".to_owned(),
        }
    }

    fn size_label(&self, value: &RawValue) -> String {
        match value {
            RawValue::Array { shape, .. } if !shape.is_empty() => shape_repr(shape),
            _ => "1".to_owned(),
        }
    }

    fn value_label(&self, value: &RawValue) -> String {
        value_repr(value)
    }
}

pub struct ImageProbe;

impl CapabilityProbe for ImageProbe {
    fn capability(&self) -> &'static str {
        "image"
    }

    fn matches(&self, value: &RawValue) -> bool {
        matches!(value, RawValue::Image { .. })
    }

    fn type_label(&self, _value: &RawValue) -> String {
        "Image".to_owned()
    }

    fn size_label(&self, value: &RawValue) -> String {
        match value {
            RawValue::Image { width, height, .. } => format!("{width} x {height}"),
            _ => "1".to_owned(),
        }
    }

    fn value_label(&self, value: &RawValue) -> String {
        match value {
            RawValue::Image {
                class_name,
                mode,
                address,
                ..
            } => format!("<{class_name} @ 0x{address:X}>  Mode: {mode}"),
            _ => value_repr(value),
        }
    }
}

pub struct TableProbe;

impl CapabilityProbe for TableProbe {
    fn capability(&self) -> &'static str {
        "table"
    }

    fn matches(&self, value: &RawValue) -> bool {
        matches!(value, RawValue::Table { .. })
    }

    fn type_label(&self, value: &RawValue) -> String {
        match value {
            RawValue::Table { kind, .. } => kind.clone(),
            _ => "unknown".to_owned(),
        }
    }

    fn size_label(&self, value: &RawValue) -> String {
        match value {
            RawValue::Table { shape, .. } if !shape.is_empty() => shape_repr(shape),
            _ => "1".to_owned(),
        }
    }

    fn value_label(&self, value: &RawValue) -> String {
        match value {
            RawValue::Table { columns, .. } => {
                format!("Column names: {}", columns.join(", "))
            }
            _ => value_repr(value),
        }
    }
}

/// Ordered set of capability probes. Priority is registration order.
#[derive(Default)]
pub struct ProbeRegistry {
    probes: Vec<Box<dyn CapabilityProbe>>,
}

impl ProbeRegistry {
    /// Registry with no optional capabilities; every value takes the
    /// built-in path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Array, image, and table probes in that priority order.
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        registry.register(Box::new(ArrayProbe));
        registry.register(Box::new(ImageProbe));
        registry.register(Box::new(TableProbe));
        registry
    }

    pub fn register(&mut self, probe: Box<dyn CapabilityProbe>) {
        self.probes.push(probe);
    }

    pub fn capabilities(&self) -> Vec<&'static str> {
        self.probes.iter().map(|probe| probe.capability()).collect()
    }

    fn find(&self, value: &RawValue) -> Option<&dyn CapabilityProbe> {
        self.probes
            .iter()
            .map(Box::as_ref)
            .find(|probe| probe.matches(value))
    }
}

/// Derives the bounded display properties for a named value.
///
/// Total by construction: every arm degrades to a safe default
/// (`"unknown"` type, size `"1"`) instead of failing.
pub struct Extractor {
    registry: ProbeRegistry,
}

impl Extractor {
    pub fn new(registry: ProbeRegistry) -> Self {
        Self { registry }
    }

    pub fn with_defaults() -> Self {
        Self::new(ProbeRegistry::with_defaults())
    }

    pub fn extract(&self, name: &str, value: &RawValue) -> PropertyRecord {
        let (type_label, size_label, value_label) = match self.registry.find(value) {
            Some(probe) => (
                probe.type_label(value),
                probe.size_label(value),
                probe.value_label(value),
            ),
            None => (
                value.class_name().to_owned(),
                value
                    .len()
                    .map_or_else(|| "1".to_owned(), |len| len.to_string()),
                builtin_value_label(value),
            ),
        };

        PropertyRecord {
            key: name.to_owned(),
            type_label,
            size_label,
            value_label,
            flag_colors: flag_colors(&value.ancestry()),
        }
    }
}

fn builtin_value_label(value: &RawValue) -> String {
    match value {
        RawValue::Str { value } => value.clone(),
        RawValue::Bytes { value } => bytes_label(value),
        other => value_repr(other),
    }
}

#[cfg(test)]
mod tests {
    use super::{Extractor, ProbeRegistry};
    use crate::value::RawValue;

    fn image() -> RawValue {
        RawValue::Image {
            class_name: "PngImageFile".to_owned(),
            mode: "RGB".to_owned(),
            width: 640,
            height: 480,
            address: 0x7F3A_2B10,
        }
    }

    #[test]
    fn scalar_extraction() {
        let extractor = Extractor::with_defaults();
        let record = extractor.extract("count", &RawValue::Int { value: 7 });
        assert_eq!(record.key, "count");
        assert_eq!(record.type_label, "int");
        assert_eq!(record.size_label, "1");
        assert_eq!(record.value_label, "7");
        assert_eq!(record.flag_colors.len(), 2);
    }

    #[test]
    fn text_is_returned_verbatim() {
        let extractor = Extractor::with_defaults();
        let record = extractor.extract(
            "greeting",
            &RawValue::Str {
                value: "hello\nworld".to_owned(),
            },
        );
        assert_eq!(record.value_label, "hello\nworld");
        assert_eq!(record.size_label, "11");
    }

    #[test]
    fn container_size_is_element_count() {
        let extractor = Extractor::with_defaults();
        let record = extractor.extract(
            "pairs",
            &RawValue::Dict {
                entries: vec![
                    (RawValue::Int { value: 1 }, RawValue::Int { value: 2 }),
                    (RawValue::Int { value: 3 }, RawValue::Int { value: 4 }),
                ],
            },
        );
        assert_eq!(record.type_label, "dict");
        assert_eq!(record.size_label, "2");
    }

    #[test]
    fn array_probe_supplies_dtype_and_shape() {
        let extractor = Extractor::with_defaults();
        let record = extractor.extract(
            "grid",
            &RawValue::Array {
                dtype: "float64".to_owned(),
                shape: vec![3, 4],
            },
        );
        assert_eq!(record.type_label, "float64");
        assert_eq!(record.size_label, "3 x 4");
    }

    #[test]
    fn zero_dimensional_array_degrades_to_size_one() {
        let extractor = Extractor::with_defaults();
        let record = extractor.extract(
            "scalar",
            &RawValue::Array {
                dtype: "int32".to_owned(),
                shape: Vec::new(),
            },
        );
        assert_eq!(record.size_label, "1");
    }

    #[test]
    fn image_probe_formats_address_and_mode() {
        let extractor = Extractor::with_defaults();
        let record = extractor.extract("logo", &image());
        assert_eq!(record.type_label, "Image");
        assert_eq!(record.size_label, "640 x 480");
        assert_eq!(record.value_label, "<PngImageFile @ 0x7F3A2B10>  Mode: RGB");
    }

    #[test]
    fn table_probe_lists_column_names() {
        let extractor = Extractor::with_defaults();
        let record = extractor.extract(
            "frame",
            &RawValue::Table {
                kind: "DataFrame".to_owned(),
                columns: vec!["a".to_owned(), "b".to_owned()],
                shape: vec![10, 2],
            },
        );
        assert_eq!(record.type_label, "DataFrame");
        assert_eq!(record.size_label, "10 x 2");
        assert_eq!(record.value_label, "Column names: a, b");
    }

    #[test]
    fn array_without_probe_falls_back_to_builtin_handling() {
        let extractor = Extractor::new(ProbeRegistry::empty());
        let record = extractor.extract(
            "grid",
            &RawValue::Array {
                dtype: "float64".to_owned(),
                shape: vec![3, 4],
            },
        );
        assert_eq!(record.type_label, "ndarray");
        assert_eq!(record.size_label, "1");
    }

    #[test]
    fn opaque_without_ancestry_has_no_flags() {
        let extractor = Extractor::with_defaults();
        let record = extractor.extract(
            "mystery",
            &RawValue::Opaque {
                class_path: String::new(),
                ancestry: Vec::new(),
                len: None,
                repr: "<?>".to_owned(),
            },
        );
        assert_eq!(record.type_label, "unknown");
        assert_eq!(record.size_label, "1");
        assert!(record.flag_colors.is_empty());
    }

    #[test]
    fn same_type_yields_identical_flags() {
        let extractor = Extractor::with_defaults();
        let left = extractor.extract("a", &RawValue::Int { value: 1 });
        let right = extractor.extract("b", &RawValue::Int { value: 99 });
        assert_eq!(left.flag_colors, right.flag_colors);
    }

    #[test]
    fn default_registry_reports_capabilities_in_priority_order() {
        let registry = ProbeRegistry::with_defaults();
        assert_eq!(registry.capabilities(), vec!["array", "image", "table"]);
    }
}
