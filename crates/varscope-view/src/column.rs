// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Fixed 4-column projection of a property record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Key,
    Type,
    Size,
    Value,
}

impl Column {
    pub const ALL: [Self; 4] = [Self::Key, Self::Type, Self::Size, Self::Value];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Key => "name",
            Self::Type => "type",
            Self::Size => "size",
            Self::Value => "value",
        }
    }
}

/// Compact mode elides columns at presentation time only; the model keeps
/// computing all four.
pub const fn visible_columns(compact: bool) -> &'static [Column] {
    if compact {
        &[Column::Key]
    } else {
        &Column::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::{Column, visible_columns};

    #[test]
    fn labels_cover_all_columns() {
        let labels: Vec<&str> = Column::ALL.iter().map(|column| column.label()).collect();
        assert_eq!(labels, vec!["name", "type", "size", "value"]);
    }

    #[test]
    fn compact_mode_shows_only_the_key_column() {
        assert_eq!(visible_columns(true), &[Column::Key]);
        assert_eq!(visible_columns(false), &Column::ALL);
    }
}
