// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use varscope_props::MetadataRecord;

/// Host-process extension point for enriching (or replacing) the metadata
/// record of a row, registered on the explorer at startup.
///
/// Extensions live behind a failure boundary: an error here is logged and
/// an empty record is substituted, so a faulty extension degrades one
/// detail view instead of breaking the table.
pub trait MetadataExtension {
    fn augment(&self, name: &str, meta: &MetadataRecord) -> Result<MetadataRecord>;
}
