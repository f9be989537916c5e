// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod column;
pub mod detail;
pub mod explorer;
pub mod extension;
pub mod table;

pub use column::*;
pub use detail::*;
pub use explorer::*;
pub use extension::MetadataExtension;
pub use table::*;
