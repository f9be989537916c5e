// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod extract;
pub mod record;
pub mod repr;
pub mod value;

pub use extract::*;
pub use record::*;
pub use repr::*;
pub use value::*;
