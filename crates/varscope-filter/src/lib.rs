// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod catalog;
pub mod engine;
pub mod expression;
pub mod rule;

pub use catalog::*;
pub use engine::*;
pub use expression::*;
pub use rule::*;
