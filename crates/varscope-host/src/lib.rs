// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod client;
pub mod command;
pub mod transport;

pub use client::*;
pub use command::*;
pub use transport::*;
