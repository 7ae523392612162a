// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

// Correctness
#![deny(clippy::indexing_slicing)]
#![deny(clippy::string_slice)]
#![deny(clippy::cast_possible_wrap)]
// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unimplemented)]
#![deny(clippy::todo)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

pub mod builder;
pub mod collector;
pub mod config;
mod errors;
pub mod keys;
mod linker;
pub mod manager;
pub mod model;
pub mod operations;
mod resolver;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export the public API
pub use builder::build_node;
pub use collector::{TestOutcome, collect, test_connection};
pub use config::Config;
pub use errors::Error;
pub use linker::set_parent;
pub use manager::{ManagerApi, NsxClient};
pub use model::{CatalogResource, CollectionOutcome, Identifier, ResourceQuery, ResultObject};
pub use operations::{ApiResponse, SuiteApi, SuiteApiClient};
pub use resolver::lookup_resource;
