//! Common test utilities for CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp directory
//! - `FakeNerdGraph`: mockito server answering NerdGraph requests
//! - Row builders for canned NRQL results
//! - `EXISTING_STATE`: a saved catalogue fixture

#![allow(dead_code)]

pub mod env;
pub mod fake_nerdgraph;
pub mod fixtures;

pub use env::*;
pub use fake_nerdgraph::*;
pub use fixtures::*;
