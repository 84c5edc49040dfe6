//! Common test utilities for cops integration and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the CLI
//! - `FakeSource`: Offline `AssetSource` backed by a map of paths
//! - Fixtures: Reusable manifest and lock content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod source;

pub use env::*;
pub use fixtures::*;
pub use source::*;
