//! Common test utilities and infrastructure
//!
//! Shared fixtures and the editor builder used across the integration
//! test suites.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{EditorBuilder, TestEditor, TestHelpers};
