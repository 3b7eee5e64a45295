//! Common test utilities and helpers
//!
//! Shared setup for the settings API integration tests.

#![allow(dead_code)]

pub mod adapters;
pub mod fixtures;

pub use adapters::*;
pub use fixtures::*;
