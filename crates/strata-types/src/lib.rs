//! Shared types and adapter traits for Strata.
//!
//! This crate holds what both the settings core and the storage adapters need:
//! the error type and the contract of the persisted property store. Keeping it
//! separate lets adapter crates compile without pulling in the resolver.

pub mod error;
pub mod prelude;
pub mod property_adapter;

// vim: ts=4
