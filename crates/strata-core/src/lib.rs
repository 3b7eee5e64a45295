//! Layered settings for Strata services.
//!
//! Values are resolved from two sources: [`StaticSettings`], fixed at process
//! start, and a persisted property store reached through
//! [`PropertyAdapter`](strata_types::property_adapter::PropertyAdapter).
//! Static values always win. Reads that fall through to the store can be
//! memoized in a scope opened on a [`SettingsContext`]; a context without an
//! open scope always reads the store directly.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod encryption;
pub mod loader;
pub mod memory_adapter;
pub mod prelude;
pub mod resolver;
pub mod scope;
pub mod static_settings;

pub use encryption::Encryption;
pub use loader::StaticSettingsLoader;
pub use memory_adapter::MemoryPropertyAdapter;
pub use resolver::LayeredSettings;
pub use scope::SettingsContext;
pub use static_settings::StaticSettings;

// vim: ts=4
