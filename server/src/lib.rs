//! Strata settings server.
//!
//! Administrative HTTP endpoints over [`LayeredSettings`](strata_core::LayeredSettings).
//! Every request runs inside its own settings scope, so repeated reads within
//! one request are consistent and cost one store round-trip per key.

#![forbid(unsafe_code)]

pub mod app;
pub mod handler;
pub mod prelude;
pub mod routes;
pub mod scope;
pub mod types;

pub use crate::app::{App, AppBuilder, AppState, init_logging};

// vim: ts=4
