//! Per-context settings cache.
//!
//! A [`SettingsContext`] is owned by one logical task (a request, a job, the
//! startup routine) and passed by `&mut` into the resolver. It holds at most
//! one open [`ScopedCache`]. Exclusive access follows from ownership, so
//! scopes are never shared between tasks and need no locking.

use std::collections::HashMap;
use std::fmt;

/// A cached fact about one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedProperty {
	Present(Box<str>),
	/// The key is known to have no value
	Absent,
}

/// Result of looking a key up in a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLookup<'a> {
	/// Nothing recorded for the key in this scope
	Unknown,
	Absent,
	Present(&'a str),
}

/// Memoized property store lookups and scoped writes.
///
/// Once a key is recorded it stays authoritative until the scope is closed,
/// whatever happens to the store meanwhile. There is no way back to
/// [`CacheLookup::Unknown`] short of dropping the whole cache.
#[derive(Debug, Default)]
pub struct ScopedCache {
	entries: HashMap<Box<str>, CachedProperty>,
}

impl ScopedCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn lookup(&self, key: &str) -> CacheLookup<'_> {
		match self.entries.get(key) {
			None => CacheLookup::Unknown,
			Some(CachedProperty::Absent) => CacheLookup::Absent,
			Some(CachedProperty::Present(value)) => CacheLookup::Present(value),
		}
	}

	/// Records the outcome of a store read, present or not
	pub fn record(&mut self, key: &str, value: Option<&str>) {
		let entry = match value {
			Some(value) => CachedProperty::Present(value.into()),
			None => CachedProperty::Absent,
		};
		self.entries.insert(key.into(), entry);
	}

	pub fn put(&mut self, key: &str, value: &str) {
		self.entries.insert(key.into(), CachedProperty::Present(value.into()));
	}

	/// Marks the key as known-absent (not the same as forgetting it)
	pub fn mark_absent(&mut self, key: &str) {
		self.entries.insert(key.into(), CachedProperty::Absent);
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Execution context handle for settings reads and writes
pub struct SettingsContext {
	label: Box<str>,
	pub(crate) scope: Option<ScopedCache>,
}

impl SettingsContext {
	/// Creates a context with no open scope. The label names the context in
	/// logs and errors, the way a thread name would.
	pub fn new(label: impl Into<Box<str>>) -> Self {
		Self { label: label.into(), scope: None }
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn is_scope_open(&self) -> bool {
		self.scope.is_some()
	}

	/// The open scope's cache, if any
	pub fn cache(&self) -> Option<&ScopedCache> {
		self.scope.as_ref()
	}
}

impl fmt::Debug for SettingsContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SettingsContext")
			.field("label", &self.label)
			.field("cached", &self.scope.as_ref().map(ScopedCache::len))
			.finish()
	}
}


// vim: ts=4
