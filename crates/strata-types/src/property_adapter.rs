//! Persisted property store contract.
//!
//! The store is a flat key/value table of global properties. A row may carry a
//! null value, which is different from the row being missing: the former means
//! "configured but blank", the latter "not configured".

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

/// One row of the property store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProperty {
	pub key: String,
	pub value: Option<String>,
}

impl StoredProperty {
	pub fn new(key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
		Self { key: key.into(), value: value.map(Into::into) }
	}

	/// Value with a null normalized to the empty string
	pub fn value_or_empty(&self) -> &str {
		self.value.as_deref().unwrap_or_default()
	}
}

#[async_trait]
pub trait PropertyAdapter: Debug + Send + Sync {
	/// Reads a single property row. `Ok(None)` means there is no row for `key`.
	async fn read_property(&self, key: &str) -> StResult<Option<StoredProperty>>;

	/// Lists every property row, including rows with null values
	async fn list_properties(&self) -> StResult<Vec<StoredProperty>>;

	/// Inserts or replaces the row for `key`
	async fn upsert_property(&self, key: &str, value: Option<&str>) -> StResult<()>;

	/// Deletes the row for `key`. Deleting a missing key is not an error.
	async fn delete_property(&self, key: &str) -> StResult<()>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_value_or_empty() {
		assert_eq!(StoredProperty::new("a", Some("1")).value_or_empty(), "1");
		assert_eq!(StoredProperty::new("a", None::<String>).value_or_empty(), "");
		assert_eq!(StoredProperty::new("a", Some("")).value_or_empty(), "");
	}
}

// vim: ts=4
