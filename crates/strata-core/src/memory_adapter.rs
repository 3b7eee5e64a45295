//! In-memory property store.
//!
//! Used when no database is configured and by tests. It counts point reads so
//! callers can check how often the store was actually hit, and it can be put
//! into a failing mode to simulate an unavailable store.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::prelude::*;

#[derive(Debug, Default)]
pub struct MemoryPropertyAdapter {
	props: RwLock<BTreeMap<String, Option<String>>>,
	reads: AtomicUsize,
	unavailable: AtomicBool,
}

impl MemoryPropertyAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_properties<K, V>(props: impl IntoIterator<Item = (K, Option<V>)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		let props = props.into_iter().map(|(k, v)| (k.into(), v.map(Into::into))).collect();
		Self { props: RwLock::new(props), ..Self::default() }
	}

	/// Number of `read_property` calls served so far
	pub fn read_count(&self) -> usize {
		self.reads.load(Ordering::SeqCst)
	}

	/// Makes every subsequent call fail with `Error::StoreUnavailable`
	pub fn set_unavailable(&self, unavailable: bool) {
		self.unavailable.store(unavailable, Ordering::SeqCst);
	}

	fn check_available(&self) -> StResult<()> {
		if self.unavailable.load(Ordering::SeqCst) {
			warn!("memory property store is unavailable");
			return Err(Error::StoreUnavailable("memory store switched off".into()));
		}
		Ok(())
	}
}

#[async_trait]
impl PropertyAdapter for MemoryPropertyAdapter {
	async fn read_property(&self, key: &str) -> StResult<Option<StoredProperty>> {
		self.check_available()?;
		self.reads.fetch_add(1, Ordering::SeqCst);
		Ok(self
			.props
			.read()
			.get(key)
			.map(|value| StoredProperty { key: key.to_string(), value: value.clone() }))
	}

	async fn list_properties(&self) -> StResult<Vec<StoredProperty>> {
		self.check_available()?;
		Ok(self
			.props
			.read()
			.iter()
			.map(|(key, value)| StoredProperty { key: key.clone(), value: value.clone() })
			.collect())
	}

	async fn upsert_property(&self, key: &str, value: Option<&str>) -> StResult<()> {
		self.check_available()?;
		self.props.write().insert(key.to_string(), value.map(str::to_string));
		Ok(())
	}

	async fn delete_property(&self, key: &str) -> StResult<()> {
		self.check_available()?;
		self.props.write().remove(key);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_crud() {
		let store = MemoryPropertyAdapter::new();

		assert_eq!(store.read_property("a").await.unwrap(), None);
		store.upsert_property("a", Some("1")).await.unwrap();
		store.upsert_property("b", None).await.unwrap();

		assert_eq!(store.read_property("a").await.unwrap(), Some(StoredProperty::new("a", Some("1"))));
		assert_eq!(store.read_property("b").await.unwrap(), Some(StoredProperty::new("b", None::<&str>)));
		assert_eq!(store.list_properties().await.unwrap().len(), 2);

		store.delete_property("a").await.unwrap();
		store.delete_property("missing").await.unwrap();
		assert_eq!(store.read_property("a").await.unwrap(), None);
		assert_eq!(store.read_count(), 4);
	}

	#[tokio::test]
	async fn test_unavailable() {
		let store = MemoryPropertyAdapter::with_properties([("a", Some("1"))]);
		store.set_unavailable(true);

		assert!(matches!(store.read_property("a").await, Err(Error::StoreUnavailable(_))));
		assert!(matches!(store.list_properties().await, Err(Error::StoreUnavailable(_))));
		assert!(matches!(store.upsert_property("a", None).await, Err(Error::StoreUnavailable(_))));

		store.set_unavailable(false);
		assert!(store.read_property("a").await.unwrap().is_some());
	}
}

// vim: ts=4
