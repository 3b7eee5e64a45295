//! Property adapter CRUD tests
//!
//! Tests point reads, listing, upserts and deletes against a real SQLite file,
//! and the layered resolver running on top of it.

use std::sync::Arc;

use strata_core::{LayeredSettings, SettingsContext, StaticSettings};
use strata_property_adapter_sqlite::PropertyAdapterSqlite;
use strata_types::property_adapter::{PropertyAdapter, StoredProperty};
use tempfile::TempDir;

async fn create_test_adapter() -> (PropertyAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = PropertyAdapterSqlite::new(temp_dir.path())
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

#[tokio::test]
async fn test_read_missing_property() {
	let (adapter, _temp) = create_test_adapter().await;

	let result = adapter.read_property("missing").await.expect("Should read");

	assert_eq!(result, None);
}

#[tokio::test]
async fn test_upsert_and_read() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.upsert_property("smtp.host", Some("mail.example.com")).await.expect("Should insert");
	let prop = adapter.read_property("smtp.host").await.expect("Should read");
	assert_eq!(prop, Some(StoredProperty::new("smtp.host", Some("mail.example.com"))));

	// second upsert replaces the value
	adapter.upsert_property("smtp.host", Some("smtp.example.com")).await.expect("Should update");
	let prop = adapter.read_property("smtp.host").await.expect("Should read");
	assert_eq!(prop.and_then(|p| p.value).as_deref(), Some("smtp.example.com"));
}

#[tokio::test]
async fn test_null_and_empty_values_are_distinct_from_missing() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.upsert_property("null", None).await.expect("Should insert null");
	adapter.upsert_property("empty", Some("")).await.expect("Should insert empty");

	let null = adapter.read_property("null").await.expect("Should read");
	let empty = adapter.read_property("empty").await.expect("Should read");

	assert_eq!(null, Some(StoredProperty::new("null", None::<&str>)));
	assert_eq!(empty, Some(StoredProperty::new("empty", Some(""))));
}

#[tokio::test]
async fn test_list_properties() {
	let (adapter, _temp) = create_test_adapter().await;

	for i in 1..=3 {
		adapter
			.upsert_property(&format!("key{}", i), Some(format!("value{}", i).as_str()))
			.await
			.expect("Should insert");
	}
	adapter.upsert_property("blank", None).await.expect("Should insert");

	let props = adapter.list_properties().await.expect("Should list");

	assert_eq!(props.len(), 4);
	assert_eq!(props[0], StoredProperty::new("blank", None::<&str>));
	assert_eq!(props[1], StoredProperty::new("key1", Some("value1")));
}

#[tokio::test]
async fn test_delete_property() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.upsert_property("a", Some("1")).await.expect("Should insert");
	adapter.delete_property("a").await.expect("Should delete");
	adapter.delete_property("never-existed").await.expect("Deleting a missing key is fine");

	assert_eq!(adapter.read_property("a").await.expect("Should read"), None);
	assert!(adapter.list_properties().await.expect("Should list").is_empty());
}

#[tokio::test]
async fn test_reopen_keeps_data() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	{
		let adapter = PropertyAdapterSqlite::new(temp_dir.path()).await.expect("Should open");
		adapter.upsert_property("persisted", Some("yes")).await.expect("Should insert");
	}

	let adapter = PropertyAdapterSqlite::new(temp_dir.path()).await.expect("Should reopen");
	let prop = adapter.read_property("persisted").await.expect("Should read");
	assert_eq!(prop.and_then(|p| p.value).as_deref(), Some("yes"));
}

#[tokio::test]
async fn test_layered_settings_over_sqlite() {
	let (adapter, _temp) = create_test_adapter().await;
	let adapter = Arc::new(adapter);
	adapter.upsert_property("a", Some("1")).await.expect("Should insert");
	adapter.upsert_property("nulled", None).await.expect("Should insert");

	let mut system = StaticSettings::default();
	system.set("static", "s");
	let settings = LayeredSettings::new(system, adapter.clone());
	let mut ctx = SettingsContext::new("test");

	settings.open_scope(&mut ctx).expect("Should open scope");
	assert_eq!(settings.get(&mut ctx, "a").await.expect("get").as_deref(), Some("1"));
	assert_eq!(settings.get(&mut ctx, "nulled").await.expect("get").as_deref(), Some(""));
	settings.remove(&mut ctx, "a");
	assert_eq!(settings.get(&mut ctx, "a").await.expect("get"), None);
	settings.close_scope(&mut ctx);

	settings.open_scope(&mut ctx).expect("Should reopen scope");
	assert_eq!(settings.get(&mut ctx, "a").await.expect("get").as_deref(), Some("1"));
	settings.close_scope(&mut ctx);

	let all = settings.all_entries().await.expect("Should list");
	assert_eq!(all.len(), 3);
	assert_eq!(all.get("nulled").map(String::as_str), Some(""));
	assert_eq!(all.get("static").map(String::as_str), Some("s"));
}

// vim: ts=4
