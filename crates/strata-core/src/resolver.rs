//! Layered settings resolver.
//!
//! Resolution order for [`LayeredSettings::get`]:
//! 1. static settings
//! 2. the scope of the calling context (if one is open)
//! 3. the property store
//!
//! The scope is optional. A context that never opens one pays a store read on
//! every call but never sees stale values. That keeps one-shot callers (startup,
//! background jobs) free of any cleanup duty.

use std::collections::HashMap;
use std::sync::Arc;

use crate::prelude::*;
use crate::scope::{CacheLookup, ScopedCache, SettingsContext};
use crate::static_settings::StaticSettings;

#[derive(Debug)]
pub struct LayeredSettings {
	system: StaticSettings,
	adapter: Arc<dyn PropertyAdapter>,
}

impl LayeredSettings {
	pub fn new(system: StaticSettings, adapter: Arc<dyn PropertyAdapter>) -> Self {
		Self { system, adapter }
	}

	pub fn static_settings(&self) -> &StaticSettings {
		&self.system
	}

	pub fn adapter(&self) -> &Arc<dyn PropertyAdapter> {
		&self.adapter
	}

	/// Resolves `key`. A null value in the store comes back as an empty string.
	pub async fn get(&self, ctx: &mut SettingsContext, key: &str) -> StResult<Option<String>> {
		if let Some(value) = self.system.get(key) {
			return Ok(Some(value.to_string()));
		}

		if let Some(cache) = &ctx.scope {
			match cache.lookup(key) {
				CacheLookup::Present(value) => {
					debug!("[{}] setting cache hit: {}", ctx.label(), key);
					return Ok(Some(value.to_string()));
				}
				// the fact that the property is missing is cached too
				CacheLookup::Absent => {
					debug!("[{}] setting cached as absent: {}", ctx.label(), key);
					return Ok(None);
				}
				CacheLookup::Unknown => {}
			}
		}

		let loaded = self
			.adapter
			.read_property(key)
			.await
			.inspect_err(|err| warn!("[{}] reading setting {} failed: {}", ctx.label(), key, err))?
			.map(|prop| prop.value.unwrap_or_default());

		if let Some(cache) = &mut ctx.scope {
			cache.record(key, loaded.as_deref());
		}
		Ok(loaded)
	}

	/// Like [`get`](Self::get), parsed as a boolean. Blank values count as unset.
	pub async fn get_bool(&self, ctx: &mut SettingsContext, key: &str) -> StResult<Option<bool>> {
		let Some(value) = self.get_non_blank(ctx, key).await? else {
			return Ok(None);
		};
		if value.eq_ignore_ascii_case("true") {
			Ok(Some(true))
		} else if value.eq_ignore_ascii_case("false") {
			Ok(Some(false))
		} else {
			Err(Error::ValidationError(format!(
				"Setting '{}' is not a boolean: '{}'",
				key, value
			)))
		}
	}

	/// Like [`get`](Self::get), parsed as a decimal integer. Blank values count as unset.
	pub async fn get_int(&self, ctx: &mut SettingsContext, key: &str) -> StResult<Option<i64>> {
		let Some(value) = self.get_non_blank(ctx, key).await? else {
			return Ok(None);
		};
		value.parse::<i64>().map(Some).map_err(|_| {
			Error::ValidationError(format!("Setting '{}' is not an integer: '{}'", key, value))
		})
	}

	async fn get_non_blank(&self, ctx: &mut SettingsContext, key: &str) -> StResult<Option<String>> {
		Ok(self.get(ctx, key).await?.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()))
	}

	/// Writes `value` into the open scope of `ctx`. The store is not touched.
	///
	/// Returns `false` if no scope is open, in which case the write is dropped.
	pub fn set(&self, ctx: &mut SettingsContext, key: &str, value: &str) -> bool {
		if let Some(cache) = &mut ctx.scope {
			cache.put(key, value);
			true
		} else {
			debug!("[{}] no open settings scope, dropping set of {}", ctx.label(), key);
			false
		}
	}

	/// Records `key` as absent in the open scope of `ctx`. The store is not touched.
	///
	/// Returns `false` if no scope is open, in which case the removal is dropped.
	pub fn remove(&self, ctx: &mut SettingsContext, key: &str) -> bool {
		if let Some(cache) = &mut ctx.scope {
			cache.mark_absent(key);
			true
		} else {
			debug!("[{}] no open settings scope, dropping remove of {}", ctx.label(), key);
			false
		}
	}

	/// All stored properties with static settings layered on top.
	///
	/// Always reads the store; scopes are neither consulted nor filled.
	pub async fn all_entries(&self) -> StResult<HashMap<String, String>> {
		let stored = self
			.adapter
			.list_properties()
			.await
			.inspect_err(|err| warn!("listing settings failed: {}", err))?;

		let mut entries: HashMap<String, String> = stored
			.into_iter()
			.map(|prop| {
				let value = prop.value.unwrap_or_default();
				(prop.key, value)
			})
			.collect();
		entries.extend(self.system.all_entries());
		Ok(entries)
	}

	/// Opens a fresh, empty scope for `ctx`.
	///
	/// Fails with `Error::ScopeAlreadyOpen` if `ctx` already has one; the
	/// existing scope is left untouched.
	pub fn open_scope(&self, ctx: &mut SettingsContext) -> StResult<()> {
		if ctx.scope.is_some() {
			error!(
				"settings scope opened twice for context '{}' or state wasn't cleared last time it was used",
				ctx.label()
			);
			return Err(Error::ScopeAlreadyOpen(ctx.label().into()));
		}
		ctx.scope = Some(ScopedCache::new());
		debug!("[{}] settings scope opened", ctx.label());
		Ok(())
	}

	/// Discards the scope of `ctx`, if any
	pub fn close_scope(&self, ctx: &mut SettingsContext) {
		if let Some(cache) = ctx.scope.take() {
			debug!("[{}] settings scope closed ({} cached)", ctx.label(), cache.len());
		}
	}
}


// vim: ts=4
