//! Settings fixed at process start (config file, environment, command line).
//!
//! Never consults the property store. Mutation is only possible through
//! `&mut self`, so once the value is shared (usually behind the resolver) it
//! is read-only and safe to read from any number of tasks.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::encryption::Encryption;

/// Static property holding the path of the encryption secret key
pub const SECRET_KEY_PATH: &str = "strata.secret_key_path";

#[derive(Debug, Clone, Default)]
pub struct StaticSettings {
	props: HashMap<String, String>,
	encryption: Encryption,
}

impl StaticSettings {
	pub fn new(props: HashMap<String, String>) -> Self {
		let encryption = Encryption::new(props.get(SECRET_KEY_PATH).map(PathBuf::from));
		Self { props, encryption }
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.props.get(key).map(String::as_str)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.props.contains_key(key)
	}

	/// In-memory override, meant for bootstrap and tests
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.props.insert(key.into(), value.into());
	}

	pub fn remove(&mut self, key: &str) {
		self.props.remove(key);
	}

	/// Snapshot of every static entry. Later changes are not reflected in it.
	pub fn all_entries(&self) -> HashMap<String, String> {
		self.props.clone()
	}

	/// Secret key location, derived once from [`SECRET_KEY_PATH`] at construction
	pub fn encryption(&self) -> &Encryption {
		&self.encryption
	}
}

impl FromIterator<(String, String)> for StaticSettings {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}


// vim: ts=4
