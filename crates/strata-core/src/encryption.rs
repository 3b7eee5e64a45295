//! Location of the secret key used to protect sensitive setting values.
//!
//! Only the key location is tracked here. Encrypting and decrypting values is
//! done by whoever owns the key material.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encryption {
	secret_key_path: Option<PathBuf>,
}

impl Encryption {
	pub fn new(secret_key_path: Option<PathBuf>) -> Self {
		Self { secret_key_path }
	}

	pub fn secret_key_path(&self) -> Option<&Path> {
		self.secret_key_path.as_deref()
	}

	/// True if a key path is configured and points to an existing file
	pub fn has_secret_key(&self) -> bool {
		self.secret_key_path.as_deref().is_some_and(Path::is_file)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_no_path_means_no_key() {
		assert!(!Encryption::default().has_secret_key());
	}

	#[test]
	fn test_missing_file_means_no_key() {
		let dir = tempfile::tempdir().unwrap();
		let enc = Encryption::new(Some(dir.path().join("absent.key")));
		assert!(enc.secret_key_path().is_some());
		assert!(!enc.has_secret_key());
	}

	#[test]
	fn test_existing_file_is_a_key() {
		let file = tempfile::NamedTempFile::new().unwrap();
		let enc = Encryption::new(Some(file.path().to_path_buf()));
		assert!(enc.has_secret_key());
	}
}

// vim: ts=4
