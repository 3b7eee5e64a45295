//! Builds [`StaticSettings`] from process-start sources.
//!
//! Sources are applied in call order, later ones overriding earlier ones. The
//! usual sequence is config file, then environment, then command line.

use serde_yaml::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::prelude::*;
use crate::static_settings::StaticSettings;

/// Environment prefix for static setting overrides
pub const ENV_PREFIX: &str = "STRATA_";

#[derive(Debug, Default)]
pub struct StaticSettingsLoader {
	props: HashMap<String, String>,
}

impl StaticSettingsLoader {
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads a YAML config file. Nested mappings become dot-separated keys.
	pub fn file(&mut self, path: impl AsRef<Path>) -> StResult<&mut Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|err| {
			Error::ConfigError(format!("cannot read {}: {}", path.display(), err))
		})?;
		info!("loading static settings from {}", path.display());
		self.yaml(&content)
	}

	pub fn yaml(&mut self, content: &str) -> StResult<&mut Self> {
		let doc: Value = serde_yaml::from_str(content)
			.map_err(|err| Error::ConfigError(format!("invalid settings file: {}", err)))?;
		match doc {
			Value::Null => {}
			Value::Mapping(_) => flatten("", &doc, &mut self.props),
			_ => {
				return Err(Error::ConfigError("settings file must contain a mapping".into()));
			}
		}
		Ok(self)
	}

	/// Applies `STRATA_*` variables from the process environment
	pub fn env(&mut self) -> &mut Self {
		self.env_vars(std::env::vars())
	}

	/// `STRATA_SMTP__HOST=x` becomes `smtp.host = x`
	pub fn env_vars(&mut self, vars: impl IntoIterator<Item = (String, String)>) -> &mut Self {
		for (name, value) in vars {
			let Some(rest) = name.strip_prefix(ENV_PREFIX) else {
				continue;
			};
			if rest.is_empty() {
				continue;
			}
			let key = rest.to_ascii_lowercase().replace("__", ".");
			debug!("static setting {} overridden from environment", key);
			self.props.insert(key, value);
		}
		self
	}

	/// Applies `key=value` overrides (a leading `-D` is accepted)
	pub fn overrides<S: AsRef<str>>(
		&mut self,
		args: impl IntoIterator<Item = S>,
	) -> StResult<&mut Self> {
		for arg in args {
			let arg = arg.as_ref();
			let arg = arg.strip_prefix("-D").unwrap_or(arg);
			match arg.split_once('=') {
				Some((key, value)) if !key.trim().is_empty() => {
					self.props.insert(key.trim().to_string(), value.to_string());
				}
				_ => {
					return Err(Error::ConfigError(format!(
						"invalid setting override '{}', expected key=value",
						arg
					)));
				}
			}
		}
		Ok(self)
	}

	pub fn build(&mut self) -> StaticSettings {
		StaticSettings::new(std::mem::take(&mut self.props))
	}
}

fn scalar_to_string(value: &Value) -> Option<String> {
	match value {
		Value::Null => Some(String::new()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Number(n) => Some(n.to_string()),
		Value::String(s) => Some(s.clone()),
		Value::Sequence(items) => {
			let items: Option<Vec<String>> = items.iter().map(scalar_to_string).collect();
			items.map(|items| items.join(","))
		}
		Value::Tagged(tagged) => scalar_to_string(&tagged.value),
		Value::Mapping(_) => None,
	}
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
	if let Value::Mapping(map) = value {
		for (k, v) in map {
			let Some(k) = scalar_to_string(k).filter(|k| !k.is_empty()) else {
				warn!("ignoring settings entry with non-scalar key under '{}'", prefix);
				continue;
			};
			let key = if prefix.is_empty() { k } else { format!("{}.{}", prefix, k) };
			flatten(&key, v, out);
		}
	} else if let Some(s) = scalar_to_string(value) {
		out.insert(prefix.to_string(), s);
	} else {
		warn!("ignoring settings entry '{}' with unsupported value", prefix);
	}
}


// vim: ts=4
