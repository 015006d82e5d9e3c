use std::str::FromStr;

/// Server settings, read from the environment.
///
/// | Variable            | Default     |
/// |---------------------|-------------|
/// | `UNIURI_HOST`       | `127.0.0.1` |
/// | `UNIURI_PORT`       | `5000`      |
/// | `UNIURI_MAX_LENGTH` | `4096`      |
/// | `UNIURI_MAX_COUNT`  | `100`       |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
	/// Address to bind.
	pub host: String,

	/// Port to bind.
	pub port: u16,

	/// Largest `length` accepted by `/v1/generate`.
	pub max_length: usize,

	/// Largest `count` accepted by `/v1/generate`.
	pub max_count: usize,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
			max_length: 4096,
			max_count: 100,
		}
	}
}

impl ServerConfig {
	/// Loads an optional `.env` file, then reads the process environment.
	///
	/// # Errors
	/// Returns an error naming the variable if a value cannot be parsed.
	pub fn from_env() -> Result<Self, String> {
		if let Ok(path) = dotenvy::dotenv() {
			log::info!("loaded environment from {}", path.display());
		}
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds a configuration from `lookup`, falling back to defaults for
	/// missing variables.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
	where
		F: Fn(&str) -> Option<String>,
	{
		let defaults = Self::default();
		Ok(Self {
			host: lookup("UNIURI_HOST").unwrap_or(defaults.host),
			port: parse_var(&lookup, "UNIURI_PORT", defaults.port)?,
			max_length: parse_var(&lookup, "UNIURI_MAX_LENGTH", defaults.max_length)?,
			max_count: parse_var(&lookup, "UNIURI_MAX_COUNT", defaults.max_count)?,
		})
	}
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
	F: Fn(&str) -> Option<String>,
	T: FromStr,
	T::Err: std::fmt::Display,
{
	match lookup(key) {
		None => Ok(default),
		Some(raw) => raw
			.trim()
			.parse()
			.map_err(|e| format!("invalid {key} '{raw}': {e}")),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let vars: HashMap<String, String> = vars
			.iter()
			.map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
			.collect();
		move |key| vars.get(key).cloned()
	}

	#[test]
	fn missing_variables_use_defaults() {
		let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
		assert_eq!(config, ServerConfig::default());
	}

	#[test]
	fn variables_override_defaults() {
		let config = ServerConfig::from_lookup(lookup_from(&[
			("UNIURI_HOST", "0.0.0.0"),
			("UNIURI_PORT", "8080"),
			("UNIURI_MAX_LENGTH", " 64 "),
			("UNIURI_MAX_COUNT", "5"),
		]))
		.unwrap();
		assert_eq!(config.host, "0.0.0.0");
		assert_eq!(config.port, 8080);
		assert_eq!(config.max_length, 64);
		assert_eq!(config.max_count, 5);
	}

	#[test]
	fn malformed_value_names_the_variable() {
		let err = ServerConfig::from_lookup(lookup_from(&[("UNIURI_PORT", "http")])).unwrap_err();
		assert!(err.starts_with("invalid UNIURI_PORT 'http'"), "{err}");
	}
}
