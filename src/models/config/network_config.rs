use std::path::Path;

use crate::models::{ConfigLoader, Network};

use super::error::ConfigError;

impl ConfigLoader for Network {
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let network_dir = path.unwrap_or(Path::new("config/networks"));
		let mut pairs = Vec::new();

		if !network_dir.exists() {
			return Err(ConfigError::file_error("networks directory not found"));
		}

		for entry in std::fs::read_dir(network_dir)? {
			let entry = entry?;
			let path = entry.path();

			if !Self::is_json_file(&path) {
				continue;
			}

			let name = path
				.file_stem()
				.and_then(|s| s.to_str())
				.unwrap_or("unknown")
				.to_string();

			match Self::load_from_path(&path) {
				Ok(network) => pairs.push((name, network)),
				Err(e) => tracing::warn!(path = %path.display(), error = %e, "Skipping network config"),
			}
		}

		Ok(T::from_iter(pairs))
	}

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let config: Network = serde_json::from_reader(file)?;

		if let Err(validation_error) = config.validate() {
			return Err(ConfigError::validation_error(validation_error));
		}

		Ok(config)
	}

	fn validate(&self) -> Result<(), String> {
		if self.name.trim().is_empty() {
			return Err("Name must not be empty".to_string());
		}

		if self.slug.is_empty()
			|| !self
				.slug
				.chars()
				.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
		{
			return Err(
				"Slug must contain only lowercase letters, numbers, and underscores".to_string(),
			);
		}

		let url = url::Url::parse(&self.rpc_url)
			.map_err(|e| format!("Invalid RPC URL '{}': {}", self.rpc_url, e))?;
		if !matches!(url.scheme(), "ws" | "wss") {
			return Err("RPC URL must start with ws:// or wss://".to_string());
		}

		if self.connection_timeout_ms == Some(0) {
			return Err("connection_timeout_ms must be greater than 0".to_string());
		}

		if self.message_timeout_ms == Some(0) {
			return Err("message_timeout_ms must be greater than 0".to_string());
		}

		Ok(())
	}
}
