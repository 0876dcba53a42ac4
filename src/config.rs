use crate::storage::{Store, StoreExt};
use serde::{Deserialize, Serialize};
use std::time::Duration;

static CONFIG_KEY: &str = "config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	pub latency: Latencies,
	pub import_success_rate: f64,
	pub sync_success_rate: f64,
	pub products_per_page: usize,
	pub catalog_size: usize,
	pub max_upload_bytes: u64,
}

/// Simulated round-trip times, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Latencies {
	pub auth_ms: u64,
	pub validate_ms: u64,
	pub import_row_ms: u64,
	pub fetch_ms: u64,
	pub sync_ms: u64,
}
impl Default for Config {
	fn default() -> Self {
		Self {
			latency: Latencies::default(),
			import_success_rate: 0.8,
			sync_success_rate: 0.9,
			products_per_page: 10,
			catalog_size: 45,
			max_upload_bytes: 5 * 1024 * 1024,
		}
	}
}

impl Default for Latencies {
	fn default() -> Self {
		Self {
			auth_ms: 1000,
			validate_ms: 1500,
			import_row_ms: 200,
			fetch_ms: 800,
			sync_ms: 600,
		}
	}
}

impl Latencies {
	pub fn auth(&self) -> Duration {
		Duration::from_millis(self.auth_ms)
	}

	pub fn validate(&self) -> Duration {
		Duration::from_millis(self.validate_ms)
	}

	pub fn import_row(&self) -> Duration {
		Duration::from_millis(self.import_row_ms)
	}

	pub fn fetch(&self) -> Duration {
		Duration::from_millis(self.fetch_ms)
	}

	pub fn sync(&self) -> Duration {
		Duration::from_millis(self.sync_ms)
	}
}

impl Config {
	/// Defaults, overlaid with whatever partial config is stored under `"config"`.
	pub fn load(store: &dyn Store) -> Self {
		match store.get_json::<Self>(CONFIG_KEY) {
			Ok(Some(config)) => {
				log::debug!(target: "config", "loaded stored overrides {config:?}");
				config
			}
			Ok(None) => Self::default(),
			Err(err) => {
				log::warn!(target: "config", "ignoring stored config: {err}");
				Self::default()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::MemoryStore;

	#[test]
	fn defaults_without_overrides() {
		let config = Config::load(&MemoryStore::new());
		assert_eq!(config, Config::default());
		assert_eq!(config.latency.import_row(), Duration::from_millis(200));
		assert_eq!(config.max_upload_bytes, 5_242_880);
	}

	#[test]
	fn partial_overrides_keep_other_defaults() {
		let store = MemoryStore::new().with_entry(
			"config",
			r#"{"import_success_rate":1.0,"latency":{"import_row_ms":0}}"#,
		);
		let config = Config::load(&store);
		assert_eq!(config.import_success_rate, 1.0);
		assert_eq!(config.latency.import_row_ms, 0);
		assert_eq!(config.latency.auth_ms, 1000);
		assert_eq!(config.products_per_page, 10);
	}

	#[test]
	fn malformed_overrides_fall_back() {
		let store = MemoryStore::new().with_entry("config", "{");
		assert_eq!(Config::load(&store), Config::default());
	}
}
