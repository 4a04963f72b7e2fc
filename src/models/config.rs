//! Configuration model loaded from external sources.

use std::env;
use std::time::Duration;

use config::{Config, ConfigError};
use serde::Deserialize;

use crate::pagination::{DEFAULT_PAGE_SIZE, PICKER_PAGE_SIZE};
use crate::query::QueryOptions;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings of the admin console.
pub struct ConsoleConfig {
    /// Root of the REST backend, e.g. `http://localhost:5137/api`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_picker_page_size")]
    pub picker_page_size: usize,
}

fn default_api_url() -> String {
    "http://localhost:5137/api".to_string()
}

fn default_request_timeout_ms() -> u64 {
    15_000
}

fn default_search_debounce_ms() -> u64 {
    400
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_picker_page_size() -> usize {
    PICKER_PAGE_SIZE
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_ms: default_request_timeout_ms(),
            search_debounce_ms: default_search_debounce_ms(),
            default_page_size: default_page_size(),
            picker_page_size: default_picker_page_size(),
        }
    }
}

impl ConsoleConfig {
    /// Reads `config/default`, the `config/{APP_ENV}` overrides (profile
    /// `local` when unset) and `APP_*` environment variables, in that order.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Options for the list grids.
    pub fn list_options(&self) -> QueryOptions {
        QueryOptions {
            debounce: self.search_debounce(),
            page_size: self.default_page_size,
        }
    }

    /// Options for search-as-you-type pickers.
    pub fn picker_options(&self) -> QueryOptions {
        QueryOptions {
            debounce: self.search_debounce(),
            page_size: self.picker_page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use config::{File, FileFormat};

    use super::*;

    fn from_yaml(yaml: &str) -> ConsoleConfig {
        Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = from_yaml("api_url: http://directorio.local/api");

        assert_eq!(config.api_url, "http://directorio.local/api");
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.search_debounce(), Duration::from_millis(400));
        assert_eq!(config.default_page_size, 5);
        assert_eq!(config.picker_page_size, 10);
    }

    #[test]
    fn options_follow_overrides() {
        let config = from_yaml("search_debounce_ms: 250\ndefault_page_size: 25");

        let list = config.list_options();
        assert_eq!(list.debounce, Duration::from_millis(250));
        assert_eq!(list.page_size, 25);
        assert_eq!(config.picker_options().page_size, 10);
    }
}
