//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_max_upload_size() -> usize {
    20 * 1024 * 1024
}

fn default_page_size() -> usize {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Directory receiving uploaded images, served under `/uploads`.
    pub upload_dir: String,
    /// Upper bound for a whole multipart request, in bytes.
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: usize,
    /// Page size used when a list is requested with `page` but no `per_page`.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Loads `config/default.yaml`, the optional `config/{APP_ENV}.yaml`
    /// profile and `APP_*` environment overrides, in that order.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Select config profile (defaults to `local`).
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_limits_fall_back_to_defaults() {
        let config: ServerConfig = serde_json::from_value(serde_json::json!({
            "address": "127.0.0.1",
            "port": 8080,
            "database_url": "app.db",
            "upload_dir": "./uploads",
        }))
        .unwrap();

        assert_eq!(config.max_upload_size, 20 * 1024 * 1024);
        assert_eq!(config.default_page_size, 10);
    }
}
