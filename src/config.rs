use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub static_dir: PathBuf,
    pub app_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("dist"));

        let app_name = lookup("APP_NAME")
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

        Ok(Config {
            service_port,
            service_host,
            static_dir,
            app_name,
        })
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Application name: {}", self.app_name);
        tracing::info!("  Static directory: {}", self.static_dir.display());
        tracing::info!("  Service listening on: {}", self.listen_address());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = config_from(&[
            ("SERVICE_PORT", "9090"),
            ("SERVICE_HOST", "127.0.0.1"),
            ("STATIC_DIR", "/srv/admin/dist"),
            ("APP_NAME", "admin-console"),
        ])
        .unwrap();

        assert_eq!(config.service_port, 9090);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.static_dir, PathBuf::from("/srv/admin/dist"));
        assert_eq!(config.app_name, "admin-console");
        assert_eq!(config.listen_address(), "127.0.0.1:9090");
    }

    #[test]
    fn test_config_with_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.app_name, "spa-gateway");
    }

    #[test]
    fn test_blank_static_dir_uses_default() {
        let config = config_from(&[("STATIC_DIR", "  ")]).unwrap();
        assert_eq!(config.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_invalid_port() {
        let result = config_from(&[("SERVICE_PORT", "not-a-number")]);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let result = config_from(&[("SERVICE_PORT", "99999")]);
        assert!(result.is_err());
    }
}
