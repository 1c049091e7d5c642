use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::search::DEFAULT_PER_PAGE;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Storage backend for catalog records
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseBackend {
    #[default]
    Sqlite,
    /// Records live only as long as the process.
    Memory,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: DatabaseBackend,
    /// SQLite file, ignored by the memory backend.
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: DatabaseBackend::default(),
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("catalog.db")
}

/// Paging limits for list endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    /// Page size when a request does not give `per_page`.
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,
    /// Largest `per_page` a request may ask for.
    #[serde(default = "default_max_per_page")]
    pub max_per_page: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_per_page: default_per_page(),
            max_per_page: default_max_per_page(),
        }
    }
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_max_per_page() -> u32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000

[database]
backend = "sqlite"
path = "/data/catalog.sqlite"

[listing]
default_per_page = 10
max_per_page = 50
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.database.backend, DatabaseBackend::Sqlite);
        assert_eq!(
            config.database.path.to_str().unwrap(),
            "/data/catalog.sqlite"
        );
        assert_eq!(config.listing.default_per_page, 10);
        assert_eq!(config.listing.max_per_page, 50);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.database.path.to_str().unwrap(), "catalog.db");
        assert_eq!(config.listing.default_per_page, 15);
        assert_eq!(config.listing.max_per_page, 100);
    }

    #[test]
    fn test_deserialize_memory_backend() {
        let toml = r#"
[database]
backend = "memory"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.database.backend, DatabaseBackend::Memory);
        assert_eq!(config.database.path.to_str().unwrap(), "catalog.db");
    }

    #[test]
    fn test_deserialize_unknown_backend_fails() {
        let toml = r#"
[database]
backend = "postgres"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serializes_to_json() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["server"]["port"], 8080);
        assert_eq!(json["database"]["backend"], "sqlite");
        assert_eq!(json["listing"]["max_per_page"], 100);
    }
}
