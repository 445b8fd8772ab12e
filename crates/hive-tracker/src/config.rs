//! Tracker configuration

use hive_core::DEFAULT_PORT;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub listen_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults if it does not exist
    pub fn load_or_default(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_listens_on_8080() {
        let config = Config::default();
        assert_eq!(config.listen_addr.port(), 8080);
        assert!(config.listen_addr.ip().is_unspecified());
    }

    #[test]
    fn test_load() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"listen_addr = "127.0.0.1:9000""#).unwrap();
        file.flush().unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"listen_addr = "not an address""#).unwrap();
        file.flush().unwrap();

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load(std::path::Path::new("/nonexistent/hive.toml")).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(std::path::Path::new("/nonexistent/hive.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_reads_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"listen_addr = "127.0.0.1:9001""#).unwrap();
        file.flush().unwrap();

        let config = Config::load_or_default(file.path()).unwrap();
        assert_eq!(config.listen_addr.port(), 9001);

        let mut bad = NamedTempFile::new().unwrap();
        writeln!(bad, "listen_addr = 5").unwrap();
        bad.flush().unwrap();
        assert!(Config::load_or_default(bad.path()).is_err());
    }
}
