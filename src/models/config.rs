use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";
pub const DEFAULT_VERSION: &str = "15.4.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub const ENV_ENDPOINT: &str = "FESS_ENDPOINT";
pub const ENV_ACCESS_TOKEN: &str = "FESS_ACCESS_TOKEN";
pub const ENV_VERSION: &str = "FESS_VERSION";
pub const ENV_TIMEOUT: &str = "FESS_TIMEOUT_SECS";

/// Optional on-disk configuration. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Read a config file, returning `None` when it does not exist.
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Some(toml::from_str(&content)?))
    }
}

/// Connection settings, resolved once per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub endpoint: String,
    pub access_token: Option<String>,
    pub version: String,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_token: None,
            version: DEFAULT_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fessctl").join("config.toml"))
    }

    /// Load settings from the config file, `.env` and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is the common case.
        let _ = dotenvy::dotenv();

        let file = match Self::config_path() {
            Some(path) => FileConfig::read(&path)?,
            None => None,
        };

        Ok(Self::resolve(file.unwrap_or_default(), |key| {
            std::env::var(key).ok()
        }))
    }

    /// Layer environment lookups over file values over defaults.
    pub fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let endpoint = env(ENV_ENDPOINT)
            .or(file.endpoint)
            .unwrap_or(defaults.endpoint);
        let access_token = env(ENV_ACCESS_TOKEN).or(file.access_token);
        let version = env(ENV_VERSION)
            .or(file.version)
            .unwrap_or(defaults.version);
        let timeout_secs = env(ENV_TIMEOUT)
            .and_then(|v| v.trim().parse().ok())
            .or(file.timeout_secs)
            .unwrap_or(defaults.timeout_secs);

        Self {
            endpoint,
            access_token,
            version,
            timeout_secs,
        }
    }

    /// Copy of the settings that is safe to print.
    pub fn redacted(&self) -> Self {
        Self {
            access_token: self.masked_token(),
            ..self.clone()
        }
    }

    /// Token with all but the last four characters hidden.
    pub fn masked_token(&self) -> Option<String> {
        self.access_token.as_ref().map(|token| {
            let count = token.chars().count();
            if count <= 4 {
                "*".repeat(count)
            } else {
                let tail: String = token.chars().skip(count - 4).collect();
                format!("{}{}", "*".repeat(count - 4), tail)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let settings = Settings::resolve(FileConfig::default(), lookup(&[]));
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.access_token, None);
        assert_eq!(settings.version, DEFAULT_VERSION);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_environment_values() {
        let settings = Settings::resolve(
            FileConfig::default(),
            lookup(&[
                (ENV_ENDPOINT, "http://production-fess:8080"),
                (ENV_ACCESS_TOKEN, "production-token"),
                (ENV_VERSION, "15.3.2"),
                (ENV_TIMEOUT, "12"),
            ]),
        );
        assert_eq!(settings.endpoint, "http://production-fess:8080");
        assert_eq!(settings.access_token.as_deref(), Some("production-token"));
        assert_eq!(settings.version, "15.3.2");
        assert_eq!(settings.timeout_secs, 12);
    }

    #[test]
    fn test_empty_access_token_is_kept() {
        let settings =
            Settings::resolve(FileConfig::default(), lookup(&[(ENV_ACCESS_TOKEN, "")]));
        assert_eq!(settings.access_token.as_deref(), Some(""));
    }

    #[test]
    fn test_endpoint_with_trailing_slash_is_preserved() {
        let settings = Settings::resolve(
            FileConfig::default(),
            lookup(&[(ENV_ENDPOINT, "http://fess:8080/")]),
        );
        assert_eq!(settings.endpoint, "http://fess:8080/");
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = FileConfig {
            endpoint: Some("http://from-file:8080".to_string()),
            access_token: Some("file-token".to_string()),
            version: Some("14.19.2".to_string()),
            timeout_secs: Some(30),
        };
        let settings = Settings::resolve(file, lookup(&[(ENV_VERSION, "16.0.0-SNAPSHOT")]));
        assert_eq!(settings.endpoint, "http://from-file:8080");
        assert_eq!(settings.access_token.as_deref(), Some("file-token"));
        assert_eq!(settings.version, "16.0.0-SNAPSHOT");
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let settings =
            Settings::resolve(FileConfig::default(), lookup(&[(ENV_TIMEOUT, "soon")]));
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "endpoint = \"https://secure-fess.example.com:443\"\nversion = \"14.0.0\"\n",
        )
        .unwrap();

        let file = FileConfig::read(&path).unwrap().unwrap();
        assert_eq!(
            file.endpoint.as_deref(),
            Some("https://secure-fess.example.com:443")
        );
        assert_eq!(file.version.as_deref(), Some("14.0.0"));
        assert_eq!(file.access_token, None);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = FileConfig::read(&dir.path().join("absent.toml")).unwrap();
        assert!(file.is_none());
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "endpoint = ").unwrap();
        assert!(matches!(
            FileConfig::read(&path),
            Err(ConfigError::TomlParseError(_))
        ));
    }

    #[test]
    fn test_masked_token() {
        let settings = Settings {
            access_token: Some("abcdefgh".to_string()),
            ..Settings::default()
        };
        assert_eq!(settings.masked_token().as_deref(), Some("****efgh"));

        let short = Settings {
            access_token: Some("abc".to_string()),
            ..Settings::default()
        };
        assert_eq!(short.masked_token().as_deref(), Some("***"));
    }

    #[test]
    fn test_redacted_keeps_other_fields() {
        let settings = Settings {
            endpoint: "https://fess.example".to_string(),
            access_token: Some("abcdefgh".to_string()),
            ..Settings::default()
        };
        let redacted = settings.redacted();
        assert_eq!(redacted.access_token.as_deref(), Some("****efgh"));
        assert_eq!(redacted.endpoint, settings.endpoint);
        assert_eq!(redacted.version, DEFAULT_VERSION);
    }
}
