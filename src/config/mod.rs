//! Configuration system (layered: code > env > config file > defaults).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SecondhandError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CONFIG_FILE_NAME: &str = "config.toml";

/// Client configuration.
///
/// Resolution order:
/// 1. Builder calls (`with_*`)
/// 2. Environment variables (`SECONDHAND_*`, `.env` honored)
/// 3. `config.toml` in the session directory
/// 4. Built-in defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    login_path: String,
    timeout: Duration,
    session_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_dir: crate::session::store::default_session_dir(),
        }
    }

    /// Load from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::new();

        if let Some(dir) = lookup("SECONDHAND_SESSION_DIR") {
            config.session_dir = PathBuf::from(dir);
        }

        if let Some(file) = FileConfig::load(&config.session_dir.join(CONFIG_FILE_NAME))? {
            if let Some(url) = file.base_url {
                config.base_url = url;
            }
            if let Some(path) = file.login_path {
                config.login_path = path;
            }
            if let Some(secs) = file.timeout_secs {
                config.timeout = Duration::from_secs(secs);
            }
        }

        if let Some(url) = lookup("SECONDHAND_BASE_URL") {
            config.base_url = url;
        }
        if let Some(path) = lookup("SECONDHAND_LOGIN_PATH") {
            config.login_path = path;
        }
        if let Some(raw) = lookup("SECONDHAND_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                SecondhandError::Configuration(format!(
                    "SECONDHAND_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = dir.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn session_dir(&self) -> &Path {
        &self.session_dir
    }

    /// Base URL and login path joined with exactly one slash.
    pub fn login_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.login_path.trim_start_matches('/')
        )
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SecondhandError::Configuration(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(SecondhandError::Configuration(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    base_url: Option<String>,
    login_path: Option<String>,
    timeout_secs: Option<u64>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Option<Self>> {
        let raw = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SecondhandError::Io(err)),
        };
        let file = toml::from_str(&raw).map_err(|err| {
            SecondhandError::Configuration(format!("{}: {err}", path.display()))
        })?;
        Ok(Some(file))
    }
}
