//! Client configuration.
//!
//! Loaded from an optional TOML file overlaid with `CYBERTIP_`-prefixed
//! environment variables, e.g. `CYBERTIP_USERNAME`, `CYBERTIP_ENVIRONMENT`.

use std::{fmt, path::Path, time::Duration};

use serde::Deserialize;

/// Which deployment of the service to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
  Production,
  #[default]
  Testing,
}

impl Environment {
  pub fn base_url(self) -> &'static str {
    match self {
      Self::Production => "https://report.cybertip.org/ispws",
      Self::Testing => "https://exttest.cybertip.org/ispws",
    }
  }
}

#[derive(Clone, Deserialize)]
pub struct ClientConfig {
  pub username:               String,
  pub password:               String,
  #[serde(default)]
  pub environment:            Environment,
  /// Overrides the environment's base URL when set.
  #[serde(default)]
  pub base_url:               Option<String>,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs:           u64,
  #[serde(default = "default_connect_timeout_secs")]
  pub connect_timeout_secs:   u64,
  #[serde(default = "default_pool_idle_timeout_secs")]
  pub pool_idle_timeout_secs: u64,
  #[serde(default = "default_pool_max_idle_per_host")]
  pub pool_max_idle_per_host: usize,
  /// `None` disables TCP keepalive.
  #[serde(default = "default_tcp_keepalive_secs")]
  pub tcp_keepalive_secs:     Option<u64>,
}

fn default_timeout_secs() -> u64 { 60 }
fn default_connect_timeout_secs() -> u64 { 10 }
fn default_pool_idle_timeout_secs() -> u64 { 90 }
fn default_pool_max_idle_per_host() -> usize { 8 }
fn default_tcp_keepalive_secs() -> Option<u64> { Some(60) }

impl ClientConfig {
  pub fn new(
    username: impl Into<String>,
    password: impl Into<String>,
    environment: Environment,
  ) -> Self {
    Self {
      username: username.into(),
      password: password.into(),
      environment,
      base_url: None,
      timeout_secs: default_timeout_secs(),
      connect_timeout_secs: default_connect_timeout_secs(),
      pool_idle_timeout_secs: default_pool_idle_timeout_secs(),
      pool_max_idle_per_host: default_pool_max_idle_per_host(),
      tcp_keepalive_secs: default_tcp_keepalive_secs(),
    }
  }

  /// Read `path` (if given and present) and the environment.
  pub fn load(path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
    let mut builder = ::config::Config::builder();
    if let Some(path) = path {
      builder = builder.add_source(::config::File::from(path).required(false));
    }
    builder
      .add_source(::config::Environment::with_prefix("CYBERTIP"))
      .build()?
      .try_deserialize()
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = Some(base_url.into());
    self
  }

  /// The effective base URL, without a trailing slash.
  pub fn base_url(&self) -> &str {
    self
      .base_url
      .as_deref()
      .unwrap_or(self.environment.base_url())
      .trim_end_matches('/')
  }

  pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }

  pub fn connect_timeout(&self) -> Duration {
    Duration::from_secs(self.connect_timeout_secs)
  }

  pub fn pool_idle_timeout(&self) -> Duration {
    Duration::from_secs(self.pool_idle_timeout_secs)
  }

  pub fn tcp_keepalive(&self) -> Option<Duration> {
    self.tcp_keepalive_secs.map(Duration::from_secs)
  }
}

impl fmt::Debug for ClientConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClientConfig")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .field("environment", &self.environment)
      .field("base_url", &self.base_url)
      .field("timeout_secs", &self.timeout_secs)
      .field("connect_timeout_secs", &self.connect_timeout_secs)
      .field("pool_idle_timeout_secs", &self.pool_idle_timeout_secs)
      .field("pool_max_idle_per_host", &self.pool_max_idle_per_host)
      .field("tcp_keepalive_secs", &self.tcp_keepalive_secs)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[test]
  fn environment_urls() {
    let config = ClientConfig::new("u", "p", Environment::Production);
    assert_eq!(config.base_url(), "https://report.cybertip.org/ispws");
    let config = ClientConfig::new("u", "p", Environment::Testing);
    assert_eq!(config.base_url(), "https://exttest.cybertip.org/ispws");
  }

  #[test]
  fn override_wins_and_is_trimmed() {
    let config = ClientConfig::new("u", "p", Environment::Production)
      .with_base_url("http://127.0.0.1:8080/ispws/");
    assert_eq!(config.base_url(), "http://127.0.0.1:8080/ispws");
  }

  #[test]
  fn debug_redacts_password() {
    let config = ClientConfig::new("esp", "hunter2", Environment::Testing);
    let rendered = format!("{config:?}");
    assert!(rendered.contains("esp"));
    assert!(!rendered.contains("hunter2"));
  }

  #[test]
  fn load_from_file_fills_defaults() {
    let path = std::env::temp_dir().join(format!(
      "cybertip-config-{}.toml",
      uuid::Uuid::new_v4()
    ));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
      file,
      "username = \"esp\"\npassword = \"secret\"\nenvironment = \"production\"\ntimeout_secs = 5"
    )
    .unwrap();
    drop(file);

    let config = ClientConfig::load(Some(&path)).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.username, "esp");
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    assert_eq!(config.tcp_keepalive(), Some(Duration::from_secs(60)));
    assert_eq!(config.base_url, None);
  }
}
