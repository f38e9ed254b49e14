//! Service configuration
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! environment variables (a `.env` file is honoured), then CLI flags applied
//! by the runner. The access token lives here and is handed to every remote
//! call; nothing in the crate reads it from a global.

use crate::error::{Error, Result, ResultExt};
use crate::template::UrlTemplate;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;

/// Default remote API root
pub const DEFAULT_BASE_URL: &str = "https://hiring.base.vn/publicapi/v2";

/// Default candidate profile link
pub const DEFAULT_CANDIDATE_LINK: &str =
    "https://hiring.base.vn/opening/{{ opening_id }}?candidate={{ candidate_id }}";

/// Variables the candidate link template must reference
pub const CANDIDATE_LINK_VARS: &[&str] = &["opening_id", "candidate_id"];

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote hiring platform settings
    pub remote: RemoteConfig,

    /// HTTP server binding
    pub server: ServerConfig,

    /// Pattern for the `candidate_link` column
    pub candidate_link_template: String,

    /// Default tracing filter directive
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            server: ServerConfig::default(),
            candidate_link_template: DEFAULT_CANDIDATE_LINK.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional YAML file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        dotenvy::dotenv().ok();
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse YAML config content; unspecified fields keep their defaults
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Override fields from environment-style lookups
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("BASE_API_URL") {
            self.remote.base_url = url;
        }
        if let Some(token) = lookup("BASE_API_KEY") {
            self.remote.access_token = Some(token);
        }
        if let Some(secs) = lookup("BASE_API_TIMEOUT_SECS") {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|e| Error::invalid_value("BASE_API_TIMEOUT_SECS", e.to_string()))?;
            self.remote.timeout_secs = Some(secs);
        }
        if let Some(template) = lookup("CANDIDATE_LINK_TEMPLATE") {
            self.candidate_link_template = template;
        }
        if let Some(host) = lookup("APP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("APP_PORT") {
            self.server.port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::invalid_value("APP_PORT", "must be a valid u16"))?;
        }
        Ok(())
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.remote.base_url)?;
        if self.remote.page_size == 0 {
            return Err(Error::invalid_value("remote.page_size", "must be positive"));
        }
        if self.server.port == 0 {
            return Err(Error::invalid_value("server.port", "must be non-zero"));
        }
        self.candidate_link()?;
        Ok(())
    }

    /// The access token, or an error naming where to set it
    pub fn access_token(&self) -> Result<&str> {
        self.remote
            .access_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::missing_field("remote.access_token (BASE_API_KEY)"))
    }

    /// Parsed candidate link template
    pub fn candidate_link(&self) -> Result<UrlTemplate> {
        UrlTemplate::new(self.candidate_link_template.clone(), CANDIDATE_LINK_VARS)
    }
}

// ============================================================================
// Remote API
// ============================================================================

/// Remote hiring platform settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// API root; endpoint paths are joined onto it
    pub base_url: String,

    /// Static token sent as `access_token` in every request body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Optional request timeout in seconds (none waits indefinitely)
    pub timeout_secs: Option<u64>,

    /// `num_per_page` sent with candidate list requests
    pub page_size: u32,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            timeout_secs: None,
            page_size: 10_000,
        }
    }
}

impl RemoteConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

// ============================================================================
// HTTP Server
// ============================================================================

/// Settings controlling the HTTP server binding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Resolve the bind address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| Error::invalid_value("server.host", "must be an IPv4 or IPv6 address"))?;

        Ok(SocketAddr::new(ip, self.port))
    }
}
