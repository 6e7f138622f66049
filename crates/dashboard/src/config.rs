//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `WEBHOOK_BASE_URL` - Base endpoint of the order webhook
//!   (default: `http://localhost:5678/webhook`)
//! - `WEBHOOK_ACCESS_CLIENT_ID` - Access-control client id sent as
//!   `CF-Access-Client-Id`
//! - `WEBHOOK_ACCESS_CLIENT_SECRET` - Access-control client secret sent as
//!   `CF-Access-Client-Secret` (must be set together with the id)
//! - `WEBHOOK_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//! - `DASHBOARD_HOST` - Bind address (default: 127.0.0.1)
//! - `DASHBOARD_PORT` - Listen port (default: 3002)
//!
//! The data mode is deliberately absent: every process starts on mock data.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_WEBHOOK_BASE_URL: &str = "http://localhost:5678/webhook";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.0;

/// Fragments left behind by unfilled `.env` templates (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "your_",
    "changeme",
    "change-me",
    "placeholder",
    "xxxxxx",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// IP address to bind the JSON API to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Remote order webhook
    pub webhook: WebhookConfig,
}

/// Remote order webhook configuration.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Base endpoint without trailing slash; operation paths are appended.
    pub base_url: String,
    /// Static access-control credentials (optional)
    pub access: Option<AccessCredentials>,
    /// Per-request timeout
    pub timeout: Duration,
}

/// Access-control credential pair sent with every webhook request.
///
/// Implements `Debug` manually to redact the secret.
#[derive(Clone)]
pub struct AccessCredentials {
    pub client_id: String,
    pub client_secret: SecretString,
}

impl std::fmt::Debug for AccessCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEBHOOK_BASE_URL.to_string(),
            access: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl WebhookConfig {
    /// Config pointing at `base_url` with no credentials and the default
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `base_url` is not an http(s) URL.
    pub fn for_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url("WEBHOOK_BASE_URL", base_url)?,
            ..Self::default()
        })
    }

    /// Load webhook settings through a variable lookup.
    fn from_lookup(vars: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = vars("WEBHOOK_BASE_URL")
            .unwrap_or_else(|| DEFAULT_WEBHOOK_BASE_URL.to_string());
        let base_url = normalize_base_url("WEBHOOK_BASE_URL", &base_url)?;

        let timeout_secs = match vars("WEBHOOK_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("WEBHOOK_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let access = match (
            vars("WEBHOOK_ACCESS_CLIENT_ID"),
            vars("WEBHOOK_ACCESS_CLIENT_SECRET"),
        ) {
            (Some(client_id), Some(secret)) => {
                validate_secret_strength(&secret, "WEBHOOK_ACCESS_CLIENT_SECRET")?;
                Some(AccessCredentials {
                    client_id,
                    client_secret: SecretString::from(secret),
                })
            }
            (None, None) => None,
            _ => {
                return Err(ConfigError::InvalidEnvVar(
                    "WEBHOOK_ACCESS_*".to_string(),
                    "Both WEBHOOK_ACCESS_CLIENT_ID and WEBHOOK_ACCESS_CLIENT_SECRET must be set together"
                        .to_string(),
                ));
            }
        };

        Ok(Self {
            base_url,
            access,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is malformed, the webhook
    /// credentials are only half set, or the secret fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// Load configuration from an in-memory variable map.
    ///
    /// # Errors
    ///
    /// Same as [`DashboardConfig::from_env`].
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| vars.get(key).cloned())
    }

    fn from_lookup(vars: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = vars("DASHBOARD_HOST")
            .unwrap_or_else(|| "127.0.0.1".to_string())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("DASHBOARD_HOST".to_string(), e.to_string()))?;
        let port = vars("DASHBOARD_PORT")
            .unwrap_or_else(|| "3002".to_string())
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("DASHBOARD_PORT".to_string(), e.to_string()))?;
        let webhook = WebhookConfig::from_lookup(vars)?;

        Ok(Self {
            host,
            port,
            webhook,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an http(s) base URL and strip any trailing slash.
fn normalize_base_url(var_name: &str, raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}
