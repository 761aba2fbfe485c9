use std::env;

use http::Uri;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid port in {var}: {value}")]
    InvalidPort { var: &'static str, value: String },

    #[error("Invalid allowed origin in {var}: {value}")]
    InvalidOrigin { var: &'static str, value: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// Server Config
// ─────────────────────────────────────────────────────────────────────────────

pub const HOST_VAR: &str = "PIPECHECK_HOST";
pub const PORT_VAR: &str = "PIPECHECK_PORT";
pub const ALLOWED_ORIGIN_VAR: &str = "PIPECHECK_ALLOWED_ORIGIN";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The only origin allowed to make cross-origin requests.
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.into(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset or
    /// blank variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let host = get(HOST_VAR).unwrap_or(defaults.host);

        let port = match get(PORT_VAR) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { var: PORT_VAR, value })?,
            None => defaults.port,
        };

        let allowed_origin = match get(ALLOWED_ORIGIN_VAR) {
            Some(value) => normalize_origin(&value)
                .ok_or(ConfigError::InvalidOrigin { var: ALLOWED_ORIGIN_VAR, value })?,
            None => defaults.allowed_origin,
        };

        Ok(Self { host, port, allowed_origin })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reduces `origin` to `scheme://authority`. Only http(s) origins without
/// credentials, query or a path other than `/` are accepted.
fn normalize_origin(origin: &str) -> Option<String> {
    let uri: Uri = origin.parse().ok()?;

    let scheme = uri
        .scheme_str()
        .filter(|s| *s == "http" || *s == "https")?;
    let authority = uri
        .authority()
        .filter(|a| !a.host().is_empty() && !a.as_str().contains('@'))?;
    let bare = matches!(
        uri.path_and_query().map(|pq| pq.as_str()),
        None | Some("") | Some("/")
    );

    bare.then(|| format!("{}://{}", scheme, authority))
}
