use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_MAX_CONTENT_LENGTH: usize = 30 * 1024 * 1024;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the poster generator, without trailing slash.
    pub upstream_url: String,
    pub frontend_dir: String,
    pub max_content_length: usize,
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let upstream_url = lookup("POSTER_UPSTREAM_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("POSTER_UPSTREAM_URL"))?
            .trim()
            .trim_end_matches('/')
            .to_string();

        let frontend_dir = lookup("FRONTEND_DIR").unwrap_or_else(default_frontend_dir);

        Ok(Self {
            port: parse(&lookup, "PORT", DEFAULT_PORT)?,
            upstream_url,
            frontend_dir,
            max_content_length: parse(&lookup, "MAX_CONTENT_LENGTH", DEFAULT_MAX_CONTENT_LENGTH)?,
            upstream_timeout: Duration::from_secs(parse(
                &lookup,
                "UPSTREAM_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn default_frontend_dir() -> String {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        format!("{}/../frontend/dist", manifest_dir)
    } else {
        "/usr/src/app/frontend/dist".to_string()
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
