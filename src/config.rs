/*
 * Responsibility
 * - environment-derived configuration (PORT, ASSETS_DIR)
 * - everything is read once at startup; nothing mutates at runtime
 *
 * thiserror is not used here on purpose:
 * - ConfigError is local to startup and never crosses into handlers
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,
    pub assets_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let assets_dir = std::env::var("ASSETS_DIR").unwrap_or_else(|_| "public".to_string());

        Ok(Self { addr, assets_dir })
    }
}
