use crate::Error;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration, resolved once at startup.
///
/// The provider credential is read here and passed into the provider's
/// constructor; it is never read from the environment at call time.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` is required and its absence is fatal. `GEMINI_MODEL`
    /// and `BIND_ADDR` fall back to defaults.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| Error::config("GEMINI_API_KEY environment variable is required"))?;
        if api_key.trim().is_empty() {
            return Err(Error::config("GEMINI_API_KEY must not be empty"));
        }

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|_| Error::config("BIND_ADDR must be a valid socket address"))?;

        Ok(Self {
            api_key,
            model,
            bind_addr,
        })
    }
}
