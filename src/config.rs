use std::time::Duration;

use crate::error::{AppError, Result};

/// Apps Script web app every POST is relayed to.
pub const DEFAULT_TARGET_URL: &str =
    "https://script.google.com/macros/s/AKfycbzHaX38gtz0vqU3vBzwcXpc12cPNjn84ofJbZP-DJyLNQeQ4GBo4_TlnBdMf6kb25-3/exec";

const TIMEOUT_ENV: &str = "PROXY_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    target_url: String,
    timeout: Option<Duration>,
}

impl ProxyConfig {
    pub fn new(target_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self { target_url: target_url.into(), timeout }
    }

    /// Fixed destination, plus an optional outbound timeout from `PROXY_TIMEOUT_SECS`.
    /// Unset leaves timing to the client and the hosting platform.
    pub fn from_env() -> Result<Self> {
        let timeout = match std::env::var(TIMEOUT_ENV) {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(std::env::VarError::NotPresent) => None,
            Err(e) => return Err(AppError::Config(format!("{TIMEOUT_ENV}: {e}"))),
        };
        Ok(Self::new(DEFAULT_TARGET_URL, timeout))
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(AppError::Config(format!(
            "{TIMEOUT_ENV} must be a positive number of seconds, got {raw:?}"
        ))),
    }
}
