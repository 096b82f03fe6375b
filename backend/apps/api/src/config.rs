//! Server Configuration
//!
//! Reads process environment (after `.env` has been loaded) into the
//! per-crate configuration structs.

use std::net::SocketAddr;
use std::time::Duration;

use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;
use dice::DiceConfig;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
const DEFAULT_SESSION_SWEEP_SECS: u64 = 300;

/// Invalid environment value
#[derive(Debug, Error)]
#[error("{key}: {message}")]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

impl ConfigError {
    fn new(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
        }
    }
}

/// Everything the server binary needs
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub session_sweep_interval: Duration,
    pub auth: AuthConfig,
    pub dice: DiceConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e| ConfigError::new("BIND_ADDR", format!("{e}")))?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let session_sweep_interval = Duration::from_secs(
            parse_or("SESSION_SWEEP_SECS", &lookup, DEFAULT_SESSION_SWEEP_SECS)?.max(1),
        );

        // Random per process unless configured
        let mut auth = AuthConfig::with_random_secret();
        if let Some(secret_b64) = lookup("SESSION_SECRET") {
            auth.session_secret = decode_secret(&secret_b64)?;
        }
        auth.cookie_secure = parse_or("COOKIE_SECURE", &lookup, auth.cookie_secure)?;
        if let Some(secs) = lookup("SESSION_TTL_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|e| ConfigError::new("SESSION_TTL_SECS", format!("{e}")))?;
            auth.session_ttl = Duration::from_secs(secs);
            auth.session_ttl_delta()
                .map_err(|e| ConfigError::new("SESSION_TTL_SECS", e.to_string()))?;
        }

        let defaults = DiceConfig::default();
        let max_dice_per_roll = parse_or("MAX_DICE_PER_ROLL", &lookup, defaults.max_dice_per_roll)?;
        if max_dice_per_roll == 0 {
            return Err(ConfigError::new("MAX_DICE_PER_ROLL", "must be at least 1"));
        }
        let dice = defaults.with_max_dice_per_roll(max_dice_per_roll);

        Ok(Self {
            bind_addr,
            frontend_origins,
            session_sweep_interval,
            auth,
            dice,
        })
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::new(key, e.to_string())),
        None => Ok(default),
    }
}

fn decode_secret(secret_b64: &str) -> Result<[u8; 32], ConfigError> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .map_err(|e| ConfigError::new("SESSION_SECRET", format!("invalid base64: {e}")))?;

    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| {
        ConfigError::new(
            "SESSION_SECRET",
            format!("expected 32 bytes, got {}", bytes.len()),
        )
    })
}
