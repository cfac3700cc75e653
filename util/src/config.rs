//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from `.env` and environment variables.
//! It provides thread-safe access and mutation for testing or overrides in
//! runtime environments. Free functions at the bottom of this module are the
//! usual way to read a single value.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    pub grading_delay_ms: u64,
    pub grading_timeout_ms: u64,
    pub grading_seed: Option<u64>,
    pub toast_ttl_ms: u64,
    pub assistant_delay_ms: u64,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

/// Reads `key` and parses it, falling back to `default` when the variable is
/// absent or malformed. Malformed values are logged.
fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparseable config value");
            default
        }),
        Err(_) => default,
    }
}

/// Like [`parse_or`] for keys without a default: absent or malformed values
/// give `None`, and malformed ones are logged.
fn parse_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable config value");
            None
        }
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every key has a default, so this never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "eduassist".into()),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "api=info,marker=info,services=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: parse_or("PORT", 3000),
            grading_delay_ms: parse_or("GRADING_DELAY_MS", 2000),
            grading_timeout_ms: parse_or("GRADING_TIMEOUT_MS", 30_000),
            grading_seed: parse_opt("GRADING_SEED"),
            toast_ttl_ms: parse_or("TOAST_TTL_MS", 5000),
            assistant_delay_ms: parse_or("ASSISTANT_DELAY_MS", 1500),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }

    pub fn set_grading_delay_ms(value: u64) {
        AppConfig::set_field(|cfg| cfg.grading_delay_ms = value);
    }

    pub fn set_grading_timeout_ms(value: u64) {
        AppConfig::set_field(|cfg| cfg.grading_timeout_ms = value);
    }

    pub fn set_grading_seed(value: Option<u64>) {
        AppConfig::set_field(|cfg| cfg.grading_seed = value);
    }

    pub fn set_toast_ttl_ms(value: u64) {
        AppConfig::set_field(|cfg| cfg.toast_ttl_ms = value);
    }

    pub fn set_assistant_delay_ms(value: u64) {
        AppConfig::set_field(|cfg| cfg.assistant_delay_ms = value);
    }
}

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn grading_delay_ms() -> u64 {
    AppConfig::global().grading_delay_ms
}

pub fn grading_timeout_ms() -> u64 {
    AppConfig::global().grading_timeout_ms
}

pub fn grading_seed() -> Option<u64> {
    AppConfig::global().grading_seed
}

pub fn toast_ttl_ms() -> u64 {
    AppConfig::global().toast_ttl_ms
}

pub fn assistant_delay_ms() -> u64 {
    AppConfig::global().assistant_delay_ms
}
