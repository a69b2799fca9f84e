//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from `.env` and environment variables.
//! It is read once per process; tests build their own copy with
//! [`AppConfig::from_env`].

use std::env;
use std::sync::OnceLock;

/// Platform wallet on Base used when `X402_PLATFORM_EVM_ADDRESS` is unset.
pub const DEFAULT_PLATFORM_EVM_ADDRESS: &str = "0xEc115640B09416a59fE77e4e7b852fE700Fa6bF1";

/// Platform wallet on Solana used when `X402_PLATFORM_SOL_ADDRESS` is unset.
pub const DEFAULT_PLATFORM_SOL_ADDRESS: &str = "cAXdcMFHK6y9yTP7AMETzXC7zvTeDBbQ5f4nvSWDx51";

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub platform_evm_address: String,
    pub platform_sol_address: String,
    pub db_ready_max_retries: u32,
    pub db_ready_base_delay_ms: u64,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every field has a fallback, so this never fails. Numeric values that
    /// do not parse fall back to their defaults as well.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "x402-seeder".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "logs/seeder.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "true".into()) == "true",
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "data/x402.db".into()),
            platform_evm_address: non_empty_var("X402_PLATFORM_EVM_ADDRESS")
                .unwrap_or_else(|| DEFAULT_PLATFORM_EVM_ADDRESS.into()),
            platform_sol_address: non_empty_var("X402_PLATFORM_SOL_ADDRESS")
                .unwrap_or_else(|| DEFAULT_PLATFORM_SOL_ADDRESS.into()),
            db_ready_max_retries: env::var("DB_READY_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            db_ready_base_delay_ms: env::var("DB_READY_BASE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),
        }
    }

    /// Returns the process-wide configuration, loading it on first use.
    pub fn global() -> &'static AppConfig {
        CONFIG_INSTANCE.get_or_init(AppConfig::from_env)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

// --- Free accessors ---

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

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_platform_vars() {
        unsafe {
            env::remove_var("X402_PLATFORM_EVM_ADDRESS");
            env::remove_var("X402_PLATFORM_SOL_ADDRESS");
        }
    }

    #[test]
    #[serial]
    fn platform_addresses_fall_back_to_literals() {
        clear_platform_vars();

        let cfg = AppConfig::from_env();
        assert_eq!(cfg.platform_evm_address, DEFAULT_PLATFORM_EVM_ADDRESS);
        assert_eq!(cfg.platform_sol_address, DEFAULT_PLATFORM_SOL_ADDRESS);
    }

    #[test]
    #[serial]
    fn platform_addresses_honour_overrides() {
        unsafe {
            env::set_var("X402_PLATFORM_EVM_ADDRESS", "0x1111111111111111111111111111111111111111");
            env::set_var("X402_PLATFORM_SOL_ADDRESS", "So1anaOverride1111111111111111111111111111");
        }

        let cfg = AppConfig::from_env();
        assert_eq!(cfg.platform_evm_address, "0x1111111111111111111111111111111111111111");
        assert_eq!(cfg.platform_sol_address, "So1anaOverride1111111111111111111111111111");

        clear_platform_vars();
    }

    #[test]
    #[serial]
    fn blank_override_is_ignored() {
        unsafe {
            env::set_var("X402_PLATFORM_EVM_ADDRESS", "   ");
        }

        let cfg = AppConfig::from_env();
        assert_eq!(cfg.platform_evm_address, DEFAULT_PLATFORM_EVM_ADDRESS);

        clear_platform_vars();
    }

    #[test]
    #[serial]
    fn global_is_loaded_once() {
        let first = AppConfig::global();
        unsafe {
            env::set_var("DATABASE_PATH", "elsewhere/changed.db");
        }
        let second = AppConfig::global();
        unsafe {
            env::remove_var("DATABASE_PATH");
        }

        assert!(std::ptr::eq(first, second));
        assert_eq!(database_path(), first.database_path);
        assert_ne!(database_path(), "elsewhere/changed.db");
    }

    #[test]
    #[serial]
    fn unparsable_retry_settings_use_defaults() {
        unsafe {
            env::set_var("DB_READY_MAX_RETRIES", "lots");
        }

        let cfg = AppConfig::from_env();
        assert_eq!(cfg.db_ready_max_retries, 5);

        unsafe {
            env::remove_var("DB_READY_MAX_RETRIES");
        }
    }
}
