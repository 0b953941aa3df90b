//! Constants used throughout cardvault.
//!
//! Centralizes file names, environment variables and defaults.

/// Project-local configuration file name.
pub const CONFIG_FILE: &str = ".cardvault.toml";

/// Per-user configuration directory relative to HOME (~/.cardvault).
pub const GLOBAL_DIR: &str = ".cardvault";

/// Configuration file name inside the per-user directory.
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "CARDVAULT_CONFIG";

/// Environment variable supplying the service password.
pub const PASSWORD_ENV: &str = "CARDVAULT_PASSWORD";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "CARDVAULT_LOG";

/// Target namespace used when the configuration names none.
pub const DEFAULT_NAMESPACE: &str = "http://tempuri.org/";

/// Request timeout used when the configuration names none.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Customer code used when the configuration names none.
pub const DEFAULT_CUSTOMER_CODE: &str = "DEFAULT";
