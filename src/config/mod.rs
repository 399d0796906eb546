//! Configuration module for payroll
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PAYROLL_*)
//! 3. Project config (./payroll.toml)
//! 4. User config (<config dir>/payroll/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, ConfigWarning, LoadedConfig,
    ENV_COLOR, ENV_DATA_FILE, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, OutputConfig, StorageConfig};
