//! Configuration loading, parsing, and validation for `gracefuld`.

mod loader;
mod types;
mod validation;

pub use loader::{load_config, ConfigError};
pub use types::*;
pub use validation::{validate_config, validate_log_level, LOG_LEVELS};
