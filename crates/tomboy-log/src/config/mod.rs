//! Logger configuration
//!
//! - `LogConfig`: settings with defaults and environment overrides
//! - File loading: YAML or JSON, user-level path via `dirs`

mod settings;
mod file;

pub use settings::{LogConfig, ENV_DIR, ENV_LEVEL, ENV_MUTED};
pub use file::user_config_path;
