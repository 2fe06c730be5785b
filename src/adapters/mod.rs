// Adapters - External system implementations

pub mod exec_process;
pub mod path_lookup;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use exec_process::SystemProcess;
pub use path_lookup::PathLookup;
pub use toml_config::{LogFormat, ReelConfig, TomlConfigAdapter};
pub use tracing_log::init_logging;
