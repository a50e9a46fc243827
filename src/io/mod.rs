pub mod config_io;

pub use config_io::{ConfigError, load_config, resolve_config_path};
