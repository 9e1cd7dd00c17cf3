pub mod config_io;
pub mod project_io;

pub use project_io::{ConfigError, load_config, load_project};
