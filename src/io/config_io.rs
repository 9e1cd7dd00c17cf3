use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::io::project_io::ConfigError;
use crate::model::config::AppConfig;

/// Name looked up in the working directory when no `-c` path is given
pub const CONFIG_FILE_NAME: &str = "phaseboard.toml";

/// The built-in config, with the demo boards, team and feeds
pub const CONFIG_TEMPLATE: &str = include_str!("../templates/phaseboard.toml");

/// Pick the config file to load: the explicit path if given, else
/// `phaseboard.toml` in `cwd` if it exists, else none (use the template).
pub fn resolve_config_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// The parsed built-in template
pub fn default_config() -> Result<AppConfig, ConfigError> {
    parse_config(CONFIG_TEMPLATE)
}

/// Write the template to `path`. Refuses to overwrite unless `force`.
pub fn write_template(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    atomic_write(path, CONFIG_TEMPLATE.as_bytes())?;
    Ok(())
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
