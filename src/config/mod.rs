mod settings;

pub use settings::{Config, DEFAULT_LOGO_PATH};

use crate::error::{InvoiceError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Expand ~ in paths
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_home() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Load the config file, writing the defaults there first if it is missing
pub fn load_config(path: &Path) -> Result<Config> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let config = Config::default();
            save_config(path, &config)?;
            tracing::info!(path = %path.display(), "created default config");
            return Ok(config);
        }
        Err(source) => {
            return Err(InvoiceError::FileSystem {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: Config = serde_json::from_str(&content).map_err(|e| InvoiceError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Write the config as pretty JSON
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let fs_err = |source| InvoiceError::FileSystem {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(fs_err)?;
    }
    let content = serde_json::to_string_pretty(config).map_err(|e| {
        InvoiceError::Io(std::io::Error::new(ErrorKind::InvalidData, e.to_string()))
    })?;
    fs::write(path, content).map_err(fs_err)?;
    Ok(())
}
