//! Path resolution and loading for the tool configuration

use obsfile_core::{Config, ObsError, ObsResult};
use std::path::PathBuf;
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "OBSFILE_CONFIG";

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG: &str = "obsfile.json";

/// Resolves standard config locations
#[derive(Debug, Clone)]
pub struct Paths {
    pub home_obsfile: Option<PathBuf>,
    pub cwd: PathBuf,
}

impl Paths {
    pub fn new() -> std::io::Result<Self> {
        let home_obsfile = dirs::home_dir().map(|h| h.join(".obsfile"));
        let cwd = std::env::current_dir()?;
        Ok(Self { home_obsfile, cwd })
    }

    /// `./obsfile.json`
    pub fn local_config(&self) -> PathBuf {
        self.cwd.join(LOCAL_CONFIG)
    }

    /// `~/.obsfile/config.json`
    pub fn user_config(&self) -> Option<PathBuf> {
        self.home_obsfile.as_ref().map(|h| h.join("config.json"))
    }

    /// First config file that applies: `$OBSFILE_CONFIG`, then the local
    /// file, then the user file. `None` means built-in defaults.
    pub fn config_file(&self) -> Option<PathBuf> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(explicit));
        }
        let local = self.local_config();
        if local.exists() {
            return Some(local);
        }
        self.user_config().filter(|p| p.exists())
    }
}

/// Load the configuration, falling back to defaults when no file applies
pub fn load_config(paths: &Paths) -> ObsResult<Config> {
    let Some(path) = paths.config_file() else {
        debug!("no config file found, using defaults");
        return Ok(Config::default());
    };

    let content = std::fs::read_to_string(&path).map_err(|e| ObsError::Config {
        path: path.clone(),
        detail: e.to_string(),
    })?;
    let config = serde_json::from_str(&content).map_err(|e| ObsError::Config {
        path: path.clone(),
        detail: e.to_string(),
    })?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
