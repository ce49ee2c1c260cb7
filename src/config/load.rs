use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then overlays environment
/// variables (prefix `SONGBOOK__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SONGBOOK")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.logging.level.trim().is_empty() {
            return Err("logging.level must not be empty".to_string());
        }
        Ok(())
    }

    /// Storage file for the session slot, from config or XDG defaults.
    pub fn storage_path(&self) -> Option<PathBuf> {
        self.storage
            .path
            .clone()
            .or_else(|| xdg_dir("XDG_DATA_HOME", &[".local", "share"]).map(|d| d.join("storage.toml")))
    }

    /// Log file, from config or XDG defaults.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.logging
            .path
            .clone()
            .or_else(|| xdg_dir("XDG_STATE_HOME", &[".local", "state"]).map(|d| d.join("songbook.log")))
    }
}

/// Resolve the config path from `SONGBOOK_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SONGBOOK_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/songbook/config.toml`
/// or `~/.config/songbook/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"]).map(|d| d.join("config.toml"))
}

/// `$<var>/songbook`, or `$HOME/<fallback..>/songbook` when `var` is unset.
fn xdg_dir(var: &str, home_fallback: &[&str]) -> Option<PathBuf> {
    let base = if let Some(dir) = env::var_os(var) {
        Some(PathBuf::from(dir))
    } else if let Some(home) = env::var_os("HOME") {
        let mut p = PathBuf::from(home);
        p.extend(home_fallback);
        Some(p)
    } else {
        None
    };

    base.map(|d| d.join("songbook"))
}
