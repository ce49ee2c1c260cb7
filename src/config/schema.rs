use std::path::PathBuf;

use serde::Deserialize;

use crate::view::{FilterField, GroupField, SortField, SortOrder};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/songbook/config.toml` or `~/.config/songbook/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SONGBOOK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub view: ViewSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether the key binding footer is shown.
    pub show_help: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ♪ Music Library ♪ ".to_string(),
            show_help: true,
        }
    }
}

/// Initial view controls. Changes made while browsing are not saved back.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub filter_by: FilterField,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub group_by: GroupField,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Where the session slot lives. Defaults to the XDG data directory.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Set to false to skip installing the log subscriber.
    pub enabled: bool,
    /// `tracing` filter directive; `RUST_LOG` wins when set.
    ///
    /// Example: "info" or "songbook=debug"
    pub level: String,
    /// Log file. Defaults to the XDG state directory.
    pub path: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            path: None,
        }
    }
}
