use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::view::{FilterField, GroupField, SortField, SortOrder};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_songbook_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SONGBOOK_CONFIG_PATH", "/tmp/songbook-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/songbook-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home/songbook/config.toml")
    );
}

#[test]
fn default_paths_fall_back_to_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::remove("XDG_DATA_HOME");
    let _g3 = EnvGuard::remove("XDG_STATE_HOME");
    let _g4 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir/.config/songbook/config.toml")
    );

    let s = Settings::default();
    assert_eq!(
        s.storage_path().unwrap(),
        PathBuf::from("/tmp/home-dir/.local/share/songbook/storage.toml")
    );
    assert_eq!(
        s.log_path().unwrap(),
        PathBuf::from("/tmp/home-dir/.local/state/songbook/songbook.log")
    );
}

#[test]
fn explicit_storage_and_log_paths_win_over_xdg() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_DATA_HOME", "/tmp/xdg-data");

    let mut s = Settings::default();
    assert_eq!(
        s.storage_path().unwrap(),
        PathBuf::from("/tmp/xdg-data/songbook/storage.toml")
    );

    s.storage.path = Some(PathBuf::from("/srv/slot.toml"));
    s.logging.path = Some(PathBuf::from("/var/log/songbook.log"));
    assert_eq!(s.storage_path().unwrap(), PathBuf::from("/srv/slot.toml"));
    assert_eq!(s.log_path().unwrap(), PathBuf::from("/var/log/songbook.log"));
}

#[test]
fn defaults_match_initial_view() {
    let s = Settings::default();
    assert_eq!(s.view.filter_by, FilterField::All);
    assert_eq!(s.view.sort_by, SortField::Title);
    assert_eq!(s.view.sort_order, SortOrder::Asc);
    assert_eq!(s.view.group_by, GroupField::None);
    assert!(s.ui.show_help);
    assert!(s.logging.enabled);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
header_text = "hello"
show_help = false

[view]
filter_by = "artist"
sort_by = "year"
sort_order = "descending"
group_by = "genre"

[storage]
path = "/tmp/songbook-storage.toml"

[logging]
enabled = false
level = "songbook=debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SONGBOOK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SONGBOOK__VIEW__SORT_BY");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.header_text, "hello");
    assert!(!s.ui.show_help);
    assert_eq!(s.view.filter_by, FilterField::Artist);
    assert_eq!(s.view.sort_by, SortField::Year);
    assert_eq!(s.view.sort_order, SortOrder::Desc);
    assert_eq!(s.view.group_by, GroupField::Genre);
    assert_eq!(
        s.storage.path.as_deref(),
        Some(std::path::Path::new("/tmp/songbook-storage.toml"))
    );
    assert!(!s.logging.enabled);
    assert_eq!(s.logging.level, "songbook=debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[view]
sort_by = "artist"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SONGBOOK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("SONGBOOK__VIEW__SORT_BY", "album");

    let s = Settings::load().unwrap();
    assert_eq!(s.view.sort_by, SortField::Album);
}

#[test]
fn unknown_view_value_is_a_load_error() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[view]\ngroup_by = \"decade\"\n").unwrap();

    let _g1 = EnvGuard::set("SONGBOOK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SONGBOOK__VIEW__SORT_BY");

    assert!(Settings::load().is_err());
}

#[test]
fn empty_log_level_fails_validation() {
    let mut s = Settings::default();
    s.logging.level = "  ".into();
    assert!(s.validate().is_err());
}
