use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Install a file-backed `tracing` subscriber.
///
/// The terminal belongs to the UI, so logs never go to stdout. `RUST_LOG`
/// overrides `logging.level`. Any failure is reported on stderr and the app
/// runs without logs.
pub fn init(settings: &Settings) {
    if !settings.logging.enabled {
        return;
    }
    let Some(path) = settings.log_path() else {
        eprintln!("songbook: no log path (HOME unset), logging disabled");
        return;
    };
    if let Err(e) = try_init(&path, &settings.logging.level) {
        eprintln!("songbook: logging disabled: {e}");
    }
}

fn try_init(path: &Path, level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
}
