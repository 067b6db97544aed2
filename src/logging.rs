use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

fn filter(debug: bool) -> EnvFilter {
    // Without `debug` the level is pinned to `info` and `RUST_LOG` is ignored.
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

/// Initialise logging to stderr. In debug mode `RUST_LOG` may override the
/// default `debug` level.
pub fn init(debug: bool) {
    // A second init keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialise logging into an append-only file. Used by the terminal shell,
/// where writing to the tty would corrupt the alternate screen.
pub fn init_to_file(debug: bool, path: &Path) -> crate::DashResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// `miadash.log` in the platform cache directory
pub fn default_log_file() -> PathBuf {
    match directories::ProjectDirs::from("vn", "mia", "miadash") {
        Some(dirs) => dirs.cache_dir().join("miadash.log"),
        None => PathBuf::from("miadash.log"),
    }
}
