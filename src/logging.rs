//! File-backed logging
//!
//! The terminal belongs to the UI, so log records go to `tis.log` in the cache
//! directory. `RUST_LOG` overrides the default level.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Env, Target};
use log::LevelFilter;

use crate::config::{APP_DIR, ConfigError};

const LOG_FILE: &str = "tis.log";

/// Default location of the log file
pub fn default_log_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::cache_dir().ok_or(ConfigError::NoDirectory("cache"))?;
    Ok(dir.join(APP_DIR).join(LOG_FILE))
}

/// Level used when `RUST_LOG` is unset
pub fn default_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// `tis::svn::executor` → `svn/executor`
fn format_target(target: &str) -> String {
    let target = target.strip_prefix("tis::").unwrap_or(target);
    target.replace("::", "/")
}

/// Route `log` records into the file at `path`
///
/// Returns false when a logger was already installed.
pub fn init_logging(path: &Path, debug: bool) -> Result<bool, ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;

    let installed = env_logger::Builder::from_env(
        Env::default().default_filter_or(default_level(debug).as_str()),
    )
    .target(Target::Pipe(Box::new(file)))
    .format(|buf, record| {
        writeln!(
            buf,
            "[{}] {} - {}: {}",
            record.level(),
            buf.timestamp_millis(),
            format_target(record.target()),
            record.args()
        )
    })
    .try_init()
    .is_ok();

    Ok(installed)
}
