use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

pub(crate) const DATA_DIR_ENV: &str = "PIEBUDGET_DATA_DIR";

const DB_FILE: &str = "piebudget.db";
const LOG_FILE: &str = "piebudget.log";

/// Where the store and the log live.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) data_dir: PathBuf,
    pub(crate) db_path: PathBuf,
    pub(crate) log_path: PathBuf,
}

impl Config {
    /// `$PIEBUDGET_DATA_DIR` if set, otherwise the platform data directory.
    /// The directory is created if missing.
    pub(crate) fn resolve() -> Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Ok(Self::in_dir(&data_dir))
    }

    pub(crate) fn in_dir(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            db_path: data_dir.join(DB_FILE),
            log_path: data_dir.join(LOG_FILE),
        }
    }

    /// Route `log` output to the log file; the terminal belongs to the UI.
    /// `RUST_LOG` overrides the default `info` level.
    pub(crate) fn init_logging(&self) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init()
            .context("Logger already initialized")?;
        Ok(())
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "piebudget", "PieBudget")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
