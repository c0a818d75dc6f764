use std::env;
use std::path::{Path, PathBuf};

/// Save slot file written by Dark Souls III
pub const SAVE_FILE_NAME: &str = "DS30000.sl2";
pub const BACKUP_FILE_NAME: &str = "DS30000_backup.sl2";
pub const DS3_STEAM_APPID: u32 = 374320;

const APP_DIR_NAME: &str = "ds3-cloudsave";

pub fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// Where settings, credentials, the action log and backups live by default.
pub fn default_data_dir() -> PathBuf {
    if cfg!(windows) {
        if let Some(appdata) = env::var_os("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }
    if let Ok(xdg_data_home) = env::var("XDG_DATA_HOME") {
        if !xdg_data_home.is_empty() {
            return PathBuf::from(xdg_data_home).join(APP_DIR_NAME);
        }
    }
    match home_dir() {
        Some(home) => home.join(".local/share").join(APP_DIR_NAME),
        None => PathBuf::from(APP_DIR_NAME),
    }
}

/// Every on-disk location the app touches, resolved once at startup and
/// handed to the stores that need them.
#[derive(Clone, Debug)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub settings: PathBuf,
    pub credentials: PathBuf,
    pub action_log: PathBuf,
    pub backup_dir: PathBuf,
}

impl AppPaths {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            settings: data_dir.join("settings.json"),
            credentials: data_dir.join("github_creds.json"),
            action_log: data_dir.join("log.txt"),
            backup_dir: data_dir.join("backup"),
        }
    }

    pub fn backup_file(&self) -> PathBuf {
        self.backup_dir.join(BACKUP_FILE_NAME)
    }
}
