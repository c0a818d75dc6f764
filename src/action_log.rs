//! Append-only record of every upload/download step, one line per event:
//! `[timestamp] action | status | detail`

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogStatus {
    Success,
    Fail,
    Debug,
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogStatus::Success => "success",
            LogStatus::Fail => "fail",
            LogStatus::Debug => "debug",
        };
        f.write_str(s)
    }
}

pub fn format_entry(timestamp: &str, action: &str, status: LogStatus, detail: Option<&str>) -> String {
    format!(
        "[{}] {} | {} | {}\n",
        timestamp,
        action,
        status,
        detail.unwrap_or("")
    )
}

pub struct ActionLog {
    path: PathBuf,
}

impl ActionLog {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails the calling action; a log write error only goes to stderr logging.
    pub fn record(&self, action: &str, status: LogStatus, detail: Option<&str>) {
        let timestamp = chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S%.6f")
            .to_string();
        let line = format_entry(&timestamp, action, status, detail);

        if let Err(e) = self.append(&line) {
            log::error!("Failed to write action log {}: {}", self.path.display(), e);
        }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }

    #[cfg(test)]
    pub fn lines(&self) -> Vec<String> {
        std::fs::read_to_string(&self.path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
