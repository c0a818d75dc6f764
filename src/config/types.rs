use crate::paths::SAVE_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Main application configuration (settings.json)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CloudSaveConfig {
    /// REST endpoint root, without trailing slash
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// File name of the save inside the repository
    #[serde(default = "default_remote_file_name")]
    pub remote_file_name: String,
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
    /// Branch used when the repository's default branch can't be looked up
    #[serde(default = "default_fallback_branch")]
    pub fallback_branch: String,
    /// Overrides <data dir>/backup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_dir: Option<PathBuf>,
    /// Additional DarkSoulsIII directories to scan for save slots
    #[serde(default)]
    pub extra_save_dirs: Vec<PathBuf>,
    /// Per-request timeout; the HTTP client default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_api_base() -> String {
    GITHUB_API_BASE.to_string()
}

fn default_remote_file_name() -> String {
    SAVE_FILE_NAME.to_string()
}

fn default_commit_message() -> String {
    "DS3 save upload".to_string()
}

fn default_fallback_branch() -> String {
    "main".to_string()
}

impl Default for CloudSaveConfig {
    fn default() -> Self {
        CloudSaveConfig {
            api_base: default_api_base(),
            remote_file_name: default_remote_file_name(),
            commit_message: default_commit_message(),
            fallback_branch: default_fallback_branch(),
            backup_dir: None,
            extra_save_dirs: Vec::new(),
            request_timeout_secs: None,
        }
    }
}

impl CloudSaveConfig {
    /// Normalize values edited by hand
    pub fn migrate(&mut self) {
        while self.api_base.ends_with('/') {
            self.api_base.pop();
        }
        if self.api_base.is_empty() {
            self.api_base = default_api_base();
        }
        if self.remote_file_name.trim().is_empty() {
            self.remote_file_name = default_remote_file_name();
        }
        if self.fallback_branch.trim().is_empty() {
            self.fallback_branch = default_fallback_branch();
        }
    }
}
