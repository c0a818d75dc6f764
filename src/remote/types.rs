//! GitHub contents API types

use crate::config::CloudSaveConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// `owner/name` of the repository holding the save
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Subset of `GET /repos/{owner}/{repo}` we care about
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RepoInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub default_branch: Option<String>,
}

/// `GET /repos/{owner}/{repo}/contents/{path}` for a file
#[derive(Clone, Debug, Deserialize)]
pub struct ContentsResponse {
    /// Version tag required to overwrite the file
    #[serde(default)]
    pub sha: Option<String>,
    /// Base64 with embedded line breaks; empty for files over 1 MB
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Body of `PUT /repos/{owner}/{repo}/contents/{path}`
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PutContentsRequest {
    pub message: String,
    pub content: String,
    pub branch: String,
    /// Omitted when creating the file for the first time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// Knobs for the REST client, taken from settings.json
#[derive(Clone, Debug)]
pub struct RemoteOptions {
    pub api_base: String,
    pub file_name: String,
    pub commit_message: String,
    pub timeout: Option<Duration>,
}

impl RemoteOptions {
    pub fn from_config(cfg: &CloudSaveConfig) -> Self {
        Self {
            api_base: cfg.api_base.clone(),
            file_name: cfg.remote_file_name.clone(),
            commit_message: cfg.commit_message.clone(),
            timeout: cfg.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl Default for RemoteOptions {
    fn default() -> Self {
        Self::from_config(&CloudSaveConfig::default())
    }
}
