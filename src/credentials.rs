//! GitHub repository link + access token, kept in a local JSON file.

use crate::error::SyncError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(alias = "repo_url")] // files written by 0.1
    pub repository_url: String,
    #[serde(alias = "token")]
    pub access_token: String,
}

impl Credentials {
    pub fn new(repository_url: &str, access_token: &str) -> Self {
        Self {
            repository_url: repository_url.to_string(),
            access_token: access_token.to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.repository_url.trim().is_empty() && !self.access_token.trim().is_empty()
    }
}

pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the stored record. Values are stored exactly as given.
    pub fn save(&self, url: &str, token: &str) -> Result<(), SyncError> {
        let creds = Credentials::new(url, token);
        if !creds.is_complete() {
            return Err(SyncError::NotConfigured);
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, &creds)?;
        log::info!("Saved GitHub credentials to {}", self.path.display());
        Ok(())
    }

    /// `Ok(None)` when setup hasn't been run yet
    pub fn load(&self) -> Result<Option<Credentials>, SyncError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let creds: Credentials = serde_json::from_reader(BufReader::new(file))?;
        if !creds.is_complete() {
            return Ok(None);
        }
        Ok(Some(creds))
    }
}
