//! Upload / download orchestration
//!
//! Ties the locator result, the credential store and a remote together and
//! writes every step to the action log.
//!
//! ## Module Structure
//! - `operations.rs`: Local file reads, backup and overwrite
//! - `pipelines.rs`: The upload and download sequences

mod operations;
mod pipelines;

use crate::action_log::ActionLog;
use crate::credentials::CredentialStore;
use crate::remote::SaveRemote;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncAction {
    Upload,
    Download,
}

impl SyncAction {
    /// Name used in the action log
    pub fn name(&self) -> &'static str {
        match self {
            SyncAction::Upload => "upload",
            SyncAction::Download => "download",
        }
    }
}

/// What a finished action did, for the success notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncReport {
    pub action: SyncAction,
    pub bytes: usize,
    pub branch: String,
    pub backup: Option<PathBuf>,
}

impl SyncReport {
    pub fn message(&self) -> String {
        match self.action {
            SyncAction::Upload => format!(
                "Save uploaded to GitHub ({} bytes, branch '{}').",
                self.bytes, self.branch
            ),
            SyncAction::Download => {
                let mut text = format!(
                    "Save downloaded from GitHub ({} bytes, branch '{}').",
                    self.bytes, self.branch
                );
                if let Some(backup) = &self.backup {
                    text.push_str(&format!("\nPrevious save backed up to {}", backup.display()));
                }
                text
            }
        }
    }
}

pub struct SaveSync<R: SaveRemote> {
    remote: R,
    credentials: CredentialStore,
    log: ActionLog,
    backup_file: PathBuf,
    fallback_branch: String,
}

impl<R: SaveRemote> SaveSync<R> {
    pub fn new(
        remote: R,
        credentials: CredentialStore,
        log: ActionLog,
        backup_file: PathBuf,
        fallback_branch: &str,
    ) -> Self {
        Self {
            remote,
            credentials,
            log,
            backup_file,
            fallback_branch: fallback_branch.to_string(),
        }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.log
    }
}
