// Orchestration pipelines for upload and download
// Every step's outcome goes to the action log; nothing is retried

use super::operations::{backup_save, read_save, write_save};
use super::{SaveSync, SyncAction, SyncReport};
use crate::action_log::LogStatus;
use crate::credentials::Credentials;
use crate::error::SyncError;
use crate::locate::SavePath;
use crate::remote::{RepoRef, SaveRemote, parse_repo_url};

impl<R: SaveRemote> SaveSync<R> {
    /// Run one user action against an already-chosen save slot.
    /// `None` means no slot was found (or the user declined to pick one).
    pub fn run(&self, action: SyncAction, save: Option<&SavePath>) -> Result<SyncReport, SyncError> {
        let result = match save {
            None => Err(SyncError::SaveNotFound),
            Some(save) => match action {
                SyncAction::Upload => self.upload(save),
                SyncAction::Download => self.download(save),
            },
        };

        match &result {
            Ok(_) => self.log.record(action.name(), LogStatus::Success, None),
            Err(e) => {
                log::warn!("{} failed: {}", action.name(), e);
                self.log
                    .record(action.name(), LogStatus::Fail, Some(&e.log_detail()));
            }
        }
        result
    }

    fn require_credentials(&self) -> Result<(Credentials, RepoRef), SyncError> {
        let creds = self.credentials.load()?.ok_or(SyncError::NotConfigured)?;
        let repo = parse_repo_url(&creds.repository_url)?;
        Ok((creds, repo))
    }

    /// Default branch from the repository metadata; the configured fallback is
    /// used when GitHub refuses the lookup.
    pub fn resolve_branch(&self, repo: &RepoRef, token: &str) -> Result<String, SyncError> {
        match self.remote.probe(repo, token) {
            Ok(info) => Ok(info
                .default_branch
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| self.fallback_branch.clone())),
            Err(SyncError::RemoteStatus { status, .. }) => {
                log::warn!(
                    "Repository lookup returned HTTP {}, using branch '{}'",
                    status,
                    self.fallback_branch
                );
                Ok(self.fallback_branch.clone())
            }
            Err(e) => Err(e),
        }
    }

    fn upload(&self, save: &SavePath) -> Result<SyncReport, SyncError> {
        if !save.path().is_file() {
            return Err(SyncError::SaveNotFound);
        }
        let (creds, repo) = self.require_credentials()?;

        // Checked before the branch lookup so an empty save costs no request
        let bytes = read_save(save.path())?;
        self.log.record(
            SyncAction::Upload.name(),
            LogStatus::Debug,
            Some(&format!("upload size: {}", bytes.len())),
        );
        if bytes.is_empty() {
            return Err(SyncError::EmptyLocalFile);
        }

        let branch = self.resolve_branch(&repo, &creds.access_token)?;
        self.remote
            .upload(&repo, &creds.access_token, &branch, &bytes)?;

        Ok(SyncReport {
            action: SyncAction::Upload,
            bytes: bytes.len(),
            branch,
            backup: None,
        })
    }

    fn download(&self, save: &SavePath) -> Result<SyncReport, SyncError> {
        let (creds, repo) = self.require_credentials()?;
        let branch = self.resolve_branch(&repo, &creds.access_token)?;

        let bytes = match self.remote.download(&repo, &creds.access_token, &branch) {
            Ok(bytes) => bytes,
            Err(SyncError::EmptyRemoteFile) => {
                self.log_download_size(0);
                return Err(SyncError::EmptyRemoteFile);
            }
            Err(e) => return Err(e),
        };
        self.log_download_size(bytes.len());
        if bytes.is_empty() {
            return Err(SyncError::EmptyRemoteFile);
        }

        let backup = backup_save(save.path(), &self.backup_file)?;
        write_save(save.path(), &bytes)?;
        log::info!("Wrote {} bytes to {}", bytes.len(), save.path().display());

        Ok(SyncReport {
            action: SyncAction::Download,
            bytes: bytes.len(),
            branch,
            backup,
        })
    }

    fn log_download_size(&self, size: usize) {
        self.log.record(
            SyncAction::Download.name(),
            LogStatus::Debug,
            Some(&format!("downloaded size: {}", size)),
        );
    }
}
