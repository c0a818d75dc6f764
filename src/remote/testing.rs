//! In-memory remote used by unit tests

use super::{RepoInfo, RepoRef, SaveRemote};
use crate::error::SyncError;
use std::cell::{Cell, RefCell};

/// Stores one file per branch and counts every call that would hit the network
pub struct MemoryRemote {
    pub default_branch: Option<String>,
    /// When set, every call fails with this HTTP status
    pub fail_status: Option<u16>,
    files: RefCell<Vec<(String, Vec<u8>)>>,
    pub requests: Cell<usize>,
}

impl MemoryRemote {
    pub fn new() -> Self {
        Self {
            default_branch: Some("main".to_string()),
            fail_status: None,
            files: RefCell::new(Vec::new()),
            requests: Cell::new(0),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::new()
        }
    }

    /// Put a file on a branch without counting it as a request
    pub fn seed(&self, branch: &str, bytes: &[u8]) {
        let mut files = self.files.borrow_mut();
        files.retain(|(b, _)| b != branch);
        files.push((branch.to_string(), bytes.to_vec()));
    }

    pub fn file(&self, branch: &str) -> Option<Vec<u8>> {
        self.files
            .borrow()
            .iter()
            .find(|(b, _)| b == branch)
            .map(|(_, bytes)| bytes.clone())
    }

    fn hit(&self) -> Result<(), SyncError> {
        self.requests.set(self.requests.get() + 1);
        match self.fail_status {
            Some(status) => Err(SyncError::RemoteStatus {
                status,
                body: "{\"message\":\"Bad credentials\"}".to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl SaveRemote for MemoryRemote {
    fn probe(&self, repo: &RepoRef, _token: &str) -> Result<RepoInfo, SyncError> {
        self.hit()?;
        Ok(RepoInfo {
            full_name: repo.to_string(),
            default_branch: self.default_branch.clone(),
        })
    }

    fn upload(
        &self,
        _repo: &RepoRef,
        _token: &str,
        branch: &str,
        bytes: &[u8],
    ) -> Result<(), SyncError> {
        if bytes.is_empty() {
            return Err(SyncError::EmptyLocalFile);
        }
        self.hit()?;
        self.seed(branch, bytes);
        Ok(())
    }

    fn download(&self, _repo: &RepoRef, _token: &str, branch: &str) -> Result<Vec<u8>, SyncError> {
        self.hit()?;
        let bytes = self.file(branch).ok_or_else(|| SyncError::RemoteStatus {
            status: 404,
            body: "{\"message\":\"Not Found\"}".to_string(),
        })?;
        if bytes.is_empty() {
            return Err(SyncError::EmptyRemoteFile);
        }
        Ok(bytes)
    }
}
