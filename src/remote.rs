//! Remote copy of the save, stored as a single file in a GitHub repository
//!
//! ## Module Structure
//! - `types.rs`: RepoRef, API request/response bodies, client options
//! - `pure.rs`: Repository link parsing, endpoint URLs, base64 payload helpers
//! - `github.rs`: Blocking REST client for the contents API

mod github;
mod pure;
mod types;

#[cfg(test)]
pub mod testing;

use crate::error::SyncError;

pub use github::GitHubClient;
pub use pure::parse_repo_url;
pub use types::{RemoteOptions, RepoInfo, RepoRef};

/// The three calls the rest of the app needs from a remote store.
/// Every call is a single blocking attempt; nothing is retried.
pub trait SaveRemote {
    /// Repository metadata; fails on any non-success status.
    fn probe(&self, repo: &RepoRef, token: &str) -> Result<RepoInfo, SyncError>;

    /// Create or replace the save file on `branch`.
    fn upload(&self, repo: &RepoRef, token: &str, branch: &str, bytes: &[u8])
    -> Result<(), SyncError>;

    /// Raw bytes of the save file on `branch`.
    fn download(&self, repo: &RepoRef, token: &str, branch: &str) -> Result<Vec<u8>, SyncError>;
}
