//! Failure taxonomy shared by every save-sync action.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("GitHub is not configured yet")]
    NotConfigured,

    #[error("DS3 save file not found")]
    SaveNotFound,

    #[error("local save file is empty")]
    EmptyLocalFile,

    #[error("downloaded save file is empty")]
    EmptyRemoteFile,

    /// The remote API answered with a non-success status (bad token, no access, missing repo...)
    #[error("GitHub returned HTTP {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("not a GitHub repository link: {0}")]
    InvalidRepositoryUrl(String),

    #[error("credential file is unreadable: {0}")]
    CredentialFormat(#[from] serde_json::Error),

    #[error("remote content is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("unexpected response from GitHub: {0}")]
    UnexpectedResponse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SyncError {
    /// Short detail string written to the action log.
    pub fn log_detail(&self) -> String {
        match self {
            SyncError::NotConfigured => "no creds".to_string(),
            SyncError::SaveNotFound => "save not found".to_string(),
            SyncError::EmptyLocalFile => "file is empty".to_string(),
            SyncError::EmptyRemoteFile => "downloaded file is empty".to_string(),
            SyncError::RemoteStatus { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }

    /// True for failures the user fixes by re-running the setup wizard.
    pub fn needs_setup(&self) -> bool {
        match self {
            SyncError::NotConfigured
            | SyncError::InvalidRepositoryUrl(_)
            | SyncError::CredentialFormat(_) => true,
            SyncError::RemoteStatus { status, .. } => matches!(status, 401 | 403 | 404),
            _ => false,
        }
    }
}
