// Pure helpers for talking to the contents API

use super::types::{ContentsResponse, PutContentsRequest, RepoRef};
use crate::error::SyncError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use std::sync::LazyLock;

static REPO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:https?://)?(?:www\.)?github\.com/|git@github\.com:)?([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?/?$",
    )
    .expect("repository link pattern is valid")
});

/// Accepts `https://github.com/owner/repo(.git)`, `git@github.com:owner/repo.git`
/// and bare `owner/repo`.
pub fn parse_repo_url(url: &str) -> Result<RepoRef, SyncError> {
    let trimmed = url.trim();
    let caps = REPO_URL_RE
        .captures(trimmed)
        .ok_or_else(|| SyncError::InvalidRepositoryUrl(trimmed.to_string()))?;

    let owner = caps[1].to_string();
    let name = caps[2].to_string();
    if owner.chars().all(|c| c == '.')
        || name.chars().all(|c| c == '.')
        || owner.eq_ignore_ascii_case("github.com")
    {
        return Err(SyncError::InvalidRepositoryUrl(trimmed.to_string()));
    }
    Ok(RepoRef { owner, name })
}

pub fn repo_endpoint(api_base: &str, repo: &RepoRef) -> String {
    format!("{}/repos/{}/{}", api_base, repo.owner, repo.name)
}

pub fn contents_endpoint(api_base: &str, repo: &RepoRef, file_name: &str) -> String {
    format!("{}/contents/{}", repo_endpoint(api_base, repo), file_name)
}

pub fn encode_content(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// The API wraps base64 at 60 columns, so whitespace is dropped first
pub fn decode_content(encoded: &str) -> Result<Vec<u8>, SyncError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}

pub fn build_put_request(
    message: &str,
    bytes: &[u8],
    branch: &str,
    sha: Option<String>,
) -> PutContentsRequest {
    PutContentsRequest {
        message: message.to_string(),
        content: encode_content(bytes),
        branch: branch.to_string(),
        sha,
    }
}

/// Where the file body should come from after a metadata lookup
#[derive(Debug, PartialEq, Eq)]
pub enum ContentSource {
    /// Fetch the raw file from this URL
    Direct(String),
    /// Decoded inline content
    Inline(Vec<u8>),
}

pub fn content_source(meta: &ContentsResponse) -> Result<ContentSource, SyncError> {
    if let Some(url) = meta.download_url.as_deref().filter(|u| !u.is_empty()) {
        return Ok(ContentSource::Direct(url.to_string()));
    }
    match meta.content.as_deref() {
        Some(content) => Ok(ContentSource::Inline(decode_content(content)?)),
        None => Err(SyncError::UnexpectedResponse(
            "file metadata has neither download_url nor content".to_string(),
        )),
    }
}
