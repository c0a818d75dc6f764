//! Blocking client for the GitHub REST contents API

use super::SaveRemote;
use super::pure::{ContentSource, build_put_request, content_source, contents_endpoint, repo_endpoint};
use super::types::{ContentsResponse, RemoteOptions, RepoInfo, RepoRef};
use crate::error::SyncError;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};

const USER_AGENT: &str = concat!("ds3-cloudsave/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    client: Client,
    options: RemoteOptions,
}

impl GitHubClient {
    pub fn new(options: RemoteOptions) -> Result<Self, SyncError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            options,
        })
    }

    fn authed(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request
            .header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, "application/vnd.github+json")
    }

    fn contents_url(&self, repo: &RepoRef) -> String {
        contents_endpoint(&self.options.api_base, repo, &self.options.file_name)
    }

    /// Version tag of the current remote file. Any non-200 answer is taken to
    /// mean the file doesn't exist yet.
    fn fetch_version_tag(
        &self,
        repo: &RepoRef,
        token: &str,
        branch: &str,
    ) -> Result<Option<String>, SyncError> {
        let response = self
            .authed(self.client.get(self.contents_url(repo)), token)
            .query(&[("ref", branch)])
            .send()?;

        if response.status().as_u16() != 200 {
            log::debug!(
                "No existing {} on {} ({}), creating it",
                self.options.file_name,
                branch,
                response.status()
            );
            return Ok(None);
        }

        let meta: ContentsResponse = parse_json(response)?;
        Ok(meta.sha)
    }
}

impl SaveRemote for GitHubClient {
    fn probe(&self, repo: &RepoRef, token: &str) -> Result<RepoInfo, SyncError> {
        let url = repo_endpoint(&self.options.api_base, repo);
        log::info!("Checking access to {}", repo);

        let response = self.authed(self.client.get(&url), token).send()?;
        let response = ensure_success(response)?;
        parse_json(response)
    }

    fn upload(
        &self,
        repo: &RepoRef,
        token: &str,
        branch: &str,
        bytes: &[u8],
    ) -> Result<(), SyncError> {
        if bytes.is_empty() {
            return Err(SyncError::EmptyLocalFile);
        }

        let sha = self.fetch_version_tag(repo, token, branch)?;
        let body = build_put_request(&self.options.commit_message, bytes, branch, sha);

        log::info!(
            "Uploading {} bytes to {}:{} ({})",
            bytes.len(),
            repo,
            branch,
            if body.sha.is_some() { "replace" } else { "create" }
        );

        let response = self
            .authed(self.client.put(self.contents_url(repo)), token)
            .json(&body)
            .send()?;

        match response.status().as_u16() {
            200 | 201 => Ok(()),
            status => Err(SyncError::RemoteStatus {
                status,
                body: response.text().unwrap_or_default(),
            }),
        }
    }

    fn download(&self, repo: &RepoRef, token: &str, branch: &str) -> Result<Vec<u8>, SyncError> {
        let response = self
            .authed(self.client.get(self.contents_url(repo)), token)
            .query(&[("ref", branch)])
            .send()?;
        let response = ensure_success(response)?;
        let meta: ContentsResponse = parse_json(response)?;

        let bytes = match content_source(&meta)? {
            ContentSource::Direct(url) => {
                log::info!("Fetching save from {}", url);
                let response = self.authed(self.client.get(&url), token).send()?;
                ensure_success(response)?.bytes()?.to_vec()
            }
            ContentSource::Inline(bytes) => bytes,
        };

        if bytes.is_empty() {
            return Err(SyncError::EmptyRemoteFile);
        }
        Ok(bytes)
    }
}

fn ensure_success(response: Response) -> Result<Response, SyncError> {
    if response.status().is_success() {
        return Ok(response);
    }
    Err(SyncError::RemoteStatus {
        status: response.status().as_u16(),
        body: response.text().unwrap_or_default(),
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, SyncError> {
    let text = response.text()?;
    serde_json::from_str(&text).map_err(|e| SyncError::UnexpectedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// One request as seen by the fake server
    struct Recorded {
        method: String,
        target: String,
        authorization: Option<String>,
        body: String,
    }

    /// Answers one connection per canned `(status, body)` pair, in order.
    /// `responses` gets the server's base URL so bodies can point back at it.
    fn fake_github(
        responses: impl FnOnce(&str) -> Vec<(u16, String)>,
    ) -> (String, JoinHandle<Vec<Recorded>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let responses = responses(&base);

        let handle = thread::spawn(move || {
            let mut recorded = Vec::new();
            for (status, body) in responses {
                let (stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream);

                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                let mut parts = request_line.split_whitespace();
                let method = parts.next().unwrap_or_default().to_string();
                let target = parts.next().unwrap_or_default().to_string();

                let mut content_length = 0;
                let mut authorization = None;
                loop {
                    let mut line = String::new();
                    reader.read_line(&mut line).unwrap();
                    let line = line.trim_end();
                    if line.is_empty() {
                        break;
                    }
                    if let Some((name, value)) = line.split_once(':') {
                        let value = value.trim().to_string();
                        match name.to_ascii_lowercase().as_str() {
                            "content-length" => content_length = value.parse().unwrap(),
                            "authorization" => authorization = Some(value),
                            _ => {}
                        }
                    }
                }
                let mut request_body = vec![0; content_length];
                reader.read_exact(&mut request_body).unwrap();

                let mut stream = reader.into_inner();
                write!(
                    stream,
                    "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                )
                .unwrap();
                stream.flush().unwrap();

                recorded.push(Recorded {
                    method,
                    target,
                    authorization,
                    body: String::from_utf8(request_body).unwrap(),
                });
            }
            recorded
        });

        (base, handle)
    }

    fn client_for(api_base: &str) -> GitHubClient {
        GitHubClient::new(RemoteOptions {
            api_base: api_base.to_string(),
            ..RemoteOptions::default()
        })
        .unwrap()
    }

    fn unreachable_client() -> GitHubClient {
        // Nothing listens on the discard port; any request would fail as Transport
        client_for("http://127.0.0.1:9")
    }

    fn repo() -> RepoRef {
        RepoRef {
            owner: "ash".to_string(),
            name: "ds3-saves".to_string(),
        }
    }

    const CONTENTS_PATH: &str = "/repos/ash/ds3-saves/contents/DS30000.sl2";

    #[test]
    fn test_empty_upload_rejected_before_network() {
        let client = unreachable_client();
        let result = client.upload(&repo(), "token", "main", &[]);
        assert!(matches!(result, Err(SyncError::EmptyLocalFile)));
    }

    #[test]
    fn test_unreachable_host_is_transport_failure() {
        let client = unreachable_client();
        let result = client.probe(&repo(), "token");
        assert!(matches!(result, Err(SyncError::Transport(_))));
    }

    #[test]
    fn test_probe_reads_default_branch() {
        let (base, server) = fake_github(|_| {
            vec![(
                200,
                r#"{"full_name":"ash/ds3-saves","default_branch":"saves","private":true}"#.to_string(),
            )]
        });

        let info = client_for(&base).probe(&repo(), "ghp_t").unwrap();
        assert_eq!(info.full_name, "ash/ds3-saves");
        assert_eq!(info.default_branch.as_deref(), Some("saves"));

        let requests = server.join().unwrap();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].target, "/repos/ash/ds3-saves");
        assert_eq!(requests[0].authorization.as_deref(), Some("token ghp_t"));
    }

    #[test]
    fn test_probe_refused_is_remote_status() {
        let (base, server) =
            fake_github(|_| vec![(404, r#"{"message":"Not Found"}"#.to_string())]);

        let result = client_for(&base).probe(&repo(), "ghp_t");
        assert!(matches!(result, Err(SyncError::RemoteStatus { status: 404, .. })));
        server.join().unwrap();
    }

    #[test]
    fn test_upload_replaces_existing_file_with_its_tag() {
        let (base, server) = fake_github(|_| {
            vec![
                (200, r#"{"sha":"abc123","content":"b2xk\n"}"#.to_string()),
                (200, "{}".to_string()),
            ]
        });

        client_for(&base)
            .upload(&repo(), "ghp_t", "main", b"hello")
            .unwrap();

        let requests = server.join().unwrap();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].target, format!("{}?ref=main", CONTENTS_PATH));

        assert_eq!(requests[1].method, "PUT");
        assert_eq!(requests[1].target, CONTENTS_PATH);
        assert_eq!(requests[1].authorization.as_deref(), Some("token ghp_t"));
        let body: serde_json::Value = serde_json::from_str(&requests[1].body).unwrap();
        assert_eq!(body["sha"], "abc123");
        assert_eq!(body["content"], "aGVsbG8=");
        assert_eq!(body["branch"], "main");
        assert_eq!(body["message"], "DS3 save upload");
    }

    #[test]
    fn test_upload_without_existing_file_omits_tag() {
        // Any non-200 lookup counts as "no file yet"
        let (base, server) = fake_github(|_| {
            vec![
                (404, r#"{"message":"Not Found"}"#.to_string()),
                (201, "{}".to_string()),
            ]
        });

        client_for(&base)
            .upload(&repo(), "ghp_t", "saves", b"hello")
            .unwrap();

        let requests = server.join().unwrap();
        assert_eq!(requests[0].target, format!("{}?ref=saves", CONTENTS_PATH));
        let body: serde_json::Value = serde_json::from_str(&requests[1].body).unwrap();
        assert!(body.get("sha").is_none());
        assert_eq!(body["branch"], "saves");
    }

    #[test]
    fn test_upload_rejected_write_is_remote_status() {
        let (base, server) = fake_github(|_| {
            vec![
                (500, "oops".to_string()),
                (409, "conflict".to_string()),
            ]
        });

        let result = client_for(&base).upload(&repo(), "ghp_t", "main", b"hello");
        match result {
            Err(SyncError::RemoteStatus { status, body }) => {
                assert_eq!(status, 409);
                assert_eq!(body, "conflict");
            }
            other => panic!("unexpected result: {:?}", other.err()),
        }
        server.join().unwrap();
    }

    #[test]
    fn test_download_inline_content() {
        let (base, server) = fake_github(|_| {
            vec![(
                200,
                r#"{"sha":"abc123","content":"aGVs\nbG8=\n","download_url":null}"#.to_string(),
            )]
        });

        let bytes = client_for(&base).download(&repo(), "ghp_t", "main").unwrap();
        assert_eq!(bytes, b"hello");

        let requests = server.join().unwrap();
        assert_eq!(requests[0].target, format!("{}?ref=main", CONTENTS_PATH));
    }

    #[test]
    fn test_download_follows_download_url() {
        let (base, server) = fake_github(|base| {
            vec![
                (
                    200,
                    format!(r#"{{"sha":"abc123","content":"","download_url":"{}/raw/DS30000.sl2"}}"#, base),
                ),
                (200, "raw save".to_string()),
            ]
        });

        let bytes = client_for(&base).download(&repo(), "ghp_t", "main").unwrap();
        assert_eq!(bytes, b"raw save");

        let requests = server.join().unwrap();
        assert_eq!(requests[1].method, "GET");
        assert_eq!(requests[1].target, "/raw/DS30000.sl2");
        assert_eq!(requests[1].authorization.as_deref(), Some("token ghp_t"));
    }

    #[test]
    fn test_download_url_failure_is_remote_status() {
        let (base, server) = fake_github(|base| {
            vec![
                (200, format!(r#"{{"download_url":"{}/raw/DS30000.sl2"}}"#, base)),
                (404, "gone".to_string()),
            ]
        });

        let result = client_for(&base).download(&repo(), "ghp_t", "main");
        assert!(matches!(result, Err(SyncError::RemoteStatus { status: 404, .. })));
        server.join().unwrap();
    }

    #[test]
    fn test_download_empty_inline_content() {
        let (base, server) = fake_github(|_| vec![(200, r#"{"sha":"e69de29","content":""}"#.to_string())]);

        let result = client_for(&base).download(&repo(), "ghp_t", "main");
        assert!(matches!(result, Err(SyncError::EmptyRemoteFile)));
        server.join().unwrap();
    }

    #[test]
    fn test_download_missing_file_is_remote_status() {
        let (base, server) =
            fake_github(|_| vec![(404, r#"{"message":"Not Found"}"#.to_string())]);

        let result = client_for(&base).download(&repo(), "ghp_t", "main");
        assert!(matches!(result, Err(SyncError::RemoteStatus { status: 404, .. })));
        server.join().unwrap();
    }
}
