//! Error types cho solano-fetch.
//!
//! Có hai loại kết thúc không thành công:
//! - `FatalError`: lỗi thật sự (credentials, network, API, suite không tồn tại)
//! - `NothingFound`: không có gì để làm (không có session passed, không có file)

use std::path::PathBuf;
use thiserror::Error;

/// Lỗi dừng toàn bộ pipeline ngay lập tức
#[derive(Error, Debug)]
pub enum FatalError {
    #[error("unable to read API key: no .solano file found (searched {})", display_paths(.searched))]
    CredentialsNotFound { searched: Vec<PathBuf> },

    #[error("cannot read credentials file {}", .path.display())]
    CredentialsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse credentials file {}", .path.display())]
    CredentialsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("credentials file {} has an empty api_key", .path.display())]
    EmptyApiKey { path: PathBuf },

    #[error("cannot read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config file {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot serialize config to TOML")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("cannot write config file {}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid API endpoint {url}")]
    InvalidEndpoint {
        url: String,
        source: url::ParseError,
    },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("API error: {url} returned HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("API error: {url} returned a body that is not a JSON object")]
    MalformedResponse {
        url: String,
        source: serde_json::Error,
    },

    #[error("API error: {url} returned a body without a status field")]
    MissingStatus { url: String },

    #[error("API error: {} (status {status})", .explanation.as_deref().unwrap_or("no explanation"))]
    Api {
        status: String,
        explanation: Option<String>,
    },

    #[error("API response has no '{key}' field")]
    MissingPayload { key: String },

    #[error("API response field '{key}' has an unexpected shape")]
    UnexpectedPayload {
        key: String,
        source: serde_json::Error,
    },

    #[error("Branch {branch} not found for repo {repo_url} in account {account}")]
    SuiteNotFound {
        branch: String,
        repo_url: String,
        account: String,
    },

    #[error("Suite for account {account} has no usable id")]
    SuiteWithoutId { account: String },

    #[error("cannot write output")]
    Output(#[source] std::io::Error),
}

/// Kết thúc sớm nhưng không phải lỗi: không có gì để download
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NothingFound {
    #[error("No recent passing sessions on branch {branch}")]
    NoPassingSession { branch: String },

    #[error("No files attached to Session {session_id}")]
    NoFilesAttached { session_id: u64 },

    #[error("No files matching pattern found in Session {session_id}")]
    NoMatchingFiles { session_id: u64 },
}

/// Kết quả không thành công của một lần chạy pipeline
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Fatal(#[from] FatalError),

    #[error(transparent)]
    NothingFound(#[from] NothingFound),
}

impl RunError {
    /// Exit code của process cho từng loại kết thúc
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Fatal(_) => 1,
            RunError::NothingFound(NothingFound::NoPassingSession { .. }) => 2,
            RunError::NothingFound(NothingFound::NoFilesAttached { .. }) => 3,
            RunError::NothingFound(NothingFound::NoMatchingFiles { .. }) => 4,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, RunError::Fatal(_))
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, FatalError>;
