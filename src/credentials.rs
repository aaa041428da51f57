//! Đọc API key từ file `.solano` (được tạo bởi `solano login`).
//!
//! Thứ tự tìm: thư mục hiện tại, sau đó home directory.

use crate::error::{FatalError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Tên file chứa credentials
pub const CREDENTIALS_FILE: &str = ".solano";

/// API key của Solano CI, không bao giờ hiện ra trong log
#[derive(Clone, Deserialize)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Giá trị thật của key, chỉ dùng khi gửi request
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Load credentials từ một file cụ thể
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| FatalError::CredentialsRead {
            path: path.to_path_buf(),
            source,
        })?;

        let credentials: Credentials =
            serde_json::from_str(&json).map_err(|source| FatalError::CredentialsParse {
                path: path.to_path_buf(),
                source,
            })?;

        if credentials.api_key.trim().is_empty() {
            return Err(FatalError::EmptyApiKey {
                path: path.to_path_buf(),
            });
        }

        Ok(credentials)
    }

    /// Tìm file `.solano` rồi load
    pub fn discover(cwd: &Path, home: Option<&Path>) -> Result<Self> {
        let path = find_credentials_file(cwd, home).ok_or_else(|| {
            FatalError::CredentialsNotFound {
                searched: candidate_paths(cwd, home),
            }
        })?;
        tracing::debug!("Using credentials from {}", path.display());
        Self::load(&path)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credentials([REDACTED])")
    }
}

fn candidate_paths(cwd: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    std::iter::once(cwd)
        .chain(home)
        .map(|dir| dir.join(CREDENTIALS_FILE))
        .collect()
}

/// Trả về file `.solano` đầu tiên tồn tại
pub fn find_credentials_file(cwd: &Path, home: Option<&Path>) -> Option<PathBuf> {
    candidate_paths(cwd, home).into_iter().find(|p| p.is_file())
}
