//! API module - Truy vấn Solano CI JSON API.
//!
//! Module này chứa:
//! - `SolanoClient`: blocking HTTP client có xác thực
//! - Các kiểu dữ liệu response (suites, sessions, file links)
//! - Trait `CiApi` để pipeline không phụ thuộc vào HTTP

pub mod client;
pub mod models;

pub use client::SolanoClient;
pub use models::{FileLink, Session, SessionQuery, SessionStatus, SessionSummary, Suite};

use crate::error::Result;

/// Các thao tác read-only mà pipeline cần từ CI service
pub trait CiApi {
    /// Danh sách suites khớp với repository và branch
    fn user_suites(&self, repo_url: &str, branch: &str) -> Result<Vec<Suite>>;

    /// Tóm tắt các sessions của một suite theo bộ lọc
    fn sessions(&self, query: &SessionQuery<'_>) -> Result<Vec<SessionSummary>>;

    /// Chi tiết đầy đủ của một session
    fn session(&self, id: u64) -> Result<Session>;
}
