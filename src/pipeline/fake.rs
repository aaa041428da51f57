//! In-memory `CiApi` cho unit tests.

use crate::api::{CiApi, FileLink, Session, SessionQuery, SessionStatus, SessionSummary, Suite};
use crate::error::{FatalError, Result};
use std::cell::RefCell;

/// Bản sao của `SessionQuery` đã nhận
#[derive(Debug, Clone)]
pub struct RecordedQuery {
    pub suite_id: u64,
    pub status: Option<String>,
    pub active: bool,
    pub origin: String,
    pub limit: u32,
}

#[derive(Default)]
pub struct FakeApi {
    pub suites: Vec<Suite>,
    pub summaries: Vec<SessionSummary>,
    pub details: Vec<Session>,
    pub queries: RefCell<Vec<RecordedQuery>>,
    pub fetches: RefCell<Vec<u64>>,
}

impl FakeApi {
    /// Các session id đã được lấy chi tiết, theo thứ tự
    pub fn fetched(&self) -> Vec<u64> {
        self.fetches.borrow().clone()
    }

    pub fn last_query(&self) -> Option<RecordedQuery> {
        self.queries.borrow().last().cloned()
    }
}

impl CiApi for FakeApi {
    fn user_suites(&self, _repo_url: &str, _branch: &str) -> Result<Vec<Suite>> {
        Ok(self.suites.clone())
    }

    fn sessions(&self, query: &SessionQuery<'_>) -> Result<Vec<SessionSummary>> {
        self.queries.borrow_mut().push(RecordedQuery {
            suite_id: query.suite_id,
            status: query.status.map(str::to_string),
            active: query.active,
            origin: query.origin.to_string(),
            limit: query.limit,
        });
        Ok(self.summaries.clone())
    }

    fn session(&self, id: u64) -> Result<Session> {
        self.fetches.borrow_mut().push(id);
        self.details
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| FatalError::MissingPayload {
                key: "session".to_string(),
            })
    }
}

/// Tạo session với danh sách (name, url)
pub fn session(id: u64, status: SessionStatus, links: &[(&str, &str)]) -> Session {
    Session {
        id,
        summary_status: status,
        file_links: links
            .iter()
            .map(|(name, url)| FileLink {
                name: name.to_string(),
                url: url.to_string(),
                description: Some("d".to_string()),
            })
            .collect(),
    }
}
