//! Tìm session passed gần nhất của một suite.
//!
//! Danh sách sessions được sort theo id giảm dần (mới nhất trước) dù server có thể
//! đã sort sẵn, sau đó lấy chi tiết từng session cho đến khi gặp session passed.

use crate::api::{CiApi, Session, SessionQuery, SessionSummary};
use crate::config::Settings;
use crate::error::{NothingFound, RunError};

/// Sort theo id giảm dần
pub fn sort_newest_first(sessions: &mut [SessionSummary]) {
    sessions.sort_by(|a, b| b.id.cmp(&a.id));
}

/// Trả về chi tiết session passed đầu tiên (theo thứ tự mới nhất trước)
pub fn find_passing_session<A: CiApi + ?Sized>(
    api: &A,
    suite_id: u64,
    settings: &Settings,
) -> Result<Session, RunError> {
    let query = SessionQuery {
        suite_id,
        status: settings.sessions.status_filter(),
        active: false,
        origin: &settings.sessions.origin,
        limit: settings.sessions.limit,
    };
    let mut summaries = api.sessions(&query)?;
    sort_newest_first(&mut summaries);
    tracing::debug!("{} candidate session(s) for suite {}", summaries.len(), suite_id);

    for summary in &summaries {
        let session = api.session(summary.id)?;
        if session.passed() {
            tracing::info!("Using passing session {}", session.id);
            return Ok(session);
        }
        tracing::warn!(
            "Session {} is {:?}, skipping",
            session.id,
            session.summary_status
        );
    }

    Err(NothingFound::NoPassingSession {
        branch: settings.branch.clone(),
    }
    .into())
}
