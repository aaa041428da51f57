//! Pipeline module - Từ branch đến lệnh download artifacts.
//!
//! Các bước (một chiều, dừng ngay khi có lỗi):
//! 1. Tìm suite id của branch trong account
//! 2. Tìm session passed gần nhất
//! 3. In lệnh curl cho các file nằm trong allow-list

pub mod artifacts;
pub mod sessions;
pub mod suites;

#[cfg(test)]
pub(crate) mod fake;

pub use artifacts::{emit_download_commands, select_artifacts, DownloadCommand};
pub use sessions::{find_passing_session, sort_newest_first};
pub use suites::{resolve_suite_id, select_suite};

use crate::api::CiApi;
use crate::config::Settings;
use crate::error::RunError;
use std::io::Write;

/// Chạy toàn bộ pipeline, trả về số lệnh curl đã in
pub fn run<A: CiApi + ?Sized, W: Write>(
    api: &A,
    settings: &Settings,
    out: &mut W,
) -> Result<usize, RunError> {
    let suite_id = resolve_suite_id(api, settings)?;
    let session = find_passing_session(api, suite_id, settings)?;
    emit_download_commands(&session, settings, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{SessionStatus, SessionSummary, Suite};
    use crate::error::{FatalError, NothingFound};
    use super::fake::{session, FakeApi};

    fn api_with(details: Vec<crate::api::Session>) -> FakeApi {
        FakeApi {
            suites: vec![Suite {
                id: Some(42),
                account: Some("solanolabs".to_string()),
            }],
            summaries: details.iter().map(|s| SessionSummary { id: s.id }).collect(),
            details,
            ..FakeApi::default()
        }
    }

    #[test]
    fn test_full_run() {
        let api = api_with(vec![
            session(3, SessionStatus::Passed, &[("file1.zip", "https://x/old")]),
            session(
                9,
                SessionStatus::Passed,
                &[("file0.zip", "https://x/a"), ("other.txt", "https://x/b")],
            ),
        ]);

        let mut out = Vec::new();
        let count = run(&api, &Settings::default(), &mut out).unwrap();

        assert_eq!(count, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "curl -o file0.zip https://x/a\n");
        assert_eq!(api.last_query().unwrap().suite_id, 42);
        assert_eq!(api.fetched(), vec![9]);
    }

    #[test]
    fn test_suite_not_found_stops_pipeline() {
        let api = FakeApi::default();
        let mut out = Vec::new();

        let err = run(&api, &Settings::default(), &mut out).unwrap_err();
        assert!(matches!(
            err,
            RunError::Fatal(FatalError::SuiteNotFound { .. })
        ));
        assert!(api.last_query().is_none());
        assert!(out.is_empty());
    }

    #[test]
    fn test_passing_session_without_wanted_files() {
        let api = api_with(vec![session(
            9,
            SessionStatus::Passed,
            &[("other.txt", "https://x/b")],
        )]);
        let mut out = Vec::new();

        let err = run(&api, &Settings::default(), &mut out).unwrap_err();
        assert_eq!(
            err.to_string(),
            NothingFound::NoMatchingFiles { session_id: 9 }.to_string()
        );
        assert_eq!(err.exit_code(), 4);
    }
}
