//! Tìm suite id cho một branch của repository trong account đã cấu hình.

use crate::api::{CiApi, Suite};
use crate::config::Settings;
use crate::error::{FatalError, Result};

/// Chọn suite đầu tiên thuộc account
pub fn select_suite<'a>(suites: &'a [Suite], account: &str) -> Option<&'a Suite> {
    suites
        .iter()
        .find(|suite| suite.account.as_deref() == Some(account))
}

/// Tra cứu suite id, lỗi nếu branch không tồn tại trong account
pub fn resolve_suite_id<A: CiApi + ?Sized>(api: &A, settings: &Settings) -> Result<u64> {
    let suites = api.user_suites(&settings.repo_url, &settings.branch)?;
    tracing::debug!("{} suite(s) returned for {}", suites.len(), settings.repo_url);

    let suite = select_suite(&suites, &settings.account).ok_or_else(|| {
        FatalError::SuiteNotFound {
            branch: settings.branch.clone(),
            repo_url: settings.repo_url.clone(),
            account: settings.account.clone(),
        }
    })?;
    let suite_id = suite.id.ok_or_else(|| FatalError::SuiteWithoutId {
        account: settings.account.clone(),
    })?;

    tracing::info!(
        "Branch {} resolved to suite {} in account {}",
        settings.branch,
        suite_id,
        settings.account
    );
    Ok(suite_id)
}
