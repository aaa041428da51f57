//! Các kiểu dữ liệu trả về từ Solano CI API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Một suite: repository + branch trong một account.
///
/// Chỉ đọc `id` và `account`. Suite sai kiểu ở account khác không làm hỏng
/// cả danh sách: field không đọc được thành `None`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct Suite {
    pub id: Option<u64>,
    /// Account handle sở hữu suite
    pub account: Option<String>,
}

impl From<Value> for Suite {
    fn from(value: Value) -> Self {
        Self {
            id: value.get("id").and_then(Value::as_u64),
            account: value
                .get("account")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Phần tử trong danh sách `/sessions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SessionSummary {
    pub id: u64,
}

/// Trạng thái tổng thể của một session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Passed,
    Failed,
    Error,
    Stopped,
    #[default]
    #[serde(other)]
    Other,
}

/// Chi tiết một session (`/sessions/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary_status: SessionStatus,
    #[serde(default, deserialize_with = "file_links")]
    pub file_links: Vec<FileLink>,
}

impl Session {
    pub fn passed(&self) -> bool {
        self.summary_status == SessionStatus::Passed
    }
}

/// File đính kèm session. Trên wire là mảng `[name, url, description]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLink {
    /// Tên file đính kèm build
    pub name: String,
    /// URL đã xác thực, chứa query parameters bắt buộc
    pub url: String,
    pub description: Option<String>,
}

impl FileLink {
    /// Đọc `[name, url, description?, ...]`; phần tử thừa bị bỏ qua.
    /// Trả về `None` nếu name hoặc url không phải string.
    pub fn from_wire(value: &Value) -> Option<Self> {
        let fields = value.as_array()?;
        let name = fields.first()?.as_str()?;
        let url = fields.get(1)?.as_str()?;

        Some(Self {
            name: name.to_string(),
            url: url.to_string(),
            description: fields.get(2).and_then(Value::as_str).map(str::to_string),
        })
    }
}

/// Body của request `/sessions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionQuery<'a> {
    pub suite_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a str>,
    /// `false` để chỉ lấy sessions đã hoàn thành
    pub active: bool,
    pub origin: &'a str,
    pub limit: u32,
}

/// Body của request `/suites/user_suites`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteQuery<'a> {
    pub repo_url: &'a str,
    pub branch: &'a str,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` là danh sách rỗng; link sai dạng bị bỏ qua thay vì làm hỏng session
fn file_links<'de, D>(deserializer: D) -> Result<Vec<FileLink>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = null_as_default(deserializer)?;
    Ok(raw
        .iter()
        .filter_map(|value| {
            let link = FileLink::from_wire(value);
            if link.is_none() {
                tracing::warn!("Skipping malformed file link {}", value);
            }
            link
        })
        .collect())
}
