//! HTTP client cho Solano CI JSON API.
//!
//! Mỗi request:
//! 1. Gửi params dưới dạng JSON body, kèm API key và client version trong headers
//! 2. Kiểm tra HTTP status (phải là 200)
//! 3. Parse body thành JSON object và kiểm tra field `status` (phải là 0)

use super::models::{Session, SessionQuery, SessionSummary, Suite, SuiteQuery};
use super::CiApi;
use crate::config::ApiSettings;
use crate::credentials::Credentials;
use crate::error::{FatalError, Result};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

pub const API_KEY_HEADER: &str = "X-Tddium-Api-Key";
pub const CLIENT_VERSION_HEADER: &str = "X-Tddium-Client-Version";

/// Body của response đã parse, dạng key-value tổng quát
pub type ApiResponse = Map<String, Value>;

/// Client dùng chung cho tất cả requests trong một lần chạy
pub struct SolanoClient {
    client: reqwest::blocking::Client,
    base_url: Url,
    credentials: Credentials,
    client_version: String,
}

impl SolanoClient {
    pub fn new(settings: &ApiSettings, credentials: Credentials) -> Result<Self> {
        let base = settings.base_url();
        let base_url = Url::parse(&base).map_err(|source| FatalError::InvalidEndpoint {
            url: base.clone(),
            source,
        })?;

        Ok(Self {
            client: reqwest::blocking::Client::new(),
            base_url,
            credentials,
            client_version: format!("tddium-client_{}", settings.client_version),
        })
    }

    /// URL đầy đủ cho một API path (dấu `/` ở đầu path được bỏ qua)
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.base_url
            .join(path)
            .map_err(|source| FatalError::InvalidEndpoint {
                url: format!("{}{}", self.base_url, path),
                source,
            })
    }

    /// Gọi API và trả về body đã kiểm tra status
    pub fn call<P: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        params: &P,
    ) -> Result<ApiResponse> {
        let url = self.endpoint(path)?;
        tracing::debug!("{} {}", method, url);

        let transport_err = |source: reqwest::Error| FatalError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .request(method, url.clone())
            .header(API_KEY_HEADER, self.credentials.api_key())
            .header(CLIENT_VERSION_HEADER, &self.client_version)
            .json(params)
            .send()
            .map_err(transport_err)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FatalError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().map_err(transport_err)?;
        parse_response(url.as_str(), &body)
    }
}

/// Parse body và kiểm tra field `status` ở tầng application
pub fn parse_response(url: &str, body: &str) -> Result<ApiResponse> {
    let response: ApiResponse =
        serde_json::from_str(body).map_err(|source| FatalError::MalformedResponse {
            url: url.to_string(),
            source,
        })?;

    match response.get("status") {
        None => Err(FatalError::MissingStatus {
            url: url.to_string(),
        }),
        Some(status) if is_success(status) => Ok(response),
        Some(status) => Err(FatalError::Api {
            status: status.to_string(),
            explanation: response
                .get("explanation")
                .and_then(Value::as_str)
                .map(str::to_string),
        }),
    }
}

/// `status` dạng số bằng 0 (`0` hoặc `0.0`); string `"0"` không tính
fn is_success(status: &Value) -> bool {
    status.as_f64() == Some(0.0)
}

/// Lấy và deserialize một field payload (`suites`, `sessions`, `session`)
pub fn take_payload<T: DeserializeOwned>(response: &mut ApiResponse, key: &str) -> Result<T> {
    let value = response
        .remove(key)
        .ok_or_else(|| FatalError::MissingPayload {
            key: key.to_string(),
        })?;

    serde_json::from_value(value).map_err(|source| FatalError::UnexpectedPayload {
        key: key.to_string(),
        source,
    })
}

impl CiApi for SolanoClient {
    fn user_suites(&self, repo_url: &str, branch: &str) -> Result<Vec<Suite>> {
        let params = SuiteQuery { repo_url, branch };
        let mut response = self.call(Method::GET, "/suites/user_suites", &params)?;
        take_payload(&mut response, "suites")
    }

    fn sessions(&self, query: &SessionQuery<'_>) -> Result<Vec<SessionSummary>> {
        let mut response = self.call(Method::GET, "/sessions", query)?;
        take_payload(&mut response, "sessions")
    }

    fn session(&self, id: u64) -> Result<Session> {
        let mut response = self.call(Method::GET, &format!("/sessions/{}", id), &Map::new())?;
        take_payload(&mut response, "session")
    }
}
