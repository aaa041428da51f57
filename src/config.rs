//! Config module - Quản lý cấu hình solano-fetch (solano-fetch.toml).
//!
//! File cấu hình chứa:
//! - Endpoint của Solano CI API (host, port, version)
//! - Repository, branch và account cần tìm
//! - Danh sách file artifacts cần download
//!
//! `Settings` là bất biến sau khi load, được truyền vào pipeline thay vì dùng hằng số global.

use crate::error::{FatalError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tên file config trong thư mục hiện tại
pub const LOCAL_CONFIG_FILE: &str = "solano-fetch.toml";

/// Cấu hình endpoint của Solano CI API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// https (hoặc http cho test server)
    pub scheme: String,
    pub host: String,
    pub port: u16,
    /// Prefix version trong path, ví dụ `/1/sessions`
    pub version: u32,
    /// Gửi trong header X-Tddium-Client-Version
    pub client_version: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: "ci.solanolabs.com".to_string(),
            port: 443,
            version: 1,
            client_version: "0.4.4".to_string(),
        }
    }
}

impl ApiSettings {
    /// Base URL của API, luôn kết thúc bằng `/`
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}/{}/",
            self.scheme, self.host, self.port, self.version
        )
    }
}

/// Bộ lọc cho danh sách sessions (server-side)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionFilter {
    pub status: String,
    /// Bỏ qua `status` để lấy sessions với mọi status
    pub any_status: bool,
    /// Chỉ lấy sessions từ CI
    pub origin: String,
    pub limit: u32,
}

impl Default for SessionFilter {
    fn default() -> Self {
        Self {
            status: "passed".to_string(),
            any_status: false,
            origin: "ci".to_string(),
            limit: 1,
        }
    }
}

impl SessionFilter {
    /// Giá trị `status` gửi lên server, `None` nếu không lọc theo status
    pub fn status_filter(&self) -> Option<&str> {
        (!self.any_status).then_some(self.status.as_str())
    }
}

/// Cấu hình chính của solano-fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Account handle trong Solano CI
    pub account: String,

    /// Origin URL của repository (SSH URL), ví dụ ssh://git@github.com/org/repo
    pub repo_url: String,

    pub branch: String,

    /// Danh sách tên file được phép download
    pub files: Vec<String>,

    pub api: ApiSettings,

    pub sessions: SessionFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            account: "solanolabs".to_string(),
            repo_url: "ssh://git@github.com/solanolabs/ballin-dangerzone".to_string(),
            branch: "master".to_string(),
            files: vec!["file0.zip".to_string(), "file1.zip".to_string()],
            api: ApiSettings::default(),
            sessions: SessionFilter::default(),
        }
    }
}

/// Lấy đường dẫn config directory mặc định (~/.config/solano-fetch/)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("solano-fetch"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Lấy đường dẫn config file mặc định
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

/// Tìm file config: ./solano-fetch.toml trước, sau đó config dir
pub fn find_config_file(cwd: &Path) -> Option<PathBuf> {
    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    let global = default_config_path();
    global.is_file().then_some(global)
}

impl Settings {
    /// Load config từ file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FatalError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| FatalError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config từ file nếu có, ngược lại dùng giá trị mặc định
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Lưu config ra file
    pub fn save(&self, path: &Path) -> Result<()> {
        // Tạo thư mục cha nếu chưa tồn tại
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| FatalError::ConfigWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        std::fs::write(path, content).map_err(|source| FatalError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// File name có nằm trong allow-list không
    pub fn is_wanted(&self, name: &str) -> bool {
        self.files.iter().any(|f| f == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url(), "https://ci.solanolabs.com:443/1/");
        assert_eq!(settings.account, "solanolabs");
        assert_eq!(settings.branch, "master");
        assert_eq!(settings.sessions.status_filter(), Some("passed"));
        assert_eq!(settings.sessions.limit, 1);
        assert!(settings.is_wanted("file0.zip"));
        assert!(!settings.is_wanted("other.txt"));
    }

    #[test]
    fn test_save_and_load() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let settings = Settings {
            branch: "release".to_string(),
            files: vec!["coverage.tgz".to_string()],
            ..Settings::default()
        };
        settings.save(&config_path)?;

        let loaded = Settings::load(&config_path)?;
        assert_eq!(loaded, settings);

        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> anyhow::Result<()> {
        let toml_str = r#"
account = "acme"

[api]
host = "ci.example.com"

[sessions]
limit = 10
"#;
        let settings: Settings = toml::from_str(toml_str)?;
        assert_eq!(settings.account, "acme");
        assert_eq!(settings.api.host, "ci.example.com");
        assert_eq!(settings.api.port, 443);
        assert_eq!(settings.sessions.limit, 10);
        assert_eq!(settings.sessions.origin, "ci");
        assert_eq!(settings.branch, "master");

        Ok(())
    }

    #[test]
    fn test_any_status_disables_filter() {
        let filter = SessionFilter {
            any_status: true,
            ..SessionFilter::default()
        };
        assert_eq!(filter.status_filter(), None);
    }

    #[test]
    fn test_invalid_file_is_fatal() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "account = [")?;

        let err = Settings::load(&config_path).unwrap_err();
        assert!(matches!(err, FatalError::ConfigParse { .. }));

        Ok(())
    }

    #[test]
    fn test_find_local_config_first() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let local = temp_dir.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&local, "branch = \"dev\"\n")?;

        assert_eq!(find_config_file(temp_dir.path()), Some(local));

        Ok(())
    }
}
