//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use tracker_infra::ReqwestConfig;

const STORAGE_DIR: &str = "boston-startup-tracker";
const STORAGE_FILE: &str = "storage.json";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL and timeout (`API_BASE_URL`, `HTTP_TIMEOUT_SECS`).
    pub http: ReqwestConfig,
    pub storage_path: PathBuf,
    pub json_logs: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            http: ReqwestConfig::from_vars(&lookup),
            storage_path: lookup("TRACKER_STORAGE_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(default_storage_path),
            json_logs: lookup("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, base_url: Option<String>, storage: Option<PathBuf>) -> Self {
        if let Some(base_url) = base_url {
            self.http.base_url = base_url;
        }
        if let Some(storage) = storage {
            self.storage_path = storage;
        }
        self
    }
}

/// Per-user data directory, or the working directory when there is none.
fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(STORAGE_DIR).join(STORAGE_FILE))
        .unwrap_or_else(|| PathBuf::from(".tracker-storage.json"))
}
