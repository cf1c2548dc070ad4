use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, AppResult};
use crate::core::services::SessionBackend;

/// Backend key holding runtime overrides as JSON, e.g.
/// `{"api_base_url":"https://pm.example.com/api","log_level":"debug"}`.
pub const OVERRIDES_KEY: &str = "sprint-board.config";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub log_level: String,
    pub session_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            log_level: "info".to_string(),
            session_key: "sprint-board.session".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Overrides {
    api_base_url: Option<String>,
    log_level: Option<String>,
    session_key: Option<String>,
}

impl Config {
    /// Defaults, then build-time `BOARD_API_URL` / `BOARD_LOG`, then the
    /// JSON overrides stored in `backend`. A broken override entry is ignored.
    pub fn load(backend: &dyn SessionBackend) -> Self {
        let mut config = Self::default().with_build_env(option_env!("BOARD_API_URL"), option_env!("BOARD_LOG"));
        match backend.get(OVERRIDES_KEY) {
            Ok(Some(raw)) => match config.clone().with_overrides(&raw) {
                Ok(merged) => config = merged,
                Err(e) => tracing::warn!(error = %e, "ignoring stored config overrides"),
            },
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "could not read stored config overrides"),
        }
        config.normalized()
    }

    fn with_build_env(mut self, api_url: Option<&str>, log: Option<&str>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.to_string();
        }
        if let Some(level) = log.filter(|l| !l.trim().is_empty()) {
            self.log_level = level.to_string();
        }
        self
    }

    fn with_overrides(mut self, raw: &str) -> AppResult<Self> {
        let overrides: Overrides =
            serde_json::from_str(raw).map_err(|e| AppError::Config(e.to_string()))?;
        if let Some(url) = overrides.api_base_url {
            self.api_base_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(key) = overrides.session_key {
            self.session_key = key;
        }
        Ok(self)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = trimmed.to_string();
        self
    }

    /// Joins a resource path (`/tasks/t1`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::MemoryBackend;
    use pretty_assertions::assert_eq;

    #[test]
    fn stored_overrides_win_and_url_is_normalized() {
        let backend = MemoryBackend::default();
        backend
            .set(OVERRIDES_KEY, r#"{"api_base_url":"https://pm.example.com/api/","log_level":"debug"}"#)
            .unwrap();
        let config = Config::load(&backend);
        assert_eq!(config.api_base_url, "https://pm.example.com/api");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.session_key, Config::default().session_key);
    }

    #[test]
    fn broken_overrides_fall_back_to_defaults() {
        let backend = MemoryBackend::default();
        backend.set(OVERRIDES_KEY, "not json").unwrap();
        let config = Config::load(&backend);
        assert_eq!(config.session_key, "sprint-board.session");
    }

    #[test]
    fn build_env_applies_before_overrides() {
        let config = Config::default().with_build_env(Some("http://localhost:3000/"), Some(" "));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.normalized().endpoint("/tasks/t1"), "http://localhost:3000/tasks/t1");
    }
}
