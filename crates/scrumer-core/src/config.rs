use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{ScrumerError, ScrumerResult};

const DEFAULT_SPRINT_LENGTH_DAYS: u32 = 14;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// User id the "my issues" quick filter matches against.
    #[serde(default)]
    pub current_user: Option<String>,
    /// User id stamped as reporter on newly created issues.
    #[serde(default)]
    pub default_reporter: Option<String>,
    #[serde(default)]
    pub issue_key_prefix: Option<String>,
    #[serde(default)]
    pub test_key_prefix: Option<String>,
    #[serde(default)]
    pub sprint_length_days: Option<u32>,
    #[serde(default)]
    pub assist: AssistConfig,
}

/// Settings for the generative-language backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub description_model: Option<String>,
    #[serde(default)]
    pub summary_model: Option<String>,
    /// Name of the environment variable holding the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/scrumer/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("scrumer/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("scrumer\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config location, falling back to defaults.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> ScrumerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ScrumerError::Serialization(e.to_string()))
    }

    pub fn effective_current_user(&self) -> &str {
        self.current_user.as_deref().unwrap_or("u1")
    }

    pub fn effective_default_reporter(&self) -> &str {
        self.default_reporter.as_deref().unwrap_or("u1")
    }

    pub fn effective_issue_key_prefix(&self) -> &str {
        self.issue_key_prefix.as_deref().unwrap_or("SCRUM")
    }

    pub fn effective_test_key_prefix(&self) -> &str {
        self.test_key_prefix.as_deref().unwrap_or("TEST")
    }

    pub fn effective_sprint_length_days(&self) -> u32 {
        self.sprint_length_days
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_SPRINT_LENGTH_DAYS)
    }
}

impl AssistConfig {
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or("https://generativelanguage.googleapis.com")
    }

    pub fn effective_description_model(&self) -> &str {
        self.description_model
            .as_deref()
            .unwrap_or("gemini-3-pro-preview")
    }

    pub fn effective_summary_model(&self) -> &str {
        self.summary_model
            .as_deref()
            .unwrap_or("gemini-3-flash-preview")
    }

    /// Resolve the API key from the configured variable, then `API_KEY`.
    pub fn api_key(&self) -> Option<String> {
        let primary = self.api_key_env.as_deref().unwrap_or("GEMINI_API_KEY");
        std::env::var(primary)
            .ok()
            .or_else(|| std::env::var("API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_current_user(), "u1");
        assert_eq!(config.effective_issue_key_prefix(), "SCRUM");
        assert_eq!(config.effective_test_key_prefix(), "TEST");
        assert_eq!(config.effective_sprint_length_days(), 14);
        assert_eq!(
            config.assist.effective_description_model(),
            "gemini-3-pro-preview"
        );
    }

    #[test]
    fn test_zero_sprint_length_falls_back() {
        let config = AppConfig {
            sprint_length_days: Some(0),
            ..Default::default()
        };
        assert_eq!(config.effective_sprint_length_days(), 14);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
current_user = "u2"
issue_key_prefix = "PROJ"

[assist]
summary_model = "gemini-lite"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.effective_current_user(), "u2");
        assert_eq!(config.effective_issue_key_prefix(), "PROJ");
        assert_eq!(config.effective_default_reporter(), "u1");
        assert_eq!(config.assist.effective_summary_model(), "gemini-lite");
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "current_user = [").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ScrumerError::Serialization(_))
        ));
    }
}
