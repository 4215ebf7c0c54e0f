use crate::core::{ConfigProvider, SubmissionPolicy};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://laundry-api.bahrain-ai.com/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

pub const ENV_API_URL: &str = "LAUNDRY_API_URL";
pub const ENV_TIMEOUT_SECONDS: &str = "LAUNDRY_API_TIMEOUT_SECONDS";
pub const ENV_SUBMISSION_POLICY: &str = "LAUNDRY_SUBMISSION_POLICY";
pub const ENV_API_TOKEN: &str = "LAUNDRY_API_TOKEN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default)]
    pub submission_policy: SubmissionPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub token: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ClientConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BookingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LAUNDRY_API_URL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookingError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Builds the configuration from `LAUNDRY_*` environment variables,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_API_URL) {
            config.api.base_url = url;
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECONDS) {
            config.api.timeout_seconds = raw.trim().parse::<u64>().map_err(|_| {
                BookingError::InvalidConfigValueError {
                    field: ENV_TIMEOUT_SECONDS.to_string(),
                    value: raw.clone(),
                    reason: "Expected a whole number of seconds".to_string(),
                }
            })?;
        }
        if let Ok(raw) = std::env::var(ENV_SUBMISSION_POLICY) {
            config.booking.submission_policy =
                raw.parse::<SubmissionPolicy>()
                    .map_err(|reason| BookingError::InvalidConfigValueError {
                        field: ENV_SUBMISSION_POLICY.to_string(),
                        value: raw.clone(),
                        reason,
                    })?;
        }
        if let Ok(token) = std::env::var(ENV_API_TOKEN) {
            if !token.trim().is_empty() {
                config.session.token = Some(token);
            }
        }

        Ok(config)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;
        validation::validate_positive_number("api.timeout_seconds", self.api.timeout_seconds, 1)?;
        if let Some(token) = &self.session.token {
            validation::validate_non_empty_string("session.token", token)?;
        }
        Ok(())
    }
}

impl ConfigProvider for ClientConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds)
    }

    fn submission_policy(&self) -> SubmissionPolicy {
        self.booking.submission_policy
    }

    fn auth_token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();

        assert_eq!(config.api_base_url(), DEFAULT_API_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.submission_policy(), SubmissionPolicy::BestEffort);
        assert!(config.auth_token().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml_config() {
        let toml_content = r#"
[api]
base_url = "https://staging.example.com/api"
timeout_seconds = 3

[booking]
submission_policy = "strict"

[session]
token = "abc123"
"#;

        let config = ClientConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api.base_url, "https://staging.example.com/api");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.submission_policy(), SubmissionPolicy::Strict);
        assert_eq!(config.auth_token(), Some("abc123"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = ClientConfig::from_toml_str("[api]\ntimeout_seconds = 30\n").unwrap();

        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.booking.submission_policy, SubmissionPolicy::BestEffort);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_LAUNDRY_BASE", "https://test.api.com");

        let toml_content = r#"
[api]
base_url = "${TEST_LAUNDRY_BASE}/api"
"#;

        let config = ClientConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "https://test.api.com/api");

        std::env::remove_var("TEST_LAUNDRY_BASE");
    }

    #[test]
    fn test_unresolved_placeholder_fails_validation() {
        let toml_content = r#"
[api]
base_url = "${TEST_LAUNDRY_UNSET_VARIABLE}"
"#;

        let config = ClientConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::default();
        config.api.timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.session.token = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let result = ClientConfig::from_toml_str("[booking]\nsubmission_policy = \"maybe\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_url = \"http://localhost:8080/api\"\n")
            .unwrap();

        let config = ClientConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
    }
}
