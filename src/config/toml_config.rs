use crate::core::{AvailabilityCategory, ConfigProvider};
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportConfig,
    pub source: SourceConfig,
    pub load: LoadConfig,
    pub filter: Option<FilterConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub categories: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COURSE_FILE})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn raw_categories(&self) -> &[String] {
        self.filter
            .as_ref()
            .and_then(|f| f.categories.as_deref())
            .unwrap_or(&[])
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn set_monitoring_enabled(&mut self, enabled: bool) {
        self.monitoring
            .get_or_insert(MonitoringConfig {
                enabled,
                log_level: None,
            })
            .enabled = enabled;
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn category_filter(&self) -> Result<Vec<AvailabilityCategory>> {
        validation::parse_categories("filter.categories", self.raw_categories())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source.path", &self.source.path)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;
        validation::parse_categories("filter.categories", self.raw_categories())?;
        if let Some(level) = self.log_level() {
            validation::validate_log_level("monitoring.log_level", level)?;
        }
        Ok(())
    }
}
