use crate::config::TriggerConfig;
use crate::utils::error::{Result, TriggerError};
use crate::utils::validation::Validate;
use regex::Regex;
use std::path::Path;

impl TriggerConfig {
    /// 從 TOML 檔案載入並驗證配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::parse_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// 從 TOML 字串解析並驗證配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = Self::parse_toml_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the file without validating, so callers can layer overrides first.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TriggerError::IoError)?;
        Self::parse_toml_str(&content)
    }

    pub fn parse_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TriggerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR_NAME}` with the variable's value; unknown variables are left untouched.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TriggerError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
