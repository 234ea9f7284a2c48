use crate::utils::error::{Result, TriggerError};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(TriggerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(TriggerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(TriggerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TriggerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| TriggerError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    validate_non_empty_string(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(TriggerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "AWS region can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

/// Checks every id against the `<prefix>-<hex>` shape used by EC2
/// (`subnet-2aad8661`, `sg-0123456789abcdef0`).
pub fn validate_resource_ids(field_name: &str, ids: &[String], prefix: &str) -> Result<()> {
    let pattern = format!(r"^{}-[0-9a-f]{{8}}([0-9a-f]{{9}})?$", regex::escape(prefix));
    let re = Regex::new(&pattern).map_err(|e| TriggerError::ConfigError {
        message: format!("Invalid id pattern for {}: {}", field_name, e),
    })?;

    for id in ids {
        if !re.is_match(id) {
            return Err(TriggerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.clone(),
                reason: format!("Expected an id of the form {}-<8 or 17 hex digits>", prefix),
            });
        }
    }

    Ok(())
}
