use crate::utils::error::{ClientError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ClientError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" if url.host().is_some() => Ok(()),
            "http" | "https" => Err(ClientError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: "URL has no host".to_string(),
            }),
            scheme => Err(ClientError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ClientError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 鏈上帳戶地址：`0x` 加上 1 到 64 個十六進位字元
pub fn validate_account_address(field_name: &str, address: &str) -> Result<()> {
    let hex = address
        .strip_prefix("0x")
        .ok_or_else(|| ClientError::InvalidConfigValue {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: "Address must start with 0x".to_string(),
        })?;

    if hex.is_empty() || hex.len() > 64 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ClientError::InvalidConfigValue {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: "Address must contain 1 to 64 hex digits after 0x".to_string(),
        });
    }

    Ok(())
}

/// Move 識別字：字母或底線開頭，之後為字母、數字或底線
pub fn validate_identifier(field_name: &str, identifier: &str) -> Result<()> {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    let re = match IDENTIFIER.get() {
        Some(re) => re,
        None => {
            let compiled = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").map_err(|e| ClientError::Config {
                message: format!("identifier pattern failed to compile: {}", e),
            })?;
            IDENTIFIER.get_or_init(|| compiled)
        }
    };

    if !re.is_match(identifier) {
        return Err(ClientError::InvalidConfigValue {
            field: field_name.to_string(),
            value: identifier.to_string(),
            reason: "Not a valid Move identifier".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ClientError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
