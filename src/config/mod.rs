#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_account_address, validate_identifier, validate_positive_number, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything the payload builder and view reader need to know about the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub node_url: String,
    pub module_address: String,
    pub module_name: String,
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(
        node_url: impl Into<String>,
        module_address: impl Into<String>,
        module_name: impl Into<String>,
    ) -> Self {
        Self {
            node_url: node_url.into(),
            module_address: module_address.into(),
            module_name: module_name.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ConfigProvider for ClientConfig {
    fn node_url(&self) -> &str {
        &self.node_url
    }

    fn module_address(&self) -> &str {
        &self.module_address
    }

    fn module_name(&self) -> &str {
        &self.module_name
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("node_url", &self.node_url)?;
        validate_account_address("module_address", &self.module_address)?;
        validate_identifier("module_name", &self.module_name)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
