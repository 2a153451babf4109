use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub node: NodeSection,
    pub module: ModuleSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSection {
    pub url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleSection {
    pub address: String,
    pub name: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ClientError::Config {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigValidation {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EVOLV_NODE_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = match ENV_VAR.get() {
            Some(re) => re,
            None => {
                let compiled = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::Config {
                    message: format!("env substitution pattern failed to compile: {}", e),
                })?;
                ENV_VAR.get_or_init(|| compiled)
            }
        };

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_client_config(self) -> ClientConfig {
        ClientConfig {
            node_url: self.node.url,
            module_address: self.module.address,
            module_name: self.module.name,
            timeout_secs: self.node.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_client_config().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MODULE_ADDRESS: &str = "0x4380432feb95b2ec174d136853a83dc395ecd4077f9e144fc75bb732c2c51c65";

    #[test]
    fn test_parse_minimal_config() {
        let toml_content = format!(
            r#"
[node]
url = "https://aptos.testnet.bardock.movementlabs.xyz/v1"

[module]
address = "{}"
name = "evolv_erc20"
"#,
            MODULE_ADDRESS
        );

        let config = TomlConfig::from_toml_str(&toml_content)
            .unwrap()
            .into_client_config();
        assert_eq!(config.module_address, MODULE_ADDRESS);
        assert_eq!(config.module_name, "evolv_erc20");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EVOLV_TEST_NODE_URL", "https://node.test.example/v1");

        let toml_content = r#"
[node]
url = "${EVOLV_TEST_NODE_URL}"
timeout_seconds = 10

[module]
address = "0x1"
name = "evolv_erc20"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.node.url, "https://node.test.example/v1");
        assert_eq!(config.node.timeout_seconds, Some(10));

        std::env::remove_var("EVOLV_TEST_NODE_URL");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[node]
url = "${EVOLV_TEST_UNSET_VARIABLE}"

[module]
address = "0x1"
name = "evolv_erc20"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.node.url, "${EVOLV_TEST_UNSET_VARIABLE}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[node]
url = "https://node.example/v1"

[module]
address = "not-an-address"
name = "evolv_erc20"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let err = TomlConfig::from_toml_str("[node]\nurl = \"https://node.example\"\n").unwrap_err();
        assert!(matches!(err, ClientError::ConfigValidation { .. }));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");

        let err = TomlConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ClientError::Config { ref message } if message.contains("does-not-exist.toml")));
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[node]
url = "http://127.0.0.1:8080/v1"

[module]
address = "0xcafe"
name = "evolv_erc20"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.module.address, "0xcafe");
        assert!(config.validate().is_ok());
    }
}
