use crate::config::toml_config::TomlConfig;
use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::domain::model::Amount;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};

pub const DEFAULT_NODE_URL: &str = "https://aptos.testnet.bardock.movementlabs.xyz/v1";
pub const DEFAULT_MODULE_NAME: &str = "evolv_erc20";

#[derive(Debug, Clone, Parser)]
#[command(name = "evolv-client")]
#[command(about = "Build registry transactions and read side launches from the evolv module")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, env = "EVOLV_NODE_URL")]
    pub node_url: Option<String>,

    #[arg(long, env = "EVOLV_MODULE_ADDRESS")]
    pub module_address: Option<String>,

    #[arg(long, env = "EVOLV_MODULE_NAME")]
    pub module_name: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadShape {
    /// `{ data: { function, functionArguments } }` for wallet adapters
    Wallet,
    /// `entry_function_payload` for the node REST API
    EntryFunction,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a create_aggregator payload
    CreateAggregator {
        name: String,
        symbol: String,
        icon_uri: String,
        project_uri: String,
        #[arg(long, value_enum, default_value_t = PayloadShape::Wallet)]
        shape: PayloadShape,
    },
    /// Print a create_side_launch payload
    CreateSideLaunch {
        aggregator_symbol: String,
        side_launch_name: String,
        description: String,
        metadata_uri: String,
        #[arg(long, value_enum, default_value_t = PayloadShape::Wallet)]
        shape: PayloadShape,
    },
    /// Print a mint_tokens payload
    MintTokens {
        aggregator_symbol: String,
        to_address: String,
        amount: Amount,
        #[arg(long, value_enum, default_value_t = PayloadShape::Wallet)]
        shape: PayloadShape,
    },
    /// Print a burn_tokens payload
    BurnTokens {
        aggregator_symbol: String,
        from_address: String,
        amount: Amount,
        #[arg(long, value_enum, default_value_t = PayloadShape::Wallet)]
        shape: PayloadShape,
    },
    /// Print a mint_nft payload
    MintNft {
        aggregator_symbol: String,
        side_launch_name: String,
        to_address: String,
        #[arg(long, value_enum, default_value_t = PayloadShape::Wallet)]
        shape: PayloadShape,
    },
    /// Query get_side_launch_info and list the results
    SideLaunches {
        #[arg(long, help = "Print raw JSON instead of a table")]
        json: bool,
    },
}

impl CliConfig {
    /// 合併設定：TOML 檔案為基礎，命令列/環境變數覆蓋
    pub fn resolve(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                TomlConfig::from_file(path)?.into_client_config()
            }
            None => ClientConfig {
                node_url: DEFAULT_NODE_URL.to_string(),
                module_address: String::new(),
                module_name: DEFAULT_MODULE_NAME.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
        };

        if let Some(node_url) = &self.node_url {
            config.node_url = node_url.clone();
        }
        if let Some(module_address) = &self.module_address {
            config.module_address = module_address.clone();
        }
        if let Some(module_name) = &self.module_name {
            config.module_name = module_name.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }

        Ok(config)
    }
}
