pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::NodeClient;
pub use app::{ActionReceipt, AdminAction, AdminConsole};
pub use config::{toml_config::TomlConfig, ClientConfig};
pub use crate::core::{payload::PayloadBuilder, view::ViewReader};
pub use domain::model::{Amount, SideLaunchInfo, SubmittedTransaction, TransactionIntent};
pub use utils::error::{ClientError, Result};
