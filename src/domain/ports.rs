use crate::domain::model::{SubmittedTransaction, TransactionIntent, ViewRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn node_url(&self) -> &str;
    fn module_address(&self) -> &str;
    fn module_name(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}

/// Executes read-only view calls against a node and returns the raw JSON.
#[async_trait]
pub trait ViewTransport: Send + Sync {
    async fn view(&self, request: &ViewRequest) -> Result<serde_json::Value>;
}

/// Signs and submits an intent. Supplied by the wallet integration.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    async fn submit(&self, intent: &TransactionIntent) -> Result<SubmittedTransaction>;
}

pub trait WalletSession: Send + Sync {
    fn connected_account(&self) -> Option<String>;
}
