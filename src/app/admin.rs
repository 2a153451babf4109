use crate::core::payload::PayloadBuilder;
use crate::core::{TransactionIntent, TransactionSubmitter, WalletSession};
use crate::domain::model::{Amount, EntryFunction};
use crate::utils::error::{ClientError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    CreateAggregator,
    CreateSideLaunch,
    MintTokens,
    BurnTokens,
    MintNft,
}

impl AdminAction {
    pub fn entry_function(&self) -> EntryFunction {
        match self {
            AdminAction::CreateAggregator => EntryFunction::CreateAggregator,
            AdminAction::CreateSideLaunch => EntryFunction::CreateSideLaunch,
            AdminAction::MintTokens => EntryFunction::MintTokens,
            AdminAction::BurnTokens => EntryFunction::BurnTokens,
            AdminAction::MintNft => EntryFunction::MintNft,
        }
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry_function().as_str())
    }
}

/// Result of a submitted admin action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReceipt {
    pub action: AdminAction,
    pub sender: String,
    pub transaction_hash: String,
    pub submitted_at: DateTime<Utc>,
}

/// Admin operations against the registry: wallet check, build, submit.
///
/// Submission failures are returned exactly as the submitter produced them.
pub struct AdminConsole<W: WalletSession, S: TransactionSubmitter> {
    builder: PayloadBuilder,
    wallet: W,
    submitter: S,
}

impl<W: WalletSession, S: TransactionSubmitter> AdminConsole<W, S> {
    pub fn new(builder: PayloadBuilder, wallet: W, submitter: S) -> Self {
        Self {
            builder,
            wallet,
            submitter,
        }
    }

    pub async fn create_aggregator(
        &self,
        name: &str,
        symbol: &str,
        icon_uri: &str,
        project_uri: &str,
    ) -> Result<ActionReceipt> {
        let sender = self.require_account()?;
        let intent = self
            .builder
            .create_aggregator(name, symbol, icon_uri, project_uri);
        self.submit(AdminAction::CreateAggregator, sender, intent)
            .await
    }

    pub async fn create_side_launch(
        &self,
        aggregator_symbol: &str,
        side_launch_name: &str,
        description: &str,
        metadata_uri: &str,
    ) -> Result<ActionReceipt> {
        let sender = self.require_account()?;
        let intent = self.builder.create_side_launch(
            aggregator_symbol,
            side_launch_name,
            description,
            metadata_uri,
        );
        self.submit(AdminAction::CreateSideLaunch, sender, intent)
            .await
    }

    pub async fn mint_tokens(
        &self,
        aggregator_symbol: &str,
        to_address: &str,
        amount: impl Into<Amount>,
    ) -> Result<ActionReceipt> {
        let sender = self.require_account()?;
        let intent = self
            .builder
            .mint_tokens(aggregator_symbol, to_address, amount);
        self.submit(AdminAction::MintTokens, sender, intent).await
    }

    pub async fn burn_tokens(
        &self,
        aggregator_symbol: &str,
        from_address: &str,
        amount: impl Into<Amount>,
    ) -> Result<ActionReceipt> {
        let sender = self.require_account()?;
        let intent = self
            .builder
            .burn_tokens(aggregator_symbol, from_address, amount);
        self.submit(AdminAction::BurnTokens, sender, intent).await
    }

    pub async fn mint_nft(
        &self,
        aggregator_symbol: &str,
        side_launch_name: &str,
        to_address: &str,
    ) -> Result<ActionReceipt> {
        let sender = self.require_account()?;
        let intent = self
            .builder
            .mint_nft(aggregator_symbol, side_launch_name, to_address);
        self.submit(AdminAction::MintNft, sender, intent).await
    }

    fn require_account(&self) -> Result<String> {
        self.wallet.connected_account().ok_or_else(|| {
            tracing::warn!("Refusing admin action: wallet not connected");
            ClientError::WalletNotConnected
        })
    }

    async fn submit(
        &self,
        action: AdminAction,
        sender: String,
        intent: TransactionIntent,
    ) -> Result<ActionReceipt> {
        tracing::info!("Submitting {} from {}", action, sender);

        match self.submitter.submit(&intent).await {
            Ok(submitted) => {
                tracing::info!("✅ {} submitted, txn hash: {}", action, submitted.hash);
                Ok(ActionReceipt {
                    action,
                    sender,
                    transaction_hash: submitted.hash,
                    submitted_at: Utc::now(),
                })
            }
            Err(e) => {
                tracing::error!("❌ {} failed: {}", action, e);
                Err(e)
            }
        }
    }
}
