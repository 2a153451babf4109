use crate::core::ConfigProvider;
use crate::domain::model::{Amount, EntryFunction, ModuleId, MoveArg, TransactionIntent};

/// Builds unsigned intents for the registry's entry functions.
///
/// Arguments are forwarded verbatim and in order. Nothing is trimmed or
/// checked; the contract rejects what it does not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadBuilder {
    module: ModuleId,
}

impl PayloadBuilder {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::for_module(ModuleId::new(config.module_address(), config.module_name()))
    }

    pub fn for_module(module: ModuleId) -> Self {
        Self { module }
    }

    pub fn module(&self) -> &ModuleId {
        &self.module
    }

    pub fn create_aggregator(
        &self,
        name: impl Into<String>,
        symbol: impl Into<String>,
        icon_uri: impl Into<String>,
        project_uri: impl Into<String>,
    ) -> TransactionIntent {
        self.intent(
            EntryFunction::CreateAggregator,
            vec![
                MoveArg::String(name.into()),
                MoveArg::String(symbol.into()),
                MoveArg::String(icon_uri.into()),
                MoveArg::String(project_uri.into()),
            ],
        )
    }

    pub fn create_side_launch(
        &self,
        aggregator_symbol: impl Into<String>,
        side_launch_name: impl Into<String>,
        description: impl Into<String>,
        metadata_uri: impl Into<String>,
    ) -> TransactionIntent {
        self.intent(
            EntryFunction::CreateSideLaunch,
            vec![
                MoveArg::String(aggregator_symbol.into()),
                MoveArg::String(side_launch_name.into()),
                MoveArg::String(description.into()),
                MoveArg::String(metadata_uri.into()),
            ],
        )
    }

    pub fn mint_tokens(
        &self,
        aggregator_symbol: impl Into<String>,
        to_address: impl Into<String>,
        amount: impl Into<Amount>,
    ) -> TransactionIntent {
        self.intent(
            EntryFunction::MintTokens,
            vec![
                MoveArg::String(aggregator_symbol.into()),
                MoveArg::String(to_address.into()),
                MoveArg::Amount(amount.into()),
            ],
        )
    }

    pub fn burn_tokens(
        &self,
        aggregator_symbol: impl Into<String>,
        from_address: impl Into<String>,
        amount: impl Into<Amount>,
    ) -> TransactionIntent {
        self.intent(
            EntryFunction::BurnTokens,
            vec![
                MoveArg::String(aggregator_symbol.into()),
                MoveArg::String(from_address.into()),
                MoveArg::Amount(amount.into()),
            ],
        )
    }

    pub fn mint_nft(
        &self,
        aggregator_symbol: impl Into<String>,
        side_launch_name: impl Into<String>,
        to_address: impl Into<String>,
    ) -> TransactionIntent {
        self.intent(
            EntryFunction::MintNft,
            vec![
                MoveArg::String(aggregator_symbol.into()),
                MoveArg::String(side_launch_name.into()),
                MoveArg::String(to_address.into()),
            ],
        )
    }

    fn intent(&self, function: EntryFunction, args: Vec<MoveArg>) -> TransactionIntent {
        tracing::debug!("Building {} intent with {} args", function, args.len());
        TransactionIntent {
            target: self.module.function(function.as_str()),
            args,
        }
    }
}
