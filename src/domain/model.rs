use crate::utils::error::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The view function every registry read goes through.
pub const SIDE_LAUNCH_VIEW_FUNCTION: &str = "get_side_launch_info";

/// On-chain module: publisher address plus module name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleId {
    pub address: String,
    pub name: String,
}

impl ModuleId {
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
        }
    }

    pub fn function(&self, name: impl Into<String>) -> FunctionId {
        FunctionId {
            module: self.clone(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address, self.name)
    }
}

/// Fully qualified function, rendered as `<address>::<module>::<function>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct FunctionId {
    pub module: ModuleId,
    pub name: String,
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.name)
    }
}

impl From<FunctionId> for String {
    fn from(id: FunctionId) -> Self {
        id.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryFunction {
    CreateAggregator,
    CreateSideLaunch,
    MintTokens,
    BurnTokens,
    MintNft,
}

impl EntryFunction {
    pub const ALL: [EntryFunction; 5] = [
        EntryFunction::CreateAggregator,
        EntryFunction::CreateSideLaunch,
        EntryFunction::MintTokens,
        EntryFunction::BurnTokens,
        EntryFunction::MintNft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryFunction::CreateAggregator => "create_aggregator",
            EntryFunction::CreateSideLaunch => "create_side_launch",
            EntryFunction::MintTokens => "mint_tokens",
            EntryFunction::BurnTokens => "burn_tokens",
            EntryFunction::MintNft => "mint_nft",
        }
    }
}

impl fmt::Display for EntryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-negative integer of any width, kept as decimal digits.
///
/// Range checks belong to the contract; this type only guarantees the value
/// is a non-empty run of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(String);

impl Amount {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Amount {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ClientError::InvalidAmount {
                value: s.to_string(),
            });
        }
        Ok(Amount(s.to_string()))
    }
}

impl TryFrom<String> for Amount {
    type Error = ClientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

macro_rules! amount_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount {
                fn from(value: $t) -> Self {
                    Amount(value.to_string())
                }
            }
        )*
    };
}

amount_from_unsigned!(u8, u16, u32, u64, u128, usize);

/// One positional argument of an entry function call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MoveArg {
    String(String),
    Amount(Amount),
}

impl From<String> for MoveArg {
    fn from(value: String) -> Self {
        MoveArg::String(value)
    }
}

impl From<&str> for MoveArg {
    fn from(value: &str) -> Self {
        MoveArg::String(value.to_string())
    }
}

impl From<Amount> for MoveArg {
    fn from(value: Amount) -> Self {
        MoveArg::Amount(value)
    }
}

/// Unsigned description of a contract call: which entry point, which arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionIntent {
    pub target: FunctionId,
    pub args: Vec<MoveArg>,
}

impl TransactionIntent {
    /// Shape accepted by browser wallet adapters (`signAndSubmitTransaction`).
    pub fn wallet_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "function": self.target.to_string(),
                "functionArguments": self.args,
            }
        })
    }

    /// Shape accepted by the node's transaction endpoints.
    pub fn entry_function_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "entry_function_payload",
            "function": self.target.to_string(),
            "type_arguments": [],
            "arguments": self.args,
        })
    }
}

/// Request body of a view call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRequest {
    pub function: FunctionId,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<serde_json::Value>,
}

impl ViewRequest {
    pub fn without_arguments(function: FunctionId) -> Self {
        Self {
            function,
            type_arguments: Vec::new(),
            arguments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideLaunchField {
    Name,
    Description,
    CollectionAddress,
    MetadataUri,
    IsActive,
}

impl SideLaunchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SideLaunchField::Name => "name",
            SideLaunchField::Description => "description",
            SideLaunchField::CollectionAddress => "collection_address",
            SideLaunchField::MetadataUri => "metadata_uri",
            SideLaunchField::IsActive => "is_active",
        }
    }
}

/// A side launch as reported by the registry view.
///
/// Every field is always present. Fields the node did not send (or sent with
/// an unexpected JSON type) hold `""` / `false` and are listed in
/// `missing_fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideLaunchInfo {
    pub name: String,
    pub description: String,
    pub collection_address: String,
    pub metadata_uri: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<SideLaunchField>,
}

impl SideLaunchInfo {
    pub fn is_complete(&self) -> bool {
        self.missing_fields.is_empty()
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedTransaction {
    pub hash: String,
}
