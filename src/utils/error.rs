use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Node returned HTTP {status}: {message}")]
    Node { status: u16, message: String },

    #[error("View query failed: {message}")]
    ReadFailure { message: String },

    #[error("Transaction submission failed: {message}")]
    Submission { message: String },

    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid amount '{value}': expected a non-negative integer")]
    InvalidAmount { value: String },
}

/// 錯誤分類，CLI 依此決定退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Wallet,
    Submission,
    Configuration,
    Input,
    Internal,
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Http(_) | ClientError::Node { .. } | ClientError::ReadFailure { .. } => {
                ErrorCategory::Network
            }
            ClientError::WalletNotConnected => ErrorCategory::Wallet,
            ClientError::Submission { .. } => ErrorCategory::Submission,
            ClientError::Config { .. }
            | ClientError::ConfigValidation { .. }
            | ClientError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            ClientError::InvalidAmount { .. } => ErrorCategory::Input,
            ClientError::Io(_) | ClientError::Serialization(_) => ErrorCategory::Internal,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the node URL and that the node is reachable, then retry",
            ErrorCategory::Wallet => "Connect a wallet account before sending transactions",
            ErrorCategory::Submission => "Inspect the wallet or node error and resubmit if appropriate",
            ErrorCategory::Configuration => "Fix the configuration file, flags or environment variables",
            ErrorCategory::Input => "Check the command arguments",
            ErrorCategory::Internal => "Re-run with --verbose and report the failure",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input => 1,
            ErrorCategory::Network | ErrorCategory::Submission => 2,
            ErrorCategory::Wallet => 3,
            ErrorCategory::Internal => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
