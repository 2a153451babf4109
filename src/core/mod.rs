pub mod payload;
pub mod view;

pub use crate::domain::model::{SideLaunchInfo, TransactionIntent};
pub use crate::domain::ports::{ConfigProvider, TransactionSubmitter, ViewTransport, WalletSession};
pub use crate::utils::error::Result;
