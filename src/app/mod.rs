// Application layer: caller-side flows built on the core.

pub mod admin;

pub use admin::{ActionReceipt, AdminAction, AdminConsole};
