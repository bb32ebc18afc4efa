mod account;
mod client;
mod history;

pub use account::{Account, AccountKind, WithdrawalLimits};
pub use client::Client;
pub use history::{HistoryEntry, TransactionHistory, TransactionKind};
