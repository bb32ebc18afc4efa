pub mod account_report;
pub mod audit;
mod bank;
pub mod command;
mod config;
mod error;
pub mod ids;
pub mod input;
pub mod models;
mod money;
mod result;
mod transaction;

pub use bank::Bank;
pub use config::BankConfig;
pub use error::BankError;
pub use money::{Money, MoneyError};
pub use result::{BankResult, Result};
pub use transaction::Transaction;
