use crate::ids::{AccountNumber, TaxId};
use crate::money::{Money, MoneyError};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("Invalid amount: {0}, amounts must be positive")]
    InvalidAmount(Money),

    #[error("Insufficient funds: cannot withdraw {requested} from a balance of {available}")]
    InsufficientFunds { requested: Money, available: Money },

    #[error("Withdrawal of {requested} exceeds the per-operation limit of {limit}")]
    PerOperationLimitExceeded { requested: Money, limit: Money },

    #[error("Daily withdrawal limit reached: {0} withdrawals already made")]
    DailyLimitExceeded(u32),

    #[error("Client not found: {0}")]
    ClientNotFound(TaxId),

    #[error("Client already exists: {0}")]
    DuplicateClient(TaxId),

    #[error("Client {0} has no accounts")]
    NoAccount(TaxId),

    #[error("Invalid account selection {choice}, expected a number between 1 and {available}")]
    InvalidSelection { choice: usize, available: usize },

    #[error("Client owns {0} accounts, an account must be selected")]
    SelectionRequired(usize),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    #[error(transparent)]
    Money(#[from] MoneyError),
}
