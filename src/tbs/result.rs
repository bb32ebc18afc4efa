use crate::BankError;

/// Convenience type to make error mapping cleaner at the application boundary
pub type Result<T = ()> = anyhow::Result<T>;

/// Outcome of a domain operation; failures are recoverable and meant to be shown to the user
pub type BankResult<T = ()> = std::result::Result<T, BankError>;
