use crate::Money;

/// Defaults applied when the bank opens a new account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    pub branch_code: String,
    pub withdrawal_limit: Money,
    pub max_daily_withdrawals: u32,
}

impl Default for BankConfig {
    fn default() -> Self {
        return Self {
            branch_code: "0001".to_string(),
            withdrawal_limit: Money::units(500),
            max_daily_withdrawals: 3,
        };
    }
}
