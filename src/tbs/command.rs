use crate::account_report::{AccountSummary, Statement};
use crate::ids::{AccountNumber, TaxId};
use crate::models::HistoryEntry;
use crate::Money;

use chrono::NaiveDate;

/// A fully parsed request against the bank.
///
/// `account` is the 1-based choice among the client's accounts. It may be left
/// out when the client owns a single account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Deposit {
        tax_id: TaxId,
        account: Option<usize>,
        amount: Money,
    },
    Withdraw {
        tax_id: TaxId,
        account: Option<usize>,
        amount: Money,
    },
    Statement {
        tax_id: TaxId,
        account: Option<usize>,
    },
    NewAccount {
        tax_id: TaxId,
    },
    ListAccounts,
    NewClient {
        tax_id: TaxId,
        name: String,
        birth_date: NaiveDate,
        address: String,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        return match self {
            Self::Deposit { .. } => "deposit",
            Self::Withdraw { .. } => "withdraw",
            Self::Statement { .. } => "statement",
            Self::NewAccount { .. } => "new_account",
            Self::ListAccounts => "list_accounts",
            Self::NewClient { .. } => "new_client",
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Deposited(HistoryEntry),
    Withdrew(HistoryEntry),
    Statement(Statement),
    AccountOpened {
        number: AccountNumber,
        branch_code: String,
    },
    Accounts(Vec<AccountSummary>),
    ClientCreated(TaxId),
}
