use crate::ids::AccountNumber;
use crate::models::{Account, Client, HistoryEntry};
use crate::Money;

use std::fmt;
use std::slice;

/// One account of the registry, as shown by the accounts listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub branch_code: String,
    pub number: AccountNumber,
    pub holder: String,
    pub balance: Money,
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Branch:\t\t{}", self.branch_code)?;
        writeln!(f, "Number:\t\t{}", self.number)?;
        writeln!(f, "Holder:\t\t{}", self.holder)?;
        return write!(f, "Balance:\tR$ {}", self.balance);
    }
}

/// Lazy sequence of account summaries in opening order. Clone it to start over.
#[derive(Debug, Clone)]
pub struct AccountSummaries<'a> {
    accounts: slice::Iter<'a, Account>,
    clients: &'a [Client],
}

impl<'a> AccountSummaries<'a> {
    pub(crate) fn new(accounts: &'a [Account], clients: &'a [Client]) -> Self {
        return Self {
            accounts: accounts.iter(),
            clients,
        };
    }
}

impl Iterator for AccountSummaries<'_> {
    type Item = AccountSummary;

    fn next(&mut self) -> Option<Self::Item> {
        let account = self.accounts.next()?;

        let holder = self
            .clients
            .iter()
            .find(|client| &client.tax_id == account.owner())
            .map(|client| client.name.clone())
            .unwrap_or_default();

        return Some(AccountSummary {
            branch_code: account.branch_code().to_string(),
            number: account.number(),
            holder,
            balance: account.balance(),
        });
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.accounts.size_hint()
    }
}

/// Snapshot of one account's history and balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub number: AccountNumber,
    pub branch_code: String,
    pub holder: String,
    pub entries: Vec<HistoryEntry>,
    pub balance: Money,
}

impl Statement {
    pub fn new(account: &Account, holder: &Client) -> Self {
        return Self {
            number: account.number(),
            branch_code: account.branch_code().to_string(),
            holder: holder.name.clone(),
            entries: account.history().report().copied().collect(),
            balance: account.balance(),
        };
    }
}
