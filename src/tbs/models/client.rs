use crate::ids::{AccountNumber, TaxId};

use chrono::NaiveDate;

/// An individual holding zero or more accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub tax_id: TaxId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(tax_id: TaxId, name: &str, birth_date: NaiveDate, address: &str) -> Self {
        return Self {
            tax_id,
            name: name.trim().to_string(),
            birth_date,
            address: address.trim().to_string(),
            accounts: vec![],
        };
    }

    /// Numbers of the accounts owned by this client, in opening order
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub(crate) fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }
}
