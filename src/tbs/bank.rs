use crate::account_report::{AccountSummaries, Statement};
use crate::audit;
use crate::command::{Command, Outcome};
use crate::ids::{AccountNumber, TaxId};
use crate::models::{Account, Client, HistoryEntry, WithdrawalLimits};
use crate::{BankConfig, BankError, BankResult, Money, Transaction};

use chrono::NaiveDate;

/// In-memory registry of clients and their accounts
#[derive(Debug, Default)]
pub struct Bank {
    config: BankConfig,
    clients: Vec<Client>,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BankConfig) -> Self {
        return Self {
            config,
            ..Self::default()
        };
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Every account, in opening order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn find_client(&self, tax_id: &TaxId) -> BankResult<&Client> {
        log::debug!("Looking up client: {tax_id}");

        return self
            .clients
            .iter()
            .find(|client| &client.tax_id == tax_id)
            .ok_or_else(|| BankError::ClientNotFound(tax_id.clone()));
    }

    pub fn create_client(
        &mut self,
        tax_id: TaxId,
        name: &str,
        birth_date: NaiveDate,
        address: &str,
    ) -> BankResult<&Client> {
        if self.find_client(&tax_id).is_ok() {
            return Err(BankError::DuplicateClient(tax_id));
        }

        self.clients.push(Client::new(tax_id, name, birth_date, address));

        let client = &self.clients[self.clients.len() - 1];
        log::debug!("Created client: {client:?}");

        return Ok(client);
    }

    /// Opens a checking account for the client, numbered after every account opened so far
    pub fn open_account(&mut self, tax_id: &TaxId) -> BankResult<&Account> {
        let client_idx = self
            .clients
            .iter()
            .position(|client| &client.tax_id == tax_id)
            .ok_or_else(|| BankError::ClientNotFound(tax_id.clone()))?;

        let number = AccountNumber(self.accounts.len() + 1);
        let limits = WithdrawalLimits::new(
            self.config.withdrawal_limit,
            self.config.max_daily_withdrawals,
        );
        let account = Account::checking(
            number,
            self.config.branch_code.clone(),
            tax_id.clone(),
            limits,
        );

        self.clients[client_idx].add_account(number);
        self.accounts.push(account);

        log::debug!("Opened account {number} for client {tax_id}");

        return Ok(&self.accounts[self.accounts.len() - 1]);
    }

    /// Resolves which of the client's accounts an operation targets
    pub fn select_account(&self, tax_id: &TaxId, choice: Option<usize>) -> BankResult<&Account> {
        let number = Self::choose_account(self.find_client(tax_id)?, choice)?;

        return self.account(number);
    }

    pub fn account(&self, number: AccountNumber) -> BankResult<&Account> {
        return number
            .index()
            .and_then(|idx| self.accounts.get(idx))
            .ok_or(BankError::AccountNotFound(number));
    }

    /// The client's accounts, in opening order
    pub fn client_accounts<'a>(&'a self, client: &'a Client) -> impl Iterator<Item = &'a Account> {
        client
            .accounts()
            .iter()
            .filter_map(|number| self.account(*number).ok())
    }

    pub fn deposit(
        &mut self,
        tax_id: &TaxId,
        choice: Option<usize>,
        amount: Money,
    ) -> BankResult<HistoryEntry> {
        self.perform(tax_id, choice, Transaction::Deposit { amount })
    }

    pub fn withdraw(
        &mut self,
        tax_id: &TaxId,
        choice: Option<usize>,
        amount: Money,
    ) -> BankResult<HistoryEntry> {
        self.perform(tax_id, choice, Transaction::Withdrawal { amount })
    }

    /// Applies the transaction to the selected account of the client
    pub fn perform(
        &mut self,
        tax_id: &TaxId,
        choice: Option<usize>,
        transaction: Transaction,
    ) -> BankResult<HistoryEntry> {
        let number = Self::choose_account(self.find_client(tax_id)?, choice)?;
        let account = self.account_mut(number)?;

        log::debug!("Applying {transaction:?} to account {number}");

        return transaction.apply(account);
    }

    pub fn statement(&self, tax_id: &TaxId, choice: Option<usize>) -> BankResult<Statement> {
        let client = self.find_client(tax_id)?;
        let account = self.account(Self::choose_account(client, choice)?)?;

        return Ok(Statement::new(account, client));
    }

    pub fn summaries(&self) -> AccountSummaries<'_> {
        AccountSummaries::new(&self.accounts, &self.clients)
    }

    /// Dispatches a command, logging its outcome
    pub fn execute(&mut self, command: Command) -> BankResult<Outcome> {
        log::debug!("Executing command: {command:?}");

        let name = command.name();

        return audit::logged(name, || self.process_command(command));
    }

    fn process_command(&mut self, command: Command) -> BankResult<Outcome> {
        let outcome = match command {
            Command::Deposit {
                tax_id,
                account,
                amount,
            } => Outcome::Deposited(self.deposit(&tax_id, account, amount)?),

            Command::Withdraw {
                tax_id,
                account,
                amount,
            } => Outcome::Withdrew(self.withdraw(&tax_id, account, amount)?),

            Command::Statement { tax_id, account } => {
                Outcome::Statement(self.statement(&tax_id, account)?)
            }

            Command::NewAccount { tax_id } => {
                let account = self.open_account(&tax_id)?;

                Outcome::AccountOpened {
                    number: account.number(),
                    branch_code: account.branch_code().to_string(),
                }
            }

            Command::ListAccounts => Outcome::Accounts(self.summaries().collect()),

            Command::NewClient {
                tax_id,
                name,
                birth_date,
                address,
            } => {
                let client = self.create_client(tax_id, &name, birth_date, &address)?;

                Outcome::ClientCreated(client.tax_id.clone())
            }
        };

        return Ok(outcome);
    }

    fn account_mut(&mut self, number: AccountNumber) -> BankResult<&mut Account> {
        return number
            .index()
            .and_then(|idx| self.accounts.get_mut(idx))
            .ok_or(BankError::AccountNotFound(number));
    }

    fn choose_account(client: &Client, choice: Option<usize>) -> BankResult<AccountNumber> {
        return match (client.accounts(), choice) {
            ([], _) => Err(BankError::NoAccount(client.tax_id.clone())),
            ([only], _) => Ok(*only),
            (accounts, None) => Err(BankError::SelectionRequired(accounts.len())),
            (accounts, Some(choice)) => choice
                .checked_sub(1)
                .and_then(|idx| accounts.get(idx))
                .copied()
                .ok_or(BankError::InvalidSelection {
                    choice,
                    available: accounts.len(),
                }),
        };
    }
}
