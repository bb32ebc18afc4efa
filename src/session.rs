use crate::menu::{MenuOption, MENU};
use crate::prompt::{Prompt, PromptError};
use crate::render;

use tbs::command::Command;
use tbs::ids::TaxId;
use tbs::input::parse_birth_date;
use tbs::models::TransactionKind;
use tbs::{Bank, BankError, BankResult, Money, Result};

use std::io::{BufRead, Write};

enum Flow {
    Continue,
    Quit,
}

/// Interactive menu loop over a bank
pub struct Session<R, W> {
    bank: Bank,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(bank: Bank, prompt: Prompt<R, W>) -> Self {
        return Self { bank, prompt };
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Bank, Prompt<R, W>) {
        (self.bank, self.prompt)
    }

    /// Runs until the user quits or input runs out
    pub fn run(&mut self) -> Result {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) if e.is::<PromptError>() => {
                    log::debug!("Input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.prompt.say("Session ended.")?;

        return Ok(());
    }

    fn step(&mut self) -> Result<Flow> {
        let answer = self.prompt.ask(MENU)?;

        let option = match answer.parse::<MenuOption>() {
            Ok(option) => option,
            Err(e) => {
                self.prompt.say(format!("@@@ {e} @@@"))?;
                return Ok(Flow::Continue);
            }
        };

        log::debug!("Selected menu option: {option:?}");

        match option {
            MenuOption::Deposit => self.transaction(TransactionKind::Deposit)?,
            MenuOption::Withdraw => self.transaction(TransactionKind::Withdrawal)?,
            MenuOption::Statement => self.statement()?,
            MenuOption::NewAccount => self.new_account()?,
            MenuOption::ListAccounts => self.execute(Command::ListAccounts)?,
            MenuOption::NewClient => self.new_client()?,
            MenuOption::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn transaction(&mut self, kind: TransactionKind) -> Result {
        let tax_id = self.read_tax_id()?;

        let account = match self.resolve_account(&tax_id)? {
            Ok(account) => account,
            Err(e) => return self.prompt.say(render::error(&e)),
        };

        let question = match kind {
            TransactionKind::Deposit => "Deposit amount: ",
            TransactionKind::Withdrawal => "Withdrawal amount: ",
        };
        let amount = self
            .prompt
            .ask_parsed(question, |answer| Ok(Money::parse(answer)?))?;

        let command = match kind {
            TransactionKind::Deposit => Command::Deposit {
                tax_id,
                account,
                amount,
            },
            TransactionKind::Withdrawal => Command::Withdraw {
                tax_id,
                account,
                amount,
            },
        };

        return self.execute(command);
    }

    fn statement(&mut self) -> Result {
        let tax_id = self.read_tax_id()?;

        let account = match self.resolve_account(&tax_id)? {
            Ok(account) => account,
            Err(e) => return self.prompt.say(render::error(&e)),
        };

        return self.execute(Command::Statement { tax_id, account });
    }

    fn new_account(&mut self) -> Result {
        let tax_id = self.read_tax_id()?;

        return self.execute(Command::NewAccount { tax_id });
    }

    fn new_client(&mut self) -> Result {
        let tax_id = self.read_tax_id()?;

        if self.bank.find_client(&tax_id).is_ok() {
            return self.prompt.say(render::error(&BankError::DuplicateClient(tax_id)));
        }

        let name = self.prompt.ask_required("Full name: ")?;
        let birth_date = self
            .prompt
            .ask_parsed("Birth date (dd-mm-yyyy): ", parse_birth_date)?;
        let address = self
            .prompt
            .ask_required("Address (street, number - district - city/state): ")?;

        return self.execute(Command::NewClient {
            tax_id,
            name,
            birth_date,
            address,
        });
    }

    fn execute(&mut self, command: Command) -> Result {
        let result = self.bank.execute(command);

        return self.prompt.say(render::result(&result));
    }

    fn read_tax_id(&mut self) -> Result<TaxId> {
        let tax_id = self.prompt.ask_required("Client tax id: ")?;

        return Ok(TaxId::new(tax_id));
    }

    /// Finds the client's account, asking which one when the client owns several.
    /// The inner result carries lookup failures to show to the user.
    fn resolve_account(&mut self, tax_id: &TaxId) -> Result<BankResult<Option<usize>>> {
        let client = match self.bank.find_client(tax_id) {
            Ok(client) => client,
            Err(e) => return Ok(Err(e)),
        };

        let choices = self
            .bank
            .client_accounts(client)
            .enumerate()
            .map(|(idx, account)| render::account_choice(idx + 1, account))
            .collect::<Vec<_>>();

        if choices.len() <= 1 {
            return Ok(self.bank.select_account(tax_id, None).map(|_| None));
        }

        self.prompt.say("\n=== Available accounts ===")?;
        for choice in choices {
            self.prompt.say(choice)?;
        }

        let choice = self
            .prompt
            .ask_parsed("Choose the account: ", |answer| Ok(answer.parse::<usize>()?))?;

        return Ok(self.bank.select_account(tax_id, Some(choice)).map(|_| Some(choice)));
    }
}
