use crate::command::Command;
use crate::ids::TaxId;
use crate::Money;
use crate::Result;

use chrono::NaiveDate;

use serde::Deserialize;

use thiserror::Error;

/// Format of birth dates entered by users, e.g. `17-05-1990`
pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Represents a row of a session script, as a CSV record would deserialize into
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub command: InputCommandType,

    pub tax_id: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub account: Option<usize>,
    pub amount: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputCommandType {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewClient,
    Quit,
}

/// What a script row asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Execute(Command),
    Quit,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input row: {0} value missing: {1:?}")]
    MissingField(&'static str, InputRow),

    #[error("Error parsing input row: invalid birth date {0:?}, expected dd-mm-yyyy")]
    InvalidBirthDate(String),
}

pub fn parse_birth_date(value: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(value.trim(), BIRTH_DATE_FORMAT)
        .map_err(|_| InputParseError::InvalidBirthDate(value.to_string()))?;

    return Ok(date);
}

impl InputRow {
    pub fn parse_instruction(self) -> Result<Instruction> {
        let command = match self.command {
            InputCommandType::Quit => return Ok(Instruction::Quit),

            InputCommandType::Deposit => Command::Deposit {
                tax_id: self.tax_id()?,
                account: self.account,
                amount: self.amount()?,
            },

            InputCommandType::Withdraw => Command::Withdraw {
                tax_id: self.tax_id()?,
                account: self.account,
                amount: self.amount()?,
            },

            InputCommandType::Statement => Command::Statement {
                tax_id: self.tax_id()?,
                account: self.account,
            },

            InputCommandType::NewAccount => Command::NewAccount {
                tax_id: self.tax_id()?,
            },

            InputCommandType::ListAccounts => Command::ListAccounts,

            InputCommandType::NewClient => Command::NewClient {
                tax_id: self.tax_id()?,
                name: self.required("name", &self.name)?.to_string(),
                birth_date: parse_birth_date(self.required("birth_date", &self.birth_date)?)?,
                address: self.required("address", &self.address)?.to_string(),
            },
        };

        Ok(Instruction::Execute(command))
    }

    fn tax_id(&self) -> Result<TaxId> {
        return Ok(TaxId::new(self.required("tax_id", &self.tax_id)?));
    }

    fn amount(&self) -> Result<Money> {
        let amount = Money::parse(self.required("amount", &self.amount)?)?;

        return Ok(amount);
    }

    fn required<'a>(&self, field: &'static str, value: &'a Option<String>) -> Result<&'a str> {
        let value = value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| InputParseError::MissingField(field, self.clone()))?;

        return Ok(value);
    }
}
