use std::str::FromStr;

use thiserror::Error;

pub const MENU: &str = "
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew client
[q]\tQuit
=> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewClient,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid option {0:?}, please try again.")]
pub struct InvalidOption(String);

impl FromStr for MenuOption {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let option = match s.trim().to_lowercase().as_str() {
            "d" => Self::Deposit,
            "s" => Self::Withdraw,
            "e" => Self::Statement,
            "nc" => Self::NewAccount,
            "lc" => Self::ListAccounts,
            "nu" => Self::NewClient,
            "q" => Self::Quit,
            _ => return Err(InvalidOption(s.trim().to_string())),
        };

        Ok(option)
    }
}
