use tbs::account_report::Statement;
use tbs::command::Outcome;
use tbs::models::Account;
use tbs::{BankError, BankResult};

use std::fmt;

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
const SEPARATOR_WIDTH: usize = 50;

pub fn result(result: &BankResult<Outcome>) -> String {
    return match result {
        Ok(outcome) => self::outcome(outcome),
        Err(e) => error(e),
    };
}

pub fn outcome(outcome: &Outcome) -> String {
    return match outcome {
        Outcome::Deposited(entry) => format!("=== Deposit of R$ {} completed ===", entry.amount),
        Outcome::Withdrew(entry) => format!("=== Withdrawal of R$ {} completed ===", entry.amount),
        Outcome::Statement(statement) => StatementText(statement).to_string(),
        Outcome::AccountOpened {
            number,
            branch_code,
        } => format!("=== Account {number} opened at branch {branch_code} ==="),
        Outcome::ClientCreated(tax_id) => format!("=== Client {tax_id} created ==="),
        Outcome::Accounts(summaries) if summaries.is_empty() => {
            "@@@ No accounts registered. @@@".to_string()
        }
        Outcome::Accounts(summaries) => summaries
            .iter()
            .map(|summary| format!("{}\n{summary}", "=".repeat(SEPARATOR_WIDTH)))
            .collect::<Vec<_>>()
            .join("\n"),
    };
}

pub fn error(error: &BankError) -> String {
    format!("@@@ {error} @@@")
}

/// Multi-line text of an account statement
pub struct StatementText<'a>(pub &'a Statement);

impl fmt::Display for StatementText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let statement = self.0;

        writeln!(f, "================ STATEMENT ================")?;
        writeln!(
            f,
            "Branch: {} - Number: {} - Holder: {}",
            statement.branch_code, statement.number, statement.holder
        )?;

        if statement.entries.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        }

        for entry in statement.entries.iter() {
            writeln!(
                f,
                "{} - {} - R$ {}",
                entry.timestamp.format(TIMESTAMP_FORMAT),
                entry.kind,
                entry.amount
            )?;
        }

        writeln!(f, "Balance: R$ {}", statement.balance)?;
        write!(f, "===========================================")
    }
}

/// One line of the list a client with several accounts picks from
pub fn account_choice(choice: usize, account: &Account) -> String {
    format!(
        "[{choice}] Branch: {} - Number: {} - Balance: R$ {}",
        account.branch_code(),
        account.number(),
        account.balance()
    )
}
