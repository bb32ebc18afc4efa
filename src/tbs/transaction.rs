use crate::models::{Account, HistoryEntry, TransactionKind};
use crate::{BankResult, Money};

use chrono::{DateTime, Utc};

/// Transaction represents a requested change to an account.
///
/// Applying it performs the operation and, only when the account accepted it,
/// records the operation in the account's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit { amount: Money },
    Withdrawal { amount: Money },
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        return match self {
            Self::Deposit { .. } => TransactionKind::Deposit,
            Self::Withdrawal { .. } => TransactionKind::Withdrawal,
        };
    }

    pub fn amount(&self) -> Money {
        return match self {
            Self::Deposit { amount } | Self::Withdrawal { amount } => *amount,
        };
    }

    pub fn apply(&self, account: &mut Account) -> BankResult<HistoryEntry> {
        self.apply_at(account, Utc::now())
    }

    pub fn apply_at(&self, account: &mut Account, timestamp: DateTime<Utc>) -> BankResult<HistoryEntry> {
        match self {
            Self::Deposit { amount } => account.deposit(*amount)?,
            Self::Withdrawal { amount } => account.withdraw(*amount)?,
        }

        let entry = HistoryEntry {
            kind: self.kind(),
            amount: self.amount(),
            timestamp,
        };

        account.history_mut().record(entry);

        return Ok(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ids::{AccountNumber, TaxId};
    use crate::models::WithdrawalLimits;
    use crate::BankError;

    use chrono::TimeZone;

    const SOME_AMOUNT: Money = Money::units(100);
    const OTHER_AMOUNT: Money = Money::units(50);

    fn build_account() -> Account {
        Account::checking(
            AccountNumber(1),
            "0001".to_string(),
            TaxId::from("111"),
            WithdrawalLimits::new(Money::units(500), 3),
        )
    }

    fn history_of(account: &Account) -> Vec<(TransactionKind, Money)> {
        account
            .history()
            .report()
            .map(|entry| (entry.kind, entry.amount))
            .collect()
    }

    #[test]
    fn deposit_records_entry() {
        let mut account = build_account();
        let timestamp = Utc.with_ymd_and_hms(2024, 9, 21, 12, 30, 0).unwrap();

        let entry = Transaction::Deposit { amount: SOME_AMOUNT }
            .apply_at(&mut account, timestamp)
            .unwrap();

        assert_eq!(
            entry,
            HistoryEntry {
                kind: TransactionKind::Deposit,
                amount: SOME_AMOUNT,
                timestamp,
            }
        );
        assert_eq!(account.balance(), SOME_AMOUNT);
        assert_eq!(account.history().report().collect::<Vec<_>>(), vec![&entry]);
    }

    #[test]
    fn withdrawal_records_entry() {
        let mut account = build_account();

        Transaction::Deposit { amount: SOME_AMOUNT }.apply(&mut account).unwrap();
        Transaction::Withdrawal { amount: OTHER_AMOUNT }.apply(&mut account).unwrap();

        assert_eq!(account.balance(), OTHER_AMOUNT);
        assert_eq!(
            history_of(&account),
            vec![
                (TransactionKind::Deposit, SOME_AMOUNT),
                (TransactionKind::Withdrawal, OTHER_AMOUNT),
            ]
        );
    }

    #[test]
    fn rejected_transactions_are_not_recorded() {
        let mut account = build_account();

        assert_eq!(
            Transaction::Deposit { amount: Money::ZERO }.apply(&mut account),
            Err(BankError::InvalidAmount(Money::ZERO))
        );
        assert!(matches!(
            Transaction::Withdrawal { amount: SOME_AMOUNT }.apply(&mut account),
            Err(BankError::InsufficientFunds { .. })
        ));

        assert_eq!(account.balance(), Money::ZERO);
        assert!(account.history().is_empty());
    }

    #[test]
    fn kind_and_amount() {
        let deposit = Transaction::Deposit { amount: SOME_AMOUNT };
        let withdrawal = Transaction::Withdrawal { amount: OTHER_AMOUNT };

        assert_eq!(deposit.kind(), TransactionKind::Deposit);
        assert_eq!(deposit.amount(), SOME_AMOUNT);
        assert_eq!(withdrawal.kind(), TransactionKind::Withdrawal);
        assert_eq!(withdrawal.amount(), OTHER_AMOUNT);
    }
}
