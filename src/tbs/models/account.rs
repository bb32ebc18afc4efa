use super::TransactionHistory;

use crate::ids::{AccountNumber, TaxId};
use crate::{BankError, BankResult, Money};

/// Caps layered on top of the balance check of a checking account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalLimits {
    per_operation: Money,
    max_daily: u32,
    made_today: u32,
}

impl WithdrawalLimits {
    pub fn new(per_operation: Money, max_daily: u32) -> Self {
        return Self {
            per_operation,
            max_daily,
            made_today: 0,
        };
    }

    pub fn per_operation(&self) -> Money {
        self.per_operation
    }

    pub fn max_daily(&self) -> u32 {
        self.max_daily
    }

    /// Successful withdrawals so far. Only a process restart resets the counter.
    pub fn made_today(&self) -> u32 {
        self.made_today
    }

    /// Daily count first, then the per-operation ceiling
    fn check(&self, amount: Money) -> BankResult {
        if self.made_today >= self.max_daily {
            Err(BankError::DailyLimitExceeded(self.made_today))?
        }

        if amount > self.per_operation {
            Err(BankError::PerOperationLimitExceeded {
                requested: amount,
                limit: self.per_operation,
            })?
        }

        return Ok(());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    /// Withdrawals limited by the balance only
    Basic,
    Checking(WithdrawalLimits),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    branch_code: String,
    owner: TaxId,
    balance: Money,
    kind: AccountKind,
    history: TransactionHistory,
}

impl Account {
    pub fn new(number: AccountNumber, branch_code: String, owner: TaxId, kind: AccountKind) -> Self {
        return Self {
            number,
            branch_code,
            owner,
            balance: Money::ZERO,
            kind,
            history: TransactionHistory::new(),
        };
    }

    pub fn basic(number: AccountNumber, branch_code: String, owner: TaxId) -> Self {
        Self::new(number, branch_code, owner, AccountKind::Basic)
    }

    pub fn checking(
        number: AccountNumber,
        branch_code: String,
        owner: TaxId,
        limits: WithdrawalLimits,
    ) -> Self {
        Self::new(number, branch_code, owner, AccountKind::Checking(limits))
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch_code(&self) -> &str {
        &self.branch_code
    }

    pub fn owner(&self) -> &TaxId {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn history(&self) -> &TransactionHistory {
        &self.history
    }

    /// Only transactions write to the history, and only after the balance changed
    pub(crate) fn history_mut(&mut self) -> &mut TransactionHistory {
        &mut self.history
    }

    pub fn deposit(&mut self, amount: Money) -> BankResult {
        if !amount.is_positive() {
            Err(BankError::InvalidAmount(amount))?
        }

        self.balance = self.balance.checked_add(amount)?;

        log::debug!("Deposited {amount} into account {}, balance is now {}", self.number, self.balance);

        return Ok(());
    }

    pub fn withdraw(&mut self, amount: Money) -> BankResult {
        if let AccountKind::Checking(limits) = &self.kind {
            limits.check(amount)?;
        }

        self.debit(amount)?;

        if let AccountKind::Checking(limits) = &mut self.kind {
            limits.made_today += 1;
        }

        log::debug!("Withdrew {amount} from account {}, balance is now {}", self.number, self.balance);

        return Ok(());
    }

    /// Balance-only withdrawal rules shared by every kind of account
    fn debit(&mut self, amount: Money) -> BankResult {
        if amount > self.balance {
            Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            })?
        }

        if !amount.is_positive() {
            Err(BankError::InvalidAmount(amount))?
        }

        self.balance = self.balance.checked_sub(amount)?;

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::MoneyError;

    const SOME_ACCOUNT_NUMBER: AccountNumber = AccountNumber(1);
    const SOME_BRANCH_CODE: &str = "0001";
    const SOME_TAX_ID: &str = "111";

    const LIMIT: Money = Money::units(500);
    const MAX_DAILY: u32 = 3;

    fn build_basic(balance: Money) -> Account {
        let mut account = Account::basic(
            SOME_ACCOUNT_NUMBER,
            SOME_BRANCH_CODE.to_string(),
            TaxId::from(SOME_TAX_ID),
        );
        account.balance = balance;
        account
    }

    fn build_checking(balance: Money) -> Account {
        let mut account = Account::checking(
            SOME_ACCOUNT_NUMBER,
            SOME_BRANCH_CODE.to_string(),
            TaxId::from(SOME_TAX_ID),
            WithdrawalLimits::new(LIMIT, MAX_DAILY),
        );
        account.balance = balance;
        account
    }

    fn made_today(account: &Account) -> u32 {
        match account.kind() {
            AccountKind::Checking(limits) => limits.made_today(),
            AccountKind::Basic => panic!("not a checking account"),
        }
    }

    #[test]
    fn deposit() {
        let mut account = build_basic(Money::ZERO);

        assert_eq!(account.deposit(Money::units(100)), Ok(()));
        assert_eq!(account.balance(), Money::units(100));

        assert_eq!(
            account.deposit(Money::ZERO),
            Err(BankError::InvalidAmount(Money::ZERO))
        );
        assert_eq!(
            account.deposit(Money::units(-5)),
            Err(BankError::InvalidAmount(Money::units(-5)))
        );
        assert_eq!(account.balance(), Money::units(100));
    }

    #[test]
    fn deposit_overflow_leaves_balance() {
        let mut account = build_basic(Money::MAX);

        assert!(matches!(
            account.deposit(Money(1)),
            Err(BankError::Money(MoneyError::Overflow(_, _, _)))
        ));
        assert_eq!(account.balance(), Money::MAX);
    }

    #[test]
    fn basic_withdraw() {
        let mut account = build_basic(Money::units(1000));

        assert_eq!(account.withdraw(Money::units(800)), Ok(()));
        assert_eq!(account.balance(), Money::units(200));

        assert_eq!(
            account.withdraw(Money::units(201)),
            Err(BankError::InsufficientFunds {
                requested: Money::units(201),
                available: Money::units(200),
            })
        );
        assert_eq!(
            account.withdraw(Money::ZERO),
            Err(BankError::InvalidAmount(Money::ZERO))
        );
        assert_eq!(account.balance(), Money::units(200));

        // no count or ceiling on basic accounts
        for _ in 0..5 {
            assert_eq!(account.withdraw(Money::units(10)), Ok(()));
        }
        assert_eq!(account.balance(), Money::units(150));
    }

    #[test]
    fn insufficient_funds_checked_before_amount_sign() {
        let mut account = build_basic(Money::units(-10));

        assert_eq!(
            account.withdraw(Money::units(-5)),
            Err(BankError::InsufficientFunds {
                requested: Money::units(-5),
                available: Money::units(-10),
            })
        );
    }

    #[test]
    fn checking_per_operation_limit() {
        let mut account = build_checking(Money::units(1000));

        assert_eq!(
            account.withdraw(Money::units(600)),
            Err(BankError::PerOperationLimitExceeded {
                requested: Money::units(600),
                limit: LIMIT,
            })
        );
        assert_eq!(account.balance(), Money::units(1000));
        assert_eq!(made_today(&account), 0);

        assert_eq!(account.withdraw(LIMIT), Ok(()));
        assert_eq!(account.balance(), Money::units(500));
    }

    #[test]
    fn checking_limit_checked_before_balance() {
        let mut account = build_checking(Money::units(50));

        assert!(matches!(
            account.withdraw(Money::units(600)),
            Err(BankError::PerOperationLimitExceeded { .. })
        ));
    }

    #[test]
    fn checking_daily_limit() {
        let mut account = build_checking(Money::units(100));

        for _ in 0..MAX_DAILY {
            assert_eq!(account.withdraw(Money::units(10)), Ok(()));
        }
        assert_eq!(made_today(&account), MAX_DAILY);

        assert_eq!(
            account.withdraw(Money::units(1)),
            Err(BankError::DailyLimitExceeded(MAX_DAILY))
        );
        assert_eq!(
            account.withdraw(Money::units(10_000)),
            Err(BankError::DailyLimitExceeded(MAX_DAILY))
        );
        assert_eq!(account.balance(), Money::units(70));
        assert_eq!(made_today(&account), MAX_DAILY);
    }

    #[test]
    fn failed_withdrawals_do_not_count() {
        let mut account = build_checking(Money::units(20));

        assert!(account.withdraw(Money::units(30)).is_err());
        assert!(account.withdraw(Money::ZERO).is_err());
        assert!(account.withdraw(Money::units(501)).is_err());

        assert_eq!(made_today(&account), 0);
        assert_eq!(account.balance(), Money::units(20));
    }
}
