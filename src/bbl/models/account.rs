use super::{History, TransactionKind};

use crate::ids::{AccountNumber, LegalId};
use crate::Money;

use thiserror::Error;

/// Branch code of the single, hardcoded branch issuing every account.
pub const BRANCH_CODE: &str = "1001";

pub const DEFAULT_WITHDRAWAL_LIMIT: Money = Money(1000.0);
pub const DEFAULT_WITHDRAWAL_COUNT_LIMIT: u32 = 3;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Operation failed: insufficient balance for this withdrawal")]
    InsufficientBalance,

    #[error("Operation failed: the amount provided is not valid")]
    InvalidAmount,

    #[error("Operation failed: the amount exceeds the account withdrawal limit")]
    WithdrawalLimitExceeded,

    #[error("Operation failed: maximum number of withdrawals exceeded")]
    WithdrawalCountExceeded,
}

/// Per-kind extras of an account. Checking is the only kind the branch
/// issues today.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountKind {
    Checking {
        withdrawal_limit: Money,
        withdrawal_count_limit: u32,
    },
}

/// Balance changes only through `deposit`/`withdraw` and never goes
/// negative. History recording is the transaction's job, not the account's.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    owner: LegalId,
    kind: AccountKind,
    balance: Money,
    history: History,
}

impl Account {
    pub fn new_checking(
        number: AccountNumber,
        owner: LegalId,
        withdrawal_limit: Money,
        withdrawal_count_limit: u32,
    ) -> Self {
        Self {
            number,
            owner,
            kind: AccountKind::Checking {
                withdrawal_limit,
                withdrawal_count_limit,
            },
            balance: Money::ZERO,
            history: History::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn owner(&self) -> &LegalId {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), TransactionError> {
        if !amount.is_positive() {
            return Err(TransactionError::InvalidAmount);
        }

        self.balance += amount;

        Ok(())
    }

    /// Checking accounts gate every withdrawal on the per-transaction limit
    /// and the withdrawal cap before the balance rules run. The cap counts
    /// every Withdrawal record on the account; it never resets.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), TransactionError> {
        match self.kind {
            AccountKind::Checking {
                withdrawal_limit,
                withdrawal_count_limit,
            } => {
                if amount > withdrawal_limit {
                    return Err(TransactionError::WithdrawalLimitExceeded);
                }

                let withdrawals = self.history.count_of(TransactionKind::Withdrawal);
                if withdrawals >= withdrawal_count_limit as usize {
                    return Err(TransactionError::WithdrawalCountExceeded);
                }
            }
        }

        self.debit(amount)
    }

    fn debit(&mut self, amount: Money) -> Result<(), TransactionError> {
        if amount > self.balance {
            return Err(TransactionError::InsufficientBalance);
        }

        if !amount.is_positive() {
            return Err(TransactionError::InvalidAmount);
        }

        self.balance -= amount;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_ACCOUNT_NUMBER: AccountNumber = AccountNumber(7);
    const SOME_LIMIT: Money = Money(500.0);
    const SOME_COUNT_LIMIT: u32 = 3;

    fn some_legal_id() -> LegalId {
        LegalId::parse("52998224725".to_string()).unwrap()
    }

    fn build_account() -> Account {
        Account::new_checking(
            SOME_ACCOUNT_NUMBER,
            some_legal_id(),
            SOME_LIMIT,
            SOME_COUNT_LIMIT,
        )
    }

    #[test]
    fn deposit_increases_balance() {
        let mut account = build_account();

        assert_eq!(account.deposit(Money(100.0)), Ok(()));
        assert_eq!(account.balance(), Money(100.0));
    }

    #[test]
    fn deposit_rejects_non_positive_amounts() {
        let mut account = build_account();

        assert_eq!(
            account.deposit(Money(0.0)),
            Err(TransactionError::InvalidAmount)
        );
        assert_eq!(
            account.deposit(Money(-10.0)),
            Err(TransactionError::InvalidAmount)
        );
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn withdraw_decreases_balance() {
        let mut account = build_account();
        account.deposit(Money(400.0)).unwrap();

        assert_eq!(account.withdraw(Money(150.0)), Ok(()));
        assert_eq!(account.balance(), Money(250.0));
    }

    #[test]
    fn withdraw_can_empty_the_account() {
        let mut account = build_account();
        account.deposit(Money(300.0)).unwrap();

        assert_eq!(account.withdraw(Money(300.0)), Ok(()));
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn withdraw_rejects_insufficient_balance() {
        let mut account = build_account();
        account.deposit(Money(100.0)).unwrap();

        assert_eq!(
            account.withdraw(Money(100.01)),
            Err(TransactionError::InsufficientBalance)
        );
        assert_eq!(account.balance(), Money(100.0));
    }

    #[test]
    fn withdraw_rejects_non_positive_amounts() {
        let mut account = build_account();

        assert_eq!(
            account.withdraw(Money(0.0)),
            Err(TransactionError::InvalidAmount)
        );
        assert_eq!(
            account.withdraw(Money(-5.0)),
            Err(TransactionError::InvalidAmount)
        );
    }

    #[test]
    fn withdraw_over_limit_fails_before_balance_check() {
        let mut account = build_account();
        account.deposit(Money(2000.0)).unwrap();

        // Balance would cover it; the per-transaction limit wins.
        assert_eq!(
            account.withdraw(Money(600.0)),
            Err(TransactionError::WithdrawalLimitExceeded)
        );
        assert_eq!(account.balance(), Money(2000.0));
    }
}
