use super::{Account, TransactionError, TransactionRecord};

use crate::Money;

use std::fmt;

/// A requested change to an account. Built per user action, applied once,
/// and discarded; only the resulting history record survives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transaction {
    Deposit { amount: Money },
    Withdrawal { amount: Money },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        };

        return write!(f, "{name}");
    }
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Deposit { .. } => TransactionKind::Deposit,
            Self::Withdrawal { .. } => TransactionKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Deposit { amount } => *amount,
            Self::Withdrawal { amount } => *amount,
        }
    }

    /// Runs this transaction against the account. The history record is
    /// appended only when the balance mutation succeeds.
    pub fn apply(&self, account: &mut Account) -> Result<(), TransactionError> {
        match self {
            Self::Deposit { amount } => account.deposit(*amount)?,
            Self::Withdrawal { amount } => account.withdraw(*amount)?,
        }

        account
            .history_mut()
            .append(TransactionRecord::now(self.kind(), self.amount()));

        Ok(())
    }
}
