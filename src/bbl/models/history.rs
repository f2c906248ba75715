use super::TransactionKind;

use crate::Money;

use chrono::{DateTime, Local};

/// Append-only log of the transactions applied to one account. Insertion
/// order is chronological order; records are never removed.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<TransactionRecord>,
}

/// Immutable snapshot of one applied transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: DateTime<Local>,
}

impl TransactionRecord {
    pub fn now(kind: TransactionKind, amount: Money) -> Self {
        Self {
            kind,
            amount,
            timestamp: Local::now(),
        }
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn count_of(&self, kind: TransactionKind) -> usize {
        self.records.iter().filter(|record| record.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
