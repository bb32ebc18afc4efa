use crate::Money;

use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

/// A successful operation, as recorded in an account's history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: DateTime<Utc>,
}

/// Append-only log of the operations that changed an account's balance
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionHistory {
    entries: Vec<HistoryEntry>,
}

impl TransactionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        log::debug!("Recording history entry: {entry:?}");
        self.entries.push(entry);
    }

    /// Entries in insertion order. The returned iterator is lazy and can be cloned to restart it.
    pub fn report(&self) -> impl Iterator<Item = &HistoryEntry> + Clone + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
