//! Insertion-ordered transaction ledger

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;
use crate::view::ViewScope;

/// The ordered ledger. Insertion order is display order for "all" views.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the end of the sequence. Validation happens at the
    /// submission boundary, not here.
    pub fn add(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    /// Remove the entry with the matching id, preserving the order of the
    /// rest. Returns false (no-op, not an error) when nothing matches.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        self.entries.len() != before
    }

    /// Full ordered sequence.
    pub fn all(&self) -> &[Transaction] {
        &self.entries
    }

    /// Fresh subsequence matching a caller-supplied predicate. O(n), no
    /// caching; ledgers stay small.
    pub fn filter(&self, predicate: impl Fn(&Transaction) -> bool) -> Vec<&Transaction> {
        self.entries.iter().filter(|t| predicate(t)).collect()
    }

    /// Filtered subsequence for one of the tab scopes.
    pub fn scoped(&self, scope: ViewScope) -> Vec<&Transaction> {
        self.filter(|t| scope.matches(t))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Transaction>> for Ledger {
    fn from(entries: Vec<Transaction>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
