//! Ledger entry types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a ledger entry. Sign lives here, never in the amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[serde(rename = "INCOME")]
    Income,
    #[serde(rename = "EXPENSE")]
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

/// Expense bucket. Income entries carry `Fixed` by convention and the value
/// is never read for them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    #[serde(rename = "FIXED")]
    Fixed,
    #[serde(rename = "VARIABLE")]
    Variable,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Fixed => "FIXED",
            ExpenseCategory::Variable => "VARIABLE",
        }
    }
}

/// A single entry in the ledger. Created on submission, removed by id,
/// never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Opaque identifier, stable for the record's lifetime
    pub id: String,
    /// Human-readable description
    pub description: String,
    /// Non-negative, currency-agnostic unit
    pub amount: f64,
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Fixed or variable; meaningful only for expenses
    pub category: ExpenseCategory,
}

impl Transaction {
    /// Create an entry with a fresh id. Income is always filed under `Fixed`.
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        category: ExpenseCategory,
    ) -> Self {
        let category = match kind {
            TransactionType::Income => ExpenseCategory::Fixed,
            TransactionType::Expense => category,
        };
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            amount,
            kind,
            category,
        }
    }

    pub fn income(description: impl Into<String>, amount: f64) -> Self {
        Self::new(
            description,
            amount,
            TransactionType::Income,
            ExpenseCategory::Fixed,
        )
    }

    pub fn expense(
        description: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
    ) -> Self {
        Self::new(description, amount, TransactionType::Expense, category)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}
