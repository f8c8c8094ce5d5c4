//! User aggregate and its state transitions

use serde::{Deserialize, Serialize};

use crate::goal::SavingsGoal;
use crate::ledger::Ledger;
use crate::summary::FinancialSummary;
use crate::transaction::Transaction;

/// Aggregate root owning the ledger and the current goal. All mutation goes
/// through the methods below; the persistence layer mirrors the whole value
/// after each successful one. Wire names stay camelCase so blobs written by
/// earlier versions of the app load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub onboarded: bool,
    pub name: String,
    pub transactions: Ledger,
    pub savings_goal: SavingsGoal,
}

impl Default for UserData {
    fn default() -> Self {
        Self {
            onboarded: false,
            name: String::new(),
            transactions: Ledger::new(),
            savings_goal: SavingsGoal::default(),
        }
    }
}

impl UserData {
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.add(transaction);
    }

    /// No-op when the id is unknown.
    pub fn delete_transaction(&mut self, id: &str) -> bool {
        self.transactions.remove(id)
    }

    /// Wholesale replacement of the goal; no history is kept.
    pub fn set_savings_goal(&mut self, goal: SavingsGoal) {
        self.savings_goal = goal;
    }

    /// Terminal step of the onboarding wizard.
    pub fn complete_onboarding(
        &mut self,
        name: impl Into<String>,
        transactions: Ledger,
        goal: SavingsGoal,
    ) {
        self.name = name.into();
        self.transactions = transactions;
        self.savings_goal = goal;
        self.onboarded = true;
    }

    /// Destructive: back to the pristine not-onboarded state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Recompute the derived summary for the current state.
    pub fn summary(&self) -> FinancialSummary {
        FinancialSummary::compute(&self.transactions, &self.savings_goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::GoalKind;
    use crate::summary::HealthStatus;
    use crate::transaction::ExpenseCategory;

    #[test]
    fn test_default_is_not_onboarded() {
        let data = UserData::default();
        assert!(!data.onboarded);
        assert!(data.name.is_empty());
        assert!(data.transactions.is_empty());
        assert_eq!(data.savings_goal, SavingsGoal::percentage(10.0));
    }

    #[test]
    fn test_mutations_flow_into_summary() {
        let mut data = UserData::default();
        data.add_transaction(Transaction::income("Salário", 3000.0));
        data.add_transaction(Transaction::expense(
            "Aluguel",
            2000.0,
            ExpenseCategory::Fixed,
        ));

        let s = data.summary();
        assert_eq!(s.total_income, 3000.0);
        assert_eq!(s.total_expense, 2000.0);
        assert_eq!(s.health, HealthStatus::Healthy);

        data.set_savings_goal(SavingsGoal::fixed(1500.0));
        assert_eq!(data.summary().health, HealthStatus::Warning);
    }

    #[test]
    fn test_delete_unknown_id_leaves_summary_unchanged() {
        let mut data = UserData::default();
        data.add_transaction(Transaction::income("Salário", 3000.0));
        let before = data.summary();

        assert!(!data.delete_transaction("missing"));
        assert_eq!(data.summary(), before);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut data = UserData::default();
        data.complete_onboarding(
            "Maria",
            vec![Transaction::income("Salário Principal", 3000.0)]
                .into_iter()
                .collect(),
            SavingsGoal::percentage(15.0),
        );
        assert!(data.onboarded);

        data.reset();
        assert_eq!(data, UserData::default());
    }

    #[test]
    fn test_serde_round_trip_with_camel_case_keys() {
        let mut data = UserData::default();
        data.complete_onboarding(
            "Maria",
            vec![
                Transaction::income("Salário Principal", 3000.0),
                Transaction::expense("Aluguel", 1200.0, ExpenseCategory::Fixed),
            ]
            .into_iter()
            .collect(),
            SavingsGoal::percentage(10.0),
        );

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"savingsGoal\""));

        let back: UserData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_loads_blob_written_by_the_original_app() {
        let blob = r#"{
            "onboarded": true,
            "name": "Maria",
            "transactions": [
                {
                    "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                    "description": "Salário Principal",
                    "amount": 3000,
                    "type": "INCOME",
                    "category": "FIXED"
                }
            ],
            "savingsGoal": { "type": "PERCENTAGE", "value": 10 }
        }"#;

        let data: UserData = serde_json::from_str(blob).unwrap();
        assert!(data.onboarded);
        assert_eq!(data.name, "Maria");
        assert_eq!(data.transactions.len(), 1);
        assert_eq!(data.savings_goal.kind, GoalKind::Percentage);
        assert_eq!(data.summary().total_income, 3000.0);
    }
}
