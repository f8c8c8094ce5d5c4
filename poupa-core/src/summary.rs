//! Monthly summary computation and health classification

use serde::{Deserialize, Serialize};

use crate::goal::SavingsGoal;
use crate::ledger::Ledger;
use crate::transaction::ExpenseCategory;

/// Overall classification of the month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthStatus {
    #[serde(rename = "HEALTHY")]
    Healthy,
    #[serde(rename = "WARNING")]
    Warning,
    #[serde(rename = "CRITICAL")]
    Critical,
}

/// Aggregate figures derived from the ledger and the current goal.
/// Ephemeral: recomputed from scratch on every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub total_fixed: f64,
    pub total_variable: f64,
    pub savings_target: f64,
    pub remaining_balance: f64,
    pub health: HealthStatus,
}

impl FinancialSummary {
    /// Pure computation over the full ledger and the current goal. Accepts
    /// any finite inputs, performs no rounding, always produces a result.
    pub fn compute(ledger: &Ledger, goal: &SavingsGoal) -> Self {
        let mut total_income = 0.0;
        let mut total_fixed = 0.0;
        let mut total_variable = 0.0;

        for t in ledger.iter() {
            if t.is_income() {
                total_income += t.amount;
            } else {
                match t.category {
                    ExpenseCategory::Fixed => total_fixed += t.amount,
                    ExpenseCategory::Variable => total_variable += t.amount,
                }
            }
        }

        // The categories partition the expenses, so the total is exactly
        // their sum.
        let total_expense = total_fixed + total_variable;
        let savings_target = goal.resolve_target(total_income);
        let remaining_balance = total_income - total_expense - savings_target;

        // CRITICAL is checked first and wins when both conditions hold.
        let health = if total_expense > total_income {
            HealthStatus::Critical
        } else if remaining_balance < 0.0 {
            HealthStatus::Warning
        } else {
            HealthStatus::Healthy
        };

        Self {
            total_income,
            total_expense,
            total_fixed,
            total_variable,
            savings_target,
            remaining_balance,
            health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::{ExpenseCategory, Transaction};

    fn ledger(entries: Vec<Transaction>) -> Ledger {
        entries.into_iter().collect()
    }

    #[test]
    fn test_healthy_month() {
        // income=3000, goal 10% => target 300; expenses 2000 fixed + 500
        // variable => remaining 200
        let l = ledger(vec![
            Transaction::income("Salário", 3000.0),
            Transaction::expense("Aluguel", 2000.0, ExpenseCategory::Fixed),
            Transaction::expense("Mercado", 500.0, ExpenseCategory::Variable),
        ]);
        let s = FinancialSummary::compute(&l, &SavingsGoal::percentage(10.0));

        assert_eq!(s.total_income, 3000.0);
        assert_eq!(s.total_expense, 2500.0);
        assert_eq!(s.total_fixed, 2000.0);
        assert_eq!(s.total_variable, 500.0);
        assert_eq!(s.savings_target, 300.0);
        assert_eq!(s.remaining_balance, 200.0);
        assert_eq!(s.health, HealthStatus::Healthy);
    }

    #[test]
    fn test_warning_when_goal_cannot_be_met() {
        // income=3000, expenses=2900, target 300 => remaining -200
        let l = ledger(vec![
            Transaction::income("Salário", 3000.0),
            Transaction::expense("Aluguel", 2900.0, ExpenseCategory::Fixed),
        ]);
        let s = FinancialSummary::compute(&l, &SavingsGoal::percentage(10.0));

        assert_eq!(s.remaining_balance, -200.0);
        assert_eq!(s.health, HealthStatus::Warning);
    }

    #[test]
    fn test_critical_when_expenses_exceed_income() {
        let l = ledger(vec![
            Transaction::income("Salário", 3000.0),
            Transaction::expense("Cartão", 3200.0, ExpenseCategory::Variable),
        ]);
        let s = FinancialSummary::compute(&l, &SavingsGoal::percentage(10.0));

        assert_eq!(s.health, HealthStatus::Critical);
    }

    #[test]
    fn test_critical_wins_over_warning() {
        // Both conditions hold: expenses exceed income AND the remaining
        // balance is negative. CRITICAL must be reported.
        let l = ledger(vec![
            Transaction::income("Salário", 1000.0),
            Transaction::expense("Aluguel", 1500.0, ExpenseCategory::Fixed),
        ]);
        let s = FinancialSummary::compute(&l, &SavingsGoal::fixed(500.0));

        assert!(s.remaining_balance < 0.0);
        assert_eq!(s.health, HealthStatus::Critical);
    }

    #[test]
    fn test_fixed_goal_with_zero_income_is_warning() {
        // target 500 despite zero income; expenses (0) <= income (0), so
        // this is WARNING, not CRITICAL.
        let l = Ledger::new();
        let s = FinancialSummary::compute(&l, &SavingsGoal::fixed(500.0));

        assert_eq!(s.savings_target, 500.0);
        assert_eq!(s.remaining_balance, -500.0);
        assert_eq!(s.health, HealthStatus::Warning);
    }

    #[test]
    fn test_empty_ledger_is_healthy_with_default_goal() {
        let s = FinancialSummary::compute(&Ledger::new(), &SavingsGoal::default());
        assert_eq!(s.total_income, 0.0);
        assert_eq!(s.total_expense, 0.0);
        assert_eq!(s.remaining_balance, 0.0);
        assert_eq!(s.health, HealthStatus::Healthy);
    }

    #[test]
    fn test_categories_partition_expenses_exactly() {
        let l = ledger(vec![
            Transaction::expense("Aluguel", 1234.56, ExpenseCategory::Fixed),
            Transaction::expense("Luz", 98.76, ExpenseCategory::Fixed),
            Transaction::expense("Uber", 45.9, ExpenseCategory::Variable),
            Transaction::expense("Mercado", 377.31, ExpenseCategory::Variable),
        ]);
        let s = FinancialSummary::compute(&l, &SavingsGoal::default());
        assert_eq!(s.total_fixed + s.total_variable, s.total_expense);
    }

    #[test]
    fn test_balance_identity() {
        let l = ledger(vec![
            Transaction::income("Salário", 3100.0),
            Transaction::income("Freela", 450.5),
            Transaction::expense("Aluguel", 1200.0, ExpenseCategory::Fixed),
            Transaction::expense("Lazer", 310.25, ExpenseCategory::Variable),
        ]);
        let s = FinancialSummary::compute(&l, &SavingsGoal::percentage(15.0));
        assert_eq!(
            s.total_income - s.total_expense - s.savings_target,
            s.remaining_balance
        );
    }

    #[test]
    fn test_compute_is_idempotent() {
        let l = ledger(vec![
            Transaction::income("Salário", 3000.0),
            Transaction::expense("Aluguel", 2000.0, ExpenseCategory::Fixed),
        ]);
        let goal = SavingsGoal::percentage(10.0);
        assert_eq!(
            FinancialSummary::compute(&l, &goal),
            FinancialSummary::compute(&l, &goal)
        );
    }
}
