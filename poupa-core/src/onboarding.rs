//! First-run wizard: name, monthly income, savings percentage

use crate::goal::SavingsGoal;
use crate::ledger::Ledger;
use crate::transaction::Transaction;
use crate::user::UserData;

/// Description of the income entry synthesized when the wizard completes.
pub const INITIAL_INCOME_DESCRIPTION: &str = "Salário Principal";

/// Wizard position. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardStep {
    Name,
    Income,
    SavingsGoal,
    Complete,
}

/// Linear three-step onboarding state. Each `submit_*` call validates its
/// own step and advances on success; there is no way back.
#[derive(Debug, Clone)]
pub struct Onboarding {
    step: OnboardStep,
    name: String,
    income: f64,
    savings_percent: f64,
}

impl Default for Onboarding {
    fn default() -> Self {
        Self {
            step: OnboardStep::Name,
            name: String::new(),
            income: 0.0,
            savings_percent: 10.0,
        }
    }
}

impl Onboarding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardStep {
        self.step
    }

    /// Step 1: a non-empty name is required to advance.
    pub fn submit_name(&mut self, name: &str) -> bool {
        if self.step != OnboardStep::Name || name.trim().is_empty() {
            return false;
        }
        self.name = name.trim().to_string();
        self.step = OnboardStep::Income;
        true
    }

    /// Step 2: total fixed monthly income. Zero is allowed; no initial
    /// entry is synthesized for it.
    pub fn submit_income(&mut self, income: f64) -> bool {
        if self.step != OnboardStep::Income || !income.is_finite() || income < 0.0 {
            return false;
        }
        self.income = income;
        self.step = OnboardStep::SavingsGoal;
        true
    }

    /// Step 3: percentage of income to save each month (wizard range 0-50).
    pub fn submit_savings_percent(&mut self, percent: f64) -> bool {
        if self.step != OnboardStep::SavingsGoal || !(0.0..=50.0).contains(&percent) {
            return false;
        }
        self.savings_percent = percent;
        self.step = OnboardStep::Complete;
        true
    }

    /// Terminal state: hand a complete initial UserData to the state owner.
    /// None until the wizard reaches `Complete`.
    pub fn finish(&self) -> Option<UserData> {
        if self.step != OnboardStep::Complete {
            return None;
        }

        let mut transactions = Ledger::new();
        if self.income > 0.0 {
            transactions.add(Transaction::income(
                INITIAL_INCOME_DESCRIPTION,
                self.income,
            ));
        }

        let mut data = UserData::default();
        data.complete_onboarding(
            self.name.clone(),
            transactions,
            SavingsGoal::percentage(self.savings_percent),
        );
        Some(data)
    }

    /// Encouragement line shown under the percentage prompt.
    pub fn percent_hint(percent: f64) -> &'static str {
        if percent >= 20.0 {
            "🚀 Meta ambiciosa! Liberdade financeira à vista."
        } else if percent >= 10.0 {
            "✨ Excelente começo. O segredo é a constância."
        } else {
            "🌱 Começar pequeno é melhor que não começar."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::GoalKind;

    #[test]
    fn test_happy_path_synthesizes_initial_income() {
        let mut w = Onboarding::new();
        assert!(w.submit_name("Maria"));
        assert!(w.submit_income(3000.0));
        assert!(w.submit_savings_percent(15.0));
        assert_eq!(w.step(), OnboardStep::Complete);

        let data = w.finish().unwrap();
        assert!(data.onboarded);
        assert_eq!(data.name, "Maria");
        assert_eq!(data.transactions.len(), 1);

        let first = &data.transactions.all()[0];
        assert_eq!(first.description, INITIAL_INCOME_DESCRIPTION);
        assert_eq!(first.amount, 3000.0);
        assert!(first.is_income());

        assert_eq!(data.savings_goal.kind, GoalKind::Percentage);
        assert_eq!(data.savings_goal.value, 15.0);
    }

    #[test]
    fn test_zero_income_synthesizes_no_entry() {
        let mut w = Onboarding::new();
        w.submit_name("João");
        w.submit_income(0.0);
        w.submit_savings_percent(10.0);

        let data = w.finish().unwrap();
        assert!(data.transactions.is_empty());
    }

    #[test]
    fn test_steps_are_forward_only() {
        let mut w = Onboarding::new();
        // Cannot answer later steps first.
        assert!(!w.submit_income(3000.0));
        assert!(!w.submit_savings_percent(10.0));
        assert_eq!(w.step(), OnboardStep::Name);

        w.submit_name("Ana");
        // Cannot re-answer a completed step.
        assert!(!w.submit_name("Outra"));
        assert_eq!(w.step(), OnboardStep::Income);
    }

    #[test]
    fn test_name_step_requires_a_name() {
        let mut w = Onboarding::new();
        assert!(!w.submit_name(""));
        assert!(!w.submit_name("   "));
        assert_eq!(w.step(), OnboardStep::Name);
    }

    #[test]
    fn test_percent_gated_to_wizard_range() {
        let mut w = Onboarding::new();
        w.submit_name("Ana");
        w.submit_income(1000.0);
        assert!(!w.submit_savings_percent(51.0));
        assert!(!w.submit_savings_percent(-1.0));
        assert!(w.submit_savings_percent(50.0));
    }

    #[test]
    fn test_finish_before_complete_is_none() {
        let mut w = Onboarding::new();
        assert!(w.finish().is_none());
        w.submit_name("Ana");
        assert!(w.finish().is_none());
    }

    #[test]
    fn test_percent_hints() {
        assert!(Onboarding::percent_hint(25.0).contains("ambiciosa"));
        assert!(Onboarding::percent_hint(10.0).contains("constância"));
        assert!(Onboarding::percent_hint(5.0).contains("pequeno"));
    }
}
