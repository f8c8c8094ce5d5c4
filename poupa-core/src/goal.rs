//! Savings goal policy

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GoalKind {
    #[serde(rename = "PERCENTAGE")]
    Percentage,
    #[serde(rename = "FIXED")]
    Fixed,
}

/// Savings target selector: a percentage of income or a fixed amount.
/// Replaced wholesale on update; the policy object performs no clamping —
/// input boundaries constrain the value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    #[serde(rename = "type")]
    pub kind: GoalKind,
    pub value: f64,
}

impl Default for SavingsGoal {
    fn default() -> Self {
        Self::percentage(10.0)
    }
}

impl SavingsGoal {
    pub fn percentage(value: f64) -> Self {
        Self {
            kind: GoalKind::Percentage,
            value,
        }
    }

    pub fn fixed(value: f64) -> Self {
        Self {
            kind: GoalKind::Fixed,
            value,
        }
    }

    /// Resolve the monthly target against total income. A fixed goal is not
    /// capped or scaled by income; a target above income is accepted input
    /// and surfaces as a negative remaining balance downstream.
    pub fn resolve_target(&self, total_income: f64) -> f64 {
        match self.kind {
            GoalKind::Percentage => total_income * self.value / 100.0,
            GoalKind::Fixed => self.value,
        }
    }
}
