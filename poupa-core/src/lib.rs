//! poupa-core: domain types and pure calculations for the Poupa budgeting app

pub mod goal;
pub mod ledger;
pub mod onboarding;
pub mod summary;
pub mod transaction;
pub mod user;
pub mod view;

pub use goal::{GoalKind, SavingsGoal};
pub use ledger::Ledger;
pub use onboarding::{INITIAL_INCOME_DESCRIPTION, OnboardStep, Onboarding};
pub use summary::{FinancialSummary, HealthStatus};
pub use transaction::{ExpenseCategory, Transaction, TransactionType};
pub use user::UserData;
pub use view::{Tab, ViewScope};
