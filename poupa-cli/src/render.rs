//! Plain-text rendering of the dashboard tabs.

use poupa_core::{FinancialSummary, HealthStatus, Tab, Transaction, UserData, ViewScope};

use crate::config::Config;

pub fn health_message(health: HealthStatus) -> &'static str {
    match health {
        HealthStatus::Healthy => "Sua saúde financeira está ótima! Tudo sob controle.",
        HealthStatus::Warning => "Atenção: Sobrou pouco no mês. Cuidado com novos gastos.",
        HealthStatus::Critical => "Alerta: Suas despesas ultrapassaram sua renda!",
    }
}

fn health_label(health: HealthStatus) -> &'static str {
    match health {
        HealthStatus::Healthy => "SAUDÁVEL",
        HealthStatus::Warning => "ATENÇÃO",
        HealthStatus::Critical => "CRÍTICO",
    }
}

/// Per-row label: income, fixed cost or variable cost.
fn row_label(t: &Transaction) -> &'static str {
    if t.is_income() {
        "Renda"
    } else if t.category == poupa_core::ExpenseCategory::Fixed {
        "Custo Fixo"
    } else {
        "Custo Variável"
    }
}

/// The `inicio` tab: greeting, health banner, summary cards, expense split
/// and the latest mentor tips.
pub fn render_inicio(data: &UserData, summary: &FinancialSummary, insights: &str, cfg: &Config) {
    let cur = &cfg.display.currency_symbol;

    println!("Olá, {}! 👋", data.name);
    println!("Acompanhe seu fluxo financeiro mensal.\n");

    println!(
        "[{}] {}\n",
        health_label(summary.health),
        health_message(summary.health)
    );

    println!("Entradas  {cur} {:>12.2}", summary.total_income);
    println!("Saídas    {cur} {:>12.2}", summary.total_expense);
    println!("Poupança  {cur} {:>12.2}", summary.savings_target);
    println!("Sobrou    {cur} {:>12.2}\n", summary.remaining_balance);

    if summary.total_expense > 0.0 {
        println!("Divisão de Gastos");
        println!(
            "  Fixos      {cur} {:>12.2} ({:.1}%)",
            summary.total_fixed,
            100.0 * summary.total_fixed / summary.total_expense
        );
        println!(
            "  Variáveis  {cur} {:>12.2} ({:.1}%)\n",
            summary.total_variable,
            100.0 * summary.total_variable / summary.total_expense
        );
    }

    println!("Dicas do Mentor IA");
    println!("{insights}");
}

/// A listing tab: heading, item-count badge and one row per entry.
pub fn render_listing(tab: Tab, scope: ViewScope, data: &UserData, cfg: &Config) {
    let cur = &cfg.display.currency_symbol;
    let entries = data.transactions.scoped(scope);

    let plural = if entries.len() == 1 { "item" } else { "itens" };
    println!("{} ({} {plural})\n", tab.title(), entries.len());

    if entries.is_empty() {
        println!("Nenhum registro encontrado nesta categoria.");
        return;
    }

    for t in entries {
        let sign = if t.is_income() { '+' } else { '-' };
        println!(
            "{sign} {cur} {:>12.2}  {:<28} [{:<14}] id={}",
            t.amount,
            t.description,
            row_label(t),
            t.id
        );
    }
}

/// The `metas` tab: current goal and its resolved monthly equivalent.
pub fn render_metas(data: &UserData, summary: &FinancialSummary, cfg: &Config) {
    let cur = &cfg.display.currency_symbol;

    println!("{}\n", Tab::Metas.title());
    match data.savings_goal.kind {
        poupa_core::GoalKind::Percentage => {
            println!("Tipo: Porcentagem ({}%)", data.savings_goal.value);
        }
        poupa_core::GoalKind::Fixed => {
            println!("Tipo: Valor Fixo ({cur} {:.2})", data.savings_goal.value);
        }
    }
    println!("Equivale a {cur} {:.2} por mês", summary.savings_target);
}
