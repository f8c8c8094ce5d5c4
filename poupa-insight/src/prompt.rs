//! Prompt assembly for the financial mentor.

use poupa_core::{FinancialSummary, Ledger};

/// Render the mentor prompt: the month's figures, the full statement, and
/// the ask for three short tips in Portuguese.
pub fn build_prompt(summary: &FinancialSummary, transactions: &Ledger) -> String {
    let mut s = String::new();

    s.push_str("Como um mentor financeiro, analise estes dados:\n");
    s.push_str(&format!("Renda Total: R$ {:.2}\n", summary.total_income));
    s.push_str(&format!("Despesas Fixas: R$ {:.2}\n", summary.total_expense));
    s.push_str(&format!(
        "Meta de Poupança: R$ {:.2}\n",
        summary.savings_target
    ));
    s.push_str(&format!("Sobras: R$ {:.2}\n", summary.remaining_balance));

    s.push_str("\nLista de transações:\n");
    for t in transactions.iter() {
        s.push_str(&format!(
            "- {}: R$ {:.2} ({})\n",
            t.description,
            t.amount,
            t.kind.as_str()
        ));
    }

    s.push_str(
        "\nDê 3 dicas curtas e práticas em português para melhorar a saúde \
         financeira deste usuário. Seja direto e encorajador.\n",
    );
    s
}
