//! View scopes and the named dashboard tabs

use anyhow::bail;

use crate::transaction::{ExpenseCategory, Transaction, TransactionType};

/// Ledger filter behind each listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewScope {
    All,
    Income,
    Fixed,
    Variable,
}

impl ViewScope {
    /// Predicate over (type, category) used to build tab-scoped views.
    pub fn matches(&self, t: &Transaction) -> bool {
        match self {
            ViewScope::All => true,
            ViewScope::Income => t.kind == TransactionType::Income,
            ViewScope::Fixed => t.is_expense() && t.category == ExpenseCategory::Fixed,
            ViewScope::Variable => t.is_expense() && t.category == ExpenseCategory::Variable,
        }
    }
}

/// The six named tabs of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Inicio,
    Extrato,
    Entradas,
    Fixos,
    Variaveis,
    Metas,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Inicio,
        Tab::Extrato,
        Tab::Entradas,
        Tab::Fixos,
        Tab::Variaveis,
        Tab::Metas,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Inicio => "inicio",
            Tab::Extrato => "extrato",
            Tab::Entradas => "entradas",
            Tab::Fixos => "fixos",
            Tab::Variaveis => "variaveis",
            Tab::Metas => "metas",
        }
    }

    /// Heading shown above the tab's content.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Inicio => "Visão Geral",
            Tab::Extrato => "Histórico Completo",
            Tab::Entradas => "Minhas Entradas",
            Tab::Fixos => "Despesas Fixas",
            Tab::Variaveis => "Despesas Variáveis",
            Tab::Metas => "Meta de Poupança",
        }
    }

    /// Ledger filter for the listing tabs. `inicio` and `metas` render the
    /// summary and goal screens and carry no filter.
    pub fn scope(&self) -> Option<ViewScope> {
        match self {
            Tab::Extrato => Some(ViewScope::All),
            Tab::Entradas => Some(ViewScope::Income),
            Tab::Fixos => Some(ViewScope::Fixed),
            Tab::Variaveis => Some(ViewScope::Variable),
            Tab::Inicio | Tab::Metas => None,
        }
    }
}

impl std::str::FromStr for Tab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inicio" | "início" => Ok(Tab::Inicio),
            "extrato" => Ok(Tab::Extrato),
            "entradas" => Ok(Tab::Entradas),
            "fixos" => Ok(Tab::Fixos),
            "variaveis" | "variáveis" => Ok(Tab::Variaveis),
            "metas" => Ok(Tab::Metas),
            other => bail!(
                "aba desconhecida: {other} (use inicio|extrato|entradas|fixos|variaveis|metas)"
            ),
        }
    }
}
