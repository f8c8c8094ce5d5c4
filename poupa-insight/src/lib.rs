//! poupa-insight: mentor tips generated from the current month's numbers.
//!
//! One best-effort Gemini call per trigger. The public entry point never
//! fails: a missing credential, a transport error, or an empty completion
//! all collapse into fixed display strings.

pub mod gemini;
pub mod prompt;

use poupa_core::{FinancialSummary, Ledger};

/// Shown when no credential is configured. An expected state, not an error.
pub const MISSING_KEY_PLACEHOLDER: &str =
    "Configure sua API Key para receber dicas personalizadas.";

/// Shown when the remote call fails for any reason.
pub const FETCH_FAILED_FALLBACK: &str =
    "Erro ao conectar com o mentor financeiro. Tente novamente mais tarde.";

/// Shown when the model produced no usable text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "Não foi possível gerar dicas no momento.";

#[derive(Debug, Clone)]
pub struct InsightConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
            temperature: 0.7,
            top_p: 0.95,
        }
    }
}

/// Fetch three short tips for the current state. Single attempt, no retry;
/// always resolves to displayable text.
pub async fn fetch_insights(
    config: &InsightConfig,
    summary: &FinancialSummary,
    transactions: &Ledger,
) -> String {
    let Some(key) = config.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
        return MISSING_KEY_PLACEHOLDER.to_string();
    };

    let prompt = prompt::build_prompt(summary, transactions);
    match gemini::generate(config, key, &prompt).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => EMPTY_RESPONSE_FALLBACK.to_string(),
        Err(_) => FETCH_FAILED_FALLBACK.to_string(),
    }
}
