//! Fire-and-forget refresh of the mentor tips.

use poupa_core::{FinancialSummary, Ledger};
use poupa_insight::InsightConfig;
use tokio::task::JoinHandle;

/// Detached refreshes of the tip cache. Triggering never blocks the caller;
/// in-flight requests are not cancelled, each completion overwrites the
/// cache, so the last one to resolve wins the displayed text.
pub struct InsightRefresher {
    pending: Vec<JoinHandle<()>>,
}

impl InsightRefresher {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn trigger(
        &mut self,
        config: InsightConfig,
        summary: FinancialSummary,
        transactions: Ledger,
    ) {
        self.pending.push(tokio::spawn(async move {
            let text = poupa_insight::fetch_insights(&config, &summary, &transactions).await;
            // Cache and log writes are best effort; a failed refresh never
            // surfaces to the mutation that triggered it.
            let _ = crate::state::write_insight_cache(&text);
            let _ = crate::state::append_mentor_log(&text);
        }));
    }

    /// Drain outstanding refreshes. Called once, right before process exit,
    /// after all command output has been printed.
    pub async fn finish(self) {
        for handle in self.pending {
            let _ = handle.await;
        }
    }
}
