//! Labeled summary lines shared by export and sharing.

use orcamento_shared::config::ExportConfig;
use serde::Serialize;

use crate::summary::BudgetSummary;

/// Heading of the exported and shared summary.
pub const SUMMARY_TITLE: &str = "Resumo do Orçamento";

/// A summary ready to be laid out: a title and three labeled lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryDocument {
    /// Document title.
    pub title: String,
    /// Lines in order: time, complexity, cost.
    pub lines: [String; 3],
    /// File name offered for download.
    pub filename: String,
}

impl SummaryDocument {
    /// Formats a summary using the configured currency symbol and file name.
    #[must_use]
    pub fn new(summary: &BudgetSummary, config: &ExportConfig) -> Self {
        Self {
            title: SUMMARY_TITLE.to_string(),
            lines: [
                format!("Tempo médio: {}", summary.time),
                format!("Complexidade média: {}", summary.complexity),
                format!("Custo médio: {} {}", config.currency_symbol, summary.cost),
            ],
            filename: config.filename.clone(),
        }
    }

    /// Title and lines joined as the plain-text share message.
    #[must_use]
    pub fn share_text(&self) -> String {
        format!("{}:\n{}", self.title, self.lines.join("\n"))
    }
}
