//! Summary data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::BudgetField;

/// How the current summary values were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryOrigin {
    /// Averaged over the ledger.
    Averaged {
        /// Number of items averaged.
        item_count: usize,
    },
    /// Set by hand on one field, the other two inferred.
    Overridden {
        /// Field the user edited.
        field: BudgetField,
    },
}

/// The budget summary shown, exported, and shared.
///
/// Averaged values carry a fixed scale (1, 1, and 2 decimal places), so
/// their `Display` output is already the fixed-precision text. Overridden
/// values are kept exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Average or overridden time.
    pub time: Decimal,
    /// Average or overridden complexity.
    pub complexity: Decimal,
    /// Average or overridden cost.
    pub cost: Decimal,
    /// Where the values came from.
    pub origin: SummaryOrigin,
}

impl BudgetSummary {
    /// Returns the value of one figure.
    #[must_use]
    pub const fn value(&self, field: BudgetField) -> Decimal {
        match field {
            BudgetField::Time => self.time,
            BudgetField::Complexity => self.complexity,
            BudgetField::Cost => self.cost,
        }
    }
}
